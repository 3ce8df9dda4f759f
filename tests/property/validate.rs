use chartcheck::types::ChartRecord;
use chartcheck::validate::validate;
use proptest::prelude::*;

/// Strategy for type tags: mostly valid, sometimes arbitrary.
fn arb_chart_type() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => prop::sample::select(vec![
            "line", "bar", "pie", "doughnut", "radar", "polarArea", "bubble", "scatter",
        ])
        .prop_map(str::to_string),
        1 => "[a-zA-Z]{0,10}",
    ]
}

/// Strategy for payload text: JSON-looking, CSV-looking, or noise.
fn arb_payload() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\{[ -~]{0,60}",
        "[a-z,]{1,12}(\n[0-9,]{0,12}){0,4}",
        "\\PC{0,40}",
    ]
}

fn arb_record() -> impl Strategy<Value = ChartRecord> {
    (
        arb_chart_type(),
        prop::option::of(arb_payload()),
        prop::option::of("[a-z/]{1,12}\\.csv"),
        prop::option::of(1usize..5000),
    )
        .prop_map(|(chart_type, config_text, external_source, line)| ChartRecord {
            chart_type,
            config_text,
            external_source,
            line,
            preview: String::new(),
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn validate_is_pure(chart in arb_record(), index in 0usize..100) {
        let first = validate(&chart, index);
        let second = validate(&chart, index);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn findings_are_prefixed_with_chart_number(chart in arb_record(), index in 0usize..100) {
        let result = validate(&chart, index);
        let prefix = format!("Chart {} (", index + 1);
        for f in result.errors.iter().chain(result.warnings.iter()) {
            prop_assert!(f.message.starts_with(&prefix), "unexpected message: {}", f.message);
        }
    }

    #[test]
    fn missing_config_is_a_single_error(chart_type in arb_chart_type(), index in 0usize..10) {
        let chart = ChartRecord {
            chart_type,
            config_text: None,
            external_source: None,
            line: None,
            preview: String::new(),
        };
        let result = validate(&chart, index);
        let v002: Vec<_> = result.errors.iter().filter(|e| e.code == "V-002").collect();
        prop_assert_eq!(v002.len(), 1);
        prop_assert!(result.errors.iter().all(|e| e.code == "V-001" || e.code == "V-002"));
        prop_assert!(result.warnings.is_empty());
    }

    #[test]
    fn empty_datasets_always_reported(
        labels in any::<bool>(),
        aspect in prop::option::of(any::<bool>()),
        chart_type in arb_chart_type(),
    ) {
        let mut data = serde_json::json!({ "datasets": [] });
        if labels {
            data["labels"] = serde_json::json!(["a", "b"]);
        }
        let mut config = serde_json::json!({ "data": data });
        if let Some(flag) = aspect {
            config["options"] = serde_json::json!({ "maintainAspectRatio": flag });
        }
        let chart = ChartRecord {
            chart_type,
            config_text: Some(config.to_string()),
            external_source: None,
            line: Some(1),
            preview: String::new(),
        };
        let result = validate(&chart, 0);
        let empty: Vec<_> = result.errors.iter().filter(|e| e.code == "V-007").collect();
        prop_assert_eq!(empty.len(), 1);
        prop_assert!(empty[0].message.ends_with(": 'data.datasets' array is empty"));
    }
}

use chartcheck::types::ChartRecord;
use chartcheck::validate::validate;
use proptest::prelude::*;

fn csv_row(cols: usize) -> String {
    vec!["v"; cols].join(",")
}

fn csv_chart(text: String) -> ChartRecord {
    ChartRecord {
        chart_type: "bar".to_string(),
        config_text: Some(text),
        external_source: None,
        line: Some(1),
        preview: String::new(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    // One W-002 per data row whose column count differs from the header.
    #[test]
    fn column_mismatch_warnings_match_reference(
        header in 1usize..6,
        rows in prop::collection::vec(1usize..8, 1..10),
    ) {
        let mut text = csv_row(header);
        for cols in &rows {
            text.push('\n');
            text.push_str(&csv_row(*cols));
        }
        let result = validate(&csv_chart(text), 0);
        prop_assert!(result.errors.is_empty());

        let expected: Vec<String> = rows
            .iter()
            .enumerate()
            .filter(|(_, cols)| **cols != header)
            .map(|(i, cols)| format!("CSV row {} has {} columns, header has {}", i + 2, cols, header))
            .collect();
        let actual: Vec<&str> = result
            .warnings
            .iter()
            .map(|w| w.message.split_once("): ").map_or("", |(_, m)| m))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn header_only_csv_is_an_error(header in 1usize..6, blank in "[ \n]{0,6}") {
        let text = format!("{}{}", csv_row(header), blank);
        let result = validate(&csv_chart(text), 0);
        prop_assert_eq!(result.errors.len(), 1);
        prop_assert_eq!(result.errors[0].code.as_str(), "V-003");
    }
}

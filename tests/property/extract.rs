use chartcheck::extract::extract;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn arbitrary_text_never_panics(s in "\\PC{0,200}") {
        let _ = extract(&s);
    }

    #[test]
    fn arbitrary_markup_never_panics(s in "(<canvas data-chart=\"[a-z]{0,4}\">|<!--|-->|</canvas>|<p>|\n|[a-z ,{}]{0,6}){0,20}") {
        let _ = extract(&s);
    }

    // Charts separated by filler lines are all found, each on its own line.
    #[test]
    fn generated_charts_are_found_in_order(
        specs in prop::collection::vec(
            (
                prop::sample::select(vec!["line", "bar", "pie", "radar"]),
                0usize..3,
            ),
            0..8,
        ),
    ) {
        let mut html = String::from("<html><body>\n");
        let mut expected = Vec::new();
        let mut line = 2;
        for (chart_type, filler) in &specs {
            for _ in 0..*filler {
                html.push_str("<p>filler</p>\n");
                line += 1;
            }
            html.push_str(&format!("<canvas data-chart=\"{}\"><!-- a,b\n1,2 --></canvas>\n", chart_type));
            expected.push((chart_type.to_string(), Some(line)));
            line += 2;
        }
        html.push_str("</body></html>");

        let charts = extract(&html);
        let actual: Vec<(String, Option<usize>)> = charts
            .iter()
            .map(|c| (c.chart_type.clone(), c.line))
            .collect();
        prop_assert_eq!(actual, expected);
        prop_assert!(charts.iter().all(|c| c.config_text.as_deref() == Some("a,b\n1,2")));
    }
}

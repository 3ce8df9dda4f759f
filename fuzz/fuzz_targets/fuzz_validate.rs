#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    chart_type: String,
    config_text: Option<String>,
    external_source: Option<String>,
    index: u8,
}

fuzz_target!(|input: Input| {
    let chart = chartcheck::ChartRecord {
        chart_type: input.chart_type,
        config_text: input.config_text,
        external_source: input.external_source,
        line: None,
        preview: String::new(),
    };
    let first = chartcheck::validate(&chart, input.index as usize);
    let second = chartcheck::validate(&chart, input.index as usize);
    assert_eq!(first, second);
});

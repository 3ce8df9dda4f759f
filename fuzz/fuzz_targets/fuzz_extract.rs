#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    for chart in chartcheck::extract(&s) {
        if let Some(line) = chart.line {
            assert!(line >= 1);
        }
    }
});

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let s = String::from_utf8_lossy(data);
    let reports = chartcheck::check(&s);
    let _ = chartcheck::report::render_text("fuzz.html", &reports);
    let _ = chartcheck::report::render_json("fuzz.html", &reports);
});

#![no_main]
use libfuzzer_sys::fuzz_target;
use logroute::fmt::{FormatTemplate, FormatValues};

fuzz_target!(|data: &str| {
    // Must not panic on any template string
    let template = FormatTemplate::parse(data);

    let values = FormatValues::new()
        .asctime("2025-01-01 00:00:00,000")
        .name("__main__")
        .levelname("INFO")
        .message("test");
    let _ = template.render(&values);
});

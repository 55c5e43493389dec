#![no_main]
use libfuzzer_sys::fuzz_target;
use logroute::LoggingConfig;

fuzz_target!(|data: &str| {
    // Must not panic on any document, in any of the accepted formats
    if let Ok(config) = LoggingConfig::from_yaml_str(data) {
        let _ = config.validate();
    }
    let _ = LoggingConfig::from_toml_str(data);
    let _ = LoggingConfig::from_json_str(data);
});

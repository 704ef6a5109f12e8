use scriptoria_rate_limit::{ModelLadder, ScriptoriaConfig};
use std::io::Write;
use std::time::Duration;

#[test]
fn file_overrides_bundled_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[fallback]
models = ["primary-model", "backup-model"]
max_attempts = 2
retry_delay_ms = 250
"#
    )
    .unwrap();

    let config = ScriptoriaConfig::from_file(file.path()).unwrap();

    assert_eq!(config.fallback().models(), &vec!["primary-model", "backup-model"]);
    assert_eq!(*config.fallback().max_attempts(), 2);
    // Untouched sections keep their bundled values
    assert_eq!(config.backend().provider(), "groq");
    assert_eq!(config.backend().timeout(), Duration::from_secs(60));

    let ladder = ModelLadder::from_config(config.fallback()).unwrap();
    assert_eq!(ladder.primary(), "primary-model");
    assert_eq!(*ladder.retry_delay(), Duration::from_millis(250));
}

#[test]
fn empty_ladder_in_file_is_rejected_when_built() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[fallback]\nmodels = []\nmax_attempts = 1").unwrap();

    let config = ScriptoriaConfig::from_file(file.path()).unwrap();
    assert!(ModelLadder::from_config(config.fallback()).is_err());
}

#[test]
fn missing_file_is_an_error() {
    assert!(ScriptoriaConfig::from_file("/nonexistent/scriptoria.toml").is_err());
}

#[test]
fn malformed_file_is_an_error() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[fallback]\nmax_attempts = \"many\"").unwrap();

    assert!(ScriptoriaConfig::from_file(file.path()).is_err());
}

use service_object::utils::validation::Validate;
use service_object::{CallMode, Runner, RunnerConfig, ServiceError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_batch_from_file_runs_in_order() {
    let file = write_config(
        r#"
        [runner]
        name = "smoke"

        [[invocations]]
        service = "echo"
        args = "foo"

        [[invocations]]
        service = "fail"

        [[invocations]]
        service = "parse-number"
        args = "41"
        mode = "bang"
        "#,
    );

    let config = RunnerConfig::from_file(file.path()).unwrap();
    config.validate().unwrap();
    assert_eq!(config.name(), "smoke");

    let reports = Runner::new(config.stop_on_error())
        .run_all(&config.invocations)
        .into_result()
        .unwrap();

    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].outcome.value(), Some(&serde_json::json!("foo")));
    assert_eq!(reports[1].outcome.error().map(String::as_str), Some("Oops :/"));
    assert_eq!(reports[2].mode, CallMode::Bang);
    assert_eq!(reports[2].outcome.value(), Some(&serde_json::json!(41)));
}

#[test]
fn test_safe_panic_is_reported() {
    let file = write_config(
        r#"
        [[invocations]]
        service = "panic"
        args = "now"
        "#,
    );

    let config = RunnerConfig::from_file(file.path()).unwrap();
    let reports = Runner::default()
        .run_all(&config.invocations)
        .into_result()
        .unwrap();

    assert!(!reports[0].is_success());
    assert_eq!(
        reports[0].outcome.error().map(String::as_str),
        Some("Service panicked: panicked with 'now'")
    );
}

#[test]
fn test_reports_serialize_to_json() {
    let file = write_config(
        r#"
        [[invocations]]
        service = "unimplemented"
        "#,
    );

    let config = RunnerConfig::from_file(file.path()).unwrap();
    let reports = Runner::default()
        .run_all(&config.invocations)
        .into_result()
        .unwrap();
    let json = serde_json::to_value(&reports).unwrap();

    assert_eq!(
        json,
        serde_json::json!([{
            "service": "unimplemented",
            "mode": "safe",
            "outcome": {
                "status": "failure",
                "error": "Service objects must implement perform_call"
            }
        }])
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let err = RunnerConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ServiceError::IoError(_)));
}

#[test]
fn test_aborted_batch_keeps_earlier_reports() {
    let file = write_config(
        r#"
        [[invocations]]
        service = "echo"
        args = "done"

        [[invocations]]
        service = "fail"
        mode = "bang"

        [[invocations]]
        service = "echo"
        args = "never"
        "#,
    );

    let config = RunnerConfig::from_file(file.path()).unwrap();
    let batch = Runner::new(config.stop_on_error()).run_all(&config.invocations);

    assert!(batch.is_aborted());
    assert_eq!(batch.reports.len(), 1);
    assert_eq!(batch.reports[0].summary(), "✅ echo -> \"done\"");
    assert_eq!(batch.error.map(|e| e.to_string()).as_deref(), Some("Oops :/"));
}

use integration_tests::harness::{LogFixture, run_monitor_with};
use logmonitor_core::cli::OutputFormat;
use pretty_assertions::assert_eq;

#[test]
fn findings_are_one_json_object_per_line() {
    let log = LogFixture::new()
        .line("20201019133100", "10.0.0.1/24", "-")
        .line("20201019133101", "10.0.0.2/24", "-")
        .line("20201019133102", "10.0.0.1/24", "4")
        .line("20201019133103", "10.0.0.2/24", "4");

    let out = run_monitor_with(log.write(), &["1"], true, OutputFormat::Json).unwrap();

    assert_eq!(
        out.lines().collect::<Vec<_>>(),
        vec![
            r#"{"kind":"recovery","endpoint":"10.0.0.1/24","recovery_seconds":2}"#,
            r#"{"kind":"recovery","endpoint":"10.0.0.2/24","recovery_seconds":2}"#,
            r#"{"kind":"subnet_fault","subnet":"10.0.0.***","fault_period":"20201019133101-20201019133101"}"#,
        ]
    );
}

#[test]
fn overload_period_is_a_string() {
    let log = LogFixture::new()
        .line("20201019133100", "10.0.0.1/24", "500")
        .line("20201019133101", "10.0.0.1/24", "1");

    let out = run_monitor_with(log.write(), &["1", "1", "100"], false, OutputFormat::Json).unwrap();

    assert_eq!(
        out,
        "{\"kind\":\"overload\",\"endpoint\":\"10.0.0.1/24\",\
         \"overload_period\":\"20201019133100-20201019133100\"}\n"
    );
}

#[test]
fn no_findings_prints_nothing() {
    let log = LogFixture::new().line("20201019133100", "10.0.0.1/24", "1");

    let out = run_monitor_with(log.write(), &["1"], true, OutputFormat::Json).unwrap();

    assert_eq!(out, "");
}

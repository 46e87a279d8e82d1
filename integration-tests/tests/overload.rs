use integration_tests::harness::{LogFixture, run_monitor};
use pretty_assertions::assert_eq;

fn probes(endpoint: &str, start_second: u32, responses: &[&str]) -> LogFixture {
    responses
        .iter()
        .enumerate()
        .fold(LogFixture::new(), |log, (i, r)| {
            let ts = format!("2020101913{:04}", start_second + i as u32);
            log.line(&ts, endpoint, r)
        })
}

#[test]
fn overload_still_open_at_end_is_not_reported() {
    let log = probes("10.0.0.1/24", 3100, &["100", "100", "100", "500", "500"]);

    let out = run_monitor(log.write(), &["1", "3", "200"]).unwrap();

    assert_eq!(out, "");
}

#[test]
fn overload_period_spans_window_start_to_last_bad_probe() {
    let log = probes(
        "10.0.0.1/24",
        3100,
        &["100", "100", "100", "500", "500", "100", "100", "100"],
    );

    let out = run_monitor(log.write(), &["1", "3", "200"]).unwrap();

    assert_eq!(
        out,
        "IP : 10.0.0.1/24, OVERLOAD_PERIOD : 20201019133101-20201019133106\n"
    );
}

#[test]
fn timeouts_are_reported_alongside_overload() {
    let log = LogFixture::new()
        .line("20201019133100", "10.0.0.1/24", "900")
        .line("20201019133101", "10.0.0.1/24", "900")
        .line("20201019133102", "10.0.0.1/24", "-")
        .line("20201019133103", "10.0.0.1/24", "-")
        .line("20201019133104", "10.0.0.1/24", "10")
        .line("20201019133105", "10.0.0.1/24", "10");

    let out = run_monitor(log.write(), &["2", "2", "300"]).unwrap();

    // [900, 10] still averages 455; the period closes on the next probe.
    assert_eq!(
        out,
        "IP : 10.0.0.1/24, SECONDS_TO_RETURN : 2\n\
         IP : 10.0.0.1/24, OVERLOAD_PERIOD : 20201019133100-20201019133104\n"
    );
}

#[test]
fn overload_is_off_with_a_single_threshold() {
    let log = probes("10.0.0.1/24", 3100, &["900", "900", "1", "1"]);

    assert_eq!(run_monitor(log.write(), &["1"]).unwrap(), "");
}

use integration_tests::harness::{LogFixture, run_monitor_with};
use logmonitor_core::cli::OutputFormat;
use pretty_assertions::assert_eq;

fn shared_outage() -> LogFixture {
    LogFixture::new()
        .line("20201019133100", "10.0.0.1/24", "5")
        .line("20201019133101", "10.0.0.1/24", "-")
        .line("20201019133102", "10.0.0.2/24", "-")
        .line("20201019133103", "10.0.0.2/24", "-")
        .line("20201019133104", "10.0.0.1/24", "7")
        .line("20201019133105", "10.0.0.2/24", "9")
}

#[test]
fn fault_spans_from_last_member_going_down_to_first_recovery() {
    let log = shared_outage();

    let out = run_monitor_with(log.write(), &["1"], true, OutputFormat::Text).unwrap();

    assert_eq!(
        out,
        "IP : 10.0.0.1/24, SECONDS_TO_RETURN : 3\n\
         IP : 10.0.0.2/24, SECONDS_TO_RETURN : 3\n\
         SUBNET_IP : 10.0.0.***, FAULT_PERIOD : 20201019133102-20201019133103\n"
    );
}

#[test]
fn subnets_are_off_without_the_flag() {
    let log = shared_outage();

    let out = run_monitor_with(log.write(), &["1"], false, OutputFormat::Text).unwrap();

    assert!(!out.contains("SUBNET_IP"));
}

#[test]
fn one_healthy_member_keeps_the_subnet_up() {
    let log = LogFixture::new()
        .line("20201019133100", "1.1.0.1/16", "-")
        .line("20201019133101", "1.1.0.2/16", "3")
        .line("20201019133102", "1.1.0.1/16", "-")
        .line("20201019133103", "1.1.0.2/16", "3")
        .line("20201019133104", "1.1.0.1/16", "1");

    let out = run_monitor_with(log.write(), &["1"], true, OutputFormat::Text).unwrap();

    assert_eq!(out, "IP : 1.1.0.1/16, SECONDS_TO_RETURN : 4\n");
}

#[test]
fn prefix_lengths_group_into_different_subnets() {
    let log = LogFixture::new()
        .line("20201019133100", "1.2.3.4/8", "-")
        .line("20201019133101", "1.2.3.4/8", "2")
        .line("20201019133102", "1.2.3.5/16", "-")
        .line("20201019133103", "1.2.3.5/16", "2");

    let out = run_monitor_with(log.write(), &["1"], true, OutputFormat::Text).unwrap();

    assert_eq!(
        out,
        "IP : 1.2.3.4/8, SECONDS_TO_RETURN : 1\n\
         IP : 1.2.3.5/16, SECONDS_TO_RETURN : 1\n\
         SUBNET_IP : 1.***.***.***, FAULT_PERIOD : 20201019133100-20201019133100\n\
         SUBNET_IP : 1.2.***.***, FAULT_PERIOD : 20201019133102-20201019133102\n"
    );
}

#[test]
fn unusual_prefix_is_left_out_of_subnet_analysis() {
    let log = LogFixture::new()
        .line("20201019133100", "10.0.0.1/20", "-")
        .line("20201019133101", "10.0.0.1/20", "2");

    let out = run_monitor_with(log.write(), &["1"], true, OutputFormat::Text).unwrap();

    assert_eq!(out, "IP : 10.0.0.1/20, SECONDS_TO_RETURN : 1\n");
}

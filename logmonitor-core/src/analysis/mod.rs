//! Assembles detector output into ordered findings.
//!
//! Endpoints come first, in first-seen order; each endpoint reports its
//! recoveries and then its overload periods. Subnet faults follow, again per
//! subnet in first-seen order.


use crate::conf::Thresholds;
use crate::detect::{OverloadDetector, SubnetFaultCorrelator, TimeoutDetector, scan};
use crate::error::MonitorError;
use crate::finding::Finding;
use crate::grouping::{EndpointGroup, SubnetGroup, group_by_endpoint, group_by_subnet};
use crate::record::LogRecord;

/// Run every enabled detector over `records`.
///
/// Thresholds are range-checked first; a zero count or window is rejected
/// before any group is analyzed.
pub fn analyze(
    records: &[LogRecord],
    thresholds: &Thresholds,
) -> Result<Vec<Finding>, MonitorError> {
    thresholds.validate()?;

    let mut findings = Vec::new();

    for group in group_by_endpoint(records) {
        findings.extend(endpoint_findings(&group, thresholds));
    }

    if thresholds.subnets {
        for group in group_by_subnet(records) {
            findings.extend(subnet_findings(&group, thresholds));
        }
    }

    Ok(findings)
}

fn endpoint_findings(group: &EndpointGroup<'_>, thresholds: &Thresholds) -> Vec<Finding> {
    let records = group.records.iter().copied();

    let recoveries = scan(
        TimeoutDetector::new(thresholds.not_acceptable_count),
        records.clone(),
    );
    let overloads = match &thresholds.overload {
        Some(o) => scan(
            OverloadDetector::new(o.average_count, o.not_acceptable_millis),
            records,
        ),
        None => Vec::new(),
    };

    tracing::debug!(
        endpoint = %group.key,
        records = group.records.len(),
        recoveries = recoveries.len(),
        overloads = overloads.len(),
        "endpoint analyzed"
    );

    let recoveries = recoveries.into_iter().map(|recovery_seconds| Finding::Recovery {
        endpoint: group.key.clone(),
        recovery_seconds,
    });
    let overloads = overloads.into_iter().map(|overload_period| Finding::Overload {
        endpoint: group.key.clone(),
        overload_period,
    });

    recoveries.chain(overloads).collect()
}

fn subnet_findings(group: &SubnetGroup<'_>, thresholds: &Thresholds) -> Vec<Finding> {
    let correlator = SubnetFaultCorrelator::for_group(group, thresholds.not_acceptable_count);
    let members = correlator.members();
    let faults = scan(correlator, group.records.iter().copied());

    tracing::debug!(
        subnet = %group.key,
        members,
        records = group.records.len(),
        faults = faults.len(),
        "subnet analyzed"
    );

    faults
        .into_iter()
        .map(|fault_period| Finding::SubnetFault {
            subnet: group.key.clone(),
            fault_period,
        })
        .collect()
}

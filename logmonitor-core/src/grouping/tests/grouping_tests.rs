use crate::grouping::{SubnetLabel, group_by_endpoint, group_by_subnet};
use crate::test_helpers::records;
use pretty_assertions::assert_eq;

#[test]
fn endpoint_groups_keep_first_seen_order() {
    let log = records(&[
        "20201019133124,10.20.30.2/16,1",
        "20201019133125,10.20.30.1/16,2",
        "20201019133126,10.20.30.2/16,3",
        "20201019133127,192.168.1.1/24,4",
    ]);

    let groups = group_by_endpoint(&log);
    let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();

    assert_eq!(keys, vec!["10.20.30.2/16", "10.20.30.1/16", "192.168.1.1/24"]);
}

#[test]
fn endpoint_groups_keep_file_order_within_group() {
    let log = records(&[
        "20201019133130,10.20.30.1/16,1",
        "20201019133120,10.20.30.1/16,2",
        "20201019133125,10.20.30.1/16,3",
    ]);

    let groups = group_by_endpoint(&log);
    let response: Vec<Option<u64>> = groups[0]
        .records
        .iter()
        .map(|r| r.outcome.response_ms())
        .collect();

    assert_eq!(response, vec![Some(1), Some(2), Some(3)]);
}

#[test]
fn endpoint_grouping_is_a_partition() {
    let log = records(&[
        "20201019133124,10.20.30.1/16,1",
        "20201019133125,10.20.30.2/16,-",
        "20201019133126,10.20.30.1/16,-",
        "20201019133127,10.20.30.3/12,4",
        "20201019133128,10.20.30.2/16,5",
    ]);

    let groups = group_by_endpoint(&log);
    let total: usize = groups.iter().map(|g| g.records.len()).sum();
    assert_eq!(total, log.len());

    for record in &log {
        let owners = groups
            .iter()
            .filter(|g| g.records.iter().any(|r| std::ptr::eq(*r, record)))
            .count();
        assert_eq!(owners, 1);
    }
}

#[test]
fn subnet_groups_sort_by_time_then_endpoint() {
    let log = records(&[
        "20201019133130,10.20.30.2/16,1",
        "20201019133125,10.20.30.9/16,2",
        "20201019133125,10.20.30.1/16,3",
        "20201019133120,10.20.99.1/16,4",
    ]);

    let groups = group_by_subnet(&log);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].key, SubnetLabel("10.20.***.***".into()));

    let order: Vec<&str> = groups[0]
        .records
        .iter()
        .map(|r| r.endpoint.as_str())
        .collect();
    assert_eq!(
        order,
        vec!["10.20.99.1/16", "10.20.30.1/16", "10.20.30.9/16", "10.20.30.2/16"]
    );
}

#[test]
fn subnet_grouping_drops_unclassified_prefixes() {
    let log = records(&[
        "20201019133124,10.20.30.1/12,1",
        "20201019133125,10.20.30.2/24,2",
        "20201019133126,10.20.30.3/32,3",
    ]);

    let groups = group_by_subnet(&log);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].key.to_string(), "10.20.30.***");
    assert_eq!(groups[0].records.len(), 1);
}

#[test]
fn same_address_with_different_prefix_lands_in_different_subnets() {
    let log = records(&[
        "20201019133124,10.20.30.1/16,1",
        "20201019133125,10.20.30.1/24,2",
    ]);

    let groups = group_by_subnet(&log);
    let keys: Vec<String> = groups.iter().map(|g| g.key.to_string()).collect();
    assert_eq!(keys, vec!["10.20.***.***", "10.20.30.***"]);
}

//! Partitioning of the parsed log into per-endpoint and per-subnet sequences.
//!
//! Groups iterate in the order their key was first seen in the log. Records
//! inside an endpoint group keep file order; records inside a subnet group are
//! re-sorted by `(timestamp, endpoint)` because fault correlation walks all
//! member endpoints on a shared clock.

mod subnet;

#[cfg(test)]
mod tests;

use crate::record::{Endpoint, LogRecord};
use std::collections::HashMap;
use std::hash::Hash;

pub use subnet::{SubnetLabel, subnet_label};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a, K> {
    pub key: K,
    pub records: Vec<&'a LogRecord>,
}

pub type EndpointGroup<'a> = Group<'a, Endpoint>;
pub type SubnetGroup<'a> = Group<'a, SubnetLabel>;

/// Stable grouping by a derived key. Records mapping to `None` are left out.
pub fn group_by<'a, K, F>(records: &'a [LogRecord], mut key_of: F) -> Vec<Group<'a, K>>
where
    K: Eq + Hash + Clone,
    F: FnMut(&LogRecord) -> Option<K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Group<'a, K>> = Vec::new();

    for record in records {
        let Some(key) = key_of(record) else {
            continue;
        };

        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push(Group {
                key,
                records: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].records.push(record);
    }

    groups
}

pub fn group_by_endpoint(records: &[LogRecord]) -> Vec<EndpointGroup<'_>> {
    group_by(records, |r| Some(r.endpoint.clone()))
}

/// Subnet groups, each sorted by `(timestamp, endpoint)`. Endpoints whose
/// prefix is not 8, 16 or 24 do not belong to any subnet.
pub fn group_by_subnet(records: &[LogRecord]) -> Vec<SubnetGroup<'_>> {
    let mut groups = group_by(records, |r| subnet_label(&r.endpoint));

    for group in &mut groups {
        group
            .records
            .sort_by(|a, b| (a.timestamp, &a.endpoint).cmp(&(b.timestamp, &b.endpoint)));
    }

    groups
}

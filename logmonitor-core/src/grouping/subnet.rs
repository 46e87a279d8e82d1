use crate::record::Endpoint;
use serde::Serialize;
use std::fmt;

const MASKED_OCTET: &str = "***";

/// Masked network address such as `1.1.***.***`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SubnetLabel(pub String);

impl fmt::Display for SubnetLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keep the leading `prefix / 8` octets and mask the rest.
///
/// Only /8, /16 and /24 produce a label.
pub fn subnet_label(endpoint: &Endpoint) -> Option<SubnetLabel> {
    let kept = match endpoint.prefix_len() {
        8 => 1,
        16 => 2,
        24 => 3,
        _ => return None,
    };

    let octets = endpoint.octets();
    let label = octets
        .iter()
        .take(kept)
        .copied()
        .chain(std::iter::repeat_n(MASKED_OCTET, octets.len() - kept))
        .collect::<Vec<_>>()
        .join(".");

    Some(SubnetLabel(label))
}

use crate::error::MonitorError;

#[derive(Debug, Clone)]
pub struct RangeConstraint {
    pub min: u64,
    pub max: u64,
    pub label: &'static str,
}

pub const NOT_ACCEPTABLE_COUNT: RangeConstraint = RangeConstraint {
    min: 1,
    max: u32::MAX as u64,
    label: "not_acceptable_count",
};

pub const AVERAGE_COUNT: RangeConstraint = RangeConstraint {
    min: 1,
    max: 1_000_000,
    label: "average_count",
};

pub const NOT_ACCEPTABLE_MILLIS: RangeConstraint = RangeConstraint {
    min: 0,
    max: u64::MAX,
    label: "not_acceptable_millis",
};

/// Parse a threshold argument: ASCII digits only, then range-checked.
pub fn parse_threshold(raw: &str, constraint: &RangeConstraint) -> Result<u64, MonitorError> {
    let non_numeric = || MonitorError::NonNumericThreshold {
        label: constraint.label,
        value: raw.to_string(),
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(non_numeric());
    }

    let value = match raw.parse::<u64>() {
        Ok(value) => value,
        // All digits but too large for u64.
        Err(_) => u64::MAX,
    };

    validate_range(value, constraint)?;
    Ok(value)
}

pub fn validate_range(value: u64, constraint: &RangeConstraint) -> Result<(), MonitorError> {
    if value < constraint.min || value > constraint.max {
        return Err(MonitorError::ThresholdOutOfRange {
            label: constraint.label,
            value,
            min: constraint.min,
            max: constraint.max,
        });
    }
    Ok(())
}

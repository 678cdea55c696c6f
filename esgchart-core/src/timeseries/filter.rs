use chrono::{DateTime, Utc};

/// Rows that carry an observation instant.
pub trait Timestamped {
    /// Observation instant of this row.
    fn timestamp(&self) -> DateTime<Utc>;
}

/// Keep rows observed at or after `cutoff`, preserving their order.
///
/// This is a pure post-filter: applying it twice with the same cutoff yields
/// the same rows as applying it once.
pub fn retain_since<T>(rows: &[T], cutoff: DateTime<Utc>) -> Vec<T>
where
    T: Timestamped + Clone,
{
    rows.iter()
        .filter(|r| r.timestamp() >= cutoff)
        .cloned()
        .collect()
}

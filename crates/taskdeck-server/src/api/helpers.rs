//! Shared API helper functions.

use crate::error::ApiError;
use serde::{Deserialize, Deserializer};

/// Format a unix timestamp (seconds) as RFC3339.
pub fn format_timestamp_rfc3339(timestamp: u64) -> Result<String, ApiError> {
    Ok(chrono::DateTime::from_timestamp(timestamp as i64, 0)
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("Invalid timestamp")))?
        .to_rfc3339())
}

/// Deserialize a field that distinguishes "absent" from "null"
///
/// Pair with `#[serde(default)]` on an `Option<Option<T>>` field: an
/// absent key stays `None`, an explicit `null` becomes `Some(None)`, and
/// a value becomes `Some(Some(v))`.
pub fn deserialize_explicit_null<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_known_timestamp() {
        let formatted = format_timestamp_rfc3339(1_700_000_000).unwrap();
        assert!(formatted.starts_with("2023-11-14T"));
    }
}

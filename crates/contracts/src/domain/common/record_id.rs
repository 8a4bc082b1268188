use serde::{Deserialize, Serialize};

/// Record identifier assigned client-side at creation time.
///
/// Derived from the current Unix timestamp in milliseconds. Deliberately
/// not collision-safe: uniqueness within one browser session is all the
/// UI needs for row keys and edit/delete lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Next id from the wall clock.
    pub fn generate() -> Self {
        Self(chrono::Utc::now().timestamp_millis().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_is_numeric_timestamp() {
        let id = RecordId::generate();
        assert!(!id.as_str().is_empty());
        assert!(id.as_str().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn explicit_id_round_trips() {
        let id = RecordId::new("1705312800000");
        assert_eq!(id.as_str(), "1705312800000");
        assert_eq!(id.to_string(), "1705312800000");
    }
}

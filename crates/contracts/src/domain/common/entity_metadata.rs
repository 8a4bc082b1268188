use serde::{Deserialize, Serialize};

/// Lifecycle metadata carried by every record.
///
/// No soft delete, no versioning: records are created on form submit,
/// mutated in place on edit and removed on delete confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMetadata {
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl EntityMetadata {
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh `updated_at` after an in-place edit.
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_advances_updated_at_only() {
        let mut meta = EntityMetadata::new();
        let created = meta.created_at;
        meta.touch();
        assert_eq!(meta.created_at, created);
        assert!(meta.updated_at >= created);
    }
}

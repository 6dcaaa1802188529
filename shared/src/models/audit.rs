//! Audit fields embedded in every entity

use serde::{Deserialize, Serialize};

/// Creation, modification and soft-deletion timestamps (Unix millis)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFields {
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<i64>,
}

impl AuditFields {
    pub fn new(now: i64) -> Self {
        Self {
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn touched(self, now: i64) -> Self {
        Self {
            updated_at: now,
            ..self
        }
    }

    pub fn deleted(self, now: i64) -> Self {
        Self {
            updated_at: now,
            deleted_at: Some(now),
            ..self
        }
    }

    pub fn restored(self, now: i64) -> Self {
        Self {
            updated_at: now,
            deleted_at: None,
            ..self
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

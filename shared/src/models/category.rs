//! Category Model

use super::AuditFields;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category entity
///
/// Names are unique ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Category {
    pub fn new(data: CategoryCreate, now: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: data.name.trim().to_string(),
            description: data.description,
            audit: AuditFields::new(now),
        }
    }
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    pub description: Option<String>,
}

/// Category projection returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
        }
    }
}

//! Result envelope
//!
//! Every core operation reports its outcome through [`ResultEnvelope`]:
//! expected business conditions (validation, missing entities) become a
//! `Failure` with a human-readable message instead of an error value.
//!
//! ```json
//! { "status": "success", "message": "Menu item added successfully", "data": { ... } }
//! { "status": "failure", "message": "Category not found" }
//! ```

use serde::{Deserialize, Serialize};

/// Uniform success/failure wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResultEnvelope<T> {
    /// Operation succeeded and produced `data`
    Success { message: String, data: T },
    /// Operation failed; no payload
    Failure { message: String },
}

impl<T> ResultEnvelope<T> {
    /// Create a successful envelope
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self::Success {
            message: message.into(),
            data,
        }
    }

    /// Create a failure envelope
    pub fn error(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Human-readable outcome message
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } | Self::Failure { message } => message,
        }
    }

    /// Payload, if the operation succeeded
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// Convert into a `Result`, using the failure message as the error
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success { data, .. } => Ok(data),
            Self::Failure { message } => Err(message),
        }
    }

    /// Transform the payload, keeping the message
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResultEnvelope<U> {
        match self {
            Self::Success { message, data } => ResultEnvelope::Success {
                message,
                data: f(data),
            },
            Self::Failure { message } => ResultEnvelope::Failure { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_carries_payload() {
        let env = ResultEnvelope::success("Menu items fetched successfully", vec![1, 2, 3]);
        assert!(env.is_success());
        assert_eq!(env.message(), "Menu items fetched successfully");
        assert_eq!(env.data(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn failure_has_no_payload() {
        let env: ResultEnvelope<String> = ResultEnvelope::error("Menu item not found");
        assert!(env.is_failure());
        assert_eq!(env.data(), None);
        assert_eq!(env.into_result(), Err("Menu item not found".to_string()));
    }

    #[test]
    fn map_keeps_message() {
        let env = ResultEnvelope::success("ok", 2).map(|n| n * 10);
        assert_eq!(env, ResultEnvelope::success("ok", 20));

        let failed: ResultEnvelope<i32> = ResultEnvelope::error("nope");
        assert_eq!(failed.map(|n| n + 1), ResultEnvelope::error("nope"));
    }

    #[test]
    fn serializes_with_status_tag() {
        let env = ResultEnvelope::success("done", "Menu item is marked unavailable");
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "done");
        assert_eq!(json["data"], "Menu item is marked unavailable");

        let failed: ResultEnvelope<()> = ResultEnvelope::error("Category not found");
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["status"], "failure");
        assert!(json.get("data").is_none());
    }
}

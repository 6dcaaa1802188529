/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Returns `true` when the string is empty or only whitespace
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Case-folded lookup key for a name (full Unicode lowercase)
pub fn name_key(value: &str) -> String {
    value.to_lowercase()
}

use chrono::Utc;

/// Gets the current Unix timestamp in seconds.
pub fn get_system_time() -> i64 {
    Utc::now().timestamp()
}

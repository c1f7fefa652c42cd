/// Application-level constants
pub const APP_NAME: &str = "Lanka Medical Center Analytics";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default SQLite file, created in the working directory
pub const DEFAULT_DB_FILE: &str = "hospital_data.db";

/// Appointment generation window: the two years ending at the run date
pub const GENERATION_WINDOW_DAYS: i64 = 730;

pub fn default_log_filter() -> &'static str {
    "lanka_analytics=info"
}

use chrono::{Local, NaiveDate};

/// Application-level constants
pub const APP_NAME: &str = "Anamnesis";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Date format shared by every date-string field (ISO 8601 calendar date)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Menstrual cycle length bounds, in days. Inputs outside are clamped.
pub const MIN_CYCLE_LENGTH: u32 = 21;
pub const MAX_CYCLE_LENGTH: u32 = 35;
pub const DEFAULT_CYCLE_LENGTH: u32 = 28;

/// Flow pattern used when none is supplied
pub const DEFAULT_FLOW_LABEL: &str = "Normal";
pub const DEFAULT_FLOW_DAYS: u32 = 5;

/// Placeholder rendered for an absent optional record
pub const NOT_APPLICABLE: &str = "Not Applicable";

/// Returned by `days_since_quit` when a habit is active or has no quit date
pub const NO_QUIT_DATE: i64 = -1;

/// PBKDF2 rounds for derived credentials
pub const PBKDF2_ITERATIONS: u32 = 600_000;

/// Log filter used when `RUST_LOG` is unset
pub fn default_log_filter() -> &'static str {
    "anamnesis_lib=info"
}

/// Current local calendar date. Every "not in the future" check compares against this.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

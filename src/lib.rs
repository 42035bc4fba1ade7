pub mod auth;
pub mod config;
pub mod crypto;
pub mod history;
pub mod models;
pub mod patient;
pub mod validation;

pub use auth::{AccessError, AuthenticationSystem};
pub use history::{HistoryRecords, MedicalHistory};
pub use models::RecordError;
pub use patient::Patient;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides [`config::default_log_filter`]. Safe to call more
/// than once; only the first call installs a subscriber.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} v{}", config::APP_NAME, config::APP_VERSION);
    }
}

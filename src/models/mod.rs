pub mod allergy;
pub mod clinical_list;
pub mod enums;
pub mod family;
pub mod lifestyle;
pub mod menstrual;
pub mod ordered_set;
pub mod personal;
pub mod vaccination;
pub mod womans_health;

pub use allergy::*;
pub use clinical_list::*;
pub use enums::*;
pub use family::*;
pub use lifestyle::*;
pub use menstrual::*;
pub use ordered_set::*;
pub use personal::*;
pub use vaccination::*;
pub use womans_health::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{entity} not found: {name}")]
    NotFound { entity: &'static str, name: String },
}

impl RecordError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn not_found(entity: &'static str, name: &str) -> Self {
        Self::NotFound {
            entity,
            name: name.to_string(),
        }
    }
}

/// Comma-joined list, or "None" when empty. Shared by every record rendering.
pub(crate) fn join_or_none<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let joined = items.into_iter().collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "None".to_string()
    } else {
        joined
    }
}

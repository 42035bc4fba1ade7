use std::fmt;

use serde::Serialize;

use super::{OrderedSet, RecordError};

/// Whether the patient reports allergies, and which.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Allergies {
    presence: bool,
    allergies: OrderedSet,
}

impl Allergies {
    pub fn new<'a>(
        presence: bool,
        allergies: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, RecordError> {
        let mut record = Self {
            presence,
            allergies: OrderedSet::new(),
        };
        for allergy in allergies {
            record.add_allergy(allergy)?;
        }
        Ok(record)
    }

    /// An allergy name is valid when non-empty after trimming whitespace.
    pub fn is_valid_allergy(allergy: &str) -> bool {
        !allergy.trim().is_empty()
    }

    pub fn presence(&self) -> bool {
        self.presence
    }

    pub fn set_presence(&mut self, presence: bool) {
        self.presence = presence;
    }

    pub fn allergies(&self) -> &[String] {
        self.allergies.as_slice()
    }

    pub fn has_allergies(&self) -> bool {
        !self.allergies.is_empty()
    }

    /// Add an allergen. Blank names fail; an allergen already listed is left as is.
    /// Returns true if the list changed.
    pub fn add_allergy(&mut self, allergy: &str) -> Result<bool, RecordError> {
        if !Self::is_valid_allergy(allergy) {
            return Err(RecordError::validation("Allergy name cannot be empty"));
        }
        Ok(self.allergies.insert(allergy))
    }

    pub fn remove_allergy(&mut self, allergy: &str) -> Result<(), RecordError> {
        if self.allergies.remove(allergy) {
            Ok(())
        } else {
            Err(RecordError::not_found("Allergy", allergy))
        }
    }
}

impl fmt::Display for Allergies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.allergies.is_empty() {
            return write!(f, "No known allergies.");
        }
        write!(
            f,
            "Known allergies: {}",
            self.allergies.iter().collect::<Vec<_>>().join(", ")
        )
    }
}

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::RecordError;
use crate::validation::validate_non_empty;

/// Vaccine name → date administered (free-form, e.g. "2023-01-15").
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VaccinationRecord {
    vaccinations: BTreeMap<String, String>,
}

impl VaccinationRecord {
    pub fn new<'a>(
        vaccinations: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, RecordError> {
        let mut record = Self::default();
        for (vaccine, date) in vaccinations {
            record.add_vaccination(vaccine, date)?;
        }
        Ok(record)
    }

    /// Record a vaccine. An existing entry for the same vaccine is overwritten.
    pub fn add_vaccination(
        &mut self,
        vaccine_name: &str,
        date_administered: &str,
    ) -> Result<(), RecordError> {
        let vaccine_name = validate_non_empty("Vaccine name", vaccine_name)?;
        self.vaccinations
            .insert(vaccine_name, date_administered.to_string());
        Ok(())
    }

    pub fn remove_vaccination(&mut self, vaccine_name: &str) -> Result<(), RecordError> {
        self.vaccinations
            .remove(vaccine_name)
            .map(|_| ())
            .ok_or_else(|| RecordError::not_found("Vaccine", vaccine_name))
    }

    pub fn date_for(&self, vaccine_name: &str) -> Option<&str> {
        self.vaccinations.get(vaccine_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vaccinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vaccinations.is_empty()
    }
}

impl fmt::Display for VaccinationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vaccinations.is_empty() {
            return write!(f, "Vaccination Record: None");
        }
        write!(f, "Vaccination Record:")?;
        for (vaccine, date) in &self.vaccinations {
            write!(f, "\n{vaccine}: {date}")?;
        }
        Ok(())
    }
}

use std::fmt;

use serde::Serialize;

use super::{join_or_none, OrderedSet, RecordError};
use crate::validation::validate_non_negative_int;

/// Pregnancy history and other women's health issues.
///
/// Invariant: `miscarriages + abortions <= past_pregnancies`, checked after
/// every mutation that touches a count.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WomansHealthRecord {
    is_pregnant: bool,
    past_pregnancies: u32,
    miscarriages: u32,
    abortions: u32,
    other_issues: OrderedSet,
}

impl WomansHealthRecord {
    pub fn new<'a>(
        is_pregnant: bool,
        past_pregnancies: i64,
        miscarriages: i64,
        abortions: i64,
        other_issues: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, RecordError> {
        let record = Self {
            is_pregnant,
            past_pregnancies: validate_non_negative_int(past_pregnancies)?,
            miscarriages: validate_non_negative_int(miscarriages)?,
            abortions: validate_non_negative_int(abortions)?,
            other_issues: other_issues.into_iter().collect(),
        };
        record.validate_counts()?;
        Ok(record)
    }

    fn validate_counts(&self) -> Result<(), RecordError> {
        let lost = u64::from(self.miscarriages) + u64::from(self.abortions);
        if lost > u64::from(self.past_pregnancies) {
            return Err(RecordError::validation(
                "The sum of miscarriages and abortions cannot exceed the total number of past pregnancies",
            ));
        }
        Ok(())
    }

    /// Apply `change` to a copy, keep it only if the count invariant still holds.
    fn apply(&mut self, change: impl FnOnce(&mut Self)) -> Result<(), RecordError> {
        let mut next = self.clone();
        change(&mut next);
        next.validate_counts()?;
        *self = next;
        Ok(())
    }

    pub fn is_pregnant(&self) -> bool {
        self.is_pregnant
    }

    pub fn set_pregnant(&mut self, pregnant: bool) {
        self.is_pregnant = pregnant;
    }

    pub fn past_pregnancies(&self) -> u32 {
        self.past_pregnancies
    }

    pub fn miscarriages(&self) -> u32 {
        self.miscarriages
    }

    pub fn abortions(&self) -> u32 {
        self.abortions
    }

    pub fn other_issues(&self) -> &[String] {
        self.other_issues.as_slice()
    }

    /// End the current pregnancy. A successful one adds to past pregnancies,
    /// an unsuccessful one to miscarriages. Fails if not currently pregnant.
    pub fn complete_pregnancy(&mut self, successful: bool) -> Result<(), RecordError> {
        if !self.is_pregnant {
            return Err(RecordError::validation(
                "Cannot complete a pregnancy because the patient is not currently pregnant",
            ));
        }
        self.apply(|record| {
            record.is_pregnant = false;
            if successful {
                record.past_pregnancies = record.past_pregnancies.saturating_add(1);
            } else {
                record.miscarriages = record.miscarriages.saturating_add(1);
            }
        })?;
        tracing::debug!(successful, "Pregnancy completed");
        Ok(())
    }

    /// Count one abortion against the existing past pregnancies.
    pub fn record_abortion(&mut self) -> Result<(), RecordError> {
        self.apply(|record| record.abortions = record.abortions.saturating_add(1))
    }

    /// Returns true if the issue was not already listed.
    pub fn add_other_issue(&mut self, issue: &str) -> bool {
        self.other_issues.insert(issue)
    }

    pub fn remove_other_issue(&mut self, issue: &str) -> Result<(), RecordError> {
        if self.other_issues.remove(issue) {
            Ok(())
        } else {
            Err(RecordError::not_found("Issue", issue))
        }
    }
}

impl fmt::Display for WomansHealthRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Currently Pregnant: {}",
            if self.is_pregnant { "Yes" } else { "No" }
        )?;
        writeln!(f, "Past Pregnancies: {}", self.past_pregnancies)?;
        writeln!(f, "Miscarriages: {}", self.miscarriages)?;
        writeln!(f, "Abortions: {}", self.abortions)?;
        write!(
            f,
            "Other Health Issues: {}",
            join_or_none(self.other_issues.iter())
        )
    }
}

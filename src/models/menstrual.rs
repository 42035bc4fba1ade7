use std::collections::BTreeMap;
use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::{join_or_none, OrderedSet, RecordError};
use crate::config;
use crate::validation::{parse_date, validate_non_negative_int};

/// Input for building a [`MenstrualCycleRecord`].
#[derive(Debug, Clone)]
pub struct MenstrualCycleEntry {
    /// `YYYY-MM-DD`; appended to the history when set.
    pub last_period_date: Option<String>,
    /// Clamped to [`config::MIN_CYCLE_LENGTH`]..=[`config::MAX_CYCLE_LENGTH`].
    pub cycle_length: i64,
    /// Label → days. `None` uses the default "Normal: 5" pattern.
    pub flow_pattern: Option<BTreeMap<String, i64>>,
    pub symptoms: Vec<String>,
    pub health_issues: Vec<String>,
    /// `YYYY-MM-DD` dates, oldest first.
    pub period_history: Vec<String>,
}

impl Default for MenstrualCycleEntry {
    fn default() -> Self {
        Self {
            last_period_date: None,
            cycle_length: i64::from(config::DEFAULT_CYCLE_LENGTH),
            flow_pattern: None,
            symptoms: Vec::new(),
            health_issues: Vec::new(),
            period_history: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenstrualCycleRecord {
    last_period_date: Option<NaiveDate>,
    cycle_length: u32,
    flow_pattern: BTreeMap<String, u32>,
    symptoms: OrderedSet,
    health_issues: OrderedSet,
    period_history: Vec<NaiveDate>,
}

impl MenstrualCycleRecord {
    pub fn new(entry: MenstrualCycleEntry) -> Result<Self, RecordError> {
        let flow_pattern = match entry.flow_pattern {
            Some(pattern) => pattern
                .into_iter()
                .map(|(label, days)| validate_non_negative_int(days).map(|days| (label, days)))
                .collect::<Result<BTreeMap<_, _>, _>>()?,
            None => BTreeMap::from([(
                config::DEFAULT_FLOW_LABEL.to_string(),
                config::DEFAULT_FLOW_DAYS,
            )]),
        };

        let mut period_history = entry
            .period_history
            .iter()
            .map(|d| parse_date("Period date", d))
            .collect::<Result<Vec<_>, _>>()?;

        let last_period_date = entry
            .last_period_date
            .as_deref()
            .map(|d| parse_date("Last period date", d))
            .transpose()?;
        if let Some(date) = last_period_date {
            period_history.push(date);
        }

        Ok(Self {
            last_period_date,
            cycle_length: clamp_cycle_length(entry.cycle_length),
            flow_pattern,
            symptoms: entry.symptoms.iter().collect(),
            health_issues: entry.health_issues.iter().collect(),
            period_history,
        })
    }

    pub fn last_period_date(&self) -> Option<NaiveDate> {
        self.last_period_date
    }

    pub fn cycle_length(&self) -> u32 {
        self.cycle_length
    }

    pub fn flow_pattern(&self) -> &BTreeMap<String, u32> {
        &self.flow_pattern
    }

    pub fn symptoms(&self) -> &[String] {
        self.symptoms.as_slice()
    }

    pub fn health_issues(&self) -> &[String] {
        self.health_issues.as_slice()
    }

    pub fn period_history(&self) -> &[NaiveDate] {
        &self.period_history
    }

    /// Set or replace the flow duration for `label`.
    pub fn set_flow(&mut self, label: &str, days: i64) -> Result<(), RecordError> {
        let days = validate_non_negative_int(days)?;
        self.flow_pattern.insert(label.to_string(), days);
        Ok(())
    }

    /// Returns true if the symptom was not already listed.
    pub fn add_symptom(&mut self, symptom: &str) -> bool {
        self.symptoms.insert(symptom)
    }

    pub fn remove_symptom(&mut self, symptom: &str) -> Result<(), RecordError> {
        if self.symptoms.remove(symptom) {
            Ok(())
        } else {
            Err(RecordError::not_found("Symptom", symptom))
        }
    }

    /// Returns true if the issue was not already listed.
    pub fn add_health_issue(&mut self, issue: &str) -> bool {
        self.health_issues.insert(issue)
    }

    pub fn remove_health_issue(&mut self, issue: &str) -> Result<(), RecordError> {
        if self.health_issues.remove(issue) {
            Ok(())
        } else {
            Err(RecordError::not_found("Health issue", issue))
        }
    }

    /// Last period date plus the cycle length.
    pub fn next_period_date(&self) -> Result<NaiveDate, RecordError> {
        let last = self.last_period_date.ok_or_else(|| {
            RecordError::validation("Last period date is not set. Cannot predict the next period")
        })?;
        last.checked_add_signed(Duration::days(i64::from(self.cycle_length)))
            .ok_or_else(|| {
                RecordError::validation(format!(
                    "Next period date after {last} is out of the supported date range"
                ))
            })
    }

    /// [`Self::next_period_date`] formatted as `YYYY-MM-DD`.
    pub fn predict_next_period(&self) -> Result<String, RecordError> {
        Ok(self
            .next_period_date()?
            .format(config::DATE_FORMAT)
            .to_string())
    }

    /// Record a period start. Sets the last period date and appends to the
    /// history; repeated dates are kept.
    pub fn add_period_date(&mut self, date: &str) -> Result<(), RecordError> {
        let date = parse_date("Period date", date)?;
        self.last_period_date = Some(date);
        self.period_history.push(date);
        tracing::debug!(%date, entries = self.period_history.len(), "Period date recorded");
        Ok(())
    }

    /// Mean gap in days between consecutive history entries, floored.
    /// Needs at least two entries.
    pub fn calculate_average_cycle_length(&self) -> Result<i64, RecordError> {
        if self.period_history.len() < 2 {
            return Err(RecordError::validation(
                "Not enough period history to calculate average cycle length",
            ));
        }
        let total: i64 = self
            .period_history
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).num_days())
            .sum();
        let gaps = (self.period_history.len() - 1) as i64;
        Ok(total.div_euclid(gaps))
    }
}

fn clamp_cycle_length(days: i64) -> u32 {
    let clamped = days.clamp(
        i64::from(config::MIN_CYCLE_LENGTH),
        i64::from(config::MAX_CYCLE_LENGTH),
    );
    // Within the u32 bounds above.
    clamped as u32
}

impl fmt::Display for MenstrualCycleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self
            .last_period_date
            .map(|d| d.format(config::DATE_FORMAT).to_string())
            .unwrap_or_else(|| "Not recorded".to_string());
        let flow = self
            .flow_pattern
            .iter()
            .map(|(label, days)| format!("{label}: {days} days"))
            .collect::<Vec<_>>()
            .join(", ");
        let history = self
            .period_history
            .iter()
            .map(|d| d.format(config::DATE_FORMAT).to_string())
            .collect::<Vec<_>>();

        writeln!(f, "Last Period Date: {last}")?;
        writeln!(f, "Cycle Length: {} days", self.cycle_length)?;
        writeln!(f, "Flow Pattern: {flow}")?;
        writeln!(f, "Symptoms: {}", join_or_none(self.symptoms.iter()))?;
        writeln!(f, "Health Issues: {}", join_or_none(self.health_issues.iter()))?;
        write!(
            f,
            "Period History: {}",
            join_or_none(history.iter().map(String::as_str))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_last(date: &str, cycle_length: i64) -> MenstrualCycleRecord {
        MenstrualCycleRecord::new(MenstrualCycleEntry {
            last_period_date: Some(date.into()),
            cycle_length,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn predicts_next_period() {
        let record = with_last("2024-01-01", 28);
        assert_eq!(record.predict_next_period().unwrap(), "2024-01-29");
    }

    #[test]
    fn prediction_requires_last_period() {
        let record = MenstrualCycleRecord::new(MenstrualCycleEntry::default()).unwrap();
        assert!(matches!(
            record.predict_next_period(),
            Err(RecordError::Validation(_))
        ));
    }

    #[test]
    fn prediction_past_last_representable_date_fails() {
        let record = with_last("+262142-12-31", 28);
        assert!(matches!(
            record.predict_next_period(),
            Err(RecordError::Validation(_))
        ));
    }

    #[test]
    fn cycle_length_clamped() {
        assert_eq!(with_last("2024-01-01", 10).cycle_length(), 21);
        assert_eq!(with_last("2024-01-01", 60).cycle_length(), 35);
        assert_eq!(with_last("2024-01-01", -4).cycle_length(), 21);
        assert_eq!(with_last("2024-01-01", 30).cycle_length(), 30);
    }

    #[test]
    fn constructor_appends_last_period_to_history() {
        let record = MenstrualCycleRecord::new(MenstrualCycleEntry {
            last_period_date: Some("2024-02-26".into()),
            period_history: vec!["2024-01-29".into()],
            ..Default::default()
        })
        .unwrap();
        assert_eq!(record.period_history().len(), 2);
        assert_eq!(
            record.period_history().last().copied(),
            NaiveDate::from_ymd_opt(2024, 2, 26)
        );
    }

    #[test]
    fn average_cycle_length() {
        let record = MenstrualCycleRecord::new(MenstrualCycleEntry {
            period_history: vec![
                "2024-01-01".into(),
                "2024-01-29".into(),
                "2024-02-26".into(),
            ],
            ..Default::default()
        })
        .unwrap();
        assert_eq!(record.calculate_average_cycle_length().unwrap(), 28);
    }

    #[test]
    fn average_cycle_length_floors() {
        let mut record = with_last("2024-01-01", 28);
        record.add_period_date("2024-01-29").unwrap();
        record.add_period_date("2024-02-27").unwrap();
        // gaps 28 and 29
        assert_eq!(record.calculate_average_cycle_length().unwrap(), 28);
    }

    #[test]
    fn average_needs_two_entries() {
        let record = with_last("2024-01-01", 28);
        assert!(record.calculate_average_cycle_length().is_err());
    }

    #[test]
    fn add_period_date_updates_last_and_allows_duplicates() {
        let mut record = with_last("2024-01-01", 28);
        record.add_period_date("2024-01-29").unwrap();
        record.add_period_date("2024-01-29").unwrap();
        assert_eq!(record.period_history().len(), 3);
        assert_eq!(record.predict_next_period().unwrap(), "2024-02-26");
    }

    #[test]
    fn add_period_date_rejects_unparseable() {
        let mut record = with_last("2024-01-01", 28);
        let before = record.clone();
        assert!(record.add_period_date("29/01/2024").is_err());
        assert_eq!(record, before);
    }

    #[test]
    fn invalid_dates_rejected_at_construction() {
        let entry = MenstrualCycleEntry {
            last_period_date: Some("yesterday".into()),
            ..Default::default()
        };
        assert!(MenstrualCycleRecord::new(entry).is_err());
    }

    #[test]
    fn negative_flow_days_rejected() {
        let entry = MenstrualCycleEntry {
            flow_pattern: Some(BTreeMap::from([("Heavy".to_string(), -1)])),
            ..Default::default()
        };
        assert!(MenstrualCycleRecord::new(entry).is_err());
    }

    #[test]
    fn symptom_and_issue_lists() {
        let mut record = with_last("2024-01-01", 28);
        let before = record.clone();
        assert!(record.add_symptom("Cramps"));
        assert!(!record.add_symptom("Cramps"));
        record.remove_symptom("Cramps").unwrap();
        assert!(matches!(
            record.remove_symptom("Cramps"),
            Err(RecordError::NotFound { entity: "Symptom", .. })
        ));

        assert!(record.add_health_issue("Anemia"));
        record.remove_health_issue("Anemia").unwrap();
        assert!(record.remove_health_issue("Anemia").is_err());
        assert_eq!(record, before);
    }

    #[test]
    fn rendering() {
        let mut record = with_last("2024-01-01", 28);
        record.set_flow("Heavy", 2).unwrap();
        record.add_symptom("Cramps");
        assert_eq!(
            record.to_string(),
            "Last Period Date: 2024-01-01\n\
             Cycle Length: 28 days\n\
             Flow Pattern: Heavy: 2 days, Normal: 5 days\n\
             Symptoms: Cramps\n\
             Health Issues: None\n\
             Period History: 2024-01-01"
        );
    }
}

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::{join_or_none, FamilyCondition, OrderedSet, RecordError};

/// Family medical history: eight tracked conditions plus free-text extras.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FamilyHistory {
    conditions: BTreeSet<FamilyCondition>,
    other: OrderedSet,
}

impl FamilyHistory {
    /// Build from the conditions present and any other diseases.
    /// Empty names are dropped and duplicates collapse, as with [`Self::add_disease`].
    pub fn new<'a>(
        conditions: impl IntoIterator<Item = FamilyCondition>,
        other: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut history = Self {
            conditions: conditions.into_iter().collect(),
            other: OrderedSet::new(),
        };
        for disease in other {
            history.add_disease(disease);
        }
        history
    }

    pub fn has_condition(&self, condition: FamilyCondition) -> bool {
        self.conditions.contains(&condition)
    }

    pub fn set_condition(&mut self, condition: FamilyCondition, present: bool) {
        if present {
            self.conditions.insert(condition);
        } else {
            self.conditions.remove(&condition);
        }
    }

    pub fn other(&self) -> &[String] {
        self.other.as_slice()
    }

    /// Add a disease to the "other" list. Empty names and duplicates are ignored.
    /// Returns true if the list changed.
    pub fn add_disease(&mut self, disease: &str) -> bool {
        if disease.is_empty() {
            return false;
        }
        self.other.insert(disease)
    }

    /// Remove a disease from the "other" list.
    pub fn remove_disease(&mut self, disease: &str) -> Result<(), RecordError> {
        if self.other.remove(disease) {
            Ok(())
        } else {
            Err(RecordError::not_found("Disease", disease))
        }
    }

    pub fn has_any_disease(&self) -> bool {
        !self.conditions.is_empty() || !self.other.is_empty()
    }

    /// Reset to a blank record.
    pub fn clear_all_diseases(&mut self) {
        self.conditions.clear();
        self.other.clear();
    }
}

impl fmt::Display for FamilyHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for condition in FamilyCondition::ALL {
            let flag = if self.has_condition(*condition) { "True" } else { "False" };
            write!(f, "{}: {flag}, ", condition.label())?;
        }
        write!(f, "Other: {}", join_or_none(self.other.iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_disease_ignores_empty_and_duplicates() {
        let mut history = FamilyHistory::default();
        assert!(history.add_disease("Asthma"));
        assert!(!history.add_disease("Asthma"));
        assert!(!history.add_disease(""));
        assert_eq!(history.other(), ["Asthma"]);
        assert!(history.add_disease(" "));
        assert_eq!(history.other(), ["Asthma", " "]);
    }

    #[test]
    fn add_then_remove_restores_state() {
        let mut history = FamilyHistory::new([FamilyCondition::Cancer], ["Gout"]);
        let before = history.clone();
        history.add_disease("Asthma");
        history.remove_disease("Asthma").unwrap();
        assert_eq!(history, before);
    }

    #[test]
    fn remove_missing_disease_fails() {
        let mut history = FamilyHistory::default();
        assert!(matches!(
            history.remove_disease("Asthma"),
            Err(RecordError::NotFound { entity: "Disease", .. })
        ));
    }

    #[test]
    fn constructor_deduplicates_other() {
        let history = FamilyHistory::new([], ["Gout", "", "Gout", "Lupus"]);
        assert_eq!(history.other(), ["Gout", "Lupus"]);
    }

    #[test]
    fn has_any_disease_and_clear() {
        let mut history = FamilyHistory::default();
        assert!(!history.has_any_disease());

        history.set_condition(FamilyCondition::Diabetes, true);
        assert!(history.has_any_disease());
        history.set_condition(FamilyCondition::Diabetes, false);
        assert!(!history.has_any_disease());

        history.add_disease("Lupus");
        assert!(history.has_any_disease());

        history.set_condition(FamilyCondition::Stroke, true);
        history.clear_all_diseases();
        assert!(!history.has_any_disease());
        assert!(history.other().is_empty());
    }

    #[test]
    fn rendering_lists_every_flag_in_order() {
        let history = FamilyHistory::new([FamilyCondition::Stroke], []);
        assert_eq!(
            history.to_string(),
            "Heart Disease: False, Stroke: True, Diabetes: False, Cancer: False, \
             Obesity: False, Mental Health Issues: False, High Blood Pressure: False, \
             Kidney Disease: False, Other: None"
        );
    }
}

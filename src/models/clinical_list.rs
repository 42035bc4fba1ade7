use std::fmt;

use serde::Serialize;

use super::{join_or_none, OrderedSet, RecordError};

/// Macro to generate a strict list record: add rejects empty and duplicate
/// entries, remove reports absence with `false`.
macro_rules! clinical_list {
    (
        $(#[$doc:meta])*
        $name:ident {
            field: $field:ident,
            add: $add:ident,
            remove: $remove:ident,
            item: $item:literal,
            heading: $heading:literal $(,)?
        }
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize)]
        pub struct $name {
            $field: OrderedSet,
        }

        impl $name {
            /// Fails on the first empty or repeated entry.
            pub fn new<'a>(entries: impl IntoIterator<Item = &'a str>) -> Result<Self, RecordError> {
                let mut record = Self::default();
                for entry in entries {
                    record.$add(entry)?;
                }
                Ok(record)
            }

            pub fn $field(&self) -> &[String] {
                self.$field.as_slice()
            }

            pub fn contains(&self, entry: &str) -> bool {
                self.$field.contains(entry)
            }

            pub fn len(&self) -> usize {
                self.$field.len()
            }

            pub fn is_empty(&self) -> bool {
                self.$field.is_empty()
            }

            pub fn $add(&mut self, entry: &str) -> Result<(), RecordError> {
                if entry.is_empty() {
                    return Err(RecordError::validation(concat!($item, " cannot be empty")));
                }
                if !self.$field.insert(entry) {
                    return Err(RecordError::validation(concat!(
                        $item,
                        " already exists in the list"
                    )));
                }
                Ok(())
            }

            /// Returns false if the entry was not listed.
            pub fn $remove(&mut self, entry: &str) -> bool {
                self.$field.remove(entry)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($heading, ": {}"), join_or_none(self.$field.iter()))
            }
        }
    };
}

clinical_list!(
    /// Medications the patient currently takes.
    CurrentMedications {
        field: medications,
        add: add_medication,
        remove: remove_medication,
        item: "Medication",
        heading: "Current Medications",
    }
);

clinical_list!(
    /// Past surgical procedures.
    Surgeries {
        field: surgeries,
        add: add_surgery,
        remove: remove_surgery,
        item: "Surgery",
        heading: "Surgeries",
    }
);

clinical_list!(
    Disabilities {
        field: disabilities,
        add: add_disability,
        remove: remove_disability,
        item: "Disability",
        heading: "Disabilities",
    }
);

clinical_list!(
    Hospitalizations {
        field: hospitalizations,
        add: add_hospitalization,
        remove: remove_hospitalization,
        item: "Hospitalization",
        heading: "Hospitalizations",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_surgery_rejected() {
        let mut surgeries = Surgeries::default();
        assert!(matches!(surgeries.add_surgery(""), Err(RecordError::Validation(_))));
        assert!(surgeries.is_empty());
    }

    #[test]
    fn surgery_add_then_remove_leaves_list_empty() {
        let mut surgeries = Surgeries::default();
        surgeries.add_surgery("Appendectomy").unwrap();
        assert!(surgeries.remove_surgery("Appendectomy"));
        assert!(surgeries.surgeries().is_empty());
    }

    #[test]
    fn duplicate_medication_rejected() {
        let mut meds = CurrentMedications::new(["Metformin"]).unwrap();
        let err = meds.add_medication("Metformin").unwrap_err();
        assert_eq!(
            err,
            RecordError::Validation("Medication already exists in the list".into())
        );
        assert_eq!(meds.len(), 1);
    }

    #[test]
    fn duplicate_in_constructor_rejected() {
        assert!(Disabilities::new(["Hearing loss", "Hearing loss"]).is_err());
    }

    #[test]
    fn remove_missing_returns_false() {
        let mut stays = Hospitalizations::new(["2019 pneumonia"]).unwrap();
        assert!(!stays.remove_hospitalization("2021 fracture"));
        assert_eq!(stays.hospitalizations(), ["2019 pneumonia"]);
    }

    #[test]
    fn order_preserved() {
        let mut meds = CurrentMedications::default();
        meds.add_medication("Lisinopril").unwrap();
        meds.add_medication("Aspirin").unwrap();
        assert!(meds.contains("Aspirin"));
        assert_eq!(meds.medications(), ["Lisinopril", "Aspirin"]);
    }

    #[test]
    fn rendering() {
        assert_eq!(Surgeries::default().to_string(), "Surgeries: None");
        let meds = CurrentMedications::new(["Lisinopril", "Aspirin"]).unwrap();
        assert_eq!(meds.to_string(), "Current Medications: Lisinopril, Aspirin");
        let stays = Hospitalizations::new(["2019 pneumonia"]).unwrap();
        assert_eq!(stays.to_string(), "Hospitalizations: 2019 pneumonia");
        assert_eq!(Disabilities::default().to_string(), "Disabilities: None");
    }
}

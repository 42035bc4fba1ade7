//! Medical history aggregate.
//!
//! Composes one of each record type (the two sex-specific records optional)
//! into a single unit. Records validate themselves; nothing here adds
//! cross-record rules.

use std::fmt;

use serde::Serialize;

use crate::config;
use crate::models::{
    Allergies, CurrentMedications, Disabilities, FamilyHistory, Hospitalizations,
    LifestyleAndHabits, MenstrualCycleRecord, PersonalData, Surgeries, VaccinationRecord,
    WomansHealthRecord,
};

/// Records handed to [`MedicalHistory::new`].
#[derive(Debug, Clone)]
pub struct HistoryRecords {
    pub personal_data: PersonalData,
    pub family_history: FamilyHistory,
    pub lifestyle_and_habits: LifestyleAndHabits,
    pub allergies: Allergies,
    pub current_medications: CurrentMedications,
    pub surgeries: Surgeries,
    pub disabilities: Disabilities,
    pub hospitalizations: Hospitalizations,
    pub vaccination_record: VaccinationRecord,
    pub womans_health_record: Option<WomansHealthRecord>,
    pub menstrual_cycle_record: Option<MenstrualCycleRecord>,
}

/// A patient's complete medical history.
///
/// The set of records is fixed at construction; individual records stay
/// mutable through the `*_mut` accessors.
#[derive(Debug, Clone, Serialize)]
pub struct MedicalHistory {
    personal_data: PersonalData,
    family_history: FamilyHistory,
    lifestyle_and_habits: LifestyleAndHabits,
    allergies: Allergies,
    current_medications: CurrentMedications,
    surgeries: Surgeries,
    disabilities: Disabilities,
    hospitalizations: Hospitalizations,
    vaccination_record: VaccinationRecord,
    womans_health_record: Option<WomansHealthRecord>,
    menstrual_cycle_record: Option<MenstrualCycleRecord>,
}

impl MedicalHistory {
    pub fn new(records: HistoryRecords) -> Self {
        Self {
            personal_data: records.personal_data,
            family_history: records.family_history,
            lifestyle_and_habits: records.lifestyle_and_habits,
            allergies: records.allergies,
            current_medications: records.current_medications,
            surgeries: records.surgeries,
            disabilities: records.disabilities,
            hospitalizations: records.hospitalizations,
            vaccination_record: records.vaccination_record,
            womans_health_record: records.womans_health_record,
            menstrual_cycle_record: records.menstrual_cycle_record,
        }
    }

    pub fn personal_data(&self) -> &PersonalData {
        &self.personal_data
    }

    pub fn family_history(&self) -> &FamilyHistory {
        &self.family_history
    }

    pub fn family_history_mut(&mut self) -> &mut FamilyHistory {
        &mut self.family_history
    }

    pub fn lifestyle_and_habits(&self) -> &LifestyleAndHabits {
        &self.lifestyle_and_habits
    }

    pub fn lifestyle_and_habits_mut(&mut self) -> &mut LifestyleAndHabits {
        &mut self.lifestyle_and_habits
    }

    pub fn allergies(&self) -> &Allergies {
        &self.allergies
    }

    pub fn allergies_mut(&mut self) -> &mut Allergies {
        &mut self.allergies
    }

    pub fn current_medications(&self) -> &CurrentMedications {
        &self.current_medications
    }

    pub fn current_medications_mut(&mut self) -> &mut CurrentMedications {
        &mut self.current_medications
    }

    pub fn surgeries(&self) -> &Surgeries {
        &self.surgeries
    }

    pub fn surgeries_mut(&mut self) -> &mut Surgeries {
        &mut self.surgeries
    }

    pub fn disabilities(&self) -> &Disabilities {
        &self.disabilities
    }

    pub fn disabilities_mut(&mut self) -> &mut Disabilities {
        &mut self.disabilities
    }

    pub fn hospitalizations(&self) -> &Hospitalizations {
        &self.hospitalizations
    }

    pub fn hospitalizations_mut(&mut self) -> &mut Hospitalizations {
        &mut self.hospitalizations
    }

    pub fn vaccination_record(&self) -> &VaccinationRecord {
        &self.vaccination_record
    }

    pub fn vaccination_record_mut(&mut self) -> &mut VaccinationRecord {
        &mut self.vaccination_record
    }

    pub fn womans_health_record(&self) -> Option<&WomansHealthRecord> {
        self.womans_health_record.as_ref()
    }

    pub fn womans_health_record_mut(&mut self) -> Option<&mut WomansHealthRecord> {
        self.womans_health_record.as_mut()
    }

    pub fn menstrual_cycle_record(&self) -> Option<&MenstrualCycleRecord> {
        self.menstrual_cycle_record.as_ref()
    }

    pub fn menstrual_cycle_record_mut(&mut self) -> Option<&mut MenstrualCycleRecord> {
        self.menstrual_cycle_record.as_mut()
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, title: &str, body: &dyn fmt::Display) -> fmt::Result {
    write!(f, "{title}:\n{body}\n\n")
}

fn write_optional_section(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    body: Option<&dyn fmt::Display>,
) -> fmt::Result {
    match body {
        Some(body) => write_section(f, title, body),
        None => write!(f, "{title}: {}\n\n", config::NOT_APPLICABLE),
    }
}

impl fmt::Display for MedicalHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_section(f, "Personal Data", &self.personal_data)?;
        write_section(f, "Family History", &self.family_history)?;
        write_section(f, "Lifestyle and Habits", &self.lifestyle_and_habits)?;
        write_section(f, "Allergies", &self.allergies)?;
        write_section(f, "Current Medications", &self.current_medications)?;
        write_section(f, "Surgeries", &self.surgeries)?;
        write_section(f, "Disabilities", &self.disabilities)?;
        write_section(f, "Hospitalizations", &self.hospitalizations)?;
        write_section(f, "Vaccination Record", &self.vaccination_record)?;
        write_optional_section(
            f,
            "Woman's Health Record",
            self.womans_health_record
                .as_ref()
                .map(|r| r as &dyn fmt::Display),
        )?;
        write_optional_section(
            f,
            "Menstrual Cycle Record",
            self.menstrual_cycle_record
                .as_ref()
                .map(|r| r as &dyn fmt::Display),
        )
    }
}

//! Patient registry and credential-gated access.
//!
//! Patients are keyed by id. Registering an id that is already present
//! replaces the earlier patient and hands it back to the caller.

use std::collections::HashMap;

use thiserror::Error;

use crate::history::MedicalHistory;
use crate::models::RecordError;
use crate::patient::Patient;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("Wrong password for patient {patient_id}")]
    WrongPassword { patient_id: String },

    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    #[error(transparent)]
    Record(#[from] RecordError),
}

// ═══════════════════════════════════════════════════════════
// AuthenticationSystem
// ═══════════════════════════════════════════════════════════

/// Registry of patients, keyed by patient id.
#[derive(Debug, Default)]
pub struct AuthenticationSystem {
    patients: HashMap<String, Patient>,
}

impl AuthenticationSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a patient. Returns the patient previously registered under the
    /// same id, if any.
    pub fn register_patient(&mut self, patient: Patient) -> Option<Patient> {
        let patient_id = patient.patient_id().to_string();
        let displaced = self.patients.insert(patient_id.clone(), patient);
        if displaced.is_some() {
            tracing::warn!(patient_id = %patient_id, "Patient re-registered, previous entry replaced");
        } else {
            tracing::info!(patient_id = %patient_id, "Patient registered");
        }
        displaced
    }

    /// Rendered medical history for `patient_id`, if the password matches.
    pub fn login(&self, patient_id: &str, password: &str) -> Result<String, AccessError> {
        let rendered = self.find(patient_id)?.get_medical_history(password)?;
        tracing::info!(patient_id = %patient_id, "Patient logged in");
        Ok(rendered)
    }

    /// Mutable access to a registered patient's history, if the password matches.
    pub fn history_mut(
        &mut self,
        patient_id: &str,
        password: &str,
    ) -> Result<&mut MedicalHistory, AccessError> {
        let patient = self.patients.get_mut(patient_id).ok_or_else(|| {
            tracing::warn!(patient_id = %patient_id, "Unknown patient id");
            AccessError::PatientNotFound(patient_id.to_string())
        })?;
        patient.history_mut(password)
    }

    pub fn is_registered(&self, patient_id: &str) -> bool {
        self.patients.contains_key(patient_id)
    }

    pub fn unregister_patient(&mut self, patient_id: &str) -> Option<Patient> {
        let removed = self.patients.remove(patient_id);
        if removed.is_some() {
            tracing::info!(patient_id = %patient_id, "Patient unregistered");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    fn find(&self, patient_id: &str) -> Result<&Patient, AccessError> {
        self.patients.get(patient_id).ok_or_else(|| {
            tracing::warn!(patient_id = %patient_id, "Unknown patient id");
            AccessError::PatientNotFound(patient_id.to_string())
        })
    }
}

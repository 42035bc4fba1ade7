use std::fmt;

use crate::auth::AccessError;
use crate::crypto::Credential;
use crate::history::MedicalHistory;

/// A patient: identity, credential, and the one medical history they own.
///
/// The history is only reachable through the credential-checked accessors.
pub struct Patient {
    patient_id: String,
    name: String,
    credential: Credential,
    history: MedicalHistory,
}

impl Patient {
    /// Patient whose password is checked by plain equality.
    pub fn new(patient_id: &str, name: &str, password: &str, history: MedicalHistory) -> Self {
        Self::with_credential(patient_id, name, Credential::plaintext(password), history)
    }

    pub fn with_credential(
        patient_id: &str,
        name: &str,
        credential: Credential,
        history: MedicalHistory,
    ) -> Self {
        Self {
            patient_id: patient_id.to_string(),
            name: name.to_string(),
            credential,
            history,
        }
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn check_credential(&self, candidate: &str) -> bool {
        self.credential.verify(candidate)
    }

    fn authorize(&self, candidate: &str) -> Result<(), AccessError> {
        if self.check_credential(candidate) {
            Ok(())
        } else {
            tracing::warn!(patient_id = %self.patient_id, "Credential check failed");
            Err(AccessError::WrongPassword {
                patient_id: self.patient_id.clone(),
            })
        }
    }

    /// Full rendering of the medical history, if `candidate` matches.
    pub fn get_medical_history(&self, candidate: &str) -> Result<String, AccessError> {
        self.authorize(candidate)?;
        Ok(self.history.to_string())
    }

    /// Mutable access to the medical history, if `candidate` matches.
    pub fn history_mut(&mut self, candidate: &str) -> Result<&mut MedicalHistory, AccessError> {
        self.authorize(candidate)?;
        Ok(&mut self.history)
    }
}

impl fmt::Debug for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Patient")
            .field("patient_id", &self.patient_id)
            .field("name", &self.name)
            .field("credential", &self.credential)
            .finish_non_exhaustive()
    }
}

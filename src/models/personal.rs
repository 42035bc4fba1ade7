use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::RecordError;
use crate::validation::{
    validate_address, validate_email, validate_emergency_contact, validate_non_empty,
    validate_past_or_today, FieldMap,
};

/// Input for building a [`PersonalData`] record.
#[derive(Debug, Clone)]
pub struct PersonalDataEntry {
    pub name: String,
    pub surname: String,
    pub fathers_name: String,
    pub mothers_name: String,
    pub birthdate: NaiveDate,
    pub social_security_id: String,
    pub tel_number: String,
    pub email: String,
    pub address: FieldMap,
    pub occupation: String,
    pub emergency_contact: FieldMap,
}

/// Identity, contact details and emergency contact of a patient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalData {
    name: String,
    surname: String,
    fathers_name: String,
    mothers_name: String,
    birthdate: NaiveDate,
    social_security_id: String,
    tel_number: String,
    email: String,
    address: FieldMap,
    occupation: String,
    emergency_contact: FieldMap,
}

impl PersonalData {
    pub fn new(entry: PersonalDataEntry) -> Result<Self, RecordError> {
        Ok(Self {
            name: validate_non_empty("Name", &entry.name)?,
            surname: validate_non_empty("Surname", &entry.surname)?,
            fathers_name: entry.fathers_name,
            mothers_name: entry.mothers_name,
            birthdate: validate_past_or_today(entry.birthdate)?,
            social_security_id: validate_non_empty(
                "Social security ID",
                &entry.social_security_id,
            )?,
            tel_number: validate_non_empty("Telephone number", &entry.tel_number)?,
            email: validate_email(&entry.email)?,
            address: validate_address(entry.address)?,
            occupation: entry.occupation,
            emergency_contact: validate_emergency_contact(entry.emergency_contact)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    pub fn birthdate(&self) -> NaiveDate {
        self.birthdate
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn address(&self) -> &FieldMap {
        &self.address
    }

    pub fn emergency_contact(&self) -> &FieldMap {
        &self.emergency_contact
    }
}

impl fmt::Display for PersonalData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keys were checked at construction.
        let a = &self.address;
        let c = &self.emergency_contact;
        write!(
            f,
            "Name: {} {}, Father's Name: {}, Mother's Name: {}, Birthdate: {}, \
             Social Security ID: {}, Telephone: {}, Email: {}, \
             Address: {}, {}, {} {}, {}, Occupation: {}, \
             Emergency Contact: {} ({})",
            self.name,
            self.surname,
            self.fathers_name,
            self.mothers_name,
            self.birthdate,
            self.social_security_id,
            self.tel_number,
            self.email,
            a["street"],
            a["city"],
            a["state"],
            a["postal_code"],
            a["country"],
            self.occupation,
            c["name"],
            c["tel_number"],
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config;
    use chrono::Duration;

    fn map(pairs: &[(&str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    pub(crate) fn sample_entry() -> PersonalDataEntry {
        PersonalDataEntry {
            name: "Eleni".into(),
            surname: "Papadopoulou".into(),
            fathers_name: "Nikos".into(),
            mothers_name: "Maria".into(),
            birthdate: NaiveDate::from_ymd_opt(1990, 5, 17).unwrap(),
            social_security_id: "17059012345".into(),
            tel_number: "+30 210 555 0101".into(),
            email: "eleni@example.gr".into(),
            address: map(&[
                ("street", "12 Ermou St"),
                ("city", "Athens"),
                ("state", "Attica"),
                ("postal_code", "10563"),
                ("country", "Greece"),
            ]),
            occupation: "Engineer".into(),
            emergency_contact: map(&[("name", "Nikos Papadopoulos"), ("tel_number", "+30 697 000 0000")]),
        }
    }

    #[test]
    fn valid_entry_constructs() {
        let data = PersonalData::new(sample_entry()).unwrap();
        assert_eq!(data.full_name(), "Eleni Papadopoulou");
        assert_eq!(data.address()["city"], "Athens");
    }

    #[test]
    fn future_birthdate_rejected() {
        let mut entry = sample_entry();
        entry.birthdate = config::today() + Duration::days(1);
        assert!(matches!(PersonalData::new(entry), Err(RecordError::Validation(_))));
    }

    #[test]
    fn incomplete_address_rejected() {
        let mut entry = sample_entry();
        entry.address.remove("postal_code");
        assert!(matches!(PersonalData::new(entry), Err(RecordError::Validation(_))));
    }

    #[test]
    fn emergency_contact_without_phone_rejected() {
        let mut entry = sample_entry();
        entry.emergency_contact.remove("tel_number");
        assert!(PersonalData::new(entry).is_err());
    }

    #[test]
    fn invalid_email_rejected() {
        let mut entry = sample_entry();
        entry.email = "not-an-email".into();
        assert!(PersonalData::new(entry).is_err());
    }

    #[test]
    fn blank_ssn_rejected() {
        let mut entry = sample_entry();
        entry.social_security_id = " ".into();
        assert!(PersonalData::new(entry).is_err());
    }

    #[test]
    fn rendering_is_field_ordered() {
        let rendered = PersonalData::new(sample_entry()).unwrap().to_string();
        assert!(rendered.starts_with("Name: Eleni Papadopoulou, Father's Name: Nikos"));
        assert!(rendered.contains("Birthdate: 1990-05-17"));
        assert!(rendered.contains("Address: 12 Ermou St, Athens, Attica 10563, Greece"));
        assert!(rendered.ends_with("Emergency Contact: Nikos Papadopoulos (+30 697 000 0000)"));
    }
}

//! Patient profile stored in the `[profile]` config section

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const BLOOD_TYPES: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];
pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub address: String,
    pub blood_type: String,
    pub gender: String,
}

/// Editable profile fields in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Age,
    Address,
    BloodType,
    Gender,
}

impl ProfileField {
    pub const ALL: [ProfileField; 7] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Age,
        ProfileField::Address,
        ProfileField::BloodType,
        ProfileField::Gender,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Full Name",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone Number",
            ProfileField::Age => "Age",
            ProfileField::Address => "Address",
            ProfileField::BloodType => "Blood Type",
            ProfileField::Gender => "Gender",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, ProfileField::BloodType | ProfileField::Gender)
    }

    /// Closed set of accepted values, if the field is a picker
    pub fn choices(&self) -> Option<&'static [&'static str]> {
        match self {
            ProfileField::BloodType => Some(&BLOOD_TYPES),
            ProfileField::Gender => Some(&GENDERS),
            _ => None,
        }
    }

    pub fn get<'a>(&self, profile: &'a PatientProfile) -> &'a str {
        match self {
            ProfileField::Name => &profile.name,
            ProfileField::Email => &profile.email,
            ProfileField::Phone => &profile.phone,
            ProfileField::Age => &profile.age,
            ProfileField::Address => &profile.address,
            ProfileField::BloodType => &profile.blood_type,
            ProfileField::Gender => &profile.gender,
        }
    }

    pub fn set(&self, profile: &mut PatientProfile, value: impl Into<String>) {
        let value = value.into();
        match self {
            ProfileField::Name => profile.name = value,
            ProfileField::Email => profile.email = value,
            ProfileField::Phone => profile.phone = value,
            ProfileField::Age => profile.age = value,
            ProfileField::Address => profile.address = value,
            ProfileField::BloodType => profile.blood_type = value,
            ProfileField::Gender => profile.gender = value,
        }
    }
}

impl PatientProfile {
    /// Every problem with the profile, one per field
    pub fn errors(&self) -> Vec<(ProfileField, String)> {
        let mut errors = Vec::new();
        for field in ProfileField::ALL {
            let value = field.get(self).trim();
            if value.is_empty() {
                if field.is_required() {
                    errors.push((field, format!("{} is required", field.label())));
                }
                continue;
            }
            if let Some(choices) = field.choices() {
                if !choices.contains(&value) {
                    errors.push((
                        field,
                        format!("{} must be one of {}", field.label(), choices.join(", ")),
                    ));
                }
            }
        }
        errors
    }

    pub fn validate(&self) -> Result<()> {
        let errors = self.errors();
        if errors.is_empty() {
            return Ok(());
        }
        let messages: Vec<String> = errors.into_iter().map(|(_, msg)| msg).collect();
        Err(Error::InvalidProfile(messages.join("; ")))
    }

    /// Name for greetings, falling back to a generic one
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("there")
    }

    pub fn is_complete(&self) -> bool {
        self.errors().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PatientProfile {
        PatientProfile {
            name: "Asha Menon".into(),
            email: "asha@example.com".into(),
            phone: "+91 98470 00000".into(),
            age: "34".into(),
            address: "Kottakkal, Kerala".into(),
            blood_type: String::new(),
            gender: String::new(),
        }
    }

    #[test]
    fn test_default_profile_is_incomplete() {
        let profile = PatientProfile::default();
        let errors = profile.errors();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors[0].1, "Full Name is required");
        assert!(matches!(profile.validate(), Err(Error::InvalidProfile(_))));
    }

    #[test]
    fn test_optional_pickers_may_be_empty() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_picker_values_checked() {
        let mut profile = filled();
        profile.blood_type = "C+".into();
        profile.gender = "Female".into();
        let errors = profile.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, ProfileField::BloodType);

        profile.blood_type = "AB-".into();
        assert!(profile.is_complete());
    }

    #[test]
    fn test_whitespace_does_not_satisfy_required() {
        let mut profile = filled();
        ProfileField::Address.set(&mut profile, "   ");
        assert_eq!(profile.errors()[0].0, ProfileField::Address);
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut profile = PatientProfile::default();
        for field in ProfileField::ALL {
            field.set(&mut profile, field.label());
            assert_eq!(field.get(&profile), field.label());
        }
    }

    #[test]
    fn test_first_name() {
        assert_eq!(filled().first_name(), "Asha");
        assert_eq!(PatientProfile::default().first_name(), "there");
    }
}

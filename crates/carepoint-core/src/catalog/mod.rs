//! Hospitals, doctors, specialties and lab records
//!
//! The catalog is read-only at runtime. It comes from the built-in seed data
//! or from a JSON file with the same shape.

mod models;
mod seed;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use models::{DayAvailability, Doctor, Hospital, LabRecord, LabStatus, Specialty};

use crate::{Error, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    specialties: Vec<Specialty>,
    #[serde(default)]
    hospitals: Vec<Hospital>,
    #[serde(default)]
    doctors: Vec<Doctor>,
    #[serde(default)]
    lab_records: Vec<LabRecord>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            specialties: seed::specialties(),
            hospitals: seed::hospitals(),
            doctors: seed::doctors(),
            lab_records: seed::lab_records(),
        }
    }

    /// Load a catalog file, falling back to the built-in data when absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No catalog at {}, using built-in data", path.display());
            return Ok(Self::builtin());
        }

        let content = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&content)?;
        catalog.check_references()?;
        info!(
            "Loaded catalog from {}: {} hospitals, {} doctors",
            path.display(),
            catalog.hospitals.len(),
            catalog.doctors.len()
        );
        Ok(catalog)
    }

    /// Every doctor must belong to a known hospital
    fn check_references(&self) -> Result<()> {
        for doctor in &self.doctors {
            if self.hospital(&doctor.hospital_id).is_none() {
                return Err(Error::HospitalNotFound(format!(
                    "{} (referenced by doctor {})",
                    doctor.hospital_id, doctor.id
                )));
            }
        }
        Ok(())
    }

    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    pub fn hospital(&self, id: &str) -> Option<&Hospital> {
        self.hospitals.iter().find(|h| h.id == id)
    }

    /// Doctors practising at a hospital, in catalog order
    pub fn doctors_at(&self, hospital_id: &str) -> Vec<&Doctor> {
        self.doctors
            .iter()
            .filter(|d| d.hospital_id == hospital_id)
            .collect()
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn doctor(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    /// Doctors whose specialty matches `name`, ignoring case and padding
    pub fn doctors_by_specialty(&self, name: &str) -> Vec<&Doctor> {
        let wanted = name.trim().to_lowercase();
        self.doctors
            .iter()
            .filter(|d| d.specialty.trim().to_lowercase() == wanted)
            .collect()
    }

    /// Top `n` doctors by rating, ties broken by experience
    pub fn popular_doctors(&self, n: usize) -> Vec<&Doctor> {
        let mut doctors: Vec<&Doctor> = self.doctors.iter().collect();
        doctors.sort_by(|a, b| {
            b.rating
                .total_cmp(&a.rating)
                .then(b.experience_years.cmp(&a.experience_years))
        });
        doctors.truncate(n);
        doctors
    }

    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
    }

    pub fn lab_records(&self) -> &[LabRecord] {
        &self.lab_records
    }

    /// Hospitals whose name or location contains `query` (case-insensitive)
    pub fn search_hospitals(&self, query: &str) -> Vec<&Hospital> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.hospitals.iter().collect();
        }
        self.hospitals
            .iter()
            .filter(|h| {
                h.name.to_lowercase().contains(&query) || h.location.to_lowercase().contains(&query)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("carepoint-{}-{}", uuid::Uuid::new_v4(), name))
    }

    #[test]
    fn test_builtin_is_consistent() {
        let catalog = Catalog::builtin();
        assert!(catalog.check_references().is_ok());
        assert_eq!(catalog.specialties().len(), 4);
        for hospital in catalog.hospitals() {
            for id in &hospital.doctor_ids {
                let doctor = catalog.doctor(id).expect("listed doctor exists");
                assert_eq!(doctor.hospital_id, hospital.id);
            }
        }
    }

    #[test]
    fn test_doctors_at() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog.doctors_at("1").iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["101", "102", "201"]);
        assert!(catalog.doctors_at("99").is_empty());
    }

    #[test]
    fn test_specialty_lookup_ignores_padding_and_case() {
        let catalog = Catalog::builtin();
        let padded = &catalog.specialties()[0].name;
        assert_eq!(padded, "Cardiology     ");

        let cardio = catalog.doctors_by_specialty(padded);
        assert_eq!(cardio.len(), 2);
        assert_eq!(catalog.doctors_by_specialty("NEUROLOGY").len(), 2);
        assert_eq!(catalog.doctors_by_specialty("orthopaedic surgeon").len(), 1);
    }

    #[test]
    fn test_popular_doctors_sorted_by_rating() {
        let catalog = Catalog::builtin();
        let top = catalog.popular_doctors(3);
        assert_eq!(top.len(), 3);
        assert!(top.windows(2).all(|w| w[0].rating >= w[1].rating));
        // 4.9 tie resolved by experience
        assert_eq!(top[0].id, "106");
        assert_eq!(top[1].id, "102");
    }

    #[test]
    fn test_search_hospitals() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.search_hospitals("almas").len(), 1);
        assert_eq!(catalog.search_hospitals("kottakkal").len(), 4);
        assert_eq!(catalog.search_hospitals("  ").len(), catalog.hospitals().len());
        assert!(catalog.search_hospitals("berlin").is_empty());
    }

    #[test]
    fn test_load_missing_falls_back() {
        let catalog = Catalog::load(&temp_path("missing.json")).unwrap();
        assert_eq!(catalog.hospitals().len(), Catalog::builtin().hospitals().len());
    }

    #[test]
    fn test_load_json_override() {
        let path = temp_path("catalog.json");
        let json = r##"{
            "hospitals": [{
                "id": "h1", "name": "Test Clinic", "location": "Somewhere",
                "timing": "24/7", "active_doctors": 1, "accent": "#000000"
            }],
            "doctors": [{
                "id": "d1", "name": "Dr. Test", "specialty": "General",
                "hospital_id": "h1", "experience_years": 1, "rating": 4.0,
                "qualifications": "MBBS", "consultation_fee": 100,
                "availability": [{"day": "Mon", "start": "09:00:00", "end": "12:00:00"}]
            }]
        }"##;
        std::fs::write(&path, json).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.hospitals().len(), 1);
        assert!(catalog.hospital("h1").unwrap().is_open_all_day());
        assert_eq!(catalog.doctor("d1").unwrap().experience_label(), "1 year");
        assert!(catalog.specialties().is_empty());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_rejects_dangling_hospital() {
        let path = temp_path("dangling.json");
        let json = r#"{
            "doctors": [{
                "id": "d1", "name": "Dr. Test", "specialty": "General",
                "hospital_id": "nowhere", "experience_years": 1, "rating": 4.0,
                "qualifications": "MBBS", "consultation_fee": 100
            }]
        }"#;
        std::fs::write(&path, json).unwrap();

        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, Error::HospitalNotFound(_)));

        std::fs::remove_file(&path).ok();
    }
}

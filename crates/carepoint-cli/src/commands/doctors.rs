use anyhow::Result;
use serde::Serialize;

use carepoint_core::catalog::{Catalog, Doctor};
use carepoint_core::{AppConfig, Error};

/// Doctor row with the hospital name resolved
#[derive(Serialize)]
struct DoctorSummary<'a> {
    id: &'a str,
    name: &'a str,
    specialty: &'a str,
    hospital: &'a str,
    rating: f32,
    experience_years: u32,
    consultation_fee: u32,
}

pub async fn run(
    config: &AppConfig,
    hospital: Option<&str>,
    specialty: Option<&str>,
    json: bool,
) -> Result<()> {
    let catalog = Catalog::load(&config.catalog_path())?;
    let doctors = select(&catalog, hospital, specialty)?;

    let rows: Vec<DoctorSummary> = doctors
        .iter()
        .map(|d| DoctorSummary {
            id: &d.id,
            name: &d.name,
            specialty: d.specialty.trim(),
            hospital: catalog
                .hospital(&d.hospital_id)
                .map(|h| h.name.as_str())
                .unwrap_or(d.hospital_id.as_str()),
            rating: d.rating,
            experience_years: d.experience_years,
            consultation_fee: d.consultation_fee,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No doctors match.");
        return Ok(());
    }

    println!("Doctors ({}):\n", rows.len());
    for row in &rows {
        println!("  [{}] {} - {}", row.id, row.name, row.specialty);
        println!(
            "    {}  ★ {:.1}  {} yrs  ₹{}",
            row.hospital, row.rating, row.experience_years, row.consultation_fee
        );
        println!();
    }

    Ok(())
}

fn select<'a>(
    catalog: &'a Catalog,
    hospital: Option<&str>,
    specialty: Option<&str>,
) -> Result<Vec<&'a Doctor>> {
    let mut doctors: Vec<&Doctor> = match hospital {
        Some(id) => {
            if catalog.hospital(id).is_none() {
                return Err(Error::HospitalNotFound(id.to_string()).into());
            }
            catalog.doctors_at(id)
        }
        None => catalog.doctors().iter().collect(),
    };

    if let Some(name) = specialty {
        let matching = catalog.doctors_by_specialty(name);
        doctors.retain(|d| matching.iter().any(|m| m.id == d.id));
    }
    Ok(doctors)
}

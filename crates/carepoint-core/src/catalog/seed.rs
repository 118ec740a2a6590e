//! Built-in catalog used when no catalog file is configured

use chrono::{NaiveDate, Weekday};

use super::models::{DayAvailability, Doctor, Hospital, LabRecord, LabStatus, Specialty};

pub(super) fn specialties() -> Vec<Specialty> {
    [
        (1, "Cardiology     ", "♥", 17),
        (2, "Neurology     ", "✺", 22),
        (3, "Dentist        ", "◡", 15),
        (4, "General       ", "✚", 19),
    ]
    .into_iter()
    .map(|(id, name, icon, doctors_available)| Specialty {
        id,
        name: name.to_string(),
        icon: icon.to_string(),
        doctors_available,
    })
    .collect()
}

pub(super) fn hospitals() -> Vec<Hospital> {
    vec![
        hospital("1", "Aster Mims", "NH65 Kottakkal Changuvetty", "9:00 AM - 9:00 PM", 12, "#4DABF7", &["101", "102", "201"]),
        hospital("2", "Almas Hospital", "Changuvetty Street, Kottakkal", "24/7", 15, "#FF6B6B", &["103", "104", "202"]),
        hospital("3", "HMS Hospital", "NH 65 Kottakkal Palathara", "8:00 AM - 10:00 PM", 8, "#69DB7C", &["105", "203"]),
        hospital("4", "KIMS Hospital", "Kottakkal Main Road", "9:00 AM - 9:00 PM", 12, "#B197FC", &["106"]),
        hospital("5", "Al Shifa Hospital", "College Road", "24/7", 20, "#FFD43B", &[]),
    ]
}

fn hospital(
    id: &str,
    name: &str,
    location: &str,
    timing: &str,
    active_doctors: u32,
    accent: &str,
    doctor_ids: &[&str],
) -> Hospital {
    Hospital {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        timing: timing.to_string(),
        active_doctors,
        accent: accent.to_string(),
        doctor_ids: doctor_ids.iter().map(|s| s.to_string()).collect(),
    }
}

fn weekdays(start: u32, end: u32, saturday_end: Option<u32>) -> Vec<DayAvailability> {
    let mut days: Vec<DayAvailability> = [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri]
        .into_iter()
        .map(|day| DayAvailability::new(day, start, end))
        .collect();
    if let Some(sat_end) = saturday_end {
        days.push(DayAvailability::new(Weekday::Sat, start, sat_end));
    }
    days
}

pub(super) fn doctors() -> Vec<Doctor> {
    let strs = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    vec![
        Doctor {
            id: "101".into(),
            name: "Dr. Arun Kumar".into(),
            specialty: "Cardiology".into(),
            hospital_id: "1".into(),
            experience_years: 15,
            rating: 4.8,
            qualifications: "MBBS, MD (Cardiology)".into(),
            languages: strs(&["English", "Malayalam", "Hindi"]),
            consultation_fee: 800,
            about: "Experienced cardiologist focused on interventional cardiology and long-term heart disease management.".into(),
            specializations: strs(&[
                "Interventional Cardiology",
                "Heart Disease Management",
                "Cardiac Rehabilitation",
                "Preventive Cardiology",
            ]),
            availability: weekdays(9, 17, Some(13)),
        },
        Doctor {
            id: "102".into(),
            name: "Dr. Priya Sharma".into(),
            specialty: "Pediatrics".into(),
            hospital_id: "1".into(),
            experience_years: 12,
            rating: 4.9,
            qualifications: "MBBS, MD (Pediatrics)".into(),
            languages: strs(&["English", "Malayalam", "Tamil"]),
            consultation_fee: 600,
            about: "Pediatrician caring for newborns through adolescents, with a focus on preventive care.".into(),
            specializations: strs(&["Neonatal Care", "Childhood Vaccination", "Developmental Pediatrics"]),
            availability: weekdays(10, 16, None),
        },
        Doctor {
            id: "103".into(),
            name: "Dr. Mohammed Ali".into(),
            specialty: "Orthopedics".into(),
            hospital_id: "2".into(),
            experience_years: 10,
            rating: 4.7,
            qualifications: "MBBS, MS (Orthopedics)".into(),
            languages: strs(&["English", "Malayalam", "Arabic"]),
            consultation_fee: 700,
            about: "Orthopedic surgeon treating sports injuries and joint disorders.".into(),
            specializations: strs(&["Joint Replacement", "Sports Medicine", "Trauma Surgery"]),
            availability: weekdays(9, 15, Some(12)),
        },
        Doctor {
            id: "104".into(),
            name: "Dr. Sara John".into(),
            specialty: "Neurology".into(),
            hospital_id: "2".into(),
            experience_years: 14,
            rating: 4.8,
            qualifications: "MBBS, DM (Neurology)".into(),
            languages: strs(&["English", "Malayalam"]),
            consultation_fee: 900,
            about: "Neurologist specialising in headache, epilepsy and stroke follow-up.".into(),
            specializations: strs(&["Epilepsy", "Stroke Care", "Headache Clinic"]),
            availability: weekdays(11, 18, None),
        },
        Doctor {
            id: "105".into(),
            name: "Dr. Rajesh Kumar".into(),
            specialty: "General Medicine".into(),
            hospital_id: "3".into(),
            experience_years: 8,
            rating: 4.6,
            qualifications: "MBBS, MD (General Medicine)".into(),
            languages: strs(&["English", "Malayalam", "Hindi"]),
            consultation_fee: 400,
            about: "General physician for acute illness and chronic condition reviews.".into(),
            specializations: strs(&["Diabetes Care", "Hypertension", "Infectious Disease"]),
            availability: weekdays(8, 14, Some(12)),
        },
        Doctor {
            id: "106".into(),
            name: "Dr. Lakshmi Nair".into(),
            specialty: "Gynecology".into(),
            hospital_id: "4".into(),
            experience_years: 16,
            rating: 4.9,
            qualifications: "MBBS, MD (Gynecology)".into(),
            languages: strs(&["English", "Malayalam", "Tamil"]),
            consultation_fee: 750,
            about: "Obstetrician and gynecologist with a high-risk pregnancy practice.".into(),
            specializations: strs(&["High-risk Pregnancy", "Laparoscopy", "Fertility"]),
            availability: weekdays(9, 13, Some(12)),
        },
        Doctor {
            id: "201".into(),
            name: "Dr. Tahsin Neduvanchery".into(),
            specialty: "Cardiology".into(),
            hospital_id: "1".into(),
            experience_years: 5,
            rating: 4.7,
            qualifications: "MBBS, MD, DM, MRCP, FRCP, FACC".into(),
            languages: strs(&["English", "Malayalam"]),
            consultation_fee: 1000,
            about: "Cardiologist with training in heart failure and cardiac imaging.".into(),
            specializations: strs(&["Heart Failure", "Echocardiography"]),
            availability: weekdays(14, 20, None),
        },
        Doctor {
            id: "202".into(),
            name: "Dr. Faizal M Iqbal".into(),
            specialty: " Orthopaedic Surgeon".into(),
            hospital_id: "2".into(),
            experience_years: 8,
            rating: 4.5,
            qualifications: "MBBS, MS, FRIEBERG".into(),
            languages: strs(&["English", "Malayalam", "Hindi"]),
            consultation_fee: 700,
            about: "Orthopaedic surgeon with an arthroscopy and spine practice.".into(),
            specializations: strs(&["Arthroscopy", "Spine Surgery"]),
            availability: weekdays(9, 13, Some(13)),
        },
        Doctor {
            id: "203".into(),
            name: "Dr. Chandrasekhar J".into(),
            specialty: "Neurology".into(),
            hospital_id: "3".into(),
            experience_years: 6,
            rating: 4.6,
            qualifications: "MBBS, DCH".into(),
            languages: strs(&["English", "Malayalam", "Kannada"]),
            consultation_fee: 650,
            about: "Neurologist seeing movement disorders and pediatric neurology referrals.".into(),
            specializations: strs(&["Movement Disorders", "Pediatric Neurology"]),
            availability: weekdays(10, 17, None),
        },
    ]
}

pub(super) fn lab_records() -> Vec<LabRecord> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        LabRecord {
            id: "1".into(),
            title: "Blood Test Report".into(),
            date: date(2024, 1, 15),
            doctor: "Dr. Sarah Johnson".into(),
            lab: "Central Medical Lab".into(),
            status: LabStatus::Completed,
        },
        LabRecord {
            id: "2".into(),
            title: "Lipid Profile".into(),
            date: date(2024, 2, 3),
            doctor: "Dr. Arun Kumar".into(),
            lab: "Aster Diagnostics".into(),
            status: LabStatus::Completed,
        },
        LabRecord {
            id: "3".into(),
            title: "MRI Brain".into(),
            date: date(2024, 3, 21),
            doctor: "Dr. Sara John".into(),
            lab: "Almas Imaging Centre".into(),
            status: LabStatus::Processing,
        },
        LabRecord {
            id: "4".into(),
            title: "Thyroid Panel".into(),
            date: date(2024, 4, 9),
            doctor: "Dr. Rajesh Kumar".into(),
            lab: "Central Medical Lab".into(),
            status: LabStatus::Pending,
        },
    ]
}

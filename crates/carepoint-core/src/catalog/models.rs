use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Medical specialty shown on the home screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialty {
    pub id: u32,
    pub name: String,
    /// Single-cell glyph rendered next to the name
    pub icon: String,
    pub doctors_available: u32,
}

impl Specialty {
    /// Name without the padding some data sets carry
    pub fn display_name(&self) -> &str {
        self.name.trim()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Opening hours as displayed, e.g. "24/7"
    pub timing: String,
    pub active_doctors: u32,
    /// Hex accent color for the hospital card
    pub accent: String,
    #[serde(default)]
    pub doctor_ids: Vec<String>,
}

impl Hospital {
    pub fn is_open_all_day(&self) -> bool {
        self.timing.trim() == "24/7"
    }
}

/// Consultation window on one weekday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub day: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl DayAvailability {
    pub fn new(day: Weekday, start_hour: u32, end_hour: u32) -> Self {
        Self {
            day,
            start: NaiveTime::from_hms_opt(start_hour, 0, 0).unwrap_or(NaiveTime::MIN),
            end: NaiveTime::from_hms_opt(end_hour, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }

    /// Window as displayed, e.g. "9:00 AM - 5:00 PM"
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%-I:%M %p"),
            self.end.format("%-I:%M %p")
        )
    }

    pub fn day_name(&self) -> &'static str {
        match self.day {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.start && time < self.end
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub hospital_id: String,
    pub experience_years: u32,
    pub rating: f32,
    pub qualifications: String,
    #[serde(default)]
    pub languages: Vec<String>,
    /// Fee in rupees
    pub consultation_fee: u32,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub availability: Vec<DayAvailability>,
}

impl Doctor {
    pub fn fee_label(&self) -> String {
        format!("₹{}", self.consultation_fee)
    }

    pub fn experience_label(&self) -> String {
        match self.experience_years {
            1 => "1 year".to_string(),
            n => format!("{} years", n),
        }
    }

    pub fn availability_on(&self, day: Weekday) -> Option<&DayAvailability> {
        self.availability.iter().find(|a| a.day == day)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabStatus {
    Pending,
    Processing,
    Completed,
}

impl LabStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabStatus::Pending => "Pending",
            LabStatus::Processing => "Processing",
            LabStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabRecord {
    pub id: String,
    pub title: String,
    pub date: chrono::NaiveDate,
    pub doctor: String,
    pub lab: String,
    pub status: LabStatus,
}

impl LabRecord {
    /// Date as displayed, e.g. "Jan 15, 2024"
    pub fn date_label(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_label() {
        let a = DayAvailability::new(Weekday::Sat, 9, 13);
        assert_eq!(a.label(), "9:00 AM - 1:00 PM");
        assert_eq!(a.day_name(), "Saturday");
        assert!(a.contains(NaiveTime::from_hms_opt(12, 0, 0).unwrap()));
        assert!(!a.contains(NaiveTime::from_hms_opt(13, 0, 0).unwrap()));
    }

    #[test]
    fn test_lab_date_label() {
        let record = LabRecord {
            id: "1".into(),
            title: "Blood Test Report".into(),
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            doctor: "Dr. Sarah Johnson".into(),
            lab: "Central Medical Lab".into(),
            status: LabStatus::Completed,
        };
        assert_eq!(record.date_label(), "Jan 15, 2024");
    }

    #[test]
    fn test_specialty_display_name_trims() {
        let s = Specialty {
            id: 1,
            name: "Cardiology     ".into(),
            icon: "♥".into(),
            doctors_available: 17,
        };
        assert_eq!(s.display_name(), "Cardiology");
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Upcoming,
    /// Scheduled time has been reached
    Current,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Upcoming => "Upcoming",
            AppointmentStatus::Current => "Current",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

/// A booked consultation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub doctor_id: String,
    pub hospital_id: String,
    /// Denormalized for display
    pub doctor_name: String,
    pub specialty: String,
    pub scheduled_at: DateTime<Utc>,
    pub booked_at: DateTime<Utc>,
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Status as seen at `now`
    pub fn status_at(&self, now: DateTime<Utc>) -> AppointmentStatus {
        match self.status {
            AppointmentStatus::Cancelled => AppointmentStatus::Cancelled,
            _ if now >= self.scheduled_at => AppointmentStatus::Current,
            _ => AppointmentStatus::Upcoming,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == AppointmentStatus::Cancelled
    }

    /// e.g. "Wed, 7 Sep 2024"
    pub fn date_label(&self) -> String {
        self.scheduled_at.format("%a, %-d %b %Y").to_string()
    }

    /// e.g. "10:00 - 11:00 AM" for the one-hour slot
    pub fn time_label(&self) -> String {
        let end = self.scheduled_at + chrono::Duration::hours(1);
        format!(
            "{} - {}",
            self.scheduled_at.format("%-I:%M"),
            end.format("%-I:%M %p")
        )
    }
}

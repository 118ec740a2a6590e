use chrono::{DateTime, Datelike, Duration, NaiveTime, Timelike, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use super::models::{Appointment, AppointmentStatus};
use crate::catalog::{Doctor, Hospital};
use crate::{Error, Result};

/// Length of one consultation slot
pub const SLOT_MINUTES: i64 = 60;

/// In-memory appointment store
#[derive(Debug, Clone, Default)]
pub struct AppointmentBook {
    appointments: Vec<Appointment>,
}

impl AppointmentBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Book `doctor` at `hospital` for `at`
    ///
    /// Fails when `at` is not in the future or the doctor already has an
    /// active appointment in that slot.
    pub fn book(
        &mut self,
        doctor: &Doctor,
        hospital: &Hospital,
        at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<&Appointment> {
        if at <= now {
            return Err(Error::SlotUnavailable(format!(
                "{} is in the past",
                at.format("%Y-%m-%d %H:%M")
            )));
        }
        if self.is_taken(&doctor.id, at) {
            return Err(Error::SlotUnavailable(format!(
                "{} is already booked at {}",
                doctor.name,
                at.format("%Y-%m-%d %H:%M")
            )));
        }

        let appointment = Appointment {
            id: Uuid::new_v4(),
            doctor_id: doctor.id.clone(),
            hospital_id: hospital.id.clone(),
            doctor_name: doctor.name.clone(),
            specialty: doctor.specialty.trim().to_string(),
            scheduled_at: at,
            booked_at: now,
            status: AppointmentStatus::Upcoming,
        };
        info!(
            "Booked {} with {} at {}",
            appointment.id, doctor.name, hospital.name
        );
        self.appointments.push(appointment);
        Ok(&self.appointments[self.appointments.len() - 1])
    }

    fn is_taken(&self, doctor_id: &str, at: DateTime<Utc>) -> bool {
        let slot = Duration::minutes(SLOT_MINUTES);
        self.appointments.iter().any(|a| {
            !a.is_cancelled()
                && a.doctor_id == doctor_id
                && at < a.scheduled_at + slot
                && a.scheduled_at < at + slot
        })
    }

    /// Mark an appointment cancelled
    pub fn cancel(&mut self, id: Uuid) -> Result<()> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| Error::AppointmentNotFound(id.to_string()))?;
        appointment.status = AppointmentStatus::Cancelled;
        debug!("Cancelled appointment {}", id);
        Ok(())
    }

    pub fn get(&self, id: Uuid) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Active appointments not yet past their slot, soonest first
    pub fn upcoming(&self, now: DateTime<Utc>) -> Vec<&Appointment> {
        let slot = Duration::minutes(SLOT_MINUTES);
        let mut list: Vec<&Appointment> = self
            .appointments
            .iter()
            .filter(|a| !a.is_cancelled() && a.scheduled_at + slot > now)
            .collect();
        list.sort_by_key(|a| a.scheduled_at);
        list
    }

    /// Every appointment in booking order
    pub fn all(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Propose up to `count` free hourly slots, starting the day after `now`
    ///
    /// Only hours within the doctor's availability window are offered. The
    /// search stops after two weeks.
    pub fn next_slots(&self, doctor: &Doctor, now: DateTime<Utc>, count: usize) -> Vec<DateTime<Utc>> {
        let mut slots = Vec::new();
        if count == 0 {
            return slots;
        }

        for offset in 1..=14 {
            let date = now.date_naive() + Duration::days(offset);
            let Some(window) = doctor.availability_on(date.weekday()) else {
                continue;
            };

            let mut hour = window.start.hour();
            while let Some(start) = NaiveTime::from_hms_opt(hour, 0, 0) {
                let end = start + Duration::minutes(SLOT_MINUTES);
                if end > window.end || end <= start {
                    break;
                }
                let at = date.and_time(start).and_utc();
                if !self.is_taken(&doctor.id, at) {
                    slots.push(at);
                    if slots.len() == count {
                        return slots;
                    }
                }
                hour += 1;
            }
        }
        slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use chrono::TimeZone;

    fn fixture() -> (Catalog, DateTime<Utc>) {
        // A Sunday morning
        let now = Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap();
        (Catalog::builtin(), now)
    }

    fn arun(catalog: &Catalog) -> (&Doctor, &Hospital) {
        let doctor = catalog.doctor("101").unwrap();
        let hospital = catalog.hospital(&doctor.hospital_id).unwrap();
        (doctor, hospital)
    }

    #[test]
    fn test_book_and_get() {
        let (catalog, now) = fixture();
        let (doctor, hospital) = arun(&catalog);
        let mut book = AppointmentBook::new();

        let at = now + Duration::days(1) + Duration::hours(2);
        let id = book.book(doctor, hospital, at, now).unwrap().id;

        let appt = book.get(id).unwrap();
        assert_eq!(appt.doctor_name, "Dr. Arun Kumar");
        assert_eq!(appt.status_at(now), AppointmentStatus::Upcoming);
        assert_eq!(appt.status_at(at), AppointmentStatus::Current);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_rejects_past_slot() {
        let (catalog, now) = fixture();
        let (doctor, hospital) = arun(&catalog);
        let mut book = AppointmentBook::new();

        let err = book.book(doctor, hospital, now - Duration::hours(1), now).unwrap_err();
        assert!(matches!(err, Error::SlotUnavailable(_)));
        assert!(book.is_empty());
    }

    #[test]
    fn test_rejects_double_booking() {
        let (catalog, now) = fixture();
        let (doctor, hospital) = arun(&catalog);
        let mut book = AppointmentBook::new();
        let at = now + Duration::days(1);

        book.book(doctor, hospital, at, now).unwrap();
        let err = book
            .book(doctor, hospital, at + Duration::minutes(30), now)
            .unwrap_err();
        assert!(matches!(err, Error::SlotUnavailable(_)));

        // Another doctor in the same slot is fine
        let other = catalog.doctor("102").unwrap();
        assert!(book.book(other, hospital, at, now).is_ok());
    }

    #[test]
    fn test_cancel_frees_slot() {
        let (catalog, now) = fixture();
        let (doctor, hospital) = arun(&catalog);
        let mut book = AppointmentBook::new();
        let at = now + Duration::days(2);

        let id = book.book(doctor, hospital, at, now).unwrap().id;
        book.cancel(id).unwrap();
        assert!(book.get(id).unwrap().is_cancelled());
        assert_eq!(book.get(id).unwrap().status_at(at), AppointmentStatus::Cancelled);
        assert!(book.upcoming(now).is_empty());
        assert!(book.book(doctor, hospital, at, now).is_ok());
    }

    #[test]
    fn test_cancel_unknown() {
        let mut book = AppointmentBook::new();
        let err = book.cancel(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, Error::AppointmentNotFound(_)));
    }

    #[test]
    fn test_upcoming_sorted() {
        let (catalog, now) = fixture();
        let (doctor, hospital) = arun(&catalog);
        let mut book = AppointmentBook::new();

        let later = now + Duration::days(3);
        let sooner = now + Duration::days(1);
        book.book(doctor, hospital, later, now).unwrap();
        book.book(doctor, hospital, sooner, now).unwrap();

        let upcoming = book.upcoming(now);
        assert_eq!(upcoming.len(), 2);
        assert_eq!(upcoming[0].scheduled_at, sooner);
        assert_eq!(book.all()[0].scheduled_at, later);

        // Past appointments drop off
        assert_eq!(book.upcoming(later + Duration::hours(2)).len(), 0);
    }

    #[test]
    fn test_next_slots_follow_availability() {
        let (catalog, now) = fixture();
        let (doctor, _) = arun(&catalog);
        let book = AppointmentBook::new();

        // Monday 9:00 - 17:00 gives eight one-hour slots
        let slots = book.next_slots(doctor, now, 10);
        assert_eq!(slots.len(), 10);
        assert_eq!(slots[0], Utc.with_ymd_and_hms(2024, 9, 2, 9, 0, 0).unwrap());
        assert_eq!(slots[7], Utc.with_ymd_and_hms(2024, 9, 2, 16, 0, 0).unwrap());
        assert_eq!(slots[8], Utc.with_ymd_and_hms(2024, 9, 3, 9, 0, 0).unwrap());
    }

    #[test]
    fn test_next_slots_skip_booked() {
        let (catalog, now) = fixture();
        let (doctor, hospital) = arun(&catalog);
        let mut book = AppointmentBook::new();

        let first = Utc.with_ymd_and_hms(2024, 9, 2, 9, 0, 0).unwrap();
        book.book(doctor, hospital, first, now).unwrap();

        let slots = book.next_slots(doctor, now, 1);
        assert_eq!(slots, vec![first + Duration::hours(1)]);
        assert!(book.next_slots(doctor, now, 0).is_empty());
    }

    #[test]
    fn test_labels() {
        let (catalog, now) = fixture();
        let (doctor, hospital) = arun(&catalog);
        let mut book = AppointmentBook::new();
        let at = Utc.with_ymd_and_hms(2024, 9, 4, 10, 0, 0).unwrap();
        let appt = book.book(doctor, hospital, at, now).unwrap();
        assert_eq!(appt.date_label(), "Wed, 4 Sep 2024");
        assert_eq!(appt.time_label(), "10:00 - 11:00 AM");
    }
}

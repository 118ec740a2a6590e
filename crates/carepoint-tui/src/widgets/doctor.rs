use chrono::Utc;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::not_found;
use crate::app::App;
use crate::content::{ScreenContent, Selectable};

pub struct DoctorScreen;

impl DoctorScreen {
    /// Slots offered for booking
    const SLOTS: usize = 6;

    pub fn build(app: &App, id: &str, content: &mut ScreenContent) {
        let theme = &app.theme;
        let Some(doctor) = app.catalog.doctor(id) else {
            not_found(app, "Doctor", id, content);
            return;
        };
        let muted = Style::default().fg(theme.muted);
        let label = |text: &str| Span::styled(format!("  {:<16}", text), muted);

        content.blank();
        content.line(Line::from(vec![
            Span::styled(
                format!("  {}", doctor.name),
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ★ {:.1}", doctor.rating),
                Style::default().fg(theme.highlight),
            ),
        ]));
        content.line(Line::styled(
            format!("  {}", doctor.specialty.trim()),
            Style::default().fg(theme.accent),
        ));
        content.blank();

        let hospital = app
            .catalog
            .hospital(&doctor.hospital_id)
            .map(|h| h.name.clone())
            .unwrap_or_else(|| doctor.hospital_id.clone());
        let languages = doctor.languages.join(", ");
        let rows = [
            ("Hospital", hospital),
            ("Experience", doctor.experience_label()),
            ("Qualifications", doctor.qualifications.clone()),
            ("Languages", languages),
            ("Consultation", doctor.fee_label()),
        ];
        for (name, value) in rows {
            content.line(Line::from(vec![label(name), Span::raw(value)]));
        }

        if !doctor.about.is_empty() {
            content.blank();
            content.heading("  About", Style::default().fg(theme.fg1));
            content.paragraph(&doctor.about, 2, Style::default().fg(theme.fg0));
        }

        if !doctor.specializations.is_empty() {
            content.blank();
            content.heading("  Specializations", Style::default().fg(theme.fg1));
            for specialization in &doctor.specializations {
                content.line(Line::from(format!("  • {}", specialization)));
            }
        }

        content.blank();
        content.heading("  Availability", Style::default().fg(theme.fg1));
        if doctor.availability.is_empty() {
            content.line(Line::styled("  Not taking appointments", muted));
        }
        for window in &doctor.availability {
            content.line(Line::from(vec![label(window.day_name()), Span::raw(window.label())]));
        }

        content.blank();
        content.heading("  Book a slot", Style::default().fg(theme.fg1));
        let slots = app.book.next_slots(doctor, Utc::now(), Self::SLOTS);
        if slots.is_empty() {
            content.line(Line::styled("  No free slots in the next two weeks", muted));
        }
        for at in slots {
            content.item(
                vec![Line::from(vec![
                    Span::styled(at.format("%a, %-d %b").to_string(), Style::default().fg(theme.fg0)),
                    Span::styled(format!("  {}", at.format("%-I:%M %p")), muted),
                ])],
                Selectable::Slot(at),
            );
        }
        content.blank();
        content.line(Line::styled("  ⏎ or b to book the selected slot", muted));
    }
}

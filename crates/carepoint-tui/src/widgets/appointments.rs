use carepoint_core::appointments::{Appointment, AppointmentStatus};
use chrono::Utc;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use uuid::Uuid;

use super::not_found;
use crate::app::App;
use crate::content::{ScreenContent, Selectable};
use crate::theme::Theme;

fn status_style(theme: &Theme, status: AppointmentStatus) -> Style {
    match status {
        AppointmentStatus::Upcoming => Style::default().fg(theme.info),
        AppointmentStatus::Current => Style::default().fg(theme.success),
        AppointmentStatus::Cancelled => Style::default().fg(theme.error),
    }
}

fn appointment_card(theme: &Theme, appointment: &Appointment) -> Vec<Line<'static>> {
    let status = appointment.status_at(Utc::now());
    vec![
        Line::from(vec![
            Span::styled("● ", status_style(theme, status)),
            Span::styled(
                appointment.doctor_name.clone(),
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", appointment.specialty),
                Style::default().fg(theme.muted),
            ),
        ]),
        Line::styled(
            format!("  {} · {}", appointment.date_label(), appointment.time_label()),
            Style::default().fg(theme.fg1),
        ),
    ]
}

/// Booked appointments, soonest first, then past and cancelled ones
pub struct AppointmentsScreen;

impl AppointmentsScreen {
    pub fn build(app: &App, content: &mut ScreenContent) {
        let theme = &app.theme;
        let now = Utc::now();
        let upcoming = app.book.upcoming(now);

        content.blank();
        content.heading("  Upcoming", Style::default().fg(theme.fg1));
        if upcoming.is_empty() {
            content.line(Line::styled(
                "  No appointments yet. Open a doctor and press b to book.",
                Style::default().fg(theme.muted),
            ));
        }
        for appointment in &upcoming {
            content.item(appointment_card(theme, appointment), Selectable::Appointment(appointment.id));
            content.blank();
        }

        let mut history: Vec<&Appointment> = app
            .book
            .all()
            .iter()
            .filter(|a| !upcoming.iter().any(|u| u.id == a.id))
            .collect();
        if history.is_empty() {
            return;
        }
        history.sort_by(|a, b| b.scheduled_at.cmp(&a.scheduled_at));

        content.blank();
        content.heading("  Past & cancelled", Style::default().fg(theme.fg1));
        for appointment in history {
            content.item(appointment_card(theme, appointment), Selectable::Appointment(appointment.id));
        }
    }
}

pub struct AppointmentDetailScreen;

impl AppointmentDetailScreen {
    pub fn build(app: &App, id: &str, content: &mut ScreenContent) {
        let theme = &app.theme;
        let Some(appointment) = Uuid::parse_str(id).ok().and_then(|id| app.book.get(id)) else {
            not_found(app, "Appointment", id, content);
            return;
        };
        let muted = Style::default().fg(theme.muted);
        let status = appointment.status_at(Utc::now());

        content.blank();
        for line in appointment_card(theme, appointment) {
            let style = line.style;
            let mut spans = vec![Span::raw("  ")];
            spans.extend(line.spans);
            content.line(Line::from(spans).style(style));
        }
        content.blank();

        let hospital = app
            .catalog
            .hospital(&appointment.hospital_id)
            .map(|h| (h.name.clone(), h.location.clone()));
        if let Some((name, location)) = hospital {
            content.line(Line::from(vec![Span::styled("  Hospital     ", muted), Span::raw(name)]));
            content.line(Line::from(vec![Span::styled("  Location     ", muted), Span::raw(location)]));
        }
        content.line(Line::from(vec![
            Span::styled("  Status       ", muted),
            Span::styled(status.as_str(), status_style(theme, status)),
        ]));
        content.line(Line::from(vec![
            Span::styled("  Booked       ", muted),
            Span::raw(appointment.booked_at.format("%-d %b %Y, %-I:%M %p").to_string()),
        ]));
        content.line(Line::from(vec![
            Span::styled("  Reference    ", muted),
            Span::raw(appointment.id.to_string()),
        ]));

        content.blank();
        content.item(
            vec![Line::styled("View doctor →", Style::default().fg(theme.info))],
            Selectable::Open(carepoint_core::navigation::Route::Doctor(appointment.doctor_id.clone())),
        );
        if !appointment.is_cancelled() {
            content.blank();
            content.line(Line::styled("  x to cancel this appointment", muted));
        }
    }
}

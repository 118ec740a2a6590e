use carepoint_core::navigation::Route;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::App;
use crate::content::{truncate_str, ScreenContent, Selectable};
use crate::themes::parse_hex_color;

pub struct HomeScreen;

impl HomeScreen {
    const POPULAR_DOCTORS: usize = 4;
    const HOSPITALS: usize = 3;

    pub fn build(app: &App, content: &mut ScreenContent) {
        let theme = &app.theme;
        let muted = Style::default().fg(theme.muted);
        let width = content.width() as usize;

        content.blank();
        content.line(Line::from(vec![
            Span::raw("  Hello, "),
            Span::styled(
                app.profile.first_name().to_string(),
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
        ]));
        content.line(Line::styled("  How are you feeling today?", muted));

        if let Some(next) = app.book.upcoming(chrono::Utc::now()).first() {
            content.blank();
            content.heading("  Next appointment", Style::default().fg(theme.fg1));
            content.item(
                vec![Line::from(vec![
                    Span::styled(next.doctor_name.clone(), Style::default().fg(theme.fg0)),
                    Span::styled(
                        format!("  {} · {}", next.date_label(), next.time_label()),
                        muted,
                    ),
                ])],
                Selectable::Appointment(next.id),
            );
        }

        content.blank();
        content.heading("  Specialties", Style::default().fg(theme.fg1));
        for specialty in app.catalog.specialties() {
            content.line(Line::from(vec![
                Span::styled(
                    format!("    {} ", specialty.icon),
                    Style::default().fg(theme.accent),
                ),
                Span::styled(
                    format!("{:<14}", specialty.display_name()),
                    Style::default().fg(theme.fg0),
                ),
                Span::styled(format!("{} Doctors", specialty.doctors_available), muted),
            ]));
        }

        content.blank();
        content.heading("  Popular Doctors", Style::default().fg(theme.fg1));
        for doctor in app.catalog.popular_doctors(Self::POPULAR_DOCTORS) {
            content.item(
                vec![
                    Line::from(vec![
                        Span::styled(
                            truncate_str(&doctor.name, width.saturating_sub(12)),
                            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(format!("  ★ {:.1}", doctor.rating), Style::default().fg(theme.highlight)),
                    ]),
                    Line::styled(
                        format!("{} · {}", doctor.specialty.trim(), doctor.qualifications),
                        muted,
                    ),
                ],
                Selectable::Open(Route::Doctor(doctor.id.clone())),
            );
        }

        content.blank();
        content.heading("  Hospitals", Style::default().fg(theme.fg1));
        for hospital in app.catalog.hospitals().iter().take(Self::HOSPITALS) {
            let accent = parse_hex_color(&hospital.accent).unwrap_or(theme.accent);
            content.item(
                vec![
                    Line::styled(hospital.name.clone(), Style::default().fg(accent).add_modifier(Modifier::BOLD)),
                    Line::styled(hospital.location.clone(), muted),
                ],
                Selectable::Open(Route::Hospital(hospital.id.clone())),
            );
        }
        content.item(
            vec![Line::styled("See all hospitals →", Style::default().fg(theme.info))],
            Selectable::Open(Route::Hospitals),
        );
        content.blank();
    }
}

use carepoint_core::catalog::{Doctor, Hospital};
use carepoint_core::navigation::Route;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::not_found;
use crate::app::App;
use crate::content::{ScreenContent, Selectable};
use crate::theme::Theme;
use crate::themes::parse_hex_color;

pub struct HospitalsScreen;

impl HospitalsScreen {
    pub fn build(app: &App, content: &mut ScreenContent) {
        let theme = &app.theme;
        content.blank();
        content.heading(
            format!("  Hospitals ({})", app.catalog.hospitals().len()),
            Style::default().fg(theme.fg1),
        );
        content.blank();

        for hospital in app.catalog.hospitals() {
            content.item(hospital_card(theme, hospital), Selectable::Open(Route::Hospital(hospital.id.clone())));
            content.blank();
        }
    }
}

fn hospital_card(theme: &Theme, hospital: &Hospital) -> Vec<Line<'static>> {
    let accent = parse_hex_color(&hospital.accent).unwrap_or(theme.accent);
    let timing_style = if hospital.is_open_all_day() {
        Style::default().fg(theme.success)
    } else {
        Style::default().fg(theme.fg1)
    };
    vec![
        Line::styled(
            hospital.name.clone(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Line::styled(hospital.location.clone(), Style::default().fg(theme.muted)),
        Line::from(vec![
            Span::styled(format!("◷ {}", hospital.timing), timing_style),
            Span::styled(
                format!("   {} active doctors", hospital.active_doctors),
                Style::default().fg(theme.muted),
            ),
        ]),
    ]
}

pub(super) fn doctor_card(theme: &Theme, doctor: &Doctor) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                doctor.name.clone(),
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ★ {:.1}", doctor.rating),
                Style::default().fg(theme.highlight),
            ),
        ]),
        Line::styled(
            format!(
                "{} · {} · {}",
                doctor.specialty.trim(),
                doctor.experience_label(),
                doctor.fee_label()
            ),
            Style::default().fg(theme.muted),
        ),
    ]
}

/// Hospital details, optionally followed by the full doctor list
pub struct HospitalDetailScreen;

impl HospitalDetailScreen {
    /// Doctors listed before the "all doctors" link
    const PREVIEW_DOCTORS: usize = 2;

    pub fn build(app: &App, id: &str, all_doctors: bool, content: &mut ScreenContent) {
        let theme = &app.theme;
        let Some(hospital) = app.catalog.hospital(id) else {
            not_found(app, "Hospital", id, content);
            return;
        };

        content.blank();
        for line in hospital_card(theme, hospital) {
            let style = line.style;
            let mut spans = vec![Span::raw("  ")];
            spans.extend(line.spans);
            content.line(Line::from(spans).style(style));
        }
        content.blank();

        let doctors = app.catalog.doctors_at(&hospital.id);
        content.heading(
            format!("  Doctors ({})", doctors.len()),
            Style::default().fg(theme.fg1),
        );
        if doctors.is_empty() {
            content.line(Line::styled(
                "  No doctors listed yet",
                Style::default().fg(theme.muted),
            ));
            return;
        }

        let shown = if all_doctors {
            doctors.len()
        } else {
            Self::PREVIEW_DOCTORS
        };
        for doctor in doctors.iter().take(shown) {
            content.item(doctor_card(theme, doctor), Selectable::Open(Route::Doctor(doctor.id.clone())));
        }
        if !all_doctors && doctors.len() > shown {
            content.item(
                vec![Line::styled(
                    format!("All {} doctors →", doctors.len()),
                    Style::default().fg(theme.info),
                )],
                Selectable::Open(Route::HospitalDoctors(hospital.id.clone())),
            );
        }
    }
}

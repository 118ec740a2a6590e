use carepoint_core::navigation::Route;
use carepoint_core::profile::ProfileField;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::App;
use crate::content::{ScreenContent, Selectable};

pub struct ProfileScreen;

impl ProfileScreen {
    pub fn build(app: &App, content: &mut ScreenContent) {
        let theme = &app.theme;
        let profile = &app.profile;
        let muted = Style::default().fg(theme.muted);

        content.blank();
        let name = if profile.name.is_empty() { "Guest" } else { profile.name.as_str() };
        content.line(Line::styled(
            format!("  {}", name),
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        ));
        if !profile.email.is_empty() {
            content.line(Line::styled(format!("  {}", profile.email), muted));
        }
        content.blank();

        content.heading("  Personal information", Style::default().fg(theme.fg1));
        for field in ProfileField::ALL {
            let value = field.get(profile);
            let value = if value.is_empty() {
                Span::styled("Not set", muted)
            } else {
                Span::raw(value.to_string())
            };
            content.line(Line::from(vec![
                Span::styled(format!("  {:<14}", field.label()), muted),
                value,
            ]));
        }

        content.blank();
        content.item(
            vec![Line::styled("Edit profile", Style::default().fg(theme.info))],
            Selectable::Open(Route::EditProfile),
        );
        content.item(
            vec![Line::styled("My appointments", Style::default().fg(theme.info))],
            Selectable::Open(Route::Appointments),
        );
        content.item(
            vec![Line::styled("Lab records", Style::default().fg(theme.info))],
            Selectable::Open(Route::LabRecords),
        );

        if !profile.is_complete() {
            content.blank();
            content.line(Line::styled(
                "  Complete your profile to speed up bookings",
                Style::default().fg(theme.warning),
            ));
        }
    }
}

/// One selectable row per field; Enter or e opens the editor
pub struct EditProfileScreen;

impl EditProfileScreen {
    pub fn build(app: &App, content: &mut ScreenContent) {
        let theme = &app.theme;
        let muted = Style::default().fg(theme.muted);
        let errors = app.profile.errors();

        content.blank();
        content.heading("  Edit profile", Style::default().fg(theme.fg1));
        content.line(Line::styled("  * required", muted));
        content.blank();

        for field in ProfileField::ALL {
            let required = if field.is_required() { "*" } else { " " };
            let value = field.get(&app.profile);
            let mut lines = vec![Line::from(vec![
                Span::styled(format!("{:<14}{} ", field.label(), required), muted),
                Span::styled(
                    if value.is_empty() { "—".to_string() } else { value.to_string() },
                    Style::default().fg(theme.fg0),
                ),
            ])];
            if let Some((_, message)) = errors.iter().find(|(f, _)| *f == field) {
                lines.push(Line::styled(message.clone(), Style::default().fg(theme.error)));
            }
            content.item(lines, Selectable::Field(field));
        }
    }
}

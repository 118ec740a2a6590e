use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, Mode};
use crate::content::truncate_str;

pub struct PopupWidget;

impl PopupWidget {
    /// Render whatever popup the current mode calls for
    pub fn render(frame: &mut Frame, app: &App) {
        match &app.mode {
            Mode::Normal => {}
            Mode::Help => Self::render_help(frame, app),
            Mode::ConfirmBooking { doctor_id, at } => {
                let doctor = app
                    .catalog
                    .doctor(doctor_id)
                    .map(|d| d.name.as_str())
                    .unwrap_or(doctor_id.as_str());
                let message = format!(
                    "Book {} on {}?",
                    truncate_str(doctor, 24),
                    at.format("%a %-d %b, %-I:%M %p")
                );
                Self::render_confirm(frame, app, "Confirm Booking", &message);
            }
            Mode::ConfirmCancel(id) => {
                let message = match app.book.get(*id) {
                    Some(a) => format!("Cancel {} on {}?", truncate_str(&a.doctor_name, 24), a.date_label()),
                    None => "Cancel this appointment?".to_string(),
                };
                Self::render_confirm(frame, app, "Cancel Appointment", &message);
            }
            Mode::EditField { field, buffer } => {
                Self::render_edit(frame, app, field.label(), buffer, field.choices().is_some())
            }
        }
    }

    /// Render a confirmation popup dialog
    pub fn render_confirm(frame: &mut Frame, app: &App, title: &str, message: &str) {
        let theme = &app.theme;
        let area = frame.area();

        let popup_width = 56u16.min(area.width.saturating_sub(4));
        let popup_height = 7u16.min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(format!(" {} ", title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg2));
        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let [message_area, _, hint_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner_area);

        let message_paragraph = Paragraph::new(Line::styled(
            message.to_string(),
            Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(message_paragraph, message_area);

        let hint = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(theme.muted)),
            Span::styled("y", Style::default().fg(theme.success).add_modifier(Modifier::BOLD)),
            Span::styled("]es  [", Style::default().fg(theme.muted)),
            Span::styled("n", Style::default().fg(theme.error).add_modifier(Modifier::BOLD)),
            Span::styled("]o", Style::default().fg(theme.muted)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(hint, hint_area);
    }

    /// Single-line field editor
    pub fn render_edit(frame: &mut Frame, app: &App, label: &str, buffer: &str, is_picker: bool) {
        let theme = &app.theme;
        let area = frame.area();
        let popup_area = centered_rect(56u16.min(area.width.saturating_sub(4)), 6u16.min(area.height), area);

        frame.render_widget(Clear, popup_area);
        let block = Block::default()
            .title(format!(" {} ", label))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg2));
        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let [input_area, _, hint_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner_area);

        let visible = inner_area.width.saturating_sub(2) as usize;
        let input = Paragraph::new(Line::from(vec![
            Span::styled(
                tail(buffer, visible),
                Style::default().fg(theme.fg0),
            ),
            Span::styled("▏", Style::default().fg(theme.accent)),
        ]));
        frame.render_widget(input, input_area);

        let hint = if is_picker {
            "Tab/↑↓: choose  ⏎: save  Esc: cancel"
        } else {
            "⏎: save  Esc: cancel"
        };
        frame.render_widget(
            Paragraph::new(Line::styled(hint, Style::default().fg(theme.muted))),
            hint_area,
        );
    }

    pub fn render_help(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let config = &app.config.keymap;
        let rows = [
            (format!("{} / {}", config.move_down, config.move_up), "Move selection"),
            (format!("{} / {}", config.scroll_half_down, config.scroll_half_up), "Half page down / up"),
            (format!("{} / {}", config.scroll_page_down, config.scroll_page_up), "Page down / up"),
            (format!("{} / {}", config.jump_to_top, config.jump_to_bottom), "Top / bottom"),
            (config.select.clone(), "Open selected"),
            (config.back.clone(), "Back"),
            (config.book.clone(), "Book appointment"),
            (config.cancel_appointment.clone(), "Cancel appointment"),
            (config.edit_field.clone(), "Edit profile field"),
            ("1-5".to_string(), "Appointments, Hospitals, Home, Lab Records, Profile"),
            (config.quit.clone(), "Quit"),
        ];

        let area = frame.area();
        let popup_area = centered_rect(
            66u16.min(area.width.saturating_sub(2)),
            (rows.len() as u16 + 4).min(area.height),
            area,
        );
        frame.render_widget(Clear, popup_area);

        let lines: Vec<Line> = rows
            .into_iter()
            .map(|(keys, description)| {
                Line::from(vec![
                    Span::styled(format!(" {:<14}", keys), Style::default().fg(theme.accent)),
                    Span::styled(description, Style::default().fg(theme.fg0)),
                ])
            })
            .collect();

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .title_bottom(Line::styled(" any key to close ", Style::default().fg(theme.muted)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg2));
        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Last `max` characters, so the cursor end stays visible
fn tail(s: &str, max: usize) -> String {
    let count = s.chars().count();
    s.chars().skip(count.saturating_sub(max)).collect()
}

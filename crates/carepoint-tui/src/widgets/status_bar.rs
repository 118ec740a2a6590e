use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

/// Single header row: app name, screen title, status or key hints
pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = match &app.mode {
            Mode::Normal => app.current_route().title(),
            Mode::Help => "Help",
            Mode::ConfirmBooking { .. } => "Confirm booking",
            Mode::ConfirmCancel(_) => "Cancel appointment",
            Mode::EditField { field, .. } => field.label(),
        };

        let left = format!(" CarePoint │ {} ", mode_str);
        let (right, right_style) = match &app.status_message {
            Some(msg) => (format!(" {} ", msg), Style::default().fg(theme.warning)),
            None => (
                " j/k:move ⏎:open ⌫:back 1-5:tabs ?:help ".to_string(),
                Style::default().fg(theme.muted),
            ),
        };

        let padding_len = (area.width as usize).saturating_sub(left.width() + right.width());

        let line = Line::from(vec![
            Span::styled(
                left,
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(padding_len)),
            Span::styled(right, right_style),
        ]);

        let paragraph = Paragraph::new(line).style(Style::default().bg(theme.bg1));
        frame.render_widget(paragraph, area);
    }
}

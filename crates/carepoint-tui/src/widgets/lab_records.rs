use carepoint_core::catalog::LabStatus;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::app::App;
use crate::content::ScreenContent;

pub struct LabRecordsScreen;

impl LabRecordsScreen {
    pub fn build(app: &App, content: &mut ScreenContent) {
        let theme = &app.theme;
        let records = app.catalog.lab_records();

        content.blank();
        content.heading(
            format!("  Lab Records ({})", records.len()),
            Style::default().fg(theme.fg1),
        );
        content.blank();

        for record in records {
            let status_style = match record.status {
                LabStatus::Completed => Style::default().fg(theme.success),
                LabStatus::Processing => Style::default().fg(theme.warning),
                LabStatus::Pending => Style::default().fg(theme.muted),
            };
            content.line(Line::from(vec![
                Span::styled(
                    format!("  {}", record.title),
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  [{}]", record.status.as_str()), status_style),
            ]));
            content.line(Line::styled(
                format!("  {} · {} · {}", record.date_label(), record.doctor, record.lab),
                Style::default().fg(theme.muted),
            ));
            content.blank();
        }
    }
}

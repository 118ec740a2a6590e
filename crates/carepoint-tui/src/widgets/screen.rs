use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::app::App;
use crate::content::ScreenContent;

/// Scrolled view over the current screen's content
pub struct ScreenWidget;

impl ScreenWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, content: &ScreenContent) {
        let scroll = app.scroll_offset();
        let paragraph = Paragraph::new(content.lines().to_vec())
            .style(Style::default().fg(app.theme.fg0).bg(app.theme.bg0))
            .scroll((scroll, 0));
        frame.render_widget(paragraph, area);

        let max_scroll = content.height().saturating_sub(area.height);
        if max_scroll > 0 {
            let mut state = ScrollbarState::new(max_scroll as usize).position(scroll as usize);
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .style(Style::default().fg(app.theme.muted));
            frame.render_stateful_widget(scrollbar, area, &mut state);
        }
    }
}

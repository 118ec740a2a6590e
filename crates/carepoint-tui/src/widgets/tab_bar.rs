//! Bottom tab bar
//!
//! Three rows: a top rule, the icons and the labels. The visibility
//! controller's offset decides how many of them are on screen (the app
//! shrinks the bar area from the bottom) and its opacity fades every color
//! toward the content background.

use carepoint_core::navigation::TabTarget;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::theme::{blend, Theme};

pub struct TabBarWidget;

/// Bar colors at a given opacity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabBarPalette {
    pub bg: Color,
    pub rule: Color,
    pub active: Color,
    pub inactive: Color,
    /// Center Home button
    pub center_bg: Color,
    pub center_fg: Color,
}

impl TabBarPalette {
    pub fn new(theme: &Theme, opacity: f64) -> Self {
        let base = theme.bg0;
        Self {
            bg: blend(theme.bg1, base, opacity),
            rule: blend(theme.muted, base, opacity),
            active: blend(theme.accent, base, opacity),
            inactive: blend(theme.muted, base, opacity),
            center_bg: blend(theme.accent, base, opacity),
            center_fg: blend(theme.bg0, base, opacity),
        }
    }
}

impl TabBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let snapshot = app.tab_bar.snapshot();
        let palette = TabBarPalette::new(&app.theme, snapshot.opacity);
        let path = app.router.current_path();

        let mut icons = Vec::new();
        let mut labels = Vec::new();
        for (index, target) in TabTarget::ALL.into_iter().enumerate() {
            let (_, width) = segment(area.width, index);
            let active = target.is_active(&path);
            let style = if active {
                Style::default().fg(palette.active).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.inactive)
            };

            let icon = if target == TabTarget::Home {
                let button = format!(" {} ", target.icon());
                let (left, right) = padding(&button, width);
                vec![
                    Span::raw(" ".repeat(left)),
                    Span::styled(
                        button,
                        Style::default()
                            .fg(palette.center_fg)
                            .bg(palette.center_bg)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" ".repeat(right)),
                ]
            } else {
                vec![Span::styled(centered(target.icon(), width), style)]
            };
            icons.extend(icon);
            labels.push(Span::styled(centered(target.label(), width), style));
        }

        let rule = Line::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(palette.rule),
        );
        let rows: Vec<Line> = [rule, Line::from(icons), Line::from(labels)]
            .into_iter()
            .take(area.height as usize)
            .collect();

        let paragraph = Paragraph::new(rows).style(Style::default().bg(palette.bg));
        frame.render_widget(paragraph, area);
    }
}

/// Start column and width of target `index` in a bar `width` wide
fn segment(width: u16, index: usize) -> (u16, u16) {
    let count = TabTarget::ALL.len() as u32;
    let start = (index as u32 * width as u32 / count) as u16;
    let end = ((index as u32 + 1) * width as u32 / count) as u16;
    (start, end - start)
}

/// Tab target under `column` in the bar `area`
pub fn target_at(area: Rect, column: u16) -> Option<TabTarget> {
    if area.width == 0 || column < area.x || column >= area.x + area.width {
        return None;
    }
    let offset = column - area.x;
    TabTarget::ALL
        .into_iter()
        .enumerate()
        .find(|(index, _)| {
            let (start, width) = segment(area.width, *index);
            offset >= start && offset < start + width
        })
        .map(|(_, target)| target)
}

fn padding(text: &str, width: u16) -> (usize, usize) {
    let free = (width as usize).saturating_sub(text.width());
    (free / 2, free - free / 2)
}

fn centered(text: &str, width: u16) -> String {
    let text = crate::content::truncate_str(text, width as usize);
    let (left, right) = padding(&text, width);
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use carepoint_core::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_segments_cover_width() {
        let total: u16 = (0..5).map(|i| segment(52, i).1).sum();
        assert_eq!(total, 52);
        assert_eq!(segment(50, 0), (0, 10));
        assert_eq!(segment(50, 4), (40, 10));
    }

    #[test]
    fn test_target_at() {
        let area = Rect::new(2, 20, 50, 3);
        assert_eq!(target_at(area, 2), Some(TabTarget::Appointments));
        assert_eq!(target_at(area, 27), Some(TabTarget::Home));
        assert_eq!(target_at(area, 51), Some(TabTarget::Profile));
        assert_eq!(target_at(area, 1), None);
        assert_eq!(target_at(area, 52), None);
        assert_eq!(target_at(Rect::new(0, 0, 0, 3), 0), None);
    }

    #[test]
    fn test_palette_fades_to_background() {
        let theme = Theme::default();
        let shown = TabBarPalette::new(&theme, 1.0);
        assert_eq!(shown.bg, theme.bg1);
        assert_eq!(shown.active, theme.accent);

        let hidden = TabBarPalette::new(&theme, 0.0);
        assert_eq!(hidden.bg, theme.bg0);
        assert_eq!(hidden.active, theme.bg0);
        assert_eq!(hidden.inactive, theme.bg0);
    }

    #[test]
    fn test_renders_labels() {
        let app = App::new(AppConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(70, 3)).unwrap();
        terminal
            .draw(|frame| TabBarWidget::render(frame, frame.area(), &app))
            .unwrap();

        assert!(row_text(&terminal, 0).starts_with("───"));
        let labels = row_text(&terminal, 2);
        for target in TabTarget::ALL {
            assert!(labels.contains(target.label()), "missing {}", target.label());
        }
    }

    #[test]
    fn test_shifted_bar_shows_top_rows_only() {
        let app = App::new(AppConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(70, 3)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                TabBarWidget::render(frame, Rect::new(0, 0, area.width, 1), &app)
            })
            .unwrap();

        assert!(row_text(&terminal, 0).starts_with("───"));
        assert!(!row_text(&terminal, 2).contains("Home"));
    }
}

pub mod app;
pub mod content;
pub mod event;
pub mod input;
pub mod keymap;
pub mod scroll;
pub mod theme;
pub mod themes;
pub mod widgets;

pub use app::{App, FrameLayout, Mode};
pub use theme::Theme;

use std::time::Instant;

use ratatui::Frame;

use widgets::{PopupWidget, ScreenWidget, StatusBarWidget, TabBarWidget};

/// Draw one frame
///
/// Builds the current screen, advances scroll and tab bar animations to
/// `now`, then renders header, content, tab bar and any popup.
pub fn draw(frame: &mut Frame, app: &mut App, now: Instant) {
    let layout = FrameLayout::split(frame.area(), app.tab_bar_rows());
    let content = widgets::screen_content(app, layout.content.width);
    app.advance_frame(layout, content.height(), content.items().to_vec(), now);

    StatusBarWidget::render(frame, layout.header, app);
    ScreenWidget::render(frame, layout.content, app, &content);
    TabBarWidget::render(frame, layout.tab_bar, app);
    PopupWidget::render(frame, app);
}

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use carepoint_core::appointments::AppointmentBook;
use carepoint_core::catalog::Catalog;
use carepoint_core::navigation::{Route, Router, TabTarget};
use carepoint_core::profile::{PatientProfile, ProfileField};
use carepoint_core::{AppConfig, ScrollConfig, ScrollEvent, VisibilityController};
use chrono::{DateTime, Utc};
use ratatui::layout::{Constraint, Layout, Position, Rect};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::content::{ItemRow, Selectable};
use crate::input::Action;
use crate::keymap::Keymap;
use crate::scroll::ScrollAnimator;
use crate::theme::Theme;
use crate::themes::load_theme;
use crate::widgets::tab_bar::target_at;

/// Rows the tab bar occupies when fully shown
pub const TAB_BAR_HEIGHT: u16 = 3;

/// Rows moved per mouse wheel notch
const WHEEL_ROWS: i32 = 3;

/// Application mode
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Normal,
    Help,
    /// Waiting for the user to confirm a slot
    ConfirmBooking { doctor_id: String, at: DateTime<Utc> },
    ConfirmCancel(Uuid),
    /// Editing one profile field; `buffer` holds the pending value
    EditField { field: ProfileField, buffer: String },
}

/// Per-screen scroll and selection
#[derive(Debug, Clone)]
pub struct ScreenState {
    pub scroll: ScrollAnimator,
    pub selected: usize,
}

impl ScreenState {
    fn new(config: ScrollConfig) -> Self {
        Self {
            scroll: ScrollAnimator::new(config),
            selected: 0,
        }
    }
}

/// Screen areas of the last drawn frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameLayout {
    pub header: Rect,
    pub content: Rect,
    pub tab_bar: Rect,
}

impl FrameLayout {
    /// Header row on top, tab bar rows at the bottom, content in between
    pub fn split(area: Rect, tab_bar_rows: u16) -> Self {
        let [header, content, tab_bar] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(tab_bar_rows),
        ])
        .areas(area);
        Self {
            header,
            content,
            tab_bar,
        }
    }
}

/// Main application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub keymap: Keymap,
    pub catalog: Catalog,
    pub book: AppointmentBook,
    pub router: Router,
    /// Scroll-reactive tab bar visibility
    pub tab_bar: VisibilityController,
    pub profile: PatientProfile,
    pub mode: Mode,
    pub status_message: Option<String>,
    /// First key of a pending sequence ("gg")
    pub pending_key: Option<char>,
    pub should_quit: bool,
    pub layout: FrameLayout,
    screens: HashMap<Route, ScreenState>,
    /// Selectable rows of the last built content
    items: Vec<ItemRow>,
    content_height: u16,
    /// Where profile edits are persisted
    config_path: Option<PathBuf>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self::with_catalog(config, Catalog::builtin())
    }

    pub fn with_catalog(config: AppConfig, catalog: Catalog) -> Self {
        let theme = load_theme(&config.ui.theme);
        let keymap = Keymap::from_config(&config.keymap);
        let tab_bar = VisibilityController::new(&config.ui.tab_bar);
        let profile = config.profile.clone();
        let router = Router::new();

        let mut screens = HashMap::new();
        screens.insert(
            router.current().clone(),
            ScreenState::new(config.ui.scroll.clone()),
        );

        Self {
            config: Arc::new(config),
            theme,
            keymap,
            catalog,
            book: AppointmentBook::new(),
            router,
            tab_bar,
            profile,
            mode: Mode::Normal,
            status_message: None,
            pending_key: None,
            should_quit: false,
            layout: FrameLayout::default(),
            screens,
            items: Vec::new(),
            content_height: 0,
            config_path: None,
        }
    }

    /// Persist profile edits to `path`
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn current_route(&self) -> &Route {
        self.router.current()
    }

    /// Selected item index on the current screen
    pub fn selected(&self) -> usize {
        self.screens
            .get(self.router.current())
            .map_or(0, |s| s.selected)
    }

    /// Row offset to render the current screen at
    pub fn scroll_offset(&self) -> u16 {
        self.screens
            .get(self.router.current())
            .map_or(0, |s| s.scroll.current_scroll())
    }

    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    pub fn viewport_height(&self) -> u16 {
        self.layout.content.height
    }

    pub fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height())
    }

    pub fn selected_item(&self) -> Option<&ItemRow> {
        self.items.get(self.selected())
    }

    /// Visible tab bar rows for the current frame
    ///
    /// The bar slides down by its hidden fraction, so partially hidden bars
    /// lose rows from the bottom edge of the screen.
    pub fn tab_bar_rows(&self) -> u16 {
        if !self.config.ui.tab_bar.enabled {
            return 0;
        }
        let hidden = self.tab_bar.snapshot().hidden_fraction();
        let shifted = (hidden * TAB_BAR_HEIGHT as f64).round() as u16;
        TAB_BAR_HEIGHT.saturating_sub(shifted)
    }

    /// Whether the loop should poll at animation rate
    pub fn needs_animation(&self) -> bool {
        self.tab_bar.needs_update()
            || self
                .screens
                .get(self.router.current())
                .is_some_and(|s| s.scroll.needs_update())
    }

    fn screen_mut(&mut self) -> &mut ScreenState {
        let route = self.router.current().clone();
        let config = &self.config.ui.scroll;
        self.screens
            .entry(route)
            .or_insert_with(|| ScreenState::new(config.clone()))
    }

    /// Advance one frame
    ///
    /// Records the layout and content built for this frame, advances the
    /// screen's scroll animation, feeds the resulting offset to the tab bar
    /// controller and steps its transition.
    pub fn advance_frame(
        &mut self,
        layout: FrameLayout,
        content_height: u16,
        items: Vec<ItemRow>,
        now: Instant,
    ) {
        self.layout = layout;
        self.content_height = content_height;
        self.items = items;

        let max_scroll = self.max_scroll();
        let last_item = self.items.len().saturating_sub(1);
        let state = self.screen_mut();
        state.selected = state.selected.min(last_item);
        state.scroll.update(max_scroll, now);
        let offset = state.scroll.offset_units();

        // Samples go to the controller only when the position moved
        if (offset - self.tab_bar.last_scroll_position()).abs() > f64::EPSILON {
            if let Some(target) = self.tab_bar.handle_scroll(ScrollEvent::at(offset), now) {
                debug!("Tab bar heading {} at offset {:.1}", target, offset);
            }
        }
        if let Some(event) = self.tab_bar.tick(now) {
            debug!("Tab bar transition {:?}", event);
        }
    }

    /// Apply an input action
    pub fn handle_action(&mut self, action: Action, now: Instant) {
        if action != Action::PendingG {
            self.pending_key = None;
        }
        if self.mode == Mode::Normal && action != Action::None {
            self.status_message = None;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::PendingG => self.pending_key = Some('g'),
            Action::MoveDown => self.move_selection(1, now),
            Action::MoveUp => self.move_selection(-1, now),
            Action::ScrollHalfPageDown => {
                let (viewport, max) = (self.viewport_height(), self.max_scroll());
                self.screen_mut().scroll.scroll_half_page_down(viewport, max);
            }
            Action::ScrollHalfPageUp => {
                let (viewport, max) = (self.viewport_height(), self.max_scroll());
                self.screen_mut().scroll.scroll_half_page_up(viewport, max);
            }
            Action::ScrollPageDown => {
                let (viewport, max) = (self.viewport_height(), self.max_scroll());
                self.screen_mut().scroll.scroll_full_page_down(viewport, max);
            }
            Action::ScrollPageUp => {
                let (viewport, max) = (self.viewport_height(), self.max_scroll());
                self.screen_mut().scroll.scroll_full_page_up(viewport, max);
            }
            Action::JumpToTop => {
                let state = self.screen_mut();
                state.selected = 0;
                state.scroll.scroll_to(0, u16::MAX, now);
            }
            Action::JumpToBottom => {
                let (max, last) = (self.max_scroll(), self.items.len().saturating_sub(1));
                let state = self.screen_mut();
                state.selected = last;
                state.scroll.scroll_to(max, max, now);
            }
            Action::Select => self.activate_selected(),
            Action::Back => self.go_back(),
            Action::Book => self.start_booking(),
            Action::CancelAppointment => self.start_cancel(),
            Action::EditField => self.edit_selected(),
            Action::Help => self.mode = Mode::Help,
            Action::Tab(target) => self.press_tab(target),
            Action::ExitMode => self.mode = Mode::Normal,
            Action::Cancel => {
                if self.mode != Mode::Normal {
                    self.mode = Mode::Normal;
                    self.status_message = Some("Cancelled".to_string());
                }
            }
            Action::Confirm => self.confirm(),
            Action::InputChar(c) => {
                if let Mode::EditField { buffer, .. } = &mut self.mode {
                    buffer.push(c);
                }
            }
            Action::Backspace => {
                if let Mode::EditField { buffer, .. } = &mut self.mode {
                    buffer.pop();
                }
            }
            Action::NextChoice => self.cycle_choice(1),
            Action::PrevChoice => self.cycle_choice(-1),
            Action::WheelDown => {
                let max = self.max_scroll();
                self.screen_mut().scroll.scroll_by(WHEEL_ROWS, max);
            }
            Action::WheelUp => {
                let max = self.max_scroll();
                self.screen_mut().scroll.scroll_by(-WHEEL_ROWS, max);
            }
            Action::Click { column, row } => self.click(column, row),
            Action::None => {}
        }
    }

    fn move_selection(&mut self, delta: i32, now: Instant) {
        let max = self.max_scroll();
        if self.items.is_empty() {
            let scroll = &mut self.screen_mut().scroll;
            if delta > 0 {
                scroll.scroll_down(max);
            } else {
                scroll.scroll_up(max);
            }
            return;
        }
        let last = self.items.len() as i32 - 1;
        let state = self.screen_mut();
        state.selected = (state.selected as i32 + delta).clamp(0, last) as usize;
        self.ensure_selected_visible(now);
    }

    /// Scroll just enough to bring the selected item into view
    fn ensure_selected_visible(&mut self, now: Instant) {
        let Some(item) = self.selected_item().cloned() else {
            return;
        };
        let viewport = self.viewport_height();
        let max = self.max_scroll();
        let scroll = &mut self.screen_mut().scroll;
        let top = scroll.target_scroll();

        if item.row < top {
            scroll.scroll_to(item.row, max, now);
        } else if item.row + item.height > top + viewport {
            scroll.scroll_to((item.row + item.height).saturating_sub(viewport), max, now);
        }
    }

    fn activate_selected(&mut self) {
        let Some(target) = self.selected_item().map(|item| item.target.clone()) else {
            return;
        };
        match target {
            Selectable::Open(route) => self.navigate(route),
            Selectable::Appointment(id) => self.navigate(Route::Appointment(id.to_string())),
            Selectable::Slot(at) => self.confirm_slot(at),
            Selectable::Field(field) => self.start_edit(field),
        }
    }

    /// Push `route` unless it is already on screen
    pub fn navigate(&mut self, route: Route) {
        if *self.router.current() == route {
            return;
        }
        self.router.push(route);
        self.on_route_changed();
    }

    /// Press a tab bar target
    ///
    /// Home replaces the current route; every other target pushes its route.
    /// Pressing the target of the screen already shown does nothing.
    pub fn press_tab(&mut self, target: TabTarget) {
        let route = target.route();
        if *self.router.current() == route {
            return;
        }
        if target.replaces() {
            self.router.replace(route);
        } else {
            self.router.push(route);
        }
        self.on_route_changed();
    }

    fn go_back(&mut self) {
        if self.router.back() {
            self.on_route_changed();
        }
    }

    /// The entering screen restarts at the top, which the tab bar
    /// controller treats as top-of-content and shows the bar.
    fn on_route_changed(&mut self) {
        let route = self.router.current().clone();
        debug!("Navigated to {}", route.path());
        self.screens
            .insert(route, ScreenState::new(self.config.ui.scroll.clone()));
        self.items.clear();
        self.content_height = 0;
        self.mode = Mode::Normal;
    }

    fn start_booking(&mut self) {
        let Route::Doctor(doctor_id) = self.router.current().clone() else {
            self.status_message = Some("Open a doctor to book an appointment".to_string());
            return;
        };

        if let Some(ItemRow {
            target: Selectable::Slot(at),
            ..
        }) = self.selected_item()
        {
            let at = *at;
            self.confirm_slot(at);
            return;
        }

        let slot = self
            .catalog
            .doctor(&doctor_id)
            .and_then(|doctor| self.book.next_slots(doctor, Utc::now(), 1).into_iter().next());
        match slot {
            Some(at) => self.confirm_slot(at),
            None => {
                self.status_message = Some("No free slots in the next two weeks".to_string())
            }
        }
    }

    fn confirm_slot(&mut self, at: DateTime<Utc>) {
        if let Route::Doctor(doctor_id) = self.router.current() {
            self.mode = Mode::ConfirmBooking {
                doctor_id: doctor_id.clone(),
                at,
            };
        }
    }

    fn start_cancel(&mut self) {
        let id = match self.router.current() {
            Route::Appointment(id) => Uuid::parse_str(id).ok(),
            Route::Appointments => match self.selected_item() {
                Some(ItemRow {
                    target: Selectable::Appointment(id),
                    ..
                }) => Some(*id),
                _ => None,
            },
            _ => None,
        };

        let found = id
            .and_then(|id| self.book.get(id))
            .map(|a| (a.id, a.is_cancelled()));
        match found {
            Some((id, false)) => self.mode = Mode::ConfirmCancel(id),
            Some((_, true)) => {
                self.status_message = Some("Appointment is already cancelled".to_string())
            }
            None => self.status_message = Some("Select an appointment to cancel".to_string()),
        }
    }

    fn edit_selected(&mut self) {
        match self.router.current() {
            Route::Profile => self.navigate(Route::EditProfile),
            Route::EditProfile => {
                if let Some(ItemRow {
                    target: Selectable::Field(field),
                    ..
                }) = self.selected_item()
                {
                    let field = *field;
                    self.start_edit(field);
                }
            }
            _ => {}
        }
    }

    fn start_edit(&mut self, field: ProfileField) {
        self.mode = Mode::EditField {
            field,
            buffer: field.get(&self.profile).to_string(),
        };
    }

    /// Step through a picker field's choices
    fn cycle_choice(&mut self, step: i32) {
        let Mode::EditField { field, buffer } = &mut self.mode else {
            return;
        };
        let Some(choices) = field.choices() else {
            return;
        };
        let len = choices.len() as i32;
        let next = match choices.iter().position(|c| *c == buffer.as_str()) {
            Some(i) => (i as i32 + step).rem_euclid(len),
            None if step > 0 => 0,
            None => len - 1,
        };
        *buffer = choices[next as usize].to_string();
    }

    fn confirm(&mut self) {
        match std::mem::replace(&mut self.mode, Mode::Normal) {
            Mode::ConfirmBooking { doctor_id, at } => self.book_slot(&doctor_id, at),
            Mode::ConfirmCancel(id) => self.cancel_appointment(id),
            Mode::EditField { field, buffer } => self.commit_edit(field, buffer),
            other => self.mode = other,
        }
    }

    fn book_slot(&mut self, doctor_id: &str, at: DateTime<Utc>) {
        let Some(doctor) = self.catalog.doctor(doctor_id) else {
            self.status_message = Some(format!("Doctor {} not found", doctor_id));
            return;
        };
        let Some(hospital) = self.catalog.hospital(&doctor.hospital_id) else {
            self.status_message = Some(format!("Hospital {} not found", doctor.hospital_id));
            return;
        };

        let result = self
            .book
            .book(doctor, hospital, at, Utc::now())
            .map(|a| (a.id, format!("Booked {} on {}", a.doctor_name, a.date_label())));
        match result {
            Ok((id, message)) => {
                self.navigate(Route::Appointment(id.to_string()));
                self.status_message = Some(message);
            }
            Err(e) => {
                warn!("Booking failed: {}", e);
                self.status_message = Some(e.to_string());
            }
        }
    }

    fn cancel_appointment(&mut self, id: Uuid) {
        match self.book.cancel(id) {
            Ok(()) => self.status_message = Some("Appointment cancelled".to_string()),
            Err(e) => {
                warn!("Cancel failed: {}", e);
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Apply an edited value
    ///
    /// A value that is invalid for its own field keeps the editor open. The
    /// profile is only written to disk once the whole form validates.
    fn commit_edit(&mut self, field: ProfileField, buffer: String) {
        let mut updated = self.profile.clone();
        field.set(&mut updated, buffer.trim());

        if let Some((_, message)) = updated.errors().into_iter().find(|(f, _)| *f == field) {
            self.status_message = Some(message);
            self.mode = Mode::EditField { field, buffer };
            return;
        }

        self.profile = updated;
        match self.profile.validate() {
            Ok(()) => self.save_profile(),
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    fn save_profile(&mut self) {
        let mut config = (*self.config).clone();
        config.profile = self.profile.clone();

        if let Some(path) = &self.config_path {
            if let Err(e) = config.save_to(path) {
                warn!("Failed to save profile: {}", e);
                self.status_message = Some(format!("Failed to save profile: {}", e));
                return;
            }
            info!("Saved profile to {}", path.display());
        }

        self.config = Arc::new(config);
        self.status_message = Some("Profile updated".to_string());
    }

    fn click(&mut self, column: u16, row: u16) {
        let position = Position::new(column, row);

        if self.layout.tab_bar.contains(position) {
            if let Some(target) = target_at(self.layout.tab_bar, column) {
                self.press_tab(target);
            }
            return;
        }

        if self.layout.content.contains(position) {
            let content_row = row - self.layout.content.y + self.scroll_offset();
            if let Some(index) = self.items.iter().position(|item| item.contains(content_row)) {
                self.screen_mut().selected = index;
                self.activate_selected();
            }
        }
    }
}

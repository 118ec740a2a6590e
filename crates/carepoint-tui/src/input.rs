use carepoint_core::navigation::TabTarget;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    Select,
    Back,
    Book,
    CancelAppointment,
    EditField,
    Help,
    Tab(TabTarget),
    ExitMode,
    Confirm,
    Cancel,
    InputChar(char),
    Backspace,
    NextChoice,
    PrevChoice,
    // Mouse
    WheelDown,
    WheelUp,
    Click { column: u16, row: u16 },
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    match &app.mode {
        Mode::EditField { .. } => return handle_input_mode(key),
        Mode::ConfirmBooking { .. } | Mode::ConfirmCancel(_) => return handle_confirm_mode(key),
        Mode::Help => {
            // Any key exits help
            return Action::ExitMode;
        }
        Mode::Normal => {}
    }

    let binding = KeyBinding::from_event(&key);

    if keymap.starts_sequence(&binding) {
        if app.pending_key == Some('g') {
            return keymap.sequence_action().cloned().unwrap_or(Action::None);
        }
        return Action::PendingG;
    }

    keymap.action_for(&binding).cloned().unwrap_or(Action::None)
}

/// Handle a mouse event
///
/// Mouse input is ignored while a popup is open.
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Action {
    if app.mode != Mode::Normal {
        return Action::None;
    }
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::WheelDown,
        MouseEventKind::ScrollUp => Action::WheelUp,
        MouseEventKind::Down(MouseButton::Left) => Action::Click {
            column: mouse.column,
            row: mouse.row,
        },
        _ => Action::None,
    }
}

/// Handle key events while editing a profile field
fn handle_input_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::Confirm,
        KeyCode::Esc => Action::Cancel,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Tab | KeyCode::Down => Action::NextChoice,
        KeyCode::BackTab | KeyCode::Up => Action::PrevChoice,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::None,
    }
}

/// Handle key events in confirmation mode
fn handle_confirm_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Action::Confirm,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::Cancel,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carepoint_core::profile::ProfileField;
    use carepoint_core::AppConfig;
    use crossterm::event::KeyModifiers;
    use uuid::Uuid;

    fn app() -> App {
        App::new(AppConfig::default())
    }

    fn press(app: &App, code: KeyCode, modifiers: KeyModifiers) -> Action {
        handle_key_event(KeyEvent::new(code, modifiers), app, &app.keymap)
    }

    #[test]
    fn test_normal_mode_bindings() {
        let app = app();
        assert_eq!(press(&app, KeyCode::Char('j'), KeyModifiers::NONE), Action::MoveDown);
        assert_eq!(press(&app, KeyCode::Char('d'), KeyModifiers::CONTROL), Action::ScrollHalfPageDown);
        assert_eq!(press(&app, KeyCode::Char('G'), KeyModifiers::SHIFT), Action::JumpToBottom);
        assert_eq!(
            press(&app, KeyCode::Char('2'), KeyModifiers::NONE),
            Action::Tab(TabTarget::Hospitals)
        );
        assert_eq!(press(&app, KeyCode::Char('z'), KeyModifiers::NONE), Action::None);
    }

    #[test]
    fn test_gg_sequence() {
        let mut app = app();
        assert_eq!(press(&app, KeyCode::Char('g'), KeyModifiers::NONE), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(press(&app, KeyCode::Char('g'), KeyModifiers::NONE), Action::JumpToTop);
    }

    #[test]
    fn test_confirm_mode() {
        let mut app = app();
        app.mode = Mode::ConfirmCancel(Uuid::new_v4());
        assert_eq!(press(&app, KeyCode::Char('y'), KeyModifiers::NONE), Action::Confirm);
        assert_eq!(press(&app, KeyCode::Esc, KeyModifiers::NONE), Action::Cancel);
        assert_eq!(press(&app, KeyCode::Char('j'), KeyModifiers::NONE), Action::None);
    }

    #[test]
    fn test_edit_mode_types_characters() {
        let mut app = app();
        app.mode = Mode::EditField {
            field: ProfileField::Name,
            buffer: String::new(),
        };
        assert_eq!(press(&app, KeyCode::Char('q'), KeyModifiers::NONE), Action::InputChar('q'));
        assert_eq!(press(&app, KeyCode::Tab, KeyModifiers::NONE), Action::NextChoice);
        assert_eq!(press(&app, KeyCode::Enter, KeyModifiers::NONE), Action::Confirm);
    }

    #[test]
    fn test_help_mode_any_key_exits() {
        let mut app = app();
        app.mode = Mode::Help;
        assert_eq!(press(&app, KeyCode::Char('x'), KeyModifiers::NONE), Action::ExitMode);
    }

    #[test]
    fn test_mouse_events() {
        let app = app();
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(handle_mouse_event(wheel, &app), Action::WheelDown);

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(handle_mouse_event(click, &app), Action::Click { column: 3, row: 4 });
    }
}

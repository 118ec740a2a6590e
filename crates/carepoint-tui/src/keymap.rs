use std::collections::HashMap;

use carepoint_core::config::KeymapConfig;
use carepoint_core::navigation::TabTarget;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    /// Normalize a terminal key event
    ///
    /// Terminals disagree on whether Shift is reported for symbols like `?`
    /// and uppercase letters, so Shift is implied by the character itself.
    pub fn from_event(key: &KeyEvent) -> Self {
        let mut modifiers = key.modifiers.difference(KeyModifiers::SHIFT);
        if let KeyCode::Char(c) = key.code {
            if c.is_ascii_uppercase() {
                modifiers |= KeyModifiers::SHIFT;
            }
        } else if key.modifiers.contains(KeyModifiers::SHIFT) {
            modifiers |= KeyModifiers::SHIFT;
        }
        Self::new(key.code, modifiers)
    }
}

/// Key to action lookup built from [`KeymapConfig`]
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
    /// Bound to the two-key "gg" sequence
    gg: Option<Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    pub fn from_config(config: &KeymapConfig) -> Self {
        let table: [(&str, Action); 20] = [
            (&config.quit, Action::Quit),
            (&config.move_down, Action::MoveDown),
            (&config.move_up, Action::MoveUp),
            (&config.scroll_half_down, Action::ScrollHalfPageDown),
            (&config.scroll_half_up, Action::ScrollHalfPageUp),
            (&config.scroll_page_down, Action::ScrollPageDown),
            (&config.scroll_page_up, Action::ScrollPageUp),
            (&config.jump_to_top, Action::JumpToTop),
            (&config.jump_to_bottom, Action::JumpToBottom),
            (&config.select, Action::Select),
            (&config.back, Action::Back),
            (&config.book, Action::Book),
            (&config.cancel_appointment, Action::CancelAppointment),
            (&config.edit_field, Action::EditField),
            (&config.help, Action::Help),
            (&config.tab_appointments, Action::Tab(TabTarget::Appointments)),
            (&config.tab_hospitals, Action::Tab(TabTarget::Hospitals)),
            (&config.tab_home, Action::Tab(TabTarget::Home)),
            (&config.tab_lab_records, Action::Tab(TabTarget::LabRecords)),
            (&config.tab_profile, Action::Tab(TabTarget::Profile)),
        ];

        let mut keymap = Self {
            bindings: HashMap::new(),
            gg: None,
        };
        for (notation, action) in table {
            keymap.bind(notation, action);
        }

        // fixed bindings on top of the configurable ones
        let bindings = &mut keymap.bindings;
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        bindings.insert(KeyBinding::simple(KeyCode::Esc), Action::ExitMode);
        for (code, action) in [
            (KeyCode::Up, Action::MoveUp),
            (KeyCode::Down, Action::MoveDown),
            (KeyCode::PageDown, Action::ScrollPageDown),
            (KeyCode::PageUp, Action::ScrollPageUp),
            (KeyCode::Left, Action::Back),
        ] {
            bindings.entry(KeyBinding::simple(code)).or_insert(action);
        }

        keymap
    }

    /// First binding for a key wins; later ones are logged and dropped.
    fn bind(&mut self, notation: &str, action: Action) {
        if notation == "gg" {
            self.gg = Some(action);
            return;
        }
        let Some(binding) = parse_key_binding(notation) else {
            warn!(notation, "unrecognized key binding, ignoring");
            return;
        };
        match self.bindings.get(&binding) {
            Some(existing) => warn!(
                notation,
                ?existing,
                ?action,
                "key already bound, ignoring"
            ),
            None => {
                self.bindings.insert(binding, action);
            }
        }
    }

    pub fn action_for(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }

    /// Action completing the "gg" sequence
    pub fn sequence_action(&self) -> Option<&Action> {
        self.gg.as_ref()
    }

    /// A bare `g` opens the sequence when "gg" is bound
    pub fn starts_sequence(&self, binding: &KeyBinding) -> bool {
        self.gg.is_some() && *binding == KeyBinding::simple(KeyCode::Char('g'))
    }
}

/// Parse Vim-style key notation into a KeyBinding
///
/// - Single char: "j", "q", "/", "?"
/// - Uppercase (Shift): "G"
/// - Ctrl / Shift: "<C-d>", "<S-Tab>"
/// - Named keys: "<CR>", "<Esc>", "<BS>", "<Tab>", "<Space>", arrows, "<F1>".."<F12>"
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if s.len() > 2 && s.starts_with('<') && s.ends_with('>') {
        return parse_special_key(&s[1..s.len() - 1]);
    }

    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if c.is_ascii_uppercase() {
        Some(KeyBinding::shift(KeyCode::Char(c)))
    } else {
        Some(KeyBinding::simple(KeyCode::Char(c)))
    }
}

fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    if let Some(rest) = inner.strip_prefix("C-") {
        return parse_key_name(rest).map(KeyBinding::ctrl);
    }
    if let Some(rest) = inner.strip_prefix("S-") {
        return parse_key_name(rest).map(KeyBinding::shift);
    }
    parse_key_name(inner).map(KeyBinding::simple)
}

fn parse_key_name(name: &str) -> Option<KeyCode> {
    let lower = name.to_lowercase();
    let code = match lower.as_str() {
        "cr" | "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "space" | "spc" => KeyCode::Char(' '),
        "bs" | "backspace" => KeyCode::Backspace,
        "del" | "delete" => KeyCode::Delete,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "pgup" => KeyCode::PageUp,
        "pagedown" | "pgdn" => KeyCode::PageDown,
        _ => {
            if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                return (1..=12).contains(&n).then_some(KeyCode::F(n));
            }
            let mut chars = name.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c.to_ascii_lowercase())
        }
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_keys() {
        assert_eq!(parse_key_binding("j"), Some(KeyBinding::simple(KeyCode::Char('j'))));
        assert_eq!(parse_key_binding("?"), Some(KeyBinding::simple(KeyCode::Char('?'))));
        assert_eq!(parse_key_binding("3"), Some(KeyBinding::simple(KeyCode::Char('3'))));
        assert_eq!(parse_key_binding("jk"), None);
        assert_eq!(parse_key_binding(""), None);
    }

    #[test]
    fn test_parse_uppercase_keys() {
        assert_eq!(parse_key_binding("G"), Some(KeyBinding::shift(KeyCode::Char('G'))));
    }

    #[test]
    fn test_parse_ctrl_keys() {
        assert_eq!(parse_key_binding("<C-d>"), Some(KeyBinding::ctrl(KeyCode::Char('d'))));
        assert_eq!(parse_key_binding("<C-U>"), Some(KeyBinding::ctrl(KeyCode::Char('u'))));
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(parse_key_binding("<CR>"), Some(KeyBinding::simple(KeyCode::Enter)));
        assert_eq!(parse_key_binding("<BS>"), Some(KeyBinding::simple(KeyCode::Backspace)));
        assert_eq!(parse_key_binding("<Esc>"), Some(KeyBinding::simple(KeyCode::Esc)));
        assert_eq!(parse_key_binding("<S-Tab>"), Some(KeyBinding::shift(KeyCode::Tab)));
        assert_eq!(parse_key_binding("<F5>"), Some(KeyBinding::simple(KeyCode::F(5))));
        assert_eq!(parse_key_binding("<F13>"), None);
        assert_eq!(parse_key_binding("<Nope>"), None);
    }

    #[test]
    fn test_event_normalization() {
        let question = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(KeyBinding::from_event(&question), KeyBinding::simple(KeyCode::Char('?')));

        let upper = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::NONE);
        assert_eq!(KeyBinding::from_event(&upper), KeyBinding::shift(KeyCode::Char('G')));

        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(KeyBinding::from_event(&ctrl_d), KeyBinding::ctrl(KeyCode::Char('d')));
    }

    #[test]
    fn test_default_bindings() {
        let keymap = Keymap::default();

        assert_eq!(keymap.action_for(&KeyBinding::simple(KeyCode::Char('q'))), Some(&Action::Quit));
        assert_eq!(keymap.action_for(&KeyBinding::simple(KeyCode::Char('j'))), Some(&Action::MoveDown));
        assert_eq!(
            keymap.action_for(&KeyBinding::ctrl(KeyCode::Char('d'))),
            Some(&Action::ScrollHalfPageDown)
        );
        assert_eq!(keymap.action_for(&KeyBinding::simple(KeyCode::Backspace)), Some(&Action::Back));
        assert_eq!(
            keymap.action_for(&KeyBinding::simple(KeyCode::Char('3'))),
            Some(&Action::Tab(TabTarget::Home))
        );

        assert_eq!(keymap.sequence_action(), Some(&Action::JumpToTop));
        assert!(keymap.starts_sequence(&KeyBinding::simple(KeyCode::Char('g'))));
        assert!(!keymap.starts_sequence(&KeyBinding::ctrl(KeyCode::Char('g'))));
    }

    #[test]
    fn test_conflicting_binding_keeps_first() {
        let config = KeymapConfig {
            book: "j".to_string(),
            ..KeymapConfig::default()
        };
        let keymap = Keymap::from_config(&config);
        assert_eq!(keymap.action_for(&KeyBinding::simple(KeyCode::Char('j'))), Some(&Action::MoveDown));
        assert_eq!(keymap.action_for(&KeyBinding::simple(KeyCode::Char('b'))), None);
    }
}

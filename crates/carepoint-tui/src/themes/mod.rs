//! Theme registry and loader

mod dracula;
pub(crate) mod gruvbox;
mod nord;

use carepoint_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;
use tracing::warn;

use crate::theme::Theme;

/// Parse "#RRGGBB", "RRGGBB", "#RGB" or "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load a theme by name, then apply overrides
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "gruvbox-dark" | "gruvbox" => gruvbox::dark(),
        "gruvbox-light" => gruvbox::light(),
        "nord" => nord::default(),
        "dracula" => dracula::default(),
        other => {
            warn!("Unknown theme '{}', falling back to gruvbox-dark", other);
            gruvbox::dark()
        }
    };

    apply_overrides(base, &config.colors)
}

fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&mut Color, &Option<String>); 12] = [
        (&mut theme.bg0, &overrides.bg0),
        (&mut theme.bg1, &overrides.bg1),
        (&mut theme.bg2, &overrides.bg2),
        (&mut theme.fg0, &overrides.fg0),
        (&mut theme.fg1, &overrides.fg1),
        (&mut theme.accent, &overrides.accent),
        (&mut theme.selection, &overrides.selection),
        (&mut theme.muted, &overrides.muted),
        (&mut theme.error, &overrides.error),
        (&mut theme.success, &overrides.success),
        (&mut theme.warning, &overrides.warning),
        (&mut theme.info, &overrides.info),
    ];

    for (slot, hex) in slots {
        if let Some(hex) = hex {
            match parse_hex_color(hex) {
                Some(color) => *slot = color,
                None => warn!("Ignoring invalid color override '{}'", hex),
            }
        }
    }

    theme
}

pub fn available_themes() -> Vec<&'static str> {
    vec!["gruvbox-dark", "gruvbox-light", "nord", "dracula"]
}

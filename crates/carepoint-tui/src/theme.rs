use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    /// Content background
    pub bg0: Color,
    /// Tab bar and header background
    pub bg1: Color,
    /// Cards and popups
    pub bg2: Color,

    pub fg0: Color,
    pub fg1: Color,
    /// Secondary text, inactive tab targets
    pub muted: Color,

    pub accent: Color,
    pub selection: Color,
    /// Ratings and highlights
    pub highlight: Color,

    pub error: Color,
    pub success: Color,
    pub warning: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::gruvbox::dark()
    }
}

/// Mix `fg` into `bg` by `alpha` (0 = bg, 1 = fg)
///
/// Used to fade the tab bar, since terminals have no per-cell opacity.
/// Non-RGB colors snap to whichever side `alpha` is closer to.
pub fn blend(fg: Color, bg: Color, alpha: f64) -> Color {
    let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| (b as f64 + (f as f64 - b as f64) * alpha).round() as u8;
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ if alpha >= 0.5 => fg,
        _ => bg,
    }
}

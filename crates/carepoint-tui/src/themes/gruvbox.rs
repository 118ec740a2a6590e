//! Gruvbox Material
//! https://github.com/sainnhe/gruvbox-material

use ratatui::style::Color;
use crate::theme::Theme;

pub fn dark() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x28, 0x28),
        bg1: Color::Rgb(0x32, 0x30, 0x2f),
        bg2: Color::Rgb(0x45, 0x40, 0x3d),
        fg0: Color::Rgb(0xd4, 0xbe, 0x98),
        fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
        muted: Color::Rgb(0x92, 0x83, 0x74),
        accent: Color::Rgb(0x7d, 0xae, 0xa3),
        selection: Color::Rgb(0x45, 0x40, 0x3d),
        highlight: Color::Rgb(0xd8, 0xa6, 0x57),
        error: Color::Rgb(0xea, 0x69, 0x62),
        success: Color::Rgb(0xa9, 0xb6, 0x65),
        warning: Color::Rgb(0xe7, 0x8a, 0x4e),
        info: Color::Rgb(0x89, 0xb4, 0x82),
    }
}

pub fn light() -> Theme {
    Theme {
        bg0: Color::Rgb(0xfb, 0xf1, 0xc7),
        bg1: Color::Rgb(0xf2, 0xe5, 0xbc),
        bg2: Color::Rgb(0xeb, 0xdb, 0xb2),
        fg0: Color::Rgb(0x65, 0x47, 0x35),
        fg1: Color::Rgb(0x4f, 0x38, 0x29),
        muted: Color::Rgb(0x92, 0x83, 0x74),
        accent: Color::Rgb(0x45, 0x70, 0x7a),
        selection: Color::Rgb(0xe0, 0xcf, 0xa9),
        highlight: Color::Rgb(0xb4, 0x71, 0x09),
        error: Color::Rgb(0xc1, 0x4a, 0x4a),
        success: Color::Rgb(0x6c, 0x78, 0x2e),
        warning: Color::Rgb(0xc3, 0x5e, 0x0a),
        info: Color::Rgb(0x4c, 0x7a, 0x5d),
    }
}

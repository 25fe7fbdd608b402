//! Gruvbox Material theme
//! https://github.com/sainnhe/gruvbox-material

use ratatui::style::Color;
use crate::theme::Theme;

/// Gruvbox Material dark
pub fn dark() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x28, 0x28),
        bg1: Color::Rgb(0x32, 0x30, 0x2f),
        bg2: Color::Rgb(0x45, 0x40, 0x3d),
        fg0: Color::Rgb(0xd4, 0xbe, 0x98),
        fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
        grey0: Color::Rgb(0x7c, 0x6f, 0x64),
        grey1: Color::Rgb(0x92, 0x83, 0x74),
        frame: Color::Rgb(0xa8, 0x99, 0x84),
        indicator: Color::Rgb(0xd8, 0xa6, 0x57), // yellow
        error: Color::Rgb(0xea, 0x69, 0x62),
        success: Color::Rgb(0xa9, 0xb6, 0x65),
        warning: Color::Rgb(0xe7, 0x8a, 0x4e),
        accent: Color::Rgb(0x89, 0xb4, 0x82), // aqua
    }
}

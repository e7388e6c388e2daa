use ratatui::style::Color;

use crate::config::ThemeName;

/// Colour palette, chosen from config and passed to every draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub checked: Color,
    pub error: Color,
    pub highlight_bg: Color,
    pub skeleton: Color,
}

impl Theme {
    pub fn for_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self {
                accent: Color::Rgb(0xf5, 0x9e, 0x0b),
                border: Color::Rgb(0x40, 0x40, 0x40),
                text: Color::Rgb(0xe5, 0xe5, 0xe5),
                muted: Color::Rgb(0x6b, 0x72, 0x80),
                checked: Color::Rgb(0x22, 0xc5, 0x5e),
                error: Color::Rgb(0xef, 0x44, 0x44),
                highlight_bg: Color::Rgb(0x26, 0x26, 0x26),
                skeleton: Color::Rgb(0x33, 0x33, 0x33),
            },
            ThemeName::Light => Self {
                accent: Color::Rgb(0xb4, 0x53, 0x09),
                border: Color::Rgb(0xc4, 0xc4, 0xc4),
                text: Color::Rgb(0x1f, 0x29, 0x37),
                muted: Color::Rgb(0x6b, 0x72, 0x80),
                checked: Color::Rgb(0x15, 0x80, 0x3d),
                error: Color::Rgb(0xb9, 0x1c, 0x1c),
                highlight_bg: Color::Rgb(0xf3, 0xf4, 0xf6),
                skeleton: Color::Rgb(0xe5, 0xe7, 0xeb),
            },
        }
    }
}

//! Color themes and the invert toggle.

use serde::{Deserialize, Serialize};

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Light or inverted scheme, toggled at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn inverted(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::LIGHT,
            ThemeMode::Dark => Theme::DARK,
        }
    }
}

/// Colors for every themed part of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub sphere: Rgb,
    pub plain_line: Rgb,
    pub dashed_line: Rgb,
    pub marker: Rgb,
    pub label_text: Rgb,
}

impl Theme {
    /// White page, grey sphere, pale lines, black accents.
    pub const LIGHT: Theme = Theme {
        background: Rgb::new(0xff, 0xff, 0xff),
        sphere: Rgb::new(0x80, 0x80, 0x80),
        plain_line: Rgb::new(0xdd, 0xdd, 0xdd),
        dashed_line: Rgb::new(0x00, 0x00, 0x00),
        marker: Rgb::new(0x00, 0x00, 0x00),
        label_text: Rgb::new(0x00, 0x00, 0x00),
    };

    /// Inverted scheme: black page, white accents.
    pub const DARK: Theme = Theme {
        background: Rgb::new(0x00, 0x00, 0x00),
        sphere: Rgb::new(0xff, 0xff, 0xff),
        plain_line: Rgb::new(0x44, 0x44, 0x44),
        dashed_line: Rgb::new(0xff, 0xff, 0xff),
        marker: Rgb::new(0xff, 0xff, 0xff),
        label_text: Rgb::new(0xff, 0xff, 0xff),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inversion_is_an_involution() {
        assert_eq!(ThemeMode::Light.inverted().inverted(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.inverted().inverted(), ThemeMode::Dark);
    }

    #[test]
    fn modes_map_to_distinct_themes() {
        assert_ne!(ThemeMode::Light.theme(), ThemeMode::Dark.theme());
        assert_eq!(ThemeMode::Light.theme().background, Rgb::new(255, 255, 255));
        assert_eq!(ThemeMode::Dark.theme().background, Rgb::new(0, 0, 0));
    }
}

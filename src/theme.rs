//! Colour theme and its persisted preference.
//!
//! The theme is the only thing marketfeed writes to disk.  It lives in a
//! small TOML file (`theme = "dark"`); a missing or unreadable file means
//! the light theme.

use std::path::PathBuf;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colours used by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub price: Color,
    pub promo: Color,
    pub status: Color,
    pub highlight_bg: Color,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                price: Color::Green,
                promo: Color::Magenta,
                status: Color::Yellow,
                highlight_bg: Color::DarkGray,
            },
            Theme::Light => Palette {
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                price: Color::Green,
                promo: Color::Red,
                status: Color::Blue,
                highlight_bg: Color::Gray,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

/// Reads and writes the theme preference file.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Stored theme, `Ok(None)` when no preference has been saved yet.
    pub fn read(&self) -> Result<Option<Theme>, ThemeError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let file: ThemeFile = toml::from_str(&text)?;
        Ok(Some(file.theme))
    }

    /// Stored theme, falling back to the default on any problem.
    pub fn load(&self) -> Theme {
        match self.read() {
            Ok(theme) => theme.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring theme preference");
                Theme::default()
            }
        }
    }

    pub fn save(&self, theme: Theme) -> Result<(), ThemeError> {
        let text = toml::to_string(&ThemeFile { theme })?;
        std::fs::write(&self.path, text)?;
        tracing::debug!(path = %self.path.display(), ?theme, "saved theme preference");
        Ok(())
    }
}

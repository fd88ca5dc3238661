// src/config.rs

use crate::colors::default_scale;
use crate::error::{BlameError, Result};
use crate::model::ColorToken;
use serde::Deserialize;
use std::path::Path;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Colors for light backgrounds
    Light,
    /// Colors for dark backgrounds
    #[default]
    Dark,
}

/// Ordered colors, newest revision first, one list per theme
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ColorScale {
    pub light: Vec<ColorToken>,
    pub dark: Vec<ColorToken>,
}

impl Default for ColorScale {
    fn default() -> Self {
        Self {
            light: default_scale(Theme::Light),
            dark: default_scale(Theme::Dark),
        }
    }
}

impl ColorScale {
    pub fn for_theme(&self, theme: Theme) -> &[ColorToken] {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}

/// Settings read from a TOML file:
///
/// ```toml
/// [color_scale]
/// dark = ["#6b4a1f", "#5a4225", "#4a3a2a"]
/// ```
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub color_scale: ColorScale,
}

impl Config {
    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| BlameError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| BlameError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

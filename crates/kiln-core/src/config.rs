//! Widget defaults, serialized with postcard

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

use crate::ui::components::button::{DEFAULT_MIN_SIZE, DEFAULT_PADDING};
use crate::ui::components::label::DEFAULT_FONT_SIZE;
use crate::ui::styling::{Edges, Theme};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config decode failed: {0}")]
    Decode(postcard::Error),
    #[error("Config encode failed: {0}")]
    Encode(postcard::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonConfig {
    pub min_width: u32,
    pub min_height: u32,
    pub padding: Edges,
    pub font_size: u32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_SIZE.width,
            min_height: DEFAULT_MIN_SIZE.height,
            padding: DEFAULT_PADDING,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelConfig {
    pub font_size: u32,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub theme: ThemeKind,
    pub button: ButtonConfig,
    pub label: LabelConfig,
}

impl Config {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(ConfigError::Decode)
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(ConfigError::Encode)
    }

    pub fn theme(&self) -> Theme {
        match self.theme {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

//! Shared value types used by the settings and designer crates.

use crate::constants::{
    DEFAULT_ROOM_BORDER, DEFAULT_ROOM_FILL, DEFAULT_TEXT_COLOR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canvas background style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    /// Solid background color only
    #[default]
    Plain,
    /// Square grid every grid unit
    Grid,
    /// Horizontal ruled lines every grid unit
    Lines,
}

impl fmt::Display for BackgroundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Grid => write!(f, "grid"),
            Self::Lines => write!(f, "lines"),
        }
    }
}

impl FromStr for BackgroundKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "grid" => Ok(Self::Grid),
            "lines" => Ok(Self::Lines),
            other => Err(format!("Unknown background: {}", other)),
        }
    }
}

/// Current drawing colors, as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub room_fill: String,
    pub room_border: String,
    pub text_color: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            room_fill: DEFAULT_ROOM_FILL.to_string(),
            room_border: DEFAULT_ROOM_BORDER.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
        }
    }
}

/// Parse a `#rrggbb` (or `#rgb`) color into RGB components.
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let mut channels = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some((channels.next()??, channels.next()??, channels.next()??))
        }
        _ => None,
    }
}

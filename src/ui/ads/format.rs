// SPDX-License-Identifier: MPL-2.0
//! Ad layouts and the space each one reserves.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout requested for an ad slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdFormat {
    #[default]
    Auto,
    Fluid,
    Rectangle,
    Vertical,
    Horizontal,
    Responsive,
}

/// Reserved area of a placeholder, in logical pixels.
///
/// `width` is `None` when the slot stretches to the available width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdDimensions {
    pub width: Option<f32>,
    pub height: f32,
}

impl AdFormat {
    pub const ALL: [AdFormat; 6] = [
        AdFormat::Auto,
        AdFormat::Fluid,
        AdFormat::Rectangle,
        AdFormat::Vertical,
        AdFormat::Horizontal,
        AdFormat::Responsive,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AdFormat::Auto => "auto",
            AdFormat::Fluid => "fluid",
            AdFormat::Rectangle => "rectangle",
            AdFormat::Vertical => "vertical",
            AdFormat::Horizontal => "horizontal",
            AdFormat::Responsive => "responsive",
        }
    }

    /// Standard IAB sizes for the fixed formats (medium rectangle,
    /// wide skyscraper, leaderboard); the rest fill their row.
    #[must_use]
    pub fn dimensions(self) -> AdDimensions {
        let (width, height) = match self {
            AdFormat::Auto => (None, 90.0),
            AdFormat::Fluid => (None, 120.0),
            AdFormat::Rectangle => (Some(300.0), 250.0),
            AdFormat::Vertical => (Some(160.0), 600.0),
            AdFormat::Horizontal => (Some(728.0), 90.0),
            AdFormat::Responsive => (None, 250.0),
        };
        AdDimensions { width, height }
    }
}

impl fmt::Display for AdFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == normalized)
            .ok_or(ParseError::UnknownAdFormat(normalized))
    }
}

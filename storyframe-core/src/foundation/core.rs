use std::str::FromStr;

use crate::foundation::error::{StoryError, StoryResult};

/// Integer pixel bounds. `left <= right` and `top <= bottom`.
///
/// Rectangles produced by this crate always start at the origin, so `right`/`bottom` double
/// as width/height. They never own pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Rect {
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            left: 0,
            top: 0,
            right: width,
            bottom: height,
        }
    }

    pub fn width(self) -> u32 {
        self.right - self.left
    }

    pub fn height(self) -> u32 {
        self.bottom - self.top
    }

    pub fn is_empty(self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Insets reserved around the placed image, derived from the canvas size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Padding {
    /// Reject padding that would swallow the whole canvas along either axis.
    pub fn check_fits(self, canvas: Rect) -> StoryResult<()> {
        let horizontal = u64::from(self.left) + u64::from(self.right);
        let vertical = u64::from(self.top) + u64::from(self.bottom);
        if horizontal >= u64::from(canvas.width()) {
            return Err(StoryError::invalid_config(format!(
                "horizontal padding {horizontal} leaves no room on a {}px wide canvas",
                canvas.width()
            )));
        }
        if vertical >= u64::from(canvas.height()) {
            return Err(StoryError::invalid_config(format!(
                "vertical padding {vertical} leaves no room on a {}px tall canvas",
                canvas.height()
            )));
        }
        Ok(())
    }
}

/// Paste position of the placed image's top-left corner on the canvas.
///
/// Signed: an image taller than the canvas ends up partially above it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: i64,
    pub y: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn rect(self) -> Rect {
        Rect::from_size(self.width, self.height)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 1440,
            height: 2898,
        }
    }
}

/// Solid fill of the canvas behind the placed image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundTone {
    #[default]
    Dark,
    Light,
}

impl BackgroundTone {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Self::Dark => [0, 0, 0],
            Self::Light => [255, 255, 255],
        }
    }
}

/// Vertical anchor of the placed image. Horizontally it always sits on the left padding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementMode {
    Top,
    Center,
    #[default]
    Bottom,
}

impl PlacementMode {
    /// Map the 1-based menu index (1 = top, 2 = center, 3 = bottom).
    pub fn from_index(index: u8) -> StoryResult<Self> {
        match index {
            1 => Ok(Self::Top),
            2 => Ok(Self::Center),
            3 => Ok(Self::Bottom),
            other => Err(StoryError::invalid_config(format!(
                "placement index must be 1, 2 or 3 (got {other})"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

impl FromStr for PlacementMode {
    type Err = StoryError;

    /// Accepts a name (`top`, `center`, `bottom`) or the menu index `1`..`3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<u8>() {
            return Self::from_index(index);
        }
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            other => Err(StoryError::invalid_config(format!(
                "unknown placement '{other}' (expected top, center, bottom or 1-3)"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

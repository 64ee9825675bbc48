use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::{BackgroundTone, CanvasSize, PlacementMode};
use crate::foundation::error::{StoryError, StoryResult};
use crate::layout::padding::{PaddingRatios, compute_padding_with};
use crate::layout::resize::ResizeFilter;
use crate::mask::rounded::DEFAULT_CORNER_RADIUS;

/// Everything a composition session needs, fixed before the session starts.
///
/// Missing JSON fields take their defaults: a 1440x2898 dark canvas, bottom placement,
/// 50px corners, and the default padding ratios.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoryConfig {
    pub canvas: CanvasSize,
    pub background: BackgroundTone,
    pub placement: PlacementMode,
    pub corner_radius: u32,
    pub padding: PaddingRatios,
    pub filter: ResizeFilter,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            background: BackgroundTone::default(),
            placement: PlacementMode::default(),
            corner_radius: DEFAULT_CORNER_RADIUS,
            padding: PaddingRatios::default(),
            filter: ResizeFilter::default(),
        }
    }
}

impl StoryConfig {
    /// Parse a config from a JSON reader. The result is validated.
    pub fn from_reader<R: std::io::Read>(r: R) -> StoryResult<Self> {
        let cfg: StoryConfig = serde_json::from_reader(r)
            .map_err(|e| StoryError::invalid_config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON string. The result is validated.
    pub fn from_json_str(s: &str) -> StoryResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a config from a JSON file on disk. The result is validated.
    pub fn from_path(path: impl AsRef<Path>) -> StoryResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StoryError::invalid_config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check canvas size and padding ratios.
    ///
    /// The corner radius depends on the placed image size and is checked when the mask is
    /// built.
    pub fn validate(&self) -> StoryResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(StoryError::invalid_config(
                "canvas width/height must be > 0",
            ));
        }
        if !self.padding.all_in_unit_range() {
            return Err(StoryError::invalid_config(
                "padding ratios must be finite and within [0, 1)",
            ));
        }
        compute_padding_with(self.padding, self.canvas.width, self.canvas.height)
            .check_fits(self.canvas.rect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;

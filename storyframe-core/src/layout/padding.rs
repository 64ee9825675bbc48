use crate::foundation::core::Padding;

/// Share of the canvas width reserved on each side.
pub const DEFAULT_HORIZONTAL_RATIO: f64 = 0.0425;
/// Share of the canvas height reserved above the image.
pub const DEFAULT_TOP_RATIO: f64 = 0.15;
/// Share of the canvas height reserved below the image.
pub const DEFAULT_BOTTOM_RATIO: f64 = 0.085;

/// Proportional margins, applied to the canvas size to obtain a [`Padding`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaddingRatios {
    /// Applied to the width for both the left and the right inset.
    pub horizontal: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for PaddingRatios {
    fn default() -> Self {
        Self {
            horizontal: DEFAULT_HORIZONTAL_RATIO,
            top: DEFAULT_TOP_RATIO,
            bottom: DEFAULT_BOTTOM_RATIO,
        }
    }
}

impl PaddingRatios {
    pub(crate) fn all_in_unit_range(self) -> bool {
        [self.horizontal, self.top, self.bottom]
            .into_iter()
            .all(|r| r.is_finite() && (0.0..1.0).contains(&r))
    }
}

/// Padding for a canvas using the default ratios.
pub fn compute_padding(canvas_width: u32, canvas_height: u32) -> Padding {
    compute_padding_with(PaddingRatios::default(), canvas_width, canvas_height)
}

/// Padding for a canvas using caller-provided ratios.
///
/// Does not check that the result fits; see [`Padding::check_fits`].
pub fn compute_padding_with(
    ratios: PaddingRatios,
    canvas_width: u32,
    canvas_height: u32,
) -> Padding {
    let side = scale_round(canvas_width, ratios.horizontal);
    Padding {
        left: side,
        top: scale_round(canvas_height, ratios.top),
        right: side,
        bottom: scale_round(canvas_height, ratios.bottom),
    }
}

fn scale_round(len: u32, ratio: f64) -> u32 {
    (f64::from(len) * ratio).round().max(0.0) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/layout/padding.rs"]
mod tests;

use image::{RgbImage, imageops};

use crate::foundation::core::{Padding, Rect};
use crate::foundation::error::{StoryError, StoryResult};

/// Resampling filter used when the source has to be scaled to the safe width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    #[default]
    Lanczos3,
    CatmullRom,
    Triangle,
}

impl From<ResizeFilter> for imageops::FilterType {
    fn from(f: ResizeFilter) -> Self {
        match f {
            ResizeFilter::Lanczos3 => imageops::FilterType::Lanczos3,
            ResizeFilter::CatmullRom => imageops::FilterType::CatmullRom,
            ResizeFilter::Triangle => imageops::FilterType::Triangle,
        }
    }
}

/// Largest height a resized source may take. Taller results would need buffers far beyond
/// any story canvas.
pub const MAX_RESIZED_HEIGHT: u32 = 1 << 16;

/// Width left between the horizontal paddings.
pub fn safe_width(canvas: Rect, padding: Padding) -> StoryResult<u32> {
    canvas
        .right
        .checked_sub(padding.left)
        .and_then(|w| w.checked_sub(padding.right))
        .filter(|w| *w > 0)
        .ok_or_else(|| {
            StoryError::invalid_config(format!(
                "padding {}+{} leaves no safe width on a {}px canvas",
                padding.left, padding.right, canvas.right
            ))
        })
}

/// Target bounds for scaling `image` to the safe width, or `None` when it already matches.
///
/// Height follows the width ratio and is floored.
pub fn compute_resize(image: Rect, canvas: Rect, padding: Padding) -> StoryResult<Option<Rect>> {
    if image.right == 0 || image.bottom == 0 {
        return Err(StoryError::invalid_image(format!(
            "source image must be non-empty (got {}x{})",
            image.right, image.bottom
        )));
    }

    let safe = safe_width(canvas, padding)?;
    if image.right == safe {
        return Ok(None);
    }

    // floor(bottom * safe / right) without going through floats.
    let new_height = u64::from(image.bottom) * u64::from(safe) / u64::from(image.right);
    let new_height = u32::try_from(new_height).map_err(|_| {
        StoryError::invalid_image(format!(
            "resized height overflows for a {}x{} source",
            image.right, image.bottom
        ))
    })?;
    if new_height > MAX_RESIZED_HEIGHT {
        return Err(StoryError::invalid_image(format!(
            "source {}x{} would resize to {safe}x{new_height} (max height {MAX_RESIZED_HEIGHT})",
            image.right, image.bottom
        )));
    }
    if new_height == 0 {
        return Err(StoryError::invalid_image(format!(
            "source {}x{} collapses to zero height at width {safe}",
            image.right, image.bottom
        )));
    }

    Ok(Some(Rect::from_size(safe, new_height)))
}

/// Resample `image` to the size of `target`.
#[tracing::instrument(skip(image), fields(from_w = image.width(), from_h = image.height()))]
pub fn apply_resize(image: &RgbImage, target: Rect, filter: ResizeFilter) -> RgbImage {
    imageops::resize(image, target.width(), target.height(), filter.into())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/resize.rs"]
mod tests;

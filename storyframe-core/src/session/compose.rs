use std::borrow::Cow;

use image::RgbImage;

use crate::config::model::StoryConfig;
use crate::foundation::core::{Offset, Padding, Rect};
use crate::foundation::error::StoryResult;
use crate::layout::offset::compute_offset;
use crate::layout::padding::compute_padding_with;
use crate::layout::resize::{apply_resize, compute_resize};
use crate::mask::rounded::{OPAQUE, build_rounded_mask};
use crate::render::composite::{blank_canvas, composite};

/// Geometry of one session, computed before any pixels are touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub canvas: Rect,
    pub padding: Padding,
    pub source: Rect,
    /// Target bounds when the source has to be resampled.
    pub resize: Option<Rect>,
    /// Bounds of the image actually pasted (resized or original).
    pub placement: Rect,
    pub offset: Offset,
}

/// Padding, resize target, and paste offset for a source of bounds `source`.
pub fn plan_layout(config: &StoryConfig, source: Rect) -> StoryResult<Layout> {
    let canvas = config.canvas.rect();
    let padding = compute_padding_with(config.padding, canvas.width(), canvas.height());
    padding.check_fits(canvas)?;

    let resize = compute_resize(source, canvas, padding)?;
    let placement = resize.unwrap_or(source);
    let offset = compute_offset(placement, canvas, padding, config.placement);

    Ok(Layout {
        canvas,
        padding,
        source,
        resize,
        placement,
        offset,
    })
}

/// Place `source` on a fresh canvas according to `config` and return the canvas.
///
/// Every check runs before the canvas is allocated; on error nothing is produced. The
/// resized copy and the mask are dropped when this returns.
#[tracing::instrument(
    skip(config, source),
    fields(src_w = source.width(), src_h = source.height())
)]
pub fn compose(config: &StoryConfig, source: &RgbImage) -> StoryResult<RgbImage> {
    config.validate()?;
    let layout = plan_layout(config, Rect::from_size(source.width(), source.height()))?;
    tracing::debug!(padding = ?layout.padding, "computed padding");

    let mask = build_rounded_mask(
        layout.placement.width(),
        layout.placement.height(),
        config.corner_radius,
        OPAQUE,
    )?;

    let placed: Cow<'_, RgbImage> = match layout.resize {
        Some(target) => {
            tracing::debug!(
                width = target.width(),
                height = target.height(),
                "resizing source"
            );
            Cow::Owned(apply_resize(source, target, config.filter))
        }
        None => Cow::Borrowed(source),
    };

    tracing::debug!(
        placement = config.placement.as_str(),
        x = layout.offset.x,
        y = layout.offset.y,
        "placing image"
    );
    let mut canvas = blank_canvas(config.canvas, config.background);
    composite(&mut canvas, &placed, &mask, layout.offset)?;
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/session/compose.rs"]
mod tests;

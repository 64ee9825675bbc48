use image::{GrayImage, Luma, imageops};

use crate::foundation::error::{StoryError, StoryResult};

/// Corner radius used when none is configured.
pub const DEFAULT_CORNER_RADIUS: u32 = 50;
/// Mask value for fully opaque pixels.
pub const OPAQUE: u8 = 255;

/// Build a `width`x`height` opacity mask shaped like a rounded rectangle.
///
/// The interior and straight edges carry `fill`; each corner falls to 0 outside a circular
/// arc of `radius`. A pixel counts as inside the arc when its center lies within `radius` of
/// the arc's center, so the mask has no anti-aliased fringe.
///
/// `2 * radius` must not exceed the shorter side; the radius is never clamped.
pub fn build_rounded_mask(
    width: u32,
    height: u32,
    radius: u32,
    fill: u8,
) -> StoryResult<GrayImage> {
    if width == 0 || height == 0 {
        return Err(StoryError::invalid_image(format!(
            "cannot mask an empty {width}x{height} rectangle"
        )));
    }
    if u64::from(radius) * 2 > u64::from(width.min(height)) {
        return Err(StoryError::invalid_radius(format!(
            "radius {radius} does not fit a {width}x{height} rectangle (max {})",
            width.min(height) / 2
        )));
    }

    let mut mask = GrayImage::from_pixel(width, height, Luma([fill]));
    if radius == 0 {
        return Ok(mask);
    }

    let disk = render_disk(radius, fill);
    let r = radius;
    let tiles = [
        // (disk x, disk y, mask x, mask y)
        (0, 0, 0, 0),
        (r, 0, width - r, 0),
        (0, r, 0, height - r),
        (r, r, width - r, height - r),
    ];
    for (sx, sy, dx, dy) in tiles {
        let tile = imageops::crop_imm(&disk, sx, sy, r, r).to_image();
        imageops::replace(&mut mask, &tile, i64::from(dx), i64::from(dy));
    }

    Ok(mask)
}

/// Filled disk of diameter `2 * radius` in a square buffer; `fill` inside, 0 outside.
fn render_disk(radius: u32, fill: u8) -> GrayImage {
    let side = radius * 2;
    let r2 = i64::from(side) * i64::from(side);
    // Doubled coordinates keep the pixel-center test exact.
    GrayImage::from_fn(side, side, |x, y| {
        let dx = 2 * i64::from(x) + 1 - i64::from(side);
        let dy = 2 * i64::from(y) + 1 - i64::from(side);
        if dx * dx + dy * dy <= r2 {
            Luma([fill])
        } else {
            Luma([0])
        }
    })
}

#[cfg(test)]
#[path = "../../tests/unit/mask/rounded.rs"]
mod tests;

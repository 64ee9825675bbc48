use image::{GrayImage, Rgb, RgbImage};

use crate::foundation::core::{BackgroundTone, CanvasSize, Offset};
use crate::foundation::error::{StoryError, StoryResult};
use crate::foundation::math::lerp_u8;

/// Canvas of `size` filled with the tone's solid color.
pub fn blank_canvas(size: CanvasSize, tone: BackgroundTone) -> RgbImage {
    RgbImage::from_pixel(size.width, size.height, Rgb(tone.rgb()))
}

/// Blend `image` onto `canvas` at `offset`, weighting each pixel by `mask`.
///
/// `out = image * m/255 + canvas * (1 - m/255)` per channel. Canvas pixels outside the pasted
/// rectangle are left alone, and parts of the image that land off-canvas are dropped.
pub fn composite(
    canvas: &mut RgbImage,
    image: &RgbImage,
    mask: &GrayImage,
    offset: Offset,
) -> StoryResult<()> {
    if mask.dimensions() != image.dimensions() {
        return Err(StoryError::invalid_mask(format!(
            "mask is {}x{} but pasted image is {}x{}",
            mask.width(),
            mask.height(),
            image.width(),
            image.height()
        )));
    }

    let Some((xs, ys)) = visible_span(canvas.dimensions(), image.dimensions(), offset) else {
        return Ok(());
    };

    for y in ys {
        // Both spans are clipped to the canvas, so these stay in range.
        let cy = (offset.y + y) as u32;
        for x in xs.clone() {
            let cx = (offset.x + x) as u32;
            let a = mask.get_pixel(x as u32, y as u32).0[0];
            if a == 0 {
                continue;
            }
            let src = image.get_pixel(x as u32, y as u32).0;
            let dst = canvas.get_pixel_mut(cx, cy);
            for (d, s) in dst.0.iter_mut().zip(src) {
                *d = lerp_u8(*d, s, a);
            }
        }
    }

    Ok(())
}

type Span = std::ops::Range<i64>;

/// Image-space columns and rows that land on the canvas, or `None` if nothing does.
fn visible_span(canvas: (u32, u32), image: (u32, u32), offset: Offset) -> Option<(Span, Span)> {
    fn axis(canvas_len: u32, image_len: u32, at: i64) -> Span {
        let start = (-at).max(0);
        let end = (i64::from(canvas_len) - at).min(i64::from(image_len));
        start..end.max(start)
    }

    let xs = axis(canvas.0, image.0, offset.x);
    let ys = axis(canvas.1, image.1, offset.y);
    if xs.is_empty() || ys.is_empty() {
        return None;
    }
    Some((xs, ys))
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;

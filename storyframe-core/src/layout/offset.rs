use crate::foundation::core::{Offset, Padding, PlacementMode, Rect};

/// Top-left paste position for `placement` on `canvas`.
///
/// `x` is always the left padding; `mode` only moves the image vertically.
pub fn compute_offset(
    placement: Rect,
    canvas: Rect,
    padding: Padding,
    mode: PlacementMode,
) -> Offset {
    let canvas_h = i64::from(canvas.bottom);
    let placed_h = i64::from(placement.bottom);
    let y = match mode {
        PlacementMode::Top => i64::from(padding.top),
        PlacementMode::Center => canvas_h / 2 - placed_h / 2,
        PlacementMode::Bottom => canvas_h - i64::from(padding.bottom) - placed_h,
    };
    Offset {
        x: i64::from(padding.left),
        y,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/offset.rs"]
mod tests;

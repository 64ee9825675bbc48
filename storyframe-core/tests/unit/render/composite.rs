use super::*;

fn solid(w: u32, h: u32, rgb: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(w, h, Rgb(rgb))
}

fn opaque(w: u32, h: u32) -> GrayImage {
    GrayImage::from_pixel(w, h, image::Luma([255]))
}

#[test]
fn blank_canvas_uses_tone_color() {
    let dark = blank_canvas(
        CanvasSize {
            width: 3,
            height: 2,
        },
        BackgroundTone::Dark,
    );
    assert_eq!(dark.dimensions(), (3, 2));
    assert!(dark.pixels().all(|p| p.0 == [0, 0, 0]));

    let light = blank_canvas(
        CanvasSize {
            width: 1,
            height: 1,
        },
        BackgroundTone::Light,
    );
    assert_eq!(light.get_pixel(0, 0).0, [255, 255, 255]);
}

#[test]
fn opaque_mask_copies_image_and_leaves_rest_untouched() {
    let mut canvas = solid(10, 10, [255, 255, 255]);
    let image = solid(3, 2, [10, 20, 30]);
    composite(&mut canvas, &image, &opaque(3, 2), Offset { x: 4, y: 5 }).unwrap();

    for y in 0..10 {
        for x in 0..10 {
            let inside = (4..7).contains(&x) && (5..7).contains(&y);
            let want = if inside { [10, 20, 30] } else { [255, 255, 255] };
            assert_eq!(canvas.get_pixel(x, y).0, want, "({x},{y})");
        }
    }
}

#[test]
fn transparent_mask_keeps_canvas() {
    let mut canvas = solid(4, 4, [0, 0, 0]);
    let image = solid(4, 4, [200, 200, 200]);
    let mask = GrayImage::new(4, 4);
    composite(&mut canvas, &image, &mask, Offset { x: 0, y: 0 }).unwrap();
    assert!(canvas.pixels().all(|p| p.0 == [0, 0, 0]));
}

#[test]
fn partial_mask_blends_per_channel() {
    let mut canvas = solid(1, 1, [255, 255, 255]);
    let image = solid(1, 1, [0, 100, 255]);
    let mask = GrayImage::from_pixel(1, 1, image::Luma([128]));
    composite(&mut canvas, &image, &mask, Offset { x: 0, y: 0 }).unwrap();
    // (src*128 + 255*127 + 127) / 255
    assert_eq!(canvas.get_pixel(0, 0).0, [127, 177, 255]);
}

#[test]
fn off_canvas_parts_are_clipped() {
    let mut canvas = solid(4, 4, [0, 0, 0]);
    let image = solid(3, 3, [9, 9, 9]);
    composite(&mut canvas, &image, &opaque(3, 3), Offset { x: -1, y: 2 }).unwrap();
    let painted: Vec<(u32, u32)> = canvas
        .enumerate_pixels()
        .filter(|(_, _, p)| p.0 == [9, 9, 9])
        .map(|(x, y, _)| (x, y))
        .collect();
    assert_eq!(painted, vec![(0, 2), (1, 2), (0, 3), (1, 3)]);

    // Entirely off-canvas is a no-op rather than an error.
    composite(&mut canvas, &image, &opaque(3, 3), Offset { x: 10, y: -10 }).unwrap();
}

#[test]
fn mismatched_mask_is_rejected_before_touching_canvas() {
    let mut canvas = solid(4, 4, [1, 2, 3]);
    let image = solid(2, 2, [9, 9, 9]);
    let err = composite(&mut canvas, &image, &opaque(2, 3), Offset { x: 0, y: 0 }).unwrap_err();
    assert!(matches!(err, StoryError::InvalidMask(_)));
    assert!(canvas.pixels().all(|p| p.0 == [1, 2, 3]));
}

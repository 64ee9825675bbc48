use super::*;

#[test]
fn rect_equality_is_structural() {
    assert_eq!(Rect::from_size(10, 20), Rect::from_size(10, 20));
    assert_ne!(Rect::from_size(10, 20), Rect::from_size(20, 10));
    let shifted = Rect {
        left: 1,
        ..Rect::from_size(10, 20)
    };
    assert_ne!(shifted, Rect::from_size(10, 20));
    assert_eq!(shifted.width(), 9);
}

#[test]
fn rect_empty_when_either_axis_is_zero() {
    assert!(Rect::from_size(0, 5).is_empty());
    assert!(Rect::from_size(5, 0).is_empty());
    assert!(!Rect::from_size(1, 1).is_empty());
}

#[test]
fn padding_must_leave_room_on_both_axes() {
    let canvas = Rect::from_size(100, 100);
    let ok = Padding {
        left: 10,
        top: 30,
        right: 10,
        bottom: 20,
    };
    ok.check_fits(canvas).unwrap();

    let too_wide = Padding {
        left: 50,
        right: 50,
        ..ok
    };
    assert!(matches!(
        too_wide.check_fits(canvas),
        Err(StoryError::InvalidConfig(_))
    ));

    let too_tall = Padding {
        top: 99,
        bottom: 1,
        ..ok
    };
    assert!(matches!(
        too_tall.check_fits(canvas),
        Err(StoryError::InvalidConfig(_))
    ));
}

#[test]
fn placement_index_rejects_out_of_range() {
    assert_eq!(PlacementMode::from_index(1).unwrap(), PlacementMode::Top);
    assert_eq!(PlacementMode::from_index(2).unwrap(), PlacementMode::Center);
    assert_eq!(PlacementMode::from_index(3).unwrap(), PlacementMode::Bottom);
    for bad in [0u8, 4, 255] {
        assert!(matches!(
            PlacementMode::from_index(bad),
            Err(StoryError::InvalidConfig(_))
        ));
    }
}

#[test]
fn placement_parses_names_case_insensitively() {
    assert_eq!(" Top ".parse::<PlacementMode>().unwrap(), PlacementMode::Top);
    assert_eq!(
        "CENTER".parse::<PlacementMode>().unwrap(),
        PlacementMode::Center
    );
    assert!("middle".parse::<PlacementMode>().is_err());
    assert_eq!("2".parse::<PlacementMode>().unwrap(), PlacementMode::Center);
    assert!(matches!(
        "4".parse::<PlacementMode>(),
        Err(StoryError::InvalidConfig(_))
    ));
    for mode in [
        PlacementMode::Top,
        PlacementMode::Center,
        PlacementMode::Bottom,
    ] {
        assert_eq!(mode.as_str().parse::<PlacementMode>().unwrap(), mode);
    }
}

#[test]
fn background_tones_are_pure_black_and_white() {
    assert_eq!(BackgroundTone::Dark.rgb(), [0, 0, 0]);
    assert_eq!(BackgroundTone::Light.rgb(), [255, 255, 255]);
    assert_eq!(BackgroundTone::default(), BackgroundTone::Dark);
}

#[test]
fn default_canvas_is_story_sized() {
    let c = CanvasSize::default();
    assert_eq!((c.width, c.height), (1440, 2898));
    assert_eq!(c.rect(), Rect::from_size(1440, 2898));
}

use approx::assert_relative_eq;
use proptest::prelude::*;

use bandcut_core::error::BandcutError;
use bandcut_core::geometry::DisplayGeometry;

#[test]
fn test_compute_fit_to_height_scale() {
    let g = DisplayGeometry::compute(800, 1000, 500.0).unwrap();
    assert_relative_eq!(g.scale, 0.5);
    assert_eq!(g.display_width(), 400);
    assert_relative_eq!(g.display_height(), 500.0);
    assert_relative_eq!(g.top_padding, 20.0);
    assert_relative_eq!(g.bottom_padding, 20.0);
}

#[test]
fn test_display_width_is_rounded() {
    let g = DisplayGeometry::compute(333, 1000, 500.0).unwrap();
    // 333 * 0.5 = 166.5
    assert_eq!(g.display_width(), 167);
}

#[test]
fn test_upscaling_small_images() {
    let g = DisplayGeometry::compute(10, 100, 400.0).unwrap();
    assert_relative_eq!(g.scale, 4.0);
    assert_relative_eq!(g.to_image_space(20.0 + 40.0), 10.0);
}

#[test]
fn test_zero_height_rejected() {
    let err = DisplayGeometry::compute(100, 0, 500.0).unwrap_err();
    assert!(matches!(err, BandcutError::DegenerateImage { height: 0, .. }));
}

#[test]
fn test_zero_width_rejected() {
    assert!(DisplayGeometry::compute(0, 100, 500.0).is_err());
}

#[test]
fn test_non_positive_display_height_rejected() {
    assert!(DisplayGeometry::compute(100, 100, 0.0).is_err());
    assert!(DisplayGeometry::compute(100, 100, -10.0).is_err());
    assert!(DisplayGeometry::compute(100, 100, f64::NAN).is_err());
}

#[test]
fn test_scenario_without_padding() {
    let g = DisplayGeometry::compute(600, 1000, 500.0)
        .unwrap()
        .with_padding(0.0, 0.0);
    assert_relative_eq!(g.to_image_space(100.0), 200.0);
    assert_relative_eq!(g.to_image_space(300.0), 600.0);
}

#[test]
fn test_padding_is_subtracted() {
    let g = DisplayGeometry::compute(600, 1000, 500.0).unwrap();
    assert_relative_eq!(g.to_image_space(120.0), 200.0);
    assert_relative_eq!(g.to_display_space(200.0), 120.0);
}

#[test]
fn test_to_image_space_clamps_outside_image() {
    let g = DisplayGeometry::compute(600, 1000, 500.0).unwrap();
    // Above the image, inside the top padding.
    assert_relative_eq!(g.to_image_space(5.0), 0.0);
    // Below the image, inside the bottom padding.
    assert_relative_eq!(g.to_image_space(530.0), 1000.0);
}

#[test]
fn test_image_distance() {
    let g = DisplayGeometry::compute(600, 1000, 500.0).unwrap();
    assert_relative_eq!(g.to_image_distance(4.0), 8.0);
}

proptest! {
    #[test]
    fn prop_round_trip(
        image_height in 1u32..20_000,
        available in 1.0f64..5_000.0,
        fraction in 0.0f64..=1.0,
    ) {
        let g = DisplayGeometry::compute(100, image_height, available).unwrap();
        let y = fraction * image_height as f64;
        let back = g.to_image_space(g.to_display_space(y));
        prop_assert!((back - y).abs() <= 1e-6 * image_height as f64);
    }

    #[test]
    fn prop_image_space_stays_in_bounds(
        image_height in 1u32..20_000,
        available in 1.0f64..5_000.0,
        display_y in -10_000.0f64..10_000.0,
    ) {
        let g = DisplayGeometry::compute(100, image_height, available).unwrap();
        let y = g.to_image_space(display_y);
        prop_assert!(y >= 0.0);
        prop_assert!(y <= image_height as f64 * (1.0 + 1e-12));
    }
}

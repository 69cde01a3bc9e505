use glow_core::sampler::{clamp_pct, sample_pointer};
use glow_core::TargetPosition;

#[test]
fn clamp_maps_outside_values_to_nearer_bound() {
    assert_eq!(clamp_pct(0.0), 5.0);
    assert_eq!(clamp_pct(-20.0), 5.0);
    assert_eq!(clamp_pct(100.0), 95.0);
    assert_eq!(clamp_pct(1e6), 95.0);
}

#[test]
fn clamp_keeps_inside_values_unchanged() {
    assert_eq!(clamp_pct(5.0), 5.0);
    assert_eq!(clamp_pct(50.0), 50.0);
    assert_eq!(clamp_pct(95.0), 95.0);
}

#[test]
fn mid_screen_pointer_maps_to_center() {
    let target = sample_pointer(960.0, 540.0, 1920.0, 1080.0);
    assert_eq!(target, Some(TargetPosition { x: 50.0, y: 50.0 }));
}

#[test]
fn origin_pointer_is_clamped_off_the_edge() {
    let target = sample_pointer(0.0, 0.0, 100.0, 100.0);
    assert_eq!(target, Some(TargetPosition { x: 5.0, y: 5.0 }));
}

#[test]
fn far_pointer_is_clamped_to_upper_bound() {
    let target = sample_pointer(10_000.0, 10_000.0, 1920.0, 1080.0);
    assert_eq!(target, Some(TargetPosition { x: 95.0, y: 95.0 }));
}

#[test]
fn zero_viewport_produces_no_update() {
    assert_eq!(sample_pointer(100.0, 100.0, 0.0, 1080.0), None);
    assert_eq!(sample_pointer(100.0, 100.0, 1920.0, 0.0), None);
    assert_eq!(sample_pointer(100.0, 100.0, -1.0, -1.0), None);
}

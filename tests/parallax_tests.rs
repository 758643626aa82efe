// Host-side tests for the hero parallax accumulator and floating elements.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod motion {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod parallax {
        include!("../src/core/parallax.rs");
    }
}

use glam::Vec2;
use motion::constants::MAX_Y_OFFSET;
use motion::parallax::*;

#[test]
fn rest_state_before_any_pointer_event() {
    let acc = ParallaxAccumulator::new();
    assert_eq!(acc.accumulated_y(), 0.0);
    assert_eq!(acc.instantaneous_x(), 0.0);
    assert_eq!(acc.target_for(100.0), Vec2::ZERO);
}

#[test]
fn pointer_coordinates_normalize_to_unit_range() {
    assert_eq!(normalize_axis(0.0, 800.0), -1.0);
    assert_eq!(normalize_axis(400.0, 800.0), 0.0);
    assert_eq!(normalize_axis(800.0, 800.0), 1.0);
    // Outside the viewport (e.g. pointer captured past the edge)
    assert_eq!(normalize_axis(1200.0, 800.0), 1.0);

    let n = normalize_pointer(Vec2::new(200.0, 600.0), Vec2::new(800.0, 800.0));
    assert_eq!(n, Vec2::new(-0.5, 0.5));
}

#[test]
fn zero_height_viewport_never_produces_nan() {
    let mut acc = ParallaxAccumulator::new();
    acc.pointer_move(Vec2::new(100.0, 300.0), Vec2::new(800.0, 0.0));
    acc.pointer_move(Vec2::new(f32::NAN, 10.0), Vec2::new(f32::NAN, 0.0));
    assert!(acc.accumulated_y().is_finite());
    assert!(acc.instantaneous_x().is_finite());

    let mut el = FloatingElement::new(1, 100.0);
    for i in 0..10 {
        let p = el.step(&acc, i as f32 * 0.016);
        assert!(p.x.is_finite() && p.y.is_finite());
    }
}

#[test]
fn upward_movement_never_accumulates() {
    let mut acc = ParallaxAccumulator::new();
    for step in 1..=20 {
        let y = -(step as f32) * 0.05;
        acc.apply_normalized(Vec2::new(0.0, y));
        assert_eq!(acc.accumulated_y(), 0.0, "accumulated on upward move to {y}");
    }
}

#[test]
fn upward_moves_still_update_the_baseline() {
    let mut acc = ParallaxAccumulator::new();
    acc.apply_normalized(Vec2::new(0.0, 0.5));
    assert_eq!(acc.accumulated_y(), 0.5);
    acc.apply_normalized(Vec2::new(0.0, -0.5));
    assert_eq!(acc.accumulated_y(), 0.5);
    // Delta is measured from -0.5, not from the earlier 0.5.
    acc.apply_normalized(Vec2::new(0.0, 0.0));
    assert_eq!(acc.accumulated_y(), 1.0);
}

#[test]
fn downward_travel_wraps_to_rest_once_past_the_limit() {
    let mut acc = ParallaxAccumulator::new();
    let sweep_down: Vec<f32> = (0..=8).map(|i| -1.0 + i as f32 * 0.25).collect();
    let mut wraps = 0;

    // Down, up, down: two full sweeps of 2.0 each.
    for &y in &sweep_down {
        wraps += acc.apply_normalized(Vec2::new(0.0, y)) as u32;
    }
    assert_eq!(acc.accumulated_y(), 2.0);
    for &y in sweep_down.iter().rev() {
        wraps += acc.apply_normalized(Vec2::new(0.0, y)) as u32;
    }
    assert_eq!(acc.accumulated_y(), 2.0);

    let mut history = Vec::new();
    for &y in &sweep_down {
        wraps += acc.apply_normalized(Vec2::new(0.0, y)) as u32;
        history.push(acc.accumulated_y());
        assert!(acc.accumulated_y() <= MAX_Y_OFFSET);
    }
    assert_eq!(wraps, 1);
    // history[0] is the no-op jump back to -1. Reaching 3.5 exactly does not
    // wrap; 3.75 does, and the last step resumes from 0.
    assert_eq!(history[6], 3.5);
    assert_eq!(history[7], 0.0);
    assert_eq!(acc.accumulated_y(), 0.25);
}

#[test]
fn horizontal_offset_tracks_the_pointer_directly() {
    let mut acc = ParallaxAccumulator::new();
    acc.apply_normalized(Vec2::new(0.8, 0.0));
    acc.apply_normalized(Vec2::new(-0.3, 0.0));
    assert_eq!(acc.instantaneous_x(), -0.3);
}

#[test]
fn deeper_elements_move_further_and_opposite() {
    let mut acc = ParallaxAccumulator::new();
    acc.apply_normalized(Vec2::new(0.5, 0.5));
    let near = acc.target_for(100.0);
    let far = acc.target_for(35.0);
    assert_eq!(near, Vec2::new(-50.0, -50.0));
    assert!(far.x > near.x && far.x < 0.0);
}

#[test]
fn smoothing_with_target_at_position_is_a_no_op() {
    let p = Vec2::new(12.5, -7.25);
    assert_eq!(smooth_toward(p, p, 0.1), p);
}

#[test]
fn idle_drift_starts_at_phase_offset() {
    let idle = idle_offset(0.0, 0);
    assert_eq!(idle, Vec2::new(0.0, 3.0));
    let other = idle_offset(0.0, 1);
    assert_ne!(idle, other);
    assert!(other.length() <= 3.0 * 2f32.sqrt() + 1e-5);
}

#[test]
fn element_converges_on_target_plus_idle() {
    let mut acc = ParallaxAccumulator::new();
    acc.apply_normalized(Vec2::new(0.5, 0.0));
    let mut el = FloatingElement::new(0, 100.0);
    for _ in 0..300 {
        el.step(&acc, 0.0);
    }
    let expected = Vec2::new(-50.0, 3.0);
    assert!((el.position - expected).length() < 1e-3, "{:?}", el.position);
}

#[test]
fn one_step_moves_a_tenth_of_the_way() {
    let mut acc = ParallaxAccumulator::new();
    acc.apply_normalized(Vec2::new(1.0, 0.0));
    let mut el = FloatingElement::new(0, 100.0);
    let p = el.step(&acc, 0.0);
    // target (-100, 0) + idle (0, 3)
    assert!((p.x + 10.0).abs() < 1e-4);
    assert!((p.y - 0.3).abs() < 1e-4);
}

#[test]
fn hover_only_affects_the_glass_flag() {
    let elements = vec![FloatingElement::new(1, 100.0), FloatingElement::new(2, 60.0)];
    let mut plain = HeroField::new(elements.clone());
    let mut hovered = HeroField::new(elements);
    hovered.hover(2);

    assert!(hovered.is_deemphasized(1));
    assert!(!hovered.is_deemphasized(2));
    assert!(!plain.is_deemphasized(1));

    for field in [&mut plain, &mut hovered] {
        field.pointer.apply_normalized(Vec2::new(0.4, 0.6));
        field.step(&[0.5, 0.5]);
    }
    assert_eq!(plain.elements, hovered.elements);

    hovered.leave();
    assert!(!hovered.is_deemphasized(1));
    assert!(!hovered.is_deemphasized(2));
}

#[test]
fn elements_share_pointer_state_but_not_positions() {
    let mut field = HeroField::new(vec![
        FloatingElement::new(1, 100.0),
        FloatingElement::new(2, 35.0),
    ]);
    field.pointer.apply_normalized(Vec2::new(0.5, 0.5));
    field.step(&[1.0]);
    let a = field.elements[0].position;
    let b = field.elements[1].position;
    assert_ne!(a, b);
    assert!(a.x < b.x);
}

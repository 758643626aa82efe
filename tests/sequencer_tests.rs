// Host-side tests for the scroll sequencer and its word tweens.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod motion {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
    pub mod sequencer {
        include!("../src/core/sequencer.rs");
    }
}

use motion::sequencer::*;
use motion::tween::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn sentence_index_stays_in_range_and_never_decreases() {
    for n in 1..=6usize {
        let mut prev = 0usize;
        for step in 0..=1000 {
            let p = step as f32 / 1000.0;
            let frame = scroll_frame(p, n).unwrap();
            assert!(frame.sentence_index < n, "index out of range at p={p} n={n}");
            assert!(frame.sentence_index >= prev, "index went backwards at p={p}");
            assert!((0.0..=1.0).contains(&frame.local_progress));
            prev = frame.sentence_index;
        }
    }
}

#[test]
fn region_endpoints_map_to_first_and_last_sentence() {
    for n in 1..=5usize {
        let start = scroll_frame(0.0, n).unwrap();
        assert_eq!(start.sentence_index, 0);
        assert_eq!(start.local_progress, 0.0);

        let end = scroll_frame(1.0, n).unwrap();
        assert_eq!(end.sentence_index, n - 1);
        assert_eq!(end.local_progress, 1.0);
    }
}

#[test]
fn malformed_progress_is_clamped() {
    assert_eq!(
        scroll_frame(f32::NAN, 3),
        Some(ScrollFrame {
            sentence_index: 0,
            local_progress: 0.0
        })
    );
    assert_eq!(scroll_frame(-0.4, 3).unwrap().sentence_index, 0);
    let past_end = scroll_frame(1.7, 3).unwrap();
    assert_eq!(past_end.sentence_index, 2);
    assert_eq!(past_end.local_progress, 1.0);
    assert_eq!(scroll_frame(f32::INFINITY, 3).unwrap().sentence_index, 0);
}

#[test]
fn no_sentences_means_no_frame() {
    assert!(scroll_frame(0.5, 0).is_none());

    let mut seq = ScrollSequencer::new(Vec::<String>::new());
    assert!(seq.is_empty());
    assert!(!seq.set_progress(0.5));
    seq.tick(0.016);
    assert_eq!(seq.active_index(), None);
    assert!(seq.active_sentence().is_none());
    assert!(seq.words().is_empty());
}

#[test]
fn words_are_hidden_at_the_start_of_a_window() {
    for i in 0..8 {
        let m = word_motion(i, 0.0, 0);
        assert_eq!(m.opacity, 0.0, "word {i} visible at local progress 0");
    }
}

#[test]
fn first_word_is_fully_visible_mid_window() {
    for step in 1..40 {
        let local = 0.3 + step as f32 * 0.01;
        if local >= 0.7 {
            break;
        }
        let m = word_motion(0, local, 0);
        assert!(m.opacity > 0.89, "opacity {} at {local}", m.opacity);
        assert_eq!(m.exit_progress, 0.0);
    }
    assert_eq!(word_motion(0, 0.5, 0).opacity, 1.0);
}

#[test]
fn every_word_has_left_at_the_end_of_a_window() {
    for sentence in 0..2 {
        for i in 0..10 {
            let m = word_motion(i, 1.0, sentence);
            assert_eq!(m.exit_progress, 1.0);
            assert_eq!(m.opacity, 0.0);
        }
    }
}

#[test]
fn later_words_lag_behind_earlier_ones() {
    let first = word_motion(0, 0.3, 0);
    let third = word_motion(2, 0.3, 0);
    assert!(first.word_progress > third.word_progress);
    assert!(approx(third.word_progress, (0.3 - 0.16) * 1.5));
}

#[test]
fn slide_direction_alternates_with_sentence_parity() {
    assert_eq!(slide_sign(0), -1.0);
    assert_eq!(slide_sign(1), 1.0);
    assert_eq!(slide_sign(4), -1.0);

    let even = word_motion(0, 0.0, 0);
    assert_eq!(even.word_progress, 0.0);
    assert_eq!(even.entry_y, -100.0);

    let odd = word_motion(0, 0.0, 1);
    assert_eq!(odd.entry_y, 100.0);
}

#[test]
fn two_sentence_scenario_at_quarter_progress() {
    let frame = scroll_frame(0.25, 2).unwrap();
    assert_eq!(frame.sentence_index, 0);
    assert!(approx(frame.local_progress, 0.5));

    let a = word_motion(0, frame.local_progress, frame.sentence_index);
    assert!(approx(a.word_progress, 0.75));
    assert_eq!(a.exit_progress, 0.0);
    assert!(approx(a.entry_y, -25.0));
    assert!(approx(a.offset_y, -25.0));
    assert!(approx(a.opacity, 1.0));

    let mut seq = ScrollSequencer::new(["A B", "C D E"]);
    assert!(!seq.set_progress(0.25));
    let texts: Vec<&str> = seq.words().iter().map(|w| w.text.as_str()).collect();
    assert_eq!(texts, ["A", "B"]);
    assert!(approx(seq.words()[0].target.offset_y, -25.0));
    assert!(approx(seq.words()[1].target.word_progress, (0.5 - 0.08) * 1.5));
}

#[test]
fn words_follow_the_active_sentence_in_both_directions() {
    let mut seq = ScrollSequencer::new(["A B", "C D E"]);
    assert_eq!(seq.active_index(), Some(0));

    assert!(seq.set_progress(0.75));
    assert_eq!(seq.active_index(), Some(1));
    assert_eq!(seq.active_sentence(), Some("C D E"));
    assert_eq!(seq.words().len(), 3);
    // Odd sentence: words sit below their slot.
    assert!(seq.words()[2].target.offset_y > 0.0);

    // Same window again: no rebuild.
    assert!(!seq.set_progress(0.8));

    // Rapid reversal straight back to the first sentence.
    assert!(seq.set_progress(0.1));
    assert_eq!(seq.active_index(), Some(0));
    let texts: Vec<&str> = seq.words().iter().map(|w| w.text.as_str()).collect();
    assert_eq!(texts, ["A", "B"]);
}

#[test]
fn sentence_without_words_is_skipped_safely() {
    let mut seq = ScrollSequencer::new(["   ", "X"]);
    assert!(seq.words().is_empty());
    seq.set_progress(0.2);
    seq.tick(0.1);
    assert_eq!(seq.active_index(), Some(0));
    assert!(seq.words().is_empty());

    assert!(seq.set_progress(0.9));
    assert_eq!(seq.words().len(), 1);
}

#[test]
fn displayed_word_state_eases_toward_the_target() {
    let mut seq = ScrollSequencer::new(["A B", "C D E"]);
    let start = seq.words()[0].offset_y();
    assert_eq!(start, -100.0);
    assert_eq!(seq.words()[0].opacity(), 0.0);

    seq.set_progress(0.25);
    // Nothing moves until time passes.
    assert_eq!(seq.words()[0].offset_y(), -100.0);

    seq.tick(0.15);
    let halfway = seq.words()[0].offset_y();
    assert!(approx(halfway, -100.0 + 75.0 * 0.75), "got {halfway}");

    assert!(!seq.is_settled());

    seq.tick(0.2);
    assert!(approx(seq.words()[0].offset_y(), -25.0));
    assert!(approx(seq.words()[0].opacity(), 1.0));
    assert!(seq.words()[0].is_settled());
    assert!(seq.is_settled());

    // Moving within the same window wakes the tweens again.
    seq.set_progress(0.3);
    assert!(!seq.is_settled());
}

#[test]
fn empty_sequencer_counts_as_settled() {
    let seq = ScrollSequencer::new(Vec::<String>::new());
    assert!(seq.is_settled());
    let blank = ScrollSequencer::new(["  "]);
    assert!(blank.is_settled());
}

#[test]
fn ease_out_quad_endpoints_and_midpoint() {
    assert_eq!(ease_out_quad(0.0), 0.0);
    assert_eq!(ease_out_quad(1.0), 1.0);
    assert!(approx(ease_out_quad(0.5), 0.75));
    assert_eq!(ease_out_quad(2.0), 1.0);
}

#[test]
fn retargeting_mid_flight_does_not_jump() {
    let mut t = Tween::at(0.0, 0.3);
    t.retarget(10.0);
    t.step(0.1);
    let before = t.value();
    t.retarget(-10.0);
    assert!(approx(t.value(), before));
    t.step(0.3);
    assert!(approx(t.value(), -10.0));
}

#[test]
fn repeating_the_same_target_keeps_the_clock_running() {
    let mut t = Tween::at(0.0, 0.3);
    t.retarget(1.0);
    t.step(0.2);
    let v = t.value();
    t.retarget(1.0);
    assert_eq!(t.value(), v);
    t.step(0.2);
    assert!(t.is_settled());
    assert_eq!(t.value(), 1.0);
}

#[test]
fn resting_tween_is_settled_and_ignores_bad_targets() {
    let mut t = Tween::at(f32::NAN, 0.3);
    assert!(t.is_settled());
    assert_eq!(t.value(), 0.0);
    t.retarget(f32::INFINITY);
    assert!(t.is_settled());
    t.step(f32::NAN);
    assert_eq!(t.value(), 0.0);
}

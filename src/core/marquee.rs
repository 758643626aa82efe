use super::constants::{MARQUEE_PERIOD_SEC, MARQUEE_TRAVEL};

/// Horizontal offset of the logo track as a fraction of its width. The track
/// holds the logo list twice, so sliding by half of it loops seamlessly.
pub fn marquee_offset(elapsed_sec: f32) -> f32 {
    if !elapsed_sec.is_finite() || elapsed_sec <= 0.0 {
        return 0.0;
    }
    let phase = (elapsed_sec % MARQUEE_PERIOD_SEC) / MARQUEE_PERIOD_SEC;
    -phase * MARQUEE_TRAVEL
}

// Short eased transitions used to display per-word state.
//
// A tween always moves from the value it is currently showing toward the
// most recent target, so retargeting mid-flight never jumps.

/// `power2.out` easing: fast start, gentle landing.
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
}

impl Tween {
    /// A tween already resting at `value`.
    pub fn at(value: f32, duration: f32) -> Self {
        let value = if value.is_finite() { value } else { 0.0 };
        Self {
            from: value,
            to: value,
            elapsed: duration.max(0.0),
            duration: duration.max(0.0),
        }
    }

    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            return self.to;
        }
        let t = ease_out_quad(self.elapsed / self.duration);
        self.from + (self.to - self.from) * t
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Start a new transition from the displayed value. Repeating the current
    /// target is a no-op so per-frame retargeting does not restart the clock.
    pub fn retarget(&mut self, to: f32) {
        if !to.is_finite() || to == self.to {
            return;
        }
        self.from = self.value();
        self.to = to;
        self.elapsed = 0.0;
    }

    pub fn step(&mut self, dt_sec: f32) {
        if dt_sec.is_finite() && dt_sec > 0.0 {
            self.elapsed = (self.elapsed + dt_sec).min(self.duration);
        }
    }
}

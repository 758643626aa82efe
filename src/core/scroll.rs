use super::constants::SCRUB_LAG_SEC;

/// A pinned section that consumes `distance` px of scrolling starting at
/// document offset `start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinnedRegion {
    pub start: f32,
    pub distance: f32,
}

impl PinnedRegion {
    /// One viewport height of scrolling per sentence.
    pub fn for_sentences(start: f32, sentence_count: usize, viewport_height: f32) -> Self {
        Self {
            start,
            distance: sentence_count as f32 * viewport_height,
        }
    }

    pub fn progress(&self, scroll_y: f32) -> f32 {
        if !(self.distance.is_finite() && self.distance > 0.0) || !scroll_y.is_finite() {
            return 0.0;
        }
        ((scroll_y - self.start) / self.distance).clamp(0.0, 1.0)
    }

    pub fn end(&self) -> f32 {
        self.start + self.distance.max(0.0)
    }

    pub fn is_pinned(&self, scroll_y: f32) -> bool {
        scroll_y >= self.start && scroll_y < self.end()
    }
}

/// Displayed progress trailing the raw scroll progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scrub {
    current: f32,
    target: f32,
    lag_sec: f32,
}

impl Default for Scrub {
    fn default() -> Self {
        Self::new(SCRUB_LAG_SEC)
    }
}

impl Scrub {
    pub fn new(lag_sec: f32) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            lag_sec,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target.clamp(0.0, 1.0);
        }
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    /// Exponential catch-up toward the target.
    pub fn step(&mut self, dt_sec: f32) {
        if !self.lag_sec.is_finite() || self.lag_sec <= 0.0 {
            self.current = self.target;
            return;
        }
        let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        let alpha = 1.0 - (-dt / self.lag_sec).exp();
        self.current += (self.target - self.current) * alpha;
        if (self.target - self.current).abs() < 1e-4 {
            self.current = self.target;
        }
    }
}

/// Whole-page scroll percentage for the top progress bar, in \[0, 100\].
pub fn page_scroll_percent(scroll_top: f32, scroll_height: f32, viewport_height: f32) -> f32 {
    let doc_height = scroll_height - viewport_height;
    if !(doc_height.is_finite() && doc_height > 0.0) || !scroll_top.is_finite() {
        return 0.0;
    }
    (scroll_top / doc_height * 100.0).clamp(0.0, 100.0)
}

// Navigation state for the orbiting team carousel.

use super::constants::{CAROUSEL_AUTO_ADVANCE_SEC, ORBIT_BREATHING_ROOM_PX};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

#[inline]
pub fn step_for_key(key: &str) -> Option<Step> {
    match key {
        "ArrowLeft" => Some(Step::Prev),
        "ArrowRight" => Some(Step::Next),
        _ => None,
    }
}

#[derive(Clone, Debug)]
pub struct OrbitCarousel {
    len: usize,
    active: usize,
    hovering: bool,
    since_advance: f32,
}

impl OrbitCarousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            hovering: false,
            since_advance: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.active = (self.active + self.len - 1) % self.len;
        }
    }

    pub fn step(&mut self, step: Step) {
        match step {
            Step::Prev => self.prev(),
            Step::Next => self.next(),
        }
    }

    /// Returns `true` when the selection changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.active {
            return false;
        }
        self.active = index;
        true
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
        self.since_advance = 0.0;
    }

    /// Angle of item `index` around the orbit, active item at 0°.
    pub fn rotation_deg(&self, index: usize) -> f32 {
        if self.len == 0 {
            return 0.0;
        }
        (index as f32 - self.active as f32) * (360.0 / self.len as f32)
    }

    /// Auto-advance; paused while hovered. Returns `true` when it advanced.
    pub fn tick(&mut self, dt_sec: f32) -> bool {
        if self.hovering || self.len < 2 {
            return false;
        }
        self.since_advance += dt_sec.max(0.0);
        if self.since_advance >= CAROUSEL_AUTO_ADVANCE_SEC {
            self.since_advance = 0.0;
            self.next();
            return true;
        }
        false
    }
}

/// Orbit radius and avatar size for the current viewport width, in px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitLayout {
    pub radius: f32,
    pub avatar: f32,
}

impl OrbitLayout {
    pub fn for_viewport_width(width: f32) -> Self {
        let (radius, avatar) = match width {
            w if w < 480.0 => (130.0, 45.0),
            w if w < 640.0 => (170.0, 55.0),
            w if w < 768.0 => (230.0, 70.0),
            _ => (290.0, 85.0),
        };
        Self { radius, avatar }
    }

    pub fn container_size(&self) -> f32 {
        self.radius * 2.0 + ORBIT_BREATHING_ROOM_PX
    }
}

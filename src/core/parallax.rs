// Cursor-driven parallax for the hero's floating images.
//
// Horizontal offset follows the pointer directly. Vertical offset only ever
// accumulates downward pointer travel and snaps back to rest once it has
// drifted past `MAX_Y_OFFSET`, so images keep floating upward as the user
// sweeps the cursor down the page.

use super::constants::*;
use glam::Vec2;

/// Map one viewport pixel coordinate onto \[-1, 1\]. A zero or invalid
/// extent falls back to `FALLBACK_VIEWPORT_EXTENT`.
#[inline]
pub fn normalize_axis(client: f32, extent: f32) -> f32 {
    let extent = if extent.is_finite() && extent > 0.0 {
        extent
    } else {
        FALLBACK_VIEWPORT_EXTENT
    };
    if !client.is_finite() {
        return 0.0;
    }
    ((client / extent) * 2.0 - 1.0).clamp(-1.0, 1.0)
}

#[inline]
pub fn normalize_pointer(client: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        normalize_axis(client.x, viewport.x),
        normalize_axis(client.y, viewport.y),
    )
}

/// Shared pointer state read by every floating element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxAccumulator {
    accumulated_y: f32,
    previous_raw_y: f32,
    instantaneous_x: f32,
}

impl ParallaxAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a pointer move in viewport pixels.
    pub fn pointer_move(&mut self, client: Vec2, viewport: Vec2) {
        self.apply_normalized(normalize_pointer(client, viewport));
    }

    /// Feed an already-normalized pointer position. Returns `true` when the
    /// accumulated offset wrapped back to rest on this event.
    pub fn apply_normalized(&mut self, raw: Vec2) -> bool {
        let raw_y = if raw.y.is_finite() { raw.y } else { 0.0 };
        let delta_y = raw_y - self.previous_raw_y;
        if delta_y > 0.0 {
            self.accumulated_y += delta_y;
        }
        // Upward deltas are dropped, but the baseline still moves.
        self.previous_raw_y = raw_y;

        let mut wrapped = false;
        if self.accumulated_y > MAX_Y_OFFSET {
            self.accumulated_y = 0.0;
            wrapped = true;
            log::debug!("[parallax] accumulated offset wrapped to rest");
        }

        self.instantaneous_x = if raw.x.is_finite() { raw.x } else { 0.0 };
        wrapped
    }

    pub fn accumulated_y(&self) -> f32 {
        self.accumulated_y
    }

    pub fn instantaneous_x(&self) -> f32 {
        self.instantaneous_x
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.instantaneous_x(), self.accumulated_y())
    }

    /// Larger depth means a larger move in the opposite direction.
    pub fn target_for(&self, depth: f32) -> Vec2 {
        -self.offset() * depth
    }
}

/// Idle drift so elements never look frozen at rest. Phase is offset by the
/// element id so neighbours do not move in lockstep.
#[inline]
pub fn idle_offset(elapsed_sec: f32, id: u32) -> Vec2 {
    let phase = id as f32;
    Vec2::new(
        (elapsed_sec * IDLE_FREQ_X + phase).sin() * IDLE_AMPLITUDE,
        (elapsed_sec * IDLE_FREQ_Y + phase).cos() * IDLE_AMPLITUDE,
    )
}

#[inline]
pub fn smooth_toward(position: Vec2, target: Vec2, smoothness: f32) -> Vec2 {
    position + (target - position) * smoothness
}

/// One floating image. Position is in px relative to its layout slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingElement {
    pub id: u32,
    pub depth: f32,
    pub position: Vec2,
}

impl FloatingElement {
    pub fn new(id: u32, depth: f32) -> Self {
        Self {
            id,
            depth: if depth.is_finite() { depth } else { 0.0 },
            position: Vec2::ZERO,
        }
    }

    /// One animation frame. `elapsed_sec` is time since this element mounted.
    pub fn step(&mut self, pointer: &ParallaxAccumulator, elapsed_sec: f32) -> Vec2 {
        let elapsed = if elapsed_sec.is_finite() {
            elapsed_sec
        } else {
            0.0
        };
        let target = pointer.target_for(self.depth) + idle_offset(elapsed, self.id);
        self.position = smooth_toward(self.position, target, SMOOTHNESS);
        self.position
    }
}

/// The hero's set of floating images sharing one pointer accumulator.
#[derive(Clone, Debug, Default)]
pub struct HeroField {
    pub pointer: ParallaxAccumulator,
    pub elements: Vec<FloatingElement>,
    hovered: Option<u32>,
}

impl HeroField {
    pub fn new(elements: Vec<FloatingElement>) -> Self {
        Self {
            pointer: ParallaxAccumulator::new(),
            elements,
            hovered: None,
        }
    }

    pub fn hover(&mut self, id: u32) {
        self.hovered = Some(id);
    }

    pub fn leave(&mut self) {
        self.hovered = None;
    }

    /// Non-hovered elements go translucent while another one is hovered.
    pub fn is_deemphasized(&self, id: u32) -> bool {
        matches!(self.hovered, Some(h) if h != id)
    }

    /// Step every element once. `elapsed_sec[i]` is element i's mount age;
    /// missing entries count as just mounted.
    pub fn step(&mut self, elapsed_sec: &[f32]) {
        let pointer = self.pointer;
        for (i, el) in self.elements.iter_mut().enumerate() {
            let t = elapsed_sec.get(i).copied().unwrap_or(0.0);
            el.step(&pointer, t);
        }
    }
}

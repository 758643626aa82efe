use super::constants::{DROPDOWN_CLOSE_DELAY_SEC, DROPDOWN_ITEM_STAGGER_SEC};

/// Hover-intent dropdown. Opening is immediate; closing waits a short grace
/// period so the pointer can cross the gap between trigger and panel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HoverMenu {
    open: bool,
    close_in: Option<f32>,
}

impl HoverMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn enter(&mut self) {
        self.close_in = None;
        self.open = true;
    }

    pub fn leave(&mut self) {
        if self.open {
            self.close_in = Some(DROPDOWN_CLOSE_DELAY_SEC);
        }
    }

    /// Returns `true` when the menu closed on this tick.
    pub fn tick(&mut self, dt_sec: f32) -> bool {
        let Some(remaining) = self.close_in else {
            return false;
        };
        let remaining = remaining - dt_sec.max(0.0);
        if remaining <= 0.0 {
            self.close_in = None;
            self.open = false;
            return true;
        }
        self.close_in = Some(remaining);
        false
    }
}

#[inline]
pub fn item_delay(index: usize) -> f32 {
    index as f32 * DROPDOWN_ITEM_STAGGER_SEC
}

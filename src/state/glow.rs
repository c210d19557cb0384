// Pointer-follow border glow state for one card.

use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Hide delay after the last touch ends, so a tap-and-release does not
/// flicker the glow.
pub const TOUCH_HIDE_DELAY_MS: u32 = 500;

/// Transient overlay position, rendered as `--x`/`--y`/`--opacity` custom
/// properties that the border styling follows.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlowState {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

impl GlowState {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            visible: true,
        }
    }

    pub fn hidden(self) -> Self {
        Self {
            visible: false,
            ..self
        }
    }

    pub fn style_vars(&self) -> String {
        let opacity = if self.visible { 1 } else { 0 };
        format!("--x:{}px; --y:{}px; --opacity:{};", self.x, self.y, opacity)
    }
}

/// Slot for the pending touch-end hide timer. Scheduling replaces and cancels
/// whatever was pending; a move event cancels outright.
pub type HideTimerSlot = Rc<RefCell<Option<Timeout>>>;

pub fn schedule_hide<F: FnOnce() + 'static>(slot: &HideTimerSlot, hide: F) {
    if let Some(pending) = slot
        .borrow_mut()
        .replace(Timeout::new(TOUCH_HIDE_DELAY_MS, hide))
    {
        pending.cancel();
    }
}

pub fn cancel_hide(slot: &HideTimerSlot) {
    if let Some(pending) = slot.borrow_mut().take() {
        pending.cancel();
    }
}

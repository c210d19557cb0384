pub mod glow;

pub use glow::{GlowState, HideTimerSlot, cancel_hide, schedule_hide};

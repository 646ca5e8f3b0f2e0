// extensions/mod.rs
//
// Optional extension modules for Starlit.
// Decoupled from core Entity/Scene — shows opt-in by creating these systems.

pub mod easing;
pub mod tween;

pub use easing::{ease, ease_vec2, lerp, lerp_vec2, Easing};
pub use tween::{Tween, TweenId, TweenLoop, TweenState, TweenTarget};

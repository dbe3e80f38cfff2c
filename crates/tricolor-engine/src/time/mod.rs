//! Time subsystem.
//!
//! Provides the fixed-step animation clock used by the triangle renderer.
//! Intended usage:
//! - one `AnimationClock` per renderer
//! - call `advance()` once per rendered frame, before evaluating the animation

mod animation_clock;

pub use animation_clock::{AnimationClock, DEFAULT_FRAME_RATE};

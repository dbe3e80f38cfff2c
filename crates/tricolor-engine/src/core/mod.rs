//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the host app, and the per-frame context that hands out drawables.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};

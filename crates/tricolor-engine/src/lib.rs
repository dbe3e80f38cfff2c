//! Tricolor engine crate.
//!
//! Renders one animated, vertex-colored triangle whose corner colors are read
//! live from host-owned state. The renderer lives in [`render`]; the rest is the
//! platform + GPU runtime that hosts it.

pub mod color;
pub mod core;
pub mod device;
pub mod logging;
pub mod render;
pub mod time;
pub mod view;
pub mod window;

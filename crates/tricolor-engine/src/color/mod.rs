//! Corner colors and the accessor the renderer reads them through.
//!
//! The host owns the values and edits them; the renderer only reads, once per
//! frame, through a [`ColorSource`].

mod source;
mod state;

pub use source::{ColorSource, SharedColors};
pub use state::{Channel, ColorState, Corner, Rgb};

use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::device::Gpu;

use super::ctx::{FrameCtx, WindowCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by hosts.
pub trait App {
    /// Called once, right after the window is created, with the outcome of GPU
    /// device acquisition.
    ///
    /// A failed acquisition does not stop the runtime; frames keep being
    /// requested and `on_frame` sees no GPU.
    fn on_device(&mut self, window: &WindowCtx<'_>, gpu: Result<&Gpu<'_>, &anyhow::Error>);

    /// Called for window events.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per display refresh.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}

use winit::window::{Window, WindowId};

use crate::device::{Gpu, GpuFrame, SurfaceErrorAction};
use crate::render::{FrameTarget, PassDescriptor};

use super::app::AppControl;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id:     WindowId,
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Refresh rate of the monitor the window is on, rounded to whole hertz.
    ///
    /// `None` when the platform does not report one.
    pub fn refresh_rate_hz(&self) -> Option<u32> {
        let millihertz = self.window.current_monitor()?.refresh_rate_millihertz()?;
        let hz = (millihertz + 500) / 1000;
        (hz > 0).then_some(hz)
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    /// `None` when device acquisition failed.
    pub gpu:    Option<&'a mut Gpu<'w>>,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Acquires this tick's drawable and pairs it with `pass`.
    ///
    /// Every failure yields a target with the missing half left out, so the
    /// renderer can skip the frame. Only a fatal surface error asks to exit.
    pub fn acquire(&mut self, pass: PassDescriptor) -> (FrameTarget<GpuFrame>, AppControl) {
        let Some(gpu) = self.gpu.as_deref_mut() else {
            return (FrameTarget::empty(), AppControl::Continue);
        };

        // Minimized: nothing to draw into and no pass to describe.
        if !gpu.has_area() {
            return (FrameTarget::empty(), AppControl::Continue);
        }

        match gpu.begin_frame() {
            Ok(frame) => {
                self.window.window.pre_present_notify();
                (FrameTarget::new(Some(frame), Some(pass)), AppControl::Continue)
            }
            Err(err) => {
                let control = match gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => {
                        log::error!("surface lost beyond recovery");
                        AppControl::Exit
                    }
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                        AppControl::Continue
                    }
                };
                (FrameTarget::new(None, Some(pass)), control)
            }
        }
    }
}

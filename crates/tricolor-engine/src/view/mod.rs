//! Ready-made host glue: an [`App`] that shows a [`TriangleRenderer`] in the
//! runtime's window.

use crate::color::ColorSource;
use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::Gpu;
use crate::render::{InitError, RendererConfig, TriangleRenderer, WgpuBackend};
use crate::time::DEFAULT_FRAME_RATE;

/// Hosts the triangle renderer.
///
/// The renderer is built once, when the runtime reports the device outcome:
/// the frame rate defaults to the monitor's refresh rate and the pipeline
/// format to the surface's. Until then frames are ignored.
pub struct TriangleView<S: ColorSource> {
    colors: Option<S>,
    config: RendererConfig,
    renderer: Option<TriangleRenderer<WgpuBackend, S>>,
}

impl<S: ColorSource> TriangleView<S> {
    pub fn new(colors: S, config: RendererConfig) -> Self {
        Self {
            colors: Some(colors),
            config,
            renderer: None,
        }
    }
}

impl<S: ColorSource> App for TriangleView<S> {
    fn on_device(&mut self, window: &WindowCtx<'_>, gpu: Result<&Gpu<'_>, &anyhow::Error>) {
        let Some(colors) = self.colors.take() else {
            log::warn!("device reported twice; keeping the existing renderer");
            return;
        };

        let mut config = self.config.clone();
        config.target_frame_rate = config
            .target_frame_rate
            .or_else(|| window.refresh_rate_hz())
            .or(Some(DEFAULT_FRAME_RATE));

        let device = match gpu {
            Ok(gpu) => {
                let surface_format = gpu.surface_format();
                if surface_format != config.color_format {
                    log::warn!(
                        "pipeline format {:?} does not match surface; using {surface_format:?}",
                        config.color_format
                    );
                    config.color_format = surface_format;
                }
                Ok(WgpuBackend::new(gpu))
            }
            Err(err) => Err(InitError::DeviceUnavailable(format!("{err:#}"))),
        };

        self.renderer = Some(TriangleRenderer::new(device, colors, config));
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(renderer) = self.renderer.as_mut() else {
            return AppControl::Continue;
        };

        // Disabled renderers skip acquisition too: no drawable is held for nothing.
        if !renderer.is_ready() {
            return AppControl::Continue;
        }

        let (target, control) = ctx.acquire(renderer.pass());
        renderer.draw(target);
        control
    }
}

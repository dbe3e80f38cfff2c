mod controls;

use anyhow::Result;
use tricolor_engine::color::{ColorState, Corner, SharedColors};
use tricolor_engine::core::{App, AppControl, FrameCtx, WindowCtx};
use tricolor_engine::device::{Gpu, GpuInit};
use tricolor_engine::logging::{init_logging, LoggingConfig};
use tricolor_engine::render::RendererConfig;
use tricolor_engine::view::TriangleView;
use tricolor_engine::window::{Runtime, RuntimeConfig};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use controls::{command_for, readout, Controls};

/// The triangle view plus keyboard editing of its colors.
struct Studio {
    view: TriangleView<SharedColors>,
    colors: SharedColors,
    controls: Controls,
    shift: bool,
}

impl Studio {
    fn new(colors: SharedColors) -> Self {
        Self {
            view: TriangleView::new(colors.clone(), RendererConfig::default()),
            colors,
            controls: Controls::new(),
            shift: false,
        }
    }

    fn on_key(&mut self, key: KeyCode) -> AppControl {
        if key == KeyCode::Escape {
            return AppControl::Exit;
        }
        if let Some(cmd) = command_for(key, self.shift) {
            let line = self.colors.update(|colors| self.controls.apply(cmd, colors));
            log::info!("{line}");
        }
        AppControl::Continue
    }
}

impl App for Studio {
    fn on_device(&mut self, window: &WindowCtx<'_>, gpu: Result<&Gpu<'_>, &anyhow::Error>) {
        self.view.on_device(window, gpu);

        let colors = self.colors.snapshot();
        for corner in Corner::ALL {
            log::info!("{}", readout(corner, &colors));
        }
        log::info!(
            "editing {}: 1/2/3 select corner, Q/A W/S E/D adjust R/G/B (shift = x10), backspace resets",
            self.controls.selected().label()
        );
    }

    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::ModifiersChanged(m) => {
                self.shift = m.state().shift_key();
                AppControl::Continue
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.physical_key {
                    PhysicalKey::Code(code) => self.on_key(code),
                    PhysicalKey::Unidentified(_) => AppControl::Continue,
                }
            }
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.view.on_frame(ctx)
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let colors = SharedColors::new(ColorState::default());

    Runtime::run(
        RuntimeConfig {
            title: "Tricolor".to_string(),
            ..RuntimeConfig::default()
        },
        GpuInit::default(),
        Studio::new(colors),
    )
}

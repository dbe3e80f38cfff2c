use wgpu::util::DeviceExt;

use crate::device::{Gpu, GpuFrame};

use super::backend::{PassDescriptor, RenderBackend};
use super::error::InitError;
use super::shader::ResolvedProgram;
use super::vertex::{Vertex, VERTEX_COUNT};

/// [`RenderBackend`] on a wgpu device + queue.
///
/// Handles are reference counted by wgpu; cloning them out of [`Gpu`] keeps the
/// backend free of the window lifetime.
pub struct WgpuBackend {
    device: wgpu::Device,
    queue: wgpu::Queue,
}

impl WgpuBackend {
    pub fn new(gpu: &Gpu<'_>) -> Self {
        Self {
            device: gpu.device().clone(),
            queue: gpu.queue().clone(),
        }
    }
}

impl RenderBackend for WgpuBackend {
    type Pipeline = wgpu::RenderPipeline;
    type VertexBuffer = wgpu::Buffer;
    type Drawable = GpuFrame;

    fn create_pipeline(
        &mut self,
        program: &ResolvedProgram<'_>,
        format: wgpu::TextureFormat,
    ) -> Result<Self::Pipeline, InitError> {
        if !format.has_color_aspect() || format.is_depth_stencil_format() {
            return Err(InitError::PipelineLink(format!(
                "{format:?} is not a color attachment format"
            )));
        }

        let device = &self.device;

        // Validation errors land in this scope instead of the uncaptured-error
        // handler. The library was already validated, so anything caught here is
        // a device-side rejection.
        let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tricolor triangle shader"),
            source: wgpu::ShaderSource::Wgsl(program.source.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("tricolor triangle pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("tricolor triangle pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(program.vertex_entry),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(program.fragment_entry),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        match pollster::block_on(scope.pop()) {
            None => Ok(pipeline),
            Some(err) => Err(InitError::PipelineLink(err.to_string())),
        }
    }

    fn create_vertex_buffer(
        &mut self,
        initial: &[Vertex; VERTEX_COUNT],
    ) -> Result<Self::VertexBuffer, InitError> {
        let buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tricolor triangle vbo"),
            contents: bytemuck::cast_slice(initial),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        Ok(buffer)
    }

    fn write_vertices(&mut self, buffer: &Self::VertexBuffer, vertices: &[Vertex; VERTEX_COUNT]) {
        self.queue.write_buffer(buffer, 0, bytemuck::cast_slice(vertices));
    }

    fn submit_frame(
        &mut self,
        pipeline: &Self::Pipeline,
        buffer: &Self::VertexBuffer,
        drawable: Self::Drawable,
        pass: &PassDescriptor,
    ) {
        let GpuFrame {
            surface_texture,
            view,
            mut encoder,
        } = drawable;

        // Pass is dropped (encoding ends) before the encoder is finished.
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("tricolor triangle pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(pass.clear),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            rpass.set_pipeline(pipeline);
            rpass.set_vertex_buffer(0, buffer.slice(..));
            rpass.draw(0..VERTEX_COUNT as u32, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        drop(view);
        surface_texture.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::shader::ShaderProgram;

    /// Surfaceless device, or `None` on machines without any adapter.
    fn headless() -> Option<WgpuBackend> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let adapter =
            pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions::default())).ok()?;
        let (device, queue) =
            pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor::default())).ok()?;
        Some(WgpuBackend { device, queue })
    }

    #[test]
    fn builds_pipeline_for_bgra8() {
        let Some(mut backend) = headless() else {
            return;
        };
        let program = ShaderProgram::default();
        let resolved = program.resolve().expect("shipped shader resolves");
        assert!(backend
            .create_pipeline(&resolved, wgpu::TextureFormat::Bgra8Unorm)
            .is_ok());
    }

    #[test]
    fn device_rejection_is_reported_as_link_error() {
        let Some(mut backend) = headless() else {
            return;
        };
        let program = ShaderProgram::default();
        let resolved = program.resolve().expect("shipped shader resolves");

        // Blending on a 32-bit float target needs a feature the device was not
        // created with.
        let err = backend
            .create_pipeline(&resolved, wgpu::TextureFormat::Rgba32Float)
            .expect_err("non-blendable target");
        assert!(matches!(err, InitError::PipelineLink(_)));

        // The scope was popped: later work on the device is unaffected.
        assert!(backend
            .create_pipeline(&resolved, wgpu::TextureFormat::Bgra8Unorm)
            .is_ok());
    }

    #[test]
    fn depth_format_is_refused_up_front() {
        let Some(mut backend) = headless() else {
            return;
        };
        let program = ShaderProgram::default();
        let resolved = program.resolve().expect("shipped shader resolves");
        assert!(matches!(
            backend.create_pipeline(&resolved, wgpu::TextureFormat::Depth32Float),
            Err(InitError::PipelineLink(_))
        ));
    }
}

//! wgpu pipeline shared by the web and native frontends.
//!
//! Owns no device or surface; callers pass their own so each frontend keeps
//! control of surface configuration and presentation.

use crate::binding::{Layer, ParticleInstance};
use crate::state::Camera;
use glam::Mat4;
use wgpu::util::DeviceExt;

// Matches a perspective point size at a 45° vertical fov: tan(22.5°).
const SPRITE_SCALE: f32 = 0.414;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    params: [f32; 4],
}

struct LayerBuffers {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instance_vb: Option<wgpu::Buffer>,
    capacity: usize,
    count: u32,
    model: Mat4,
}

pub struct ParticleRenderer {
    pipeline: wgpu::RenderPipeline,
    quad_vb: wgpu::Buffer,
    layers: Vec<LayerBuffers>,
}

impl ParticleRenderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particles_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::PARTICLES_WGSL.into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("particles_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let layers = Layer::ALL
            .iter()
            .map(|layer| {
                let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some(match layer {
                        Layer::Stars => "stars_uniforms",
                        Layer::Cloud => "cloud_uniforms",
                    }),
                    size: std::mem::size_of::<Uniforms>() as u64,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("particles_bg"),
                    layout: &bind_group_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    }],
                });
                LayerBuffers {
                    uniform_buffer,
                    bind_group,
                    instance_vb: None,
                    capacity: 0,
                    count: 0,
                    model: Mat4::IDENTITY,
                }
            })
            .collect();

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("particles_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // Two triangles spanning [-0.5, 0.5]
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let vertex_buffers = [
            // slot 0: quad corners
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: per-particle instance data
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<ParticleInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 16,
                        shader_location: 3,
                    },
                ],
            },
        ];

        let additive = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
        };

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("particles_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(additive),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Self {
            pipeline,
            quad_vb,
            layers,
        }
    }

    /// Replace a layer's instances, growing its vertex buffer when needed.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layer: Layer,
        instances: &[ParticleInstance],
    ) {
        let buffers = &mut self.layers[layer.index()];
        buffers.count = instances.len() as u32;
        if instances.is_empty() {
            return;
        }
        if buffers.instance_vb.is_none() || buffers.capacity < instances.len() {
            let capacity = instances.len().next_power_of_two();
            log::debug!("[gpu] {:?} instance buffer capacity -> {}", layer, capacity);
            buffers.instance_vb = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("instance_vb"),
                size: (std::mem::size_of::<ParticleInstance>() * capacity) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            buffers.capacity = capacity;
        }
        if let Some(vb) = &buffers.instance_vb {
            queue.write_buffer(vb, 0, bytemuck::cast_slice(instances));
        }
    }

    pub fn set_model(&mut self, layer: Layer, model: Mat4) {
        self.layers[layer.index()].model = model;
    }

    /// Clear `view` to `clear` and draw every non-empty layer.
    pub fn render(
        &self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        camera: &Camera,
        clear: wgpu::Color,
    ) {
        let view_m = camera.view_matrix().to_cols_array_2d();
        let proj_m = camera.projection_matrix().to_cols_array_2d();
        for buffers in &self.layers {
            queue.write_buffer(
                &buffers.uniform_buffer,
                0,
                bytemuck::bytes_of(&Uniforms {
                    view: view_m,
                    proj: proj_m,
                    model: buffers.model.to_cols_array_2d(),
                    params: [SPRITE_SCALE, 0.0, 0.0, 0.0],
                }),
            );
        }

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("particles_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
        for buffers in &self.layers {
            let Some(vb) = &buffers.instance_vb else {
                continue;
            };
            if buffers.count == 0 {
                continue;
            }
            rpass.set_bind_group(0, &buffers.bind_group, &[]);
            rpass.set_vertex_buffer(1, vb.slice(..));
            rpass.draw(0..6, 0..buffers.count);
        }
    }
}

/// Background colour as a wgpu clear value.
pub fn clear_color() -> wgpu::Color {
    let [r, g, b] = crate::constants::CLEAR_RGB;
    wgpu::Color { r, g, b, a: 1.0 }
}

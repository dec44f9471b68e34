//! WebGPU scene host: surface, instanced mesh + point-sprite pipelines, HDR
//! offscreen target and the bloom/vignette/chromatic-aberration post chain.

pub mod helpers;
pub(crate) mod post;
pub(crate) mod targets;

use crate::camera;
use crate::constants::*;
use crate::core::{POST_WGSL, SCENE_WGSL};
use glam::{Mat4, Vec3};
use smallvec::SmallVec;
use web_sys as web;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    ambient: [f32; 4],            // rgb, intensity
    cursor_light_pos: [f32; 4],
    cursor_light_color: [f32; 4], // rgb, intensity
    accent_light_pos: [f32; 4],
    accent_light_color: [f32; 4],
    fog_color: [f32; 4],
    fog_params: [f32; 4], // near, far, time, unused
}

/// One instanced mesh draw.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshInstance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub emissive: [f32; 4], // x = emissive strength, yzw unused
}

impl MeshInstance {
    pub fn new(model: Mat4, color: [f32; 3], alpha: f32, emissive: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [color[0], color[1], color[2], alpha],
            emissive: [emissive, 0.0, 0.0, 0.0],
        }
    }
}

/// One camera-facing point sprite (particles, connector glow dots).
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    pub pos_size: [f32; 4], // xyz world position, w sprite size
    pub color: [f32; 4],
}

impl SpriteInstance {
    pub fn new(pos: Vec3, size: f32, color: [f32; 3], alpha: f32) -> Self {
        Self {
            pos_size: [pos.x, pos.y, pos.z, size],
            color: [color[0], color[1], color[2], alpha],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshKind {
    Cube,
    Icosahedron,
    Octahedron,
    Sphere,
    Torus,
}

const MESH_KIND_COUNT: usize = 5;

pub struct MeshBatch<'f> {
    pub kind: MeshKind,
    pub instances: &'f [MeshInstance],
}

/// Everything the GPU needs for one frame, assembled by the frame loop.
pub struct SceneFrame<'f> {
    pub batches: &'f [MeshBatch<'f>],
    pub sprites: &'f [SpriteInstance],
    pub cursor_light: Vec3,
    pub time: f32,
}

struct GpuMesh {
    vb: wgpu::Buffer,
    ib: wgpu::Buffer,
    index_count: u32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    meshes: [GpuMesh; MESH_KIND_COUNT],
    mesh_pipeline: wgpu::RenderPipeline,
    sprite_pipeline: wgpu::RenderPipeline,
    quad_vb: wgpu::Buffer,
    scene_uniform_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    mesh_instance_vb: wgpu::Buffer,
    mesh_instance_capacity: usize,
    sprite_instance_vb: wgpu::Buffer,
    sprite_instance_capacity: usize,

    targets: targets::RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: post::PostChain,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let hdr_format = wgpu::TextureFormat::Rgba16Float;
        let render_targets = targets::RenderTargets::create(&device, width, height);

        // Unit meshes, one per kind, in MeshKind discriminant order.
        let mesh_data = [
            helpers::cube(),
            helpers::icosahedron(),
            helpers::octahedron(),
            helpers::uv_sphere(16, 24),
            helpers::torus(0.5, 0.04, 48, 12),
        ];
        let meshes = mesh_data.map(|m| upload_mesh(&device, &m));

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
        });
        let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
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
        let scene_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &scene_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_uniform_buffer.as_entire_binding(),
            }],
        });
        let scene_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&scene_bgl],
            push_constant_ranges: &[],
        });

        let mesh_vertex_buffers = [
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<helpers::Vertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
            },
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<MeshInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &wgpu::vertex_attr_array![
                    2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4,
                    6 => Float32x4, 7 => Float32x4
                ],
            },
        ];
        let mesh_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mesh_pipeline"),
            layout: Some(&scene_pl),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_mesh"),
                buffers: &mesh_vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState {
                cull_mode: Some(wgpu::Face::Back),
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: helpers::DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_mesh"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: hdr_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let sprite_vertex_buffers = [
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![0 => Float32x2],
            },
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<SpriteInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &wgpu::vertex_attr_array![1 => Float32x4, 2 => Float32x4],
            },
        ];
        let sprite_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sprite_pipeline"),
            layout: Some(&scene_pl),
            vertex: wgpu::VertexState {
                module: &scene_shader,
                entry_point: Some("vs_sprite"),
                buffers: &sprite_vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(wgpu::DepthStencilState {
                format: helpers::DEPTH_FORMAT,
                // Sprites read depth but never occlude meshes behind-to-front.
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &scene_shader,
                entry_point: Some("fs_sprite"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: hdr_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = create_init_buffer(
            &device,
            "quad_vb",
            bytemuck::cast_slice(&quad_vertices),
            wgpu::BufferUsages::VERTEX,
        );

        let mesh_instance_capacity = 64;
        let mesh_instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("mesh_instance_vb"),
            size: (std::mem::size_of::<MeshInstance>() * mesh_instance_capacity) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let sprite_instance_capacity = 2048;
        let sprite_instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sprite_instance_vb"),
            size: (std::mem::size_of::<SpriteInstance>() * sprite_instance_capacity) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(POST_WGSL.into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post = post::PostChain::new(
            &device,
            &post_shader,
            hdr_format,
            format,
            &render_targets,
            &linear_sampler,
        );

        let [br, bg, bb] = BACKGROUND_COLOR;
        Ok(Self {
            surface,
            device,
            queue,
            config,
            meshes,
            mesh_pipeline,
            sprite_pipeline,
            quad_vb,
            scene_uniform_buffer,
            scene_bind_group,
            mesh_instance_vb,
            mesh_instance_capacity,
            sprite_instance_vb,
            sprite_instance_capacity,
            targets: render_targets,
            linear_sampler,
            post,
            width,
            height,
            clear_color: wgpu::Color {
                r: br as f64,
                g: bg as f64,
                b: bb as f64,
                a: 1.0,
            },
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
            self.post
                .rebind(&self.device, &self.targets, &self.linear_sampler);
        }
    }

    fn ensure_instance_capacity(&mut self, mesh_count: usize, sprite_count: usize) {
        if mesh_count > self.mesh_instance_capacity {
            self.mesh_instance_capacity = mesh_count.next_power_of_two();
            self.mesh_instance_vb = self.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("mesh_instance_vb"),
                size: (std::mem::size_of::<MeshInstance>() * self.mesh_instance_capacity) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
        }
        if sprite_count > self.sprite_instance_capacity {
            self.sprite_instance_capacity = sprite_count.next_power_of_two();
            self.sprite_instance_vb = self.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("sprite_instance_vb"),
                size: (std::mem::size_of::<SpriteInstance>() * self.sprite_instance_capacity)
                    as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
        }
    }

    pub fn render(&mut self, scene: &SceneFrame) -> Result<(), wgpu::SurfaceError> {
        let mesh_count: usize = scene.batches.iter().map(|b| b.instances.len()).sum();
        self.ensure_instance_capacity(mesh_count, scene.sprites.len());

        let uniforms = SceneUniforms {
            view: camera::view_matrix().to_cols_array_2d(),
            proj: camera::projection_matrix(self.width as f32, self.height as f32)
                .to_cols_array_2d(),
            camera_pos: [0.0, 0.0, CAMERA_Z, 1.0],
            ambient: [1.0, 1.0, 1.0, AMBIENT_INTENSITY],
            cursor_light_pos: [
                scene.cursor_light.x,
                scene.cursor_light.y,
                scene.cursor_light.z,
                1.0,
            ],
            cursor_light_color: with_intensity(CURSOR_LIGHT_COLOR, CURSOR_LIGHT_INTENSITY),
            accent_light_pos: [
                ACCENT_LIGHT_POS[0],
                ACCENT_LIGHT_POS[1],
                ACCENT_LIGHT_POS[2],
                1.0,
            ],
            accent_light_color: with_intensity(ACCENT_LIGHT_COLOR, ACCENT_LIGHT_INTENSITY),
            fog_color: [
                BACKGROUND_COLOR[0],
                BACKGROUND_COLOR[1],
                BACKGROUND_COLOR[2],
                1.0,
            ],
            fog_params: [FOG_NEAR, FOG_FAR, scene.time, 0.0],
        };
        self.queue
            .write_buffer(&self.scene_uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        // Pack all mesh batches contiguously; record per-batch ranges.
        let mut packed: Vec<MeshInstance> = Vec::with_capacity(mesh_count);
        let mut ranges: SmallVec<[(MeshKind, u32, u32); 8]> = SmallVec::new();
        for batch in scene.batches {
            let start = packed.len() as u32;
            packed.extend_from_slice(batch.instances);
            ranges.push((batch.kind, start, packed.len() as u32));
        }
        if !packed.is_empty() {
            self.queue
                .write_buffer(&self.mesh_instance_vb, 0, bytemuck::cast_slice(&packed));
        }
        if !scene.sprites.is_empty() {
            self.queue.write_buffer(
                &self.sprite_instance_vb,
                0,
                bytemuck::cast_slice(scene.sprites),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.mesh_pipeline);
            rpass.set_bind_group(0, &self.scene_bind_group, &[]);
            rpass.set_vertex_buffer(1, self.mesh_instance_vb.slice(..));
            for (kind, start, end) in &ranges {
                if start == end {
                    continue;
                }
                let mesh = &self.meshes[*kind as usize];
                rpass.set_vertex_buffer(0, mesh.vb.slice(..));
                rpass.set_index_buffer(mesh.ib.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..mesh.index_count, 0, *start..*end);
            }

            if !scene.sprites.is_empty() {
                rpass.set_pipeline(&self.sprite_pipeline);
                rpass.set_bind_group(0, &self.scene_bind_group, &[]);
                rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
                rpass.set_vertex_buffer(1, self.sprite_instance_vb.slice(..));
                rpass.draw(0..6, 0..(scene.sprites.len() as u32));
            }
        }

        self.post.run(
            &self.queue,
            &mut encoder,
            &self.targets,
            &view,
            self.width,
            self.height,
            scene.time,
            self.clear_color,
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn with_intensity(rgb: [f32; 3], intensity: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], intensity]
}

fn upload_mesh(device: &wgpu::Device, data: &helpers::MeshData) -> GpuMesh {
    let vb = create_init_buffer(
        device,
        "mesh_vb",
        bytemuck::cast_slice(&data.vertices),
        wgpu::BufferUsages::VERTEX,
    );
    let ib = create_init_buffer(
        device,
        "mesh_ib",
        bytemuck::cast_slice(&data.indices),
        wgpu::BufferUsages::INDEX,
    );
    GpuMesh {
        vb,
        ib,
        index_count: data.indices.len() as u32,
    }
}

fn create_init_buffer(
    device: &wgpu::Device,
    label: &str,
    contents: &[u8],
    usage: wgpu::BufferUsages,
) -> wgpu::Buffer {
    use wgpu::util::DeviceExt;
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents,
        usage,
    })
}

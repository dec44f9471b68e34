//! Post chain: bright pass, separable bloom blur and the final composite
//! applying bloom strength, vignette and radial chromatic aberration.
//!
//! Each pass owns its own uniform slice. Queue writes all land before the
//! frame's single submit, so one shared buffer would leave every pass
//! reading whichever value was written last.

use super::helpers;
use super::targets::RenderTargets;
use crate::constants::{
    BLOOM_STRENGTH, BLOOM_THRESHOLD, CHROMA_OFFSET, VIGNETTE_DARKNESS, VIGNETTE_OFFSET,
};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PostUniforms {
    resolution: [f32; 2],
    blur_dir: [f32; 2],
    bloom_strength: f32,
    threshold: f32,
    vignette_offset: f32,
    vignette_darkness: f32,
    chroma_offset: f32,
    time: f32,
    _pad: [f32; 2],
}

impl PostUniforms {
    fn for_pass(resolution: [f32; 2], blur_dir: [f32; 2], time: f32) -> Self {
        Self {
            resolution,
            blur_dir,
            bloom_strength: BLOOM_STRENGTH,
            threshold: BLOOM_THRESHOLD,
            vignette_offset: VIGNETTE_OFFSET,
            vignette_darkness: VIGNETTE_DARKNESS,
            chroma_offset: CHROMA_OFFSET,
            time,
            _pad: [0.0, 0.0],
        }
    }
}

/// One blit: the pass's uniform buffer plus the bind group tying it to its
/// source view.
struct PassSlot {
    uniforms: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub(crate) struct PostChain {
    bgl_main: wgpu::BindGroupLayout,  // source tex + sampler + per-pass uniforms
    bgl_bloom: wgpu::BindGroupLayout, // blurred bloom tex + sampler
    bright_pipeline: wgpu::RenderPipeline,
    blur_pipeline: wgpu::RenderPipeline,
    composite_pipeline: wgpu::RenderPipeline,
    bright: PassSlot,
    blur_h: PassSlot,
    blur_v: PassSlot,
    composite: PassSlot,
    bloom_src: wgpu::BindGroup,
}

impl PostChain {
    pub(crate) fn new(
        device: &wgpu::Device,
        shader: &wgpu::ShaderModule,
        bloom_format: wgpu::TextureFormat,
        swap_format: wgpu::TextureFormat,
        targets: &RenderTargets,
        sampler: &wgpu::Sampler,
    ) -> Self {
        let texture_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                multisampled: false,
                view_dimension: wgpu::TextureViewDimension::D2,
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
            },
            count: None,
        };
        let sampler_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        };
        let bgl_main = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bgl_main"),
            entries: &[
                texture_entry(0),
                sampler_entry(1),
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });
        let bgl_bloom = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bgl_bloom"),
            entries: &[texture_entry(0), sampler_entry(1)],
        });

        let pl_single = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_post_single"),
            bind_group_layouts: &[&bgl_main],
            push_constant_ranges: &[],
        });
        let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_post_composite"),
            bind_group_layouts: &[&bgl_main, &bgl_bloom],
            push_constant_ranges: &[],
        });
        let bright_pipeline =
            helpers::make_post_pipeline(device, &pl_single, shader, "fs_bright", bloom_format, None);
        let blur_pipeline =
            helpers::make_post_pipeline(device, &pl_single, shader, "fs_blur", bloom_format, None);
        let composite_pipeline = helpers::make_post_pipeline(
            device,
            &pl_composite,
            shader,
            "fs_composite",
            swap_format,
            Some(wgpu::BlendState::REPLACE),
        );

        let slot = |label: &str, view: &wgpu::TextureView| {
            let uniforms = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: std::mem::size_of::<PostUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = main_bind_group(device, &bgl_main, label, view, sampler, &uniforms);
            PassSlot {
                uniforms,
                bind_group,
            }
        };
        let bright = slot("post_bright", &targets.hdr_view);
        let blur_h = slot("post_blur_h", &targets.bloom_a_view);
        let blur_v = slot("post_blur_v", &targets.bloom_b_view);
        let composite = slot("post_composite", &targets.hdr_view);
        let bloom_src = bloom_bind_group(device, &bgl_bloom, &targets.bloom_a_view, sampler);

        Self {
            bgl_main,
            bgl_bloom,
            bright_pipeline,
            blur_pipeline,
            composite_pipeline,
            bright,
            blur_h,
            blur_v,
            composite,
            bloom_src,
        }
    }

    /// Re-tie every pass to freshly created target views; the uniform
    /// buffers survive a resize.
    pub(crate) fn rebind(
        &mut self,
        device: &wgpu::Device,
        targets: &RenderTargets,
        sampler: &wgpu::Sampler,
    ) {
        let sources = [
            (&mut self.bright, "post_bright", &targets.hdr_view),
            (&mut self.blur_h, "post_blur_h", &targets.bloom_a_view),
            (&mut self.blur_v, "post_blur_v", &targets.bloom_b_view),
            (&mut self.composite, "post_composite", &targets.hdr_view),
        ];
        for (pass, label, view) in sources {
            pass.bind_group =
                main_bind_group(device, &self.bgl_main, label, view, sampler, &pass.uniforms);
        }
        self.bloom_src = bloom_bind_group(device, &self.bgl_bloom, &targets.bloom_a_view, sampler);
    }

    /// Record the full chain: HDR → bright → blur ping-pong → composite into
    /// the frame view.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn run(
        &self,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        targets: &RenderTargets,
        frame_view: &wgpu::TextureView,
        width: u32,
        height: u32,
        time: f32,
        clear: wgpu::Color,
    ) {
        let half = [width as f32 / 2.0, height as f32 / 2.0];
        let full = [width as f32, height as f32];
        let writes = [
            (&self.bright, PostUniforms::for_pass(half, [0.0, 0.0], time)),
            (&self.blur_h, PostUniforms::for_pass(half, [1.0, 0.0], time)),
            (&self.blur_v, PostUniforms::for_pass(half, [0.0, 1.0], time)),
            (&self.composite, PostUniforms::for_pass(full, [0.0, 0.0], time)),
        ];
        for (pass, u) in writes {
            queue.write_buffer(&pass.uniforms, 0, bytemuck::bytes_of(&u));
        }

        self.blit(
            encoder,
            "bright_pass",
            &targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.bright_pipeline,
            &self.bright.bind_group,
            None,
        );
        self.blit(
            encoder,
            "blur_h",
            &targets.bloom_b_view,
            wgpu::Color::BLACK,
            &self.blur_pipeline,
            &self.blur_h.bind_group,
            None,
        );
        self.blit(
            encoder,
            "blur_v",
            &targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.blur_pipeline,
            &self.blur_v.bind_group,
            None,
        );
        self.blit(
            encoder,
            "composite",
            frame_view,
            clear,
            &self.composite_pipeline,
            &self.composite.bind_group,
            Some(&self.bloom_src),
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn blit(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        label: &str,
        target: &wgpu::TextureView,
        clear: wgpu::Color,
        pipeline: &wgpu::RenderPipeline,
        bg0: &wgpu::BindGroup,
        bg1: Option<&wgpu::BindGroup>,
    ) {
        let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
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
        r.set_pipeline(pipeline);
        r.set_bind_group(0, bg0, &[]);
        if let Some(g1) = bg1 {
            r.set_bind_group(1, g1, &[]);
        }
        r.draw(0..3, 0..1);
    }
}

fn main_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    label: &str,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
    uniforms: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: uniforms.as_entire_binding(),
            },
        ],
    })
}

fn bloom_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("post_bloom_src"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

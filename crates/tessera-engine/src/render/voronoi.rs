use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::coords::{Rgba, ScreenSize};
use crate::sites::{SiteSet, MAX_SITES};

use super::shader::{compile_wgsl, ShaderError};
use super::{RenderCtx, RenderTarget};

/// WGSL source of the Voronoi program (vertex pass-through + nearest-site fragment).
pub const VORONOI_WGSL: &str = include_str!("shaders/voronoi.wgsl");

/// Full-screen quad in clip space: two triangles, six vertices.
pub const QUAD_VERTICES: [QuadVertex; 6] = [
    QuadVertex { pos: [-1.0, -1.0] },
    QuadVertex { pos: [1.0, -1.0] },
    QuadVertex { pos: [-1.0, 1.0] },
    QuadVertex { pos: [-1.0, 1.0] },
    QuadVertex { pos: [1.0, -1.0] },
    QuadVertex { pos: [1.0, 1.0] },
];

// ── GPU types ─────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub pos: [f32; 2],
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Uniform block read by `fs_main` (160 bytes, WGSL uniform layout):
///
///  offset   0  screen_size  [f32; 2]
///  offset   8  site_count   u32
///  offset  12  _pad         u32
///  offset  16  background   [f32; 4]
///  offset  32  coords       [[f32; 4]; 4]   (.xy used)
///  offset  96  colors       [[f32; 4]; 4]
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct VoronoiUniform {
    pub screen_size: [f32; 2],
    pub site_count: u32,
    pub _pad: u32,
    pub background: [f32; 4],
    pub coords: [[f32; 4]; MAX_SITES],
    pub colors: [[f32; 4]; MAX_SITES],
}

impl VoronoiUniform {
    /// Packs one frame's worth of shader inputs.
    ///
    /// Every slot is written, active or not. Inactive slots hold zeroed
    /// sites; the shader stops at `site_count` and never reads them.
    pub fn new(screen: ScreenSize, sites: &SiteSet, background: Rgba) -> Self {
        let slots = *sites.slots();
        Self {
            screen_size: screen.to_array(),
            site_count: sites.len() as u32,
            _pad: 0,
            background: background.to_array(),
            coords: slots.map(|s| [s.position.x, s.position.y, 0.0, 0.0]),
            colors: slots.map(|s| s.color.to_array()),
        }
    }
}

/// Attachment ops for the Voronoi pass.
///
/// The surface view is already cleared by the frame, so a direct pass loads
/// it. A multisampled attachment has no defined contents between frames and
/// is cleared, then discarded once resolved.
fn pass_ops(multisampled: bool, background: Rgba) -> wgpu::Operations<wgpu::Color> {
    if multisampled {
        wgpu::Operations {
            load: wgpu::LoadOp::Clear(background.to_wgpu()),
            store: wgpu::StoreOp::Discard,
        }
    } else {
        wgpu::Operations {
            load: wgpu::LoadOp::Load,
            store: wgpu::StoreOp::Store,
        }
    }
}

fn uniform_min_binding_size() -> Option<std::num::NonZeroU64> {
    std::num::NonZeroU64::new(std::mem::size_of::<VoronoiUniform>() as u64)
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Draws the Voronoi diagram of a [`SiteSet`] over the whole target.
///
/// GPU resources are created on first use and rebuilt only when what they
/// depend on changes: the pipeline on surface format / sample count, the
/// multisample attachment on screen size. Uniforms are re-uploaded every frame.
#[derive(Default)]
pub struct VoronoiRenderer {
    pipeline_key: Option<(wgpu::TextureFormat, u32)>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    uniform_buffer: Option<wgpu::Buffer>,

    quad_vbo: Option<wgpu::Buffer>,

    msaa_key: Option<(wgpu::TextureFormat, u32, ScreenSize)>,
    msaa_view: Option<wgpu::TextureView>,
}

impl VoronoiRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one draw of the diagram into `target`.
    ///
    /// `background` fills pixels when `sites` is empty.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        sites: &SiteSet,
        background: Rgba,
    ) -> Result<(), ShaderError> {
        if ctx.screen.is_empty() {
            return Ok(());
        }

        self.ensure_pipeline(ctx)?;
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);
        self.ensure_msaa_target(ctx);

        self.write_uniform(ctx, &VoronoiUniform::new(ctx.screen, sites, background));

        let Some(pipeline) = self.pipeline.as_ref() else { return Ok(()) };
        let Some(bind_group) = self.bind_group.as_ref() else { return Ok(()) };
        let Some(quad_vbo) = self.quad_vbo.as_ref() else { return Ok(()) };

        // With MSAA the pass renders into the multisampled attachment and
        // resolves into the surface view; otherwise it writes the view directly.
        let (view, resolve_target) = match self.msaa_view.as_ref() {
            Some(msaa) if ctx.sample_count > 1 => (msaa, Some(target.color_view)),
            _ => (target.color_view, None),
        };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("tessera voronoi pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target,
                ops: pass_ops(resolve_target.is_some(), background),
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.draw(0..QUAD_VERTICES.len() as u32, 0..1);

        Ok(())
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) -> Result<(), ShaderError> {
        let key = (ctx.surface_format, ctx.sample_count);
        if self.pipeline_key == Some(key) && self.pipeline.is_some() {
            return Ok(());
        }

        let shader = compile_wgsl(ctx.device, "tessera voronoi shader", VORONOI_WGSL)?;

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("tessera voronoi bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: uniform_min_binding_size(),
                    },
                    count: None,
                }],
            });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("tessera voronoi pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("tessera voronoi pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
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
            multisample: wgpu::MultisampleState {
                count: ctx.sample_count,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview_mask: None,
            cache: None,
        });

        log::info!(
            "voronoi pipeline built for {:?} at {}x MSAA",
            ctx.surface_format,
            ctx.sample_count
        );

        self.pipeline_key = Some(key);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.uniform_buffer = None;
        self.msaa_key = None;
        self.msaa_view = None;
        Ok(())
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.uniform_buffer.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let uniform_buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("tessera voronoi ubo"),
            size: std::mem::size_of::<VoronoiUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tessera voronoi bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        self.uniform_buffer = Some(uniform_buffer);
        self.bind_group = Some(bind_group);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() {
            return;
        }

        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tessera voronoi quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));
    }

    fn ensure_msaa_target(&mut self, ctx: &RenderCtx<'_>) {
        if ctx.sample_count <= 1 {
            self.msaa_key = None;
            self.msaa_view = None;
            return;
        }

        let key = (ctx.surface_format, ctx.sample_count, ctx.screen);
        if self.msaa_key == Some(key) && self.msaa_view.is_some() {
            return;
        }

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("tessera voronoi msaa target"),
            size: wgpu::Extent3d {
                width: ctx.screen.width,
                height: ctx.screen.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: ctx.sample_count,
            dimension: wgpu::TextureDimension::D2,
            format: ctx.surface_format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });

        self.msaa_view = Some(texture.create_view(&wgpu::TextureViewDescriptor::default()));
        self.msaa_key = Some(key);
    }

    fn write_uniform(&self, ctx: &RenderCtx<'_>, uniform: &VoronoiUniform) {
        let Some(ubo) = self.uniform_buffer.as_ref() else { return };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(uniform));
    }
}

use crate::coords::ScreenSize;

/// Renderer-facing context for one frame.
///
/// Built by [`FrameCtx::render`](crate::core::FrameCtx::render) from the live
/// [`Gpu`](crate::device::Gpu); `screen` is the current surface size, so it
/// always reflects the latest resize.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub sample_count: u32,
    pub screen: ScreenSize,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        sample_count: u32,
        screen: ScreenSize,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            sample_count,
            screen,
        }
    }
}

/// Target for drawing (encoder + single-sampled color view).
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}

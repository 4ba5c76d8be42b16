/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// Off by default: site colors are meant to land in the framebuffer as
    /// given, without the linear-to-sRGB encode an sRGB target applies.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). FIFO paces the redraw loop to the display.
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference for the surface.
    ///
    /// If provided but unsupported on the current surface, a supported mode is selected.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Requested multisample count for antialiasing.
    ///
    /// Lowered to the highest count the device accepts for the surface format;
    /// `1` disables MSAA.
    pub sample_count: u32,

    /// Required wgpu features.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    ///
    /// Downlevel defaults are enough for a single uniform buffer and a quad.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface. Backend-dependent hint.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: false,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: Some(wgpu::CompositeAlphaMode::Opaque),
            sample_count: 4,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}

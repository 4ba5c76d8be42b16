/// A single acquired surface texture plus the encoder recording into it.
///
/// Holding the surface texture blocks acquisition of the next one, so a frame
/// is submitted (and dropped) within the redraw that created it.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}

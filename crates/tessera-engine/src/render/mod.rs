//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers, attachments) and
//! record into the frame's encoder through a [`RenderTarget`].

mod ctx;
mod shader;
mod voronoi;

pub use ctx::{RenderCtx, RenderTarget};
pub use shader::{compile_wgsl, validate_wgsl, ShaderError};
pub use voronoi::{QuadVertex, VoronoiRenderer, VoronoiUniform, QUAD_VERTICES, VORONOI_WGSL};

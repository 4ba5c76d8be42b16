//! Tessera engine crate.
//!
//! Renders a Voronoi diagram of up to [`sites::MAX_SITES`] colored sites,
//! classified per pixel on the GPU, into a continuously redrawn window.
//!
//! Layers, bottom-up:
//! - [`coords`], [`sites`]: plain data
//! - [`shading`]: CPU reference of the per-pixel rule the shader runs
//! - [`device`], [`render`]: wgpu context, pipeline and uniforms
//! - [`core`], [`window`]: app contract and the winit loop driving it

pub mod coords;
pub mod core;
pub mod device;
pub mod logging;
pub mod render;
pub mod shading;
pub mod sites;
pub mod window;

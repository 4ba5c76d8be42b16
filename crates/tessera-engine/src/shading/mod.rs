//! CPU reference of the per-pixel nearest-site rule.
//!
//! `render/shaders/voronoi.wgsl` runs the same arithmetic on the GPU. Keep the
//! two in lockstep: constants, normalization, strict `<` tie-breaking and the
//! boundary test must match so the GPU output can be reasoned about (and
//! tested) from here.

mod classify;

pub use classify::{
    nearest_site, normalize_pixel, shade_pixel, Nearest, BOUNDARY_THRESHOLD, SENTINEL_DISTANCE,
};

//! Coordinate and color types shared by the shading rule and the renderer.
//!
//! Two spaces are in play:
//! - framebuffer pixels (top-left origin, +Y down), sized by [`ScreenSize`]
//! - site space: centered on the screen, +Y up, with the horizontal axis
//!   scaled by the aspect ratio so distances are isotropic on screen

mod color;
mod screen;
mod vec2;

pub use color::Rgba;
pub use screen::ScreenSize;
pub use vec2::Vec2;

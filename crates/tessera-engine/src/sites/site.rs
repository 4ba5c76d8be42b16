use crate::coords::{Rgba, Vec2};

/// A generator point and the color of the region it owns.
///
/// `position` lives in site space: `(0, 0)` is the screen center, `y = ±1` are
/// the bottom/top edges and the horizontal extent is `±aspect`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Site {
    pub position: Vec2,
    pub color: Rgba,
}

impl Site {
    #[inline]
    pub const fn new(position: Vec2, color: Rgba) -> Self {
        Self { position, color }
    }

    #[inline]
    pub const fn at(x: f32, y: f32, color: Rgba) -> Self {
        Self::new(Vec2::new(x, y), color)
    }

    /// Position and color are free of NaN and infinity.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.color.is_finite()
    }
}

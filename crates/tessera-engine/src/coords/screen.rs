/// Drawable size in physical pixels.
///
/// This is what the fragment stage sees as its screen size uniform. It is read
/// from the live surface configuration every frame, so a resize between two
/// frames is picked up by the next one.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Backing resolution for a surface of `logical` size on a display with the
    /// given device pixel ratio: `round(logical * dpr)` per axis.
    pub fn from_logical(logical_width: f64, logical_height: f64, device_pixel_ratio: f64) -> Self {
        let scale = |v: f64| {
            let px = (v * device_pixel_ratio).round();
            if px.is_finite() && px > 0.0 { px.min(u32::MAX as f64) as u32 } else { 0 }
        };
        Self::new(scale(logical_width), scale(logical_height))
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width over height. Applied to the horizontal axis only.
    #[inline]
    pub fn aspect(self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for ScreenSize {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width, size.height)
    }
}

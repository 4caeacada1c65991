use super::Vec2;

/// Drawing surface size in pixels.
///
/// This is the coordinate basis for converting surface-local pointer
/// positions to NDC. A sketch session refuses to start on a surface that is
/// not [`valid`](Self::is_valid).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Maps a surface-pixel position (top-left origin, y-down) to NDC
    /// (center origin, y-up, [-1, 1] per axis).
    #[inline]
    pub fn to_ndc(self, x: f32, y: f32) -> Vec2 {
        Vec2::new((x / self.width) * 2.0 - 1.0, -((y / self.height) * 2.0 - 1.0))
    }

    #[inline]
    pub fn aspect_ratio(self) -> f32 {
        self.width / self.height
    }

    /// Largest surface with this surface's aspect ratio that fits inside the
    /// available area. Used when the host window resizes around the canvas.
    pub fn fit_aspect(self, avail_width: f32, avail_height: f32) -> Surface {
        let aspect = self.aspect_ratio();

        if avail_width / avail_height > aspect {
            Surface::new(avail_height * aspect, avail_height)
        } else {
            Surface::new(avail_width, avail_width / aspect)
        }
    }
}

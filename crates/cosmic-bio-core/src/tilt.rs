//! Pointer-driven card tilt.

/// Maximum rotation in degrees at the edge of the surface.
pub const MAX_TILT_DEG: f64 = 10.0;

/// Perspective distance used when rendering the tilt.
pub const PERSPECTIVE_PX: u32 = 1200;

/// On-screen rectangle of the tilting surface, in client pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Pointer position as offsets from the centre, each in `[-0.5, 0.5]`.
    pub fn normalize(&self, client_x: f64, client_y: f64) -> Option<(f64, f64)> {
        if self.is_degenerate() {
            return None;
        }
        let px = ((client_x - self.left) / self.width - 0.5).clamp(-0.5, 0.5);
        let py = ((client_y - self.top) / self.height - 0.5).clamp(-0.5, 0.5);
        Some((px, py))
    }
}

/// Rotation pair in degrees: `x` around the horizontal axis, `y` around the vertical.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub x: f64,
    pub y: f64,
}

impl Tilt {
    /// Flat card.
    pub const RESET: Tilt = Tilt { x: 0.0, y: 0.0 };

    /// Tilt for a pointer at `(client_x, client_y)` over `rect`.
    ///
    /// Pointer above centre tips the top edge toward the viewer; pointer right
    /// of centre turns the card to the right. A zero-size rect yields [`Tilt::RESET`].
    pub fn from_pointer(client_x: f64, client_y: f64, rect: &SurfaceRect) -> Self {
        match rect.normalize(client_x, client_y) {
            Some((px, py)) => Tilt {
                x: py * -MAX_TILT_DEG,
                y: px * MAX_TILT_DEG,
            },
            None => Tilt::RESET,
        }
    }

    pub fn is_flat(&self) -> bool {
        *self == Tilt::RESET
    }

    /// CSS `transform` value for this tilt.
    pub fn css_transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({:.3}deg) rotateY({:.3}deg)",
            PERSPECTIVE_PX, self.x, self.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> SurfaceRect {
        SurfaceRect::new(100.0, 50.0, 400.0, 200.0)
    }

    #[test]
    fn test_centre_is_flat() {
        let tilt = Tilt::from_pointer(300.0, 150.0, &card());
        assert!(tilt.is_flat());
    }

    #[test]
    fn test_corners() {
        // Top-left corner
        let tilt = Tilt::from_pointer(100.0, 50.0, &card());
        assert_eq!(tilt, Tilt { x: 5.0, y: -5.0 });

        // Bottom-right corner
        let tilt = Tilt::from_pointer(500.0, 250.0, &card());
        assert_eq!(tilt, Tilt { x: -5.0, y: 5.0 });
    }

    #[test]
    fn test_outside_is_clamped() {
        let tilt = Tilt::from_pointer(10_000.0, -10_000.0, &card());
        assert_eq!(tilt, Tilt { x: 5.0, y: 5.0 });
    }

    #[test]
    fn test_degenerate_rect() {
        let rect = SurfaceRect::new(0.0, 0.0, 0.0, 100.0);
        assert!(Tilt::from_pointer(10.0, 10.0, &rect).is_flat());
        let rect = SurfaceRect::new(0.0, 0.0, f64::NAN, 100.0);
        assert!(Tilt::from_pointer(10.0, 10.0, &rect).is_flat());
    }

    #[test]
    fn test_css_transform() {
        assert_eq!(
            Tilt::RESET.css_transform(),
            "perspective(1200px) rotateX(0.000deg) rotateY(0.000deg)"
        );
        let tilt = Tilt { x: 2.5, y: -1.25 };
        assert_eq!(
            tilt.css_transform(),
            "perspective(1200px) rotateX(2.500deg) rotateY(-1.250deg)"
        );
    }
}

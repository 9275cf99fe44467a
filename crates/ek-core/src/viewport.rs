use serde::{Deserialize, Serialize};

use crate::error::{EkError, EkResult};
use crate::vec2::Vec2;

/// Axis-aligned rectangular bounds the particles bounce within.
///
/// The origin is the top-left corner; positions are expected to stay in
/// `[0, width) x [0, height)` under correct reflection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Create a viewport after validating the bounds.
    ///
    /// Errors with [`EkError::InvalidParam`] unless both dimensions are
    /// finite and strictly positive.
    pub fn new(width: f64, height: f64) -> EkResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(EkError::InvalidParam(
                "viewport width must be finite and > 0".into(),
            ));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(EkError::InvalidParam(
                "viewport height must be finite and > 0".into(),
            ));
        }
        Ok(Self { width, height })
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Whether a position lies within `[0, width) x [0, height)`.
    pub fn contains(&self, position: Vec2) -> bool {
        (0.0..self.width).contains(&position.x) && (0.0..self.height).contains(&position.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_bounds_accepted() -> EkResult<()> {
        let vp = Viewport::new(800.0, 600.0)?;
        assert_eq!(vp.width(), 800.0);
        assert_eq!(vp.height(), 600.0);
        Ok(())
    }

    #[test]
    fn zero_or_negative_bounds_rejected() {
        assert!(Viewport::new(0.0, 600.0).is_err());
        assert!(Viewport::new(800.0, -1.0).is_err());
    }

    #[test]
    fn non_finite_bounds_rejected() {
        assert!(Viewport::new(f64::NAN, 600.0).is_err());
        assert!(Viewport::new(800.0, f64::INFINITY).is_err());
    }

    #[test]
    fn contains_is_half_open() -> EkResult<()> {
        let vp = Viewport::new(800.0, 600.0)?;
        assert!(vp.contains(Vec2::new(0.0, 0.0)));
        assert!(vp.contains(Vec2::new(799.9, 599.9)));
        assert!(!vp.contains(Vec2::new(800.0, 300.0)));
        assert!(!vp.contains(Vec2::new(400.0, -0.5)));
        Ok(())
    }
}

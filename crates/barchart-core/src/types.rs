// File: crates/barchart-core/src/types.rs
// Summary: Shared types and constants (default sizes, dimensions).

use crate::error::{ChartError, ChartResult};

/// Default surface width in pixels.
pub const WIDTH: u32 = 400;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 300;

/// Chart size in pixels.
/// Contract: both sides are non-zero; must match the backing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Validate and create dimensions.
    pub fn new(width: u32, height: u32) -> ChartResult<Self> {
        if width == 0 || height == 0 {
            return Err(ChartError::InvalidDimensions(format!(
                "{width}x{height}: both sides must be positive"
            )));
        }
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> u32 { self.width }
    pub const fn height(&self) -> u32 { self.height }

    /// Width as a float, for pixel math.
    pub fn w(&self) -> f64 { f64::from(self.width) }
    /// Height as a float, for pixel math.
    pub fn h(&self) -> f64 { f64::from(self.height) }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_side_is_rejected() {
        assert_eq!(
            Dimensions::new(0, 10),
            Err(ChartError::InvalidDimensions("0x10: both sides must be positive".into()))
        );
        assert!(Dimensions::new(10, 0).is_err());
    }

    #[test]
    fn default_is_400_by_300() {
        let d = Dimensions::default();
        assert_eq!((d.width(), d.height()), (400, 300));
    }
}

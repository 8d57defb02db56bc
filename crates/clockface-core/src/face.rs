//! Dimensions of the clock face.

use thiserror::Error;

use crate::geometry::{Point, Rect};

/// Reasons a set of face dimensions is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FaceError {
    #[error("face size must be positive, got {0}")]
    NonPositiveSize(f64),
    #[error("center inset {inset} must be in [0, {half})")]
    InsetOutOfRange { inset: f64, half: f64 },
    #[error("number radius {radius} must be in (0, {half})")]
    NumberRadiusOutOfRange { radius: f64, half: f64 },
    #[error("label size {width}x{height} must be positive")]
    NonPositiveLabel { width: f64, height: f64 },
}

/// Geometry of a square clock face.
///
/// Fields are only reachable through [`ClockFace::new`], so `number_radius`
/// is always below `size / 2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockFace {
    size: f64,
    center_inset: f64,
    number_radius: f64,
    corner_radius: f64,
    label_width: f64,
    label_height: f64,
}

impl Default for ClockFace {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            center_inset: Self::DEFAULT_CENTER_INSET,
            number_radius: Self::DEFAULT_NUMBER_RADIUS,
            corner_radius: Self::DEFAULT_CORNER_RADIUS,
            label_width: Self::DEFAULT_LABEL_SIZE,
            label_height: Self::DEFAULT_LABEL_SIZE,
        }
    }
}

impl ClockFace {
    pub const DEFAULT_SIZE: f64 = 256.0;
    pub const DEFAULT_CENTER_INSET: f64 = 15.0;
    pub const DEFAULT_NUMBER_RADIUS: f64 = 90.0;
    pub const DEFAULT_CORNER_RADIUS: f64 = 45.0;
    pub const DEFAULT_LABEL_SIZE: f64 = 22.0;

    /// Validate and build a face with the default corner radius and label size.
    pub fn new(size: f64, center_inset: f64, number_radius: f64) -> Result<Self, FaceError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(FaceError::NonPositiveSize(size));
        }
        let half = size / 2.0;
        // NaN is never contained in a range
        if !(0.0..half).contains(&center_inset) {
            return Err(FaceError::InsetOutOfRange {
                inset: center_inset,
                half,
            });
        }
        if number_radius.is_nan() || number_radius <= 0.0 || number_radius >= half {
            return Err(FaceError::NumberRadiusOutOfRange {
                radius: number_radius,
                half,
            });
        }
        Ok(Self {
            size,
            center_inset,
            number_radius,
            ..Self::default()
        }
        .with_corner_radius(Self::DEFAULT_CORNER_RADIUS))
    }

    /// Background corner radius, clamped to `[0, size / 2]`.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = if radius.is_nan() {
            0.0
        } else {
            radius.clamp(0.0, self.size / 2.0)
        };
        self
    }

    /// Size of the frame each numeral is centered in.
    pub fn with_label_size(mut self, width: f64, height: f64) -> Result<Self, FaceError> {
        if width.is_nan() || height.is_nan() || width <= 0.0 || height <= 0.0 {
            return Err(FaceError::NonPositiveLabel { width, height });
        }
        self.label_width = width;
        self.label_height = height;
        Ok(self)
    }

    /// Diameter of the face bounds.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Distance from the face edge to the dial.
    pub fn center_inset(&self) -> f64 {
        self.center_inset
    }

    /// Distance from the center to each numeral's center.
    pub fn number_radius(&self) -> f64 {
        self.number_radius
    }

    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// `(width, height)` of a numeral frame.
    pub fn label_size(&self) -> (f64, f64) {
        (self.label_width, self.label_height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }

    /// Whole face area, background included.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.size, self.size)
    }

    /// Radius of the white dial.
    pub fn dial_radius(&self) -> f64 {
        self.size / 2.0 - self.center_inset
    }
}

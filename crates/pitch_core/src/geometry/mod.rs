//! Pitch geometry primitives
//!
//! Raw provider numbers only become pitch positions once paired with a
//! [`CoordinateSystem`]: the playable rectangle ([`PitchDimensions`]), the
//! y-axis direction ([`VerticalOrientation`]) and the origin convention
//! ([`Origin`]). Two coordinate systems are geometrically equivalent only if
//! all three match.

mod registry;

pub use registry::Provider;

use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, Result};

/// A location on the pitch, in the units of the enclosing coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Closed interval of valid values along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub min: f64,
    pub max: f64,
}

impl Dimension {
    /// A zero-width interval would make every rescale divide by zero, so it
    /// is rejected here rather than at transform time.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !(min < max) {
            return Err(DatasetError::InvalidDimensions(format!(
                "min must be below max, got [{min}, {max}]"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Map a value in this interval onto the unit interval.
    #[inline]
    pub fn to_base(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }

    /// Map a unit-interval value back into this interval.
    #[inline]
    pub fn from_base(&self, value: f64) -> f64 {
        self.min + value * self.span()
    }

    /// Reflect a value about the interval midpoint.
    #[inline]
    pub fn reflect(&self, value: f64) -> f64 {
        self.min + self.max - value
    }
}

/// The playable rectangle of a coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchDimensions {
    pub x_dim: Dimension,
    pub y_dim: Dimension,
}

impl PitchDimensions {
    pub fn new(x_dim: Dimension, y_dim: Dimension) -> Self {
        Self { x_dim, y_dim }
    }

    pub fn from_bounds(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        Ok(Self {
            x_dim: Dimension::new(x_min, x_max)?,
            y_dim: Dimension::new(y_min, y_max)?,
        })
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.x_dim.contains(point.x) && self.y_dim.contains(point.y)
    }
}

/// Which end of the y-axis is the top of the pitch as drawn.
///
/// Providers disagree on this independently of attacking direction: optical
/// tracking tends to grow y upward, screen-space event feeds downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalOrientation {
    /// y grows from the top of the pitch toward the bottom.
    TopToBottom,
    /// y grows from the bottom of the pitch toward the top.
    BottomToTop,
}

/// Where a provider anchors (0, 0) (or the dimension minima, for centered
/// systems).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    TopLeft,
    BottomLeft,
    Center,
}

/// How raw numbers map to physical pitch positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSystem {
    pub pitch_dimensions: PitchDimensions,
    pub vertical_orientation: VerticalOrientation,
    pub origin: Origin,
}

impl CoordinateSystem {
    pub fn new(
        pitch_dimensions: PitchDimensions,
        vertical_orientation: VerticalOrientation,
        origin: Origin,
    ) -> Self {
        Self {
            pitch_dimensions,
            vertical_orientation,
            origin,
        }
    }

    /// Build a coordinate system from explicit parameters, deriving the
    /// origin from the vertical convention (top-left for top-down data,
    /// bottom-left otherwise).
    pub fn from_parts(
        pitch_dimensions: PitchDimensions,
        vertical_orientation: VerticalOrientation,
    ) -> Self {
        let origin = match vertical_orientation {
            VerticalOrientation::TopToBottom => Origin::TopLeft,
            VerticalOrientation::BottomToTop => Origin::BottomLeft,
        };
        Self::new(pitch_dimensions, vertical_orientation, origin)
    }

    /// The same system with the playable rectangle replaced, everything else
    /// untouched.
    pub fn with_pitch_dimensions(&self, pitch_dimensions: PitchDimensions) -> Self {
        Self {
            pitch_dimensions,
            ..self.clone()
        }
    }

    /// Unit-square system growing bottom-up, the normalization target used
    /// when no provider convention is requested.
    pub fn normalized() -> Self {
        Self {
            pitch_dimensions: PitchDimensions {
                x_dim: Dimension { min: 0.0, max: 1.0 },
                y_dim: Dimension { min: 0.0, max: 1.0 },
            },
            vertical_orientation: VerticalOrientation::BottomToTop,
            origin: Origin::BottomLeft,
        }
    }
}

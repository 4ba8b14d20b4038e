//! Definition of the segment shape.

use crate::math::{Point, Real, UnitVector, Vector};
use na::Unit;

/// A segment shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// The unit direction of this segment.
    ///
    /// Points from `self.a` toward `self.b`. Returns `None` if both points
    /// are nearly equal.
    #[inline]
    pub fn direction(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.scaled_direction(), crate::math::DEFAULT_EPSILON)
    }
}

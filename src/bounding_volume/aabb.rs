//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};
use crate::shape::Triangle;
use num::Bounded;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is the simplest bounding volume, defined by its minimum and maximum
/// corners. Its edges are always parallel to the coordinate axes, making
/// intersection and distance queries very cheap.
///
/// Every box of this crate additionally guarantees a minimum thickness on each
/// axis: construction symmetrically inflates any axis thinner than
/// [`Aabb::MIN_SIDE_LENGTH`] about its midpoint, so the ray-slab test never
/// divides by a zero extent produced by a flat (near-planar) triangle set.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with the smallest coordinates of this AABB.
    pub mins: Point<Real>,
    /// The point with the largest coordinates of this AABB.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// The smallest extent a constructed box may have on any axis.
    pub const MIN_SIDE_LENGTH: Real = 5.0e-4;

    /// Creates a new AABB from its minimum and maximum corners.
    ///
    /// Axes thinner than [`Aabb::MIN_SIDE_LENGTH`] are inflated symmetrically
    /// about their midpoint. The inputs must satisfy `mins[i] <= maxs[i]` on
    /// every axis.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        let mut result = Aabb { mins, maxs };
        let half = Self::MIN_SIDE_LENGTH / 2.0;

        for i in 0..DIM {
            if result.maxs[i] - result.mins[i] < Self::MIN_SIDE_LENGTH {
                result.mins[i] -= half;
                result.maxs[i] += half;
            }

            debug_assert!(result.mins[i] <= result.maxs[i]);
        }

        result
    }

    /// Computes the AABB enclosing every vertex of a triangle batch.
    ///
    /// # Panics
    /// Panics if the batch is empty.
    pub fn from_triangles(batch: &[Triangle]) -> Aabb {
        assert!(
            !batch.is_empty(),
            "Triangle batch Aabb construction: the input batch should contain at least one triangle."
        );

        let mut mins = Point::from(Vector::repeat(Real::max_value()));
        let mut maxs = Point::from(Vector::repeat(-Real::max_value()));

        for tri in batch {
            for vtx in tri.vertices() {
                mins = mins.inf(&vtx);
                maxs = maxs.sup(&vtx);
            }
        }

        Aabb::new(mins, maxs)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The extents of this AABB along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The half-extents of this AABB along each axis.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        let half: Real = 0.5;
        (self.maxs - self.mins) * half
    }

    /// Does this AABB contain the given point?
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        for i in 0..DIM {
            if pt[i] < self.mins[i] || pt[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// The smallest AABB containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb::new(self.mins.inf(&other.mins), self.maxs.sup(&other.maxs))
    }
}

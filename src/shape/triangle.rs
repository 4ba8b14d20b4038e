//! Definition of the triangle shape.

use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::Segment;
use crate::utils;
use na::Unit;

/// A triangle shape.
///
/// The vertex winding order is meaningful: the outward normal is collinear to
/// `AB × AC`, so callers building triangles are responsible for a consistent
/// orientation. Nothing here checks it.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Triangle::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// An array containing the three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The vertex with index `i`, in `0..3`.
    #[inline]
    pub fn vertex(&self, i: usize) -> Point<Real> {
        self.vertices()[i]
    }

    /// The `i`-th cyclic edge of this triangle: vertex `i` to vertex `(i + 1) % 3`.
    #[inline]
    pub fn edge(&self, i: usize) -> Segment {
        Segment::new(self.vertex(i), self.vertex((i + 1) % 3))
    }

    /// The three edges of this triangle: [AB, BC, CA].
    #[inline]
    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }

    /// The geometric center of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        utils::center(&[self.a, self.b, self.c])
    }

    /// A vector normal to this triangle, scaled by twice its area.
    ///
    /// The result is collinear to `AB × AC`.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The unit normal of this triangle.
    ///
    /// Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.scaled_normal(), crate::math::DEFAULT_EPSILON)
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() * 0.5
    }

    /// The interior angle at the vertex with index `i`, in radians.
    #[inline]
    pub fn angle_at(&self, i: usize) -> Real {
        let u = self.vertex((i + 1) % 3) - self.vertex(i);
        let v = self.vertex((i + 2) % 3) - self.vertex(i);
        u.angle(&v)
    }
}

use crate::math::Real;
use crate::query::Ray;
use crate::shape::Triangle;

/// Determinants with a magnitude below this value are treated as the ray
/// being parallel to the triangle's plane.
const PARALLEL_DETERMINANT: Real = 1.0e-10;

impl Triangle {
    /// Casts `ray` on this triangle with the Möller–Trumbore method.
    ///
    /// Returns the ray parameter of the hit point, in units of `ray.dir`'s
    /// length. Containment is tested on closed intervals, so rays through an
    /// edge or a vertex count as hits, and the parameter may be negative for
    /// a hit behind the ray origin. A ray (near-)parallel to the triangle's
    /// plane never hits, even when it lies exactly in that plane.
    pub fn cast_local_ray(&self, ray: &Ray) -> Option<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;

        let p = ray.dir.cross(&ac);
        let det = ab.dot(&p);
        if det.abs() < PARALLEL_DETERMINANT {
            return None;
        }

        let inv_det = 1.0 / det;
        let ap = ray.origin - self.a;

        let u = ap.dot(&p) * inv_det;
        if u < 0.0 || u > 1.0 {
            return None;
        }

        let q = ap.cross(&ab);
        let v = ray.dir.dot(&q) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        Some(ac.dot(&q) * inv_det)
    }
}

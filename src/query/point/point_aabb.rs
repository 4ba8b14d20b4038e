use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, DIM};
use crate::query::{DistanceInterval, SignedSquaredDistance};

impl Aabb {
    /// Bounds the distance from `pt` to this AABB.
    ///
    /// The nearest bound is the distance to the closest point of the box
    /// (zero when `pt` lies inside), the farthest bound the distance to
    /// its most distant corner. Both are classified per axis from the
    /// query's offset to the box center against the half-extent: an axis
    /// whose slab contains the query contributes nothing to the nearest
    /// bound.
    pub fn distance_interval_to_local_point(&self, pt: &Point<Real>) -> DistanceInterval {
        let half = self.half_extents();
        let center = self.center();

        let mut nearest_sq = 0.0;
        let mut farthest_sq = 0.0;

        for i in 0..DIM {
            let offset = pt[i] - center[i];

            let far = if offset >= 0.0 {
                pt[i] - self.mins[i]
            } else {
                pt[i] - self.maxs[i]
            };
            farthest_sq += far * far;

            if offset < -half[i] {
                let near = pt[i] - self.mins[i];
                nearest_sq += near * near;
            } else if offset > half[i] {
                let near = pt[i] - self.maxs[i];
                nearest_sq += near * near;
            }
        }

        DistanceInterval::new(
            SignedSquaredDistance::from_squared(nearest_sq),
            SignedSquaredDistance::from_squared(farthest_sq),
        )
    }
}

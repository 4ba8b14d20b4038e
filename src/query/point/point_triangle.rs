use crate::math::{Point, Real};
use crate::query::SignedSquaredDistance;
use crate::shape::Triangle;

impl Triangle {
    /// The point of this triangle closest to `pt`.
    ///
    /// Classifies `pt` against the Voronoi regions of the triangle. Each edge
    /// projects `pt` onto its supporting line; a projection before the edge
    /// start or past its end votes for the corresponding vertex, and a vertex
    /// collecting the votes of both its incident edges is the closest point.
    /// A projection strictly inside an edge's range wins when `pt` lies on
    /// the outward side of that edge within the triangle's plane. When no
    /// vertex or edge region claims `pt`, it sits directly above or below the
    /// face and drops onto the plane along the normal.
    pub fn project_local_point(&self, pt: &Point<Real>) -> Point<Real> {
        let vertices = self.vertices();
        let normal = self.scaled_normal().normalize();
        let mut scores = [0u32; 3];

        for i in 0..3 {
            let j = (i + 1) % 3;
            let edge = self.edge(i);
            let len = edge.length();
            let dir = edge.scaled_direction() / len;
            let to_pt = pt - vertices[i];
            let coord = to_pt.dot(&dir) / len;

            if coord <= 0.0 {
                scores[i] += 1;
                if scores[i] == 2 {
                    return vertices[i];
                }
            }

            if coord >= 1.0 {
                scores[j] += 1;
                if scores[j] == 2 {
                    return vertices[j];
                }
            }

            if coord > 0.0 && coord < 1.0 && to_pt.dot(&dir.cross(&normal)) >= 0.0 {
                return vertices[i] + dir * (coord * len);
            }
        }

        // Directly above or below the face.
        *pt - normal * (pt - vertices[0]).dot(&normal)
    }

    /// The signed distance from `pt` to this triangle.
    ///
    /// The magnitude is the distance to [`project_local_point`](Self::project_local_point);
    /// the sign is positive when `pt` lies on the side the face normal points
    /// toward. This is a face-normal sign relative to this triangle's own
    /// winding, not a mesh-consistent inside/outside classification.
    pub fn signed_distance_to_local_point(&self, pt: &Point<Real>) -> SignedSquaredDistance {
        let closest = self.project_local_point(pt);
        let offset = pt - closest;
        let negative = self.scaled_normal().dot(&offset) < 0.0;

        SignedSquaredDistance::new(offset.norm_squared(), negative)
    }
}

//! Aliases for the mathematical types used throughout this crate.

use na::{Unit, Vector3};

/// The scalar type used throughout this crate.
pub type Real = f64;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The dimension of the space.
pub const DIM: usize = 3;

/// The point type.
pub use na::Point3 as Point;

/// The vector type.
pub use na::Vector3 as Vector;

/// A vector with a unit norm.
pub type UnitVector<N> = Unit<Vector3<N>>;

//! Distance magnitudes stored in squared space.

use crate::math::{Point, Real};
use std::cmp::Ordering;

/// A signed distance stored as its squared magnitude plus a sign.
///
/// Distance queries produce and compare a lot of magnitudes before a caller
/// ever needs a real length, so the square root is deferred until
/// [`value`](Self::value) is called. Comparisons operate on the squared
/// magnitude only and ignore the sign: they answer "which is closer", not
/// "which is more positive".
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default)]
pub struct SignedSquaredDistance {
    squared: Real,
    negative: bool,
}

impl SignedSquaredDistance {
    /// Squared magnitudes at or below this threshold count as negligible.
    ///
    /// The threshold applies to the squared value, so it corresponds to a
    /// real distance of `1.0e-10`.
    pub const NEGLIGIBLE_SQUARED: Real = 1.0e-20;

    /// Creates a signed distance from a squared magnitude and an explicit sign.
    #[inline]
    pub fn new(squared: Real, negative: bool) -> Self {
        debug_assert!(squared >= 0.0);
        SignedSquaredDistance { squared, negative }
    }

    /// Creates a non-negative distance from a squared magnitude.
    #[inline]
    pub fn from_squared(squared: Real) -> Self {
        Self::new(squared, false)
    }

    /// The squared distance between two points.
    #[inline]
    pub fn between(a: &Point<Real>, b: &Point<Real>) -> Self {
        Self::from_squared((b - a).norm_squared())
    }

    /// The squared magnitude.
    #[inline]
    pub fn squared(&self) -> Real {
        self.squared
    }

    /// The sign, as `1.0` or `-1.0`.
    #[inline]
    pub fn sign(&self) -> Real {
        if self.negative {
            -1.0
        } else {
            1.0
        }
    }

    /// The signed real distance. This is where the deferred square root is paid.
    #[inline]
    pub fn value(&self) -> Real {
        self.sign() * self.squared.sqrt()
    }

    /// The unsigned real distance.
    #[inline]
    pub fn abs_value(&self) -> Real {
        self.squared.sqrt()
    }

    /// Is this magnitude too small to tell apart from floating round-off?
    #[inline]
    pub fn is_negligible(&self) -> bool {
        self.squared <= Self::NEGLIGIBLE_SQUARED
    }
}

impl PartialEq for SignedSquaredDistance {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.squared == other.squared
    }
}

impl PartialOrd for SignedSquaredDistance {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.squared.partial_cmp(&other.squared)
    }
}

impl PartialEq<Real> for SignedSquaredDistance {
    #[inline]
    fn eq(&self, other: &Real) -> bool {
        self.squared == other * other
    }
}

impl PartialOrd<Real> for SignedSquaredDistance {
    #[inline]
    fn partial_cmp(&self, other: &Real) -> Option<Ordering> {
        self.squared.partial_cmp(&(other * other))
    }
}

/// An ordered pair of distance bounds, nearest first.
///
/// Produced by box distance queries: the nearest bound is the distance to the
/// closest point of the volume, the farthest bound to its most distant point.
/// A hierarchy traversal prunes a subtree when the nearest bound already
/// exceeds the best answer found so far.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistanceInterval {
    nearest: SignedSquaredDistance,
    farthest: SignedSquaredDistance,
}

impl DistanceInterval {
    /// Creates an interval from its two bounds. They must already be ordered.
    #[inline]
    pub fn new(nearest: SignedSquaredDistance, farthest: SignedSquaredDistance) -> Self {
        debug_assert!(nearest.squared() <= farthest.squared());
        DistanceInterval { nearest, farthest }
    }

    /// The smallest bound of this interval.
    #[inline]
    pub fn nearest(&self) -> SignedSquaredDistance {
        self.nearest
    }

    /// The largest bound of this interval.
    #[inline]
    pub fn farthest(&self) -> SignedSquaredDistance {
        self.farthest
    }
}

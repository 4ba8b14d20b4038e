//! Various unsorted geometrical operators.

pub use self::center::center;

mod center;

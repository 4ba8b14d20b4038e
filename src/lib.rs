/*!
hew3d
========

**hew3d** is a 3-dimensional geometric-query library written with
the rust programming language.

It provides the primitives a bounding-volume-hierarchy builder calls
repeatedly: axis-aligned bounding boxes constructed from triangle batches,
ray-slab and ray-triangle intersection, point-to-box distance bounds,
closest-point and signed-distance queries on triangles, and the
longest-axis split of a triangle batch into two spatially coherent halves.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod math;
pub mod partitioning;
pub mod query;
pub mod shape;
pub mod utils;

//!
//! # drizzle_geometry
//!
//! Geometric primitives for computing the overlap between an input image and an output image when drizzling: points,
//! small convex polygons, their canonical form and their intersection.
//!
//! Everything here works with fixed tolerances (see `VERTEX_ATOL` and `APPROX_ZERO`). These decide whether polygons
//! that touch along an edge or at a vertex are considered to overlap, and are not configurable.
//!

mod point;
mod tolerance;
mod half_plane;
mod polygon;
mod intersect;

pub use point::*;
pub use tolerance::*;
pub use half_plane::*;
pub use polygon::*;
pub use intersect::*;

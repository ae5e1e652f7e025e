//!
//! # Pixel maps
//!
//! A pixel map is a grid that gives, for the center of each pixel of an input image, the corresponding position in the
//! output frame. The grid itself is owned elsewhere (usually it's a numeric array belonging to the caller): this
//! module defines the `PixelMap` trait used to read it, an in-memory implementation and the `ValidRegion` type that
//! limits which part of the grid may be used.
//!

mod pixel_map_trait;
mod pixel_map_buffer;
mod valid_region;
mod shrink;

pub use pixel_map_trait::*;
pub use pixel_map_buffer::*;
pub use valid_region::*;

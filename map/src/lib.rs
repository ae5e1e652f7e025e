//!
//! # drizzle_map
//!
//! Drizzling combines dithered images onto a common output grid while conserving flux, by working out exactly how
//! each input pixel overlaps the pixels of the output image. The relationship between the two images is described
//! by a pixel map: for each input pixel center, the corresponding position in the output frame. This can describe
//! any geometric distortion, not just affine transformations.
//!
//! This crate provides the geometric core of that process:
//!
//! * `PixelMapping` maps points from the input image to the output frame (`map_forward()`) and back (`invert()`)
//! * `compute_overlap()` finds the region of the input image that falls on the output image
//! * `Scanner` turns that region into the range of input pixels to process on each row
//!
//! Accumulating flux into the output image is left to the caller, which iterates over the rows of an `ImageOverlap`:
//!
//! ```
//! use drizzle_map::*;
//!
//! let pixel_map   = PixelMapBuffer::identity(10, 10);
//! let mapping     = PixelMapping::for_pixel_map(&pixel_map);
//! let overlap     = compute_overlap(&mapping, (10, 10)).unwrap();
//!
//! for (y, interval) in overlap.intervals() {
//!     for x in interval.columns() {
//!         // ... drizzle input pixel (x, y) onto the output image
//!     }
//! }
//! ```
//!

mod error;
mod overlap;

pub mod pixel_map;
pub mod mapping;
pub mod scanner;

pub use error::*;
pub use overlap::*;
pub use pixel_map::*;
pub use mapping::*;
pub use scanner::*;

pub use drizzle_geometry as geometry;

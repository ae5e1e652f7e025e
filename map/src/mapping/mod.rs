//!
//! # Coordinate mapping
//!
//! `PixelMapping` combines a pixel map with the region of it that can be used, and maps points from the input image
//! to the output frame (`map_forward()`) and back again (`invert()`).
//!
//! Forward mapping is bilinear interpolation between the grid samples. There is no closed form for the inverse, so
//! it is found by searching for the input position whose forward mapping is closest to the requested output point.
//! The search is only precise to `INVERSION_TOLERANCE` pixels, which the scanner allows for when rasterizing.
//!

mod pixel_mapping;
mod forward;
mod inverse;

pub use pixel_mapping::*;
pub use inverse::*;

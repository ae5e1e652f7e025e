//!
//! # Scanner
//!
//! The scanner turns a convex polygon in input-pixel space into the range of pixel columns it covers on each row of
//! the input image, which is what's needed to decide which input pixels to drizzle onto the output image.
//!

mod clip_bounds;
mod scan_edge;
mod row_scan;
mod scanner;

pub use clip_bounds::*;
pub use scan_edge::*;
pub use row_scan::*;
pub use scanner::*;

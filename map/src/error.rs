use drizzle_geometry::*;

use thiserror::Error;

///
/// Errors that can occur when reading or interpolating a pixel map
///
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum MapError {
    /// The pixel map holds no value at this position, or an interpolated value came out as not-a-number
    #[error("pixel map is undefined at ({x:.2}, {y:.2})")]
    Undefined { x: f64, y: f64 },

    /// An integer pixel position was requested that is outside the valid region (or outside the grid itself)
    #[error("pixel ({x}, {y}) is outside the valid region of the pixel map")]
    OutsideValidRegion { x: i32, y: i32 },

    /// Bilinear interpolation needs at least a 2x2 grid of samples
    #[error("a {width}x{height} pixel map is too small to interpolate")]
    GridTooSmall { width: usize, height: usize },

    /// A buffer of coordinates did not hold two values for every pixel of the map
    #[error("pixel map buffer holds {actual} values but {expected} are needed")]
    BufferSize { expected: usize, actual: usize },
}

///
/// Errors from inverting a pixel map (finding the input pixel that maps to a point in the output frame)
///
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum InversionError {
    /// The pixel map was undefined at one of the points visited by the search
    #[error(transparent)]
    Map(#[from] MapError),

    /// The search ran out of iterations before reaching the required precision
    #[error("pixel map inversion did not converge (best estimate is ({:.2}, {:.2}))", .estimate.x(), .estimate.y())]
    NotConverged { estimate: Point },
}

impl InversionError {
    ///
    /// If the search ran to completion without converging, the best estimate that it found
    ///
    /// Callers that can tolerate an imprecise result can use this in place of a converged value.
    ///
    pub fn estimate(&self) -> Option<Point> {
        match self {
            InversionError::Map(_)                          => None,
            InversionError::NotConverged { estimate }       => Some(*estimate),
        }
    }
}

///
/// Errors from creating a scanner
///
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ScannerError {
    /// The polygon has too few vertices to enclose any area
    #[error("cannot scan a polygon with {vertices} vertices")]
    NotAPolygon { vertices: usize },
}

///
/// Reasons why the overlap between an input image and an output image could not be computed
///
/// None of these are fatal: they all mean that the input image contributes nothing to the output using the
/// overlap scanner. `scan_input_region()` can be used to fall back to scanning the whole input image.
///
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum OverlapError {
    /// One of the corners of the input image could not be mapped to the output frame
    #[error("error computing input image bounding box")]
    BoundingBox(#[source] MapError),

    /// The input image does not overlap the output image (or only touches it)
    #[error("input image does not overlap the output image")]
    NoOverlap,

    /// A vertex of the overlap region could not be mapped back to the input image
    #[error("failed to invert pixel map at position ({x:.2}, {y:.2})")]
    Inversion { x: f64, y: f64, source: InversionError },

    /// The overlap region mapped back to the input image does not form a polygon
    #[error(transparent)]
    Scanner(#[from] ScannerError),
}

///
/// Absolute distance below which two vertices are considered to be the same vertex
///
pub const VERTEX_ATOL: f64 = 1.0e-12;

///
/// Cross products with a magnitude at or below this value are treated as zero (the point lies on the line)
///
pub const APPROX_ZERO: f64 = 1.0e3 * f64::MIN_POSITIVE;

///
/// Maximum number of vertices a polygon can hold
///
/// Intersecting two image outlines (quadrilaterals, or near-quadrilaterals with up to 8 vertices) can never produce
/// more vertices than this.
///
pub const POLYGON_CAPACITY: usize = 2 * 8;

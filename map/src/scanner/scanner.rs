use super::clip_bounds::*;
use super::row_scan::*;
use super::scan_edge::*;
use crate::error::*;
use crate::mapping::*;

use drizzle_geometry::*;
use smallvec::*;

///
/// The current edge in each chain
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct ScanCursor {
    left:   usize,
    right:  usize,
}

///
/// Converts a convex polygon into the range of pixel columns it covers on each row
///
/// The polygon is split at its lowest and highest vertices into a chain of left edges and a chain of right edges,
/// both running upwards. Rows must be requested in order (`next_row_interval()` with non-decreasing `y`): the scanner
/// keeps a cursor into each chain that only ever moves forward. Once it moves past the end of a chain the scanner
/// is exhausted and will return `RowScan::ScanEnded` for every subsequent row.
///
/// Scanners are not `Clone`: create a new one to scan the same polygon again.
///
#[derive(Debug)]
pub struct Scanner {
    /// Edges on the left-hand side of the polygon, from bottom to top
    left: SmallVec<[ScanEdge; POLYGON_CAPACITY]>,

    /// Edges on the right-hand side of the polygon, from bottom to top
    right: SmallVec<[ScanEdge; POLYGON_CAPACITY]>,

    /// The current edges, or None once the scan has ended
    cursor: Option<ScanCursor>,

    /// The last row that moved the cursor
    last_row: Option<i32>,

    /// y coordinate of the lowest vertex of the polygon
    min_y: f64,

    /// y coordinate of the highest vertex of the polygon
    max_y: f64,

    /// The rows and columns that results are limited to
    clip: ClipBounds,
}

///
/// Moves `index` along `chain` until `has_passed` is false for the edge it points at
///
/// Returns false if the end of the chain is reached first.
///
#[inline]
fn advance_edge(chain: &[ScanEdge], index: &mut usize, has_passed: impl Fn(&ScanEdge) -> bool) -> bool {
    while has_passed(&chain[*index]) {
        if *index + 1 >= chain.len() {
            return false;
        }

        *index += 1;
    }

    true
}

impl Scanner {
    ///
    /// Creates a scanner for a convex, counter-clockwise polygon
    ///
    /// Fails if the polygon has fewer than 3 vertices.
    ///
    pub fn new(polygon: &Polygon, clip: ClipBounds) -> Result<Scanner, ScannerError> {
        if polygon.is_degenerate() {
            return Err(ScannerError::NotAPolygon { vertices: polygon.len() });
        }

        let vertices        = polygon.vertices();
        let num_vertices    = vertices.len();
        let prev            = |idx: usize| (idx + num_vertices - 1) % num_vertices;
        let next            = |idx: usize| (idx + 1) % num_vertices;

        // Lowest vertex: if its lower neighbour is at the same height, the bottom is an edge and the left chain starts at the leftmost of the two
        let mut min_y       = vertices[0].y();
        let mut min_left    = 0;
        for (idx, vertex) in vertices.iter().enumerate().skip(1) {
            if vertex.y() < min_y {
                min_left    = idx;
                min_y       = vertex.y();
            }
        }

        let (i1, i2)        = (prev(min_left), next(min_left));
        let mut min_right   = if vertices[i1].y() < vertices[i2].y() { i1 } else { i2 };
        if vertices[min_right].y() <= min_y * (1.0 + VERTEX_ATOL.copysign(min_y)) {
            if vertices[min_left].x() > vertices[min_right].x() {
                std::mem::swap(&mut min_left, &mut min_right);
            }
        } else {
            min_right = min_left;
        }

        // Highest vertex, in the same way: the right chain ends at the rightmost of the two if the top is an edge
        let mut max_y       = vertices[0].y();
        let mut max_right   = 0;
        for (idx, vertex) in vertices.iter().enumerate().skip(1) {
            if vertex.y() > max_y {
                max_right   = idx;
                max_y       = vertex.y();
            }
        }

        let (i1, i2)        = (prev(max_right), next(max_right));
        let mut max_left    = if vertices[i1].y() > vertices[i2].y() { i1 } else { i2 };
        if vertices[max_left].y() >= max_y * (1.0 - VERTEX_ATOL.copysign(max_y)) {
            if vertices[max_left].x() > vertices[max_right].x() {
                std::mem::swap(&mut max_left, &mut max_right);
            }
        } else {
            max_left = max_right;
        }

        // Left chain: clockwise (decreasing vertex index) from the bottom to the top
        if max_left > min_left {
            min_left += num_vertices;
        }

        let left = (0..(min_left - max_left))
            .map(|k| {
                let i1 = (min_left - k) % num_vertices;
                ScanEdge::new(vertices[i1], vertices[prev(i1)], EdgeSide::Left)
            })
            .collect::<SmallVec<[ScanEdge; POLYGON_CAPACITY]>>();

        // Right chain: counter-clockwise (increasing vertex index) from the bottom to the top
        if max_right < min_right {
            max_right += num_vertices;
        }

        let right = (0..(max_right - min_right))
            .map(|k| {
                let i1 = (min_right + k) % num_vertices;
                ScanEdge::new(vertices[i1], vertices[next(i1)], EdgeSide::Right)
            })
            .collect::<SmallVec<[ScanEdge; POLYGON_CAPACITY]>>();

        log::trace!("Scanner covers y={:.3}..{:.3} with {} left and {} right edges", min_y, max_y, left.len(), right.len());

        let cursor = if left.is_empty() || right.is_empty() {
            None
        } else {
            Some(ScanCursor { left: 0, right: 0 })
        };

        Ok(Scanner {
            left:       left,
            right:      right,
            cursor:     cursor,
            last_row:   None,
            min_y:      min_y,
            max_y:      max_y,
            clip:       clip,
        })
    }

    ///
    /// y coordinate of the lowest point of the polygon
    ///
    #[inline]
    pub fn min_y(&self) -> f64 { self.min_y }

    ///
    /// y coordinate of the highest point of the polygon
    ///
    #[inline]
    pub fn max_y(&self) -> f64 { self.max_y }

    #[inline]
    pub fn clip(&self) -> ClipBounds { self.clip }

    #[inline]
    pub fn left_edges(&self) -> &[ScanEdge] { &self.left }

    #[inline]
    pub fn right_edges(&self) -> &[ScanEdge] { &self.right }

    ///
    /// True once the scan has ended (every further row will return `RowScan::ScanEnded`)
    ///
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_none()
    }

    ///
    /// Finds the columns of pixels whose centers are covered by the polygon on row `y`
    ///
    /// Rows must be requested in non-decreasing order. A row before one that has already been scanned is treated as
    /// out of bounds.
    ///
    /// The edges of the polygon are widened by `INVERSION_TOLERANCE` (the polygon usually comes from inverting a pixel
    /// map, which is only accurate to this distance), and the result is clipped to the clip bounds. Both the bottom
    /// and the top of the row are considered, and the narrower of the two intervals is returned.
    ///
    pub fn next_row_interval(&mut self, y: i32) -> RowScan {
        let mut cursor = match self.cursor {
            Some(cursor)    => cursor,
            None            => { return RowScan::ScanEnded; }
        };

        if self.clip.clips_y() && (y < 0 || y > self.clip.ymax) {
            return RowScan::OutOfBounds;
        }

        // Bottom and top of the pixels on this row
        let pyb = y as f64 - 0.5;
        let pyt = y as f64 + 0.5;

        if pyt <= self.min_y || pyb >= self.max_y + 1.0 {
            return RowScan::OutOfBounds;
        }

        if self.last_row.map(|last_row| y < last_row).unwrap_or(false) {
            return RowScan::OutOfBounds;
        }
        self.last_row = Some(y);

        let y = y as f64;

        // Edges at the bottom of the row
        let bottom_passed = |edge: &ScanEdge| pyb > edge.end().y();
        if !advance_edge(&self.left, &mut cursor.left, bottom_passed) || !advance_edge(&self.right, &mut cursor.right, bottom_passed) {
            self.cursor = None;
            return RowScan::ScanEnded;
        }

        let mut xlb = self.left[cursor.left].pixel_x_at(y) - INVERSION_TOLERANCE;
        let mut xrb = self.right[cursor.right].pixel_x_at(y) + INVERSION_TOLERANCE;

        // Edges at the top of the row
        let top_passed = |edge: &ScanEdge| pyt > edge.end().y() + 0.5 + INVERSION_TOLERANCE;
        if !advance_edge(&self.left, &mut cursor.left, top_passed) || !advance_edge(&self.right, &mut cursor.right, top_passed) {
            self.cursor = None;
            return RowScan::ScanEnded;
        }

        let mut xlt = self.left[cursor.left].pixel_x_at(y) - INVERSION_TOLERANCE;
        let mut xrt = self.right[cursor.right].pixel_x_at(y) + INVERSION_TOLERANCE;

        self.cursor = Some(cursor);

        if self.clip.clips_x() {
            let xmin = self.clip.xmin as f64;
            let xmax = self.clip.xmax as f64;

            xlb = xlb.max(xmin);
            xlt = xlt.max(xmin);
            xrb = xrb.min(xmax);
            xrt = xrt.min(xmax);
        }

        if xlt >= xrt {
            if xlb >= xrb {
                RowScan::EmptyRow
            } else {
                RowScan::Interval(RowInterval::new(xlb.round() as i32, xrb.round() as i32))
            }
        } else if xlb >= xrb {
            RowScan::Interval(RowInterval::new(xlt.round() as i32, xrt.round() as i32))
        } else {
            RowScan::Interval(RowInterval::new(xlb.max(xlt).round() as i32, xrb.min(xrt).round() as i32))
        }
    }
}

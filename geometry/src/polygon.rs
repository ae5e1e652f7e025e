use super::point::*;
use super::half_plane::*;
use super::tolerance::*;

#[cfg(feature = "serialization")]
use serde_derive::{Serialize, Deserialize};

use itertools::*;
use smallvec::*;

use std::iter::{FromIterator};
use std::ops::{ControlFlow};

///
/// A polygon with at most `POLYGON_CAPACITY` vertices
///
/// The vertices are stored in order and the last vertex joins back to the first. A polygon with fewer than 3
/// vertices is degenerate and encloses no area. Most operations assume the polygon is convex: `normalize()` will
/// put it into the canonical form expected by the intersection and scanning code (counter-clockwise, with no
/// repeated vertices or collinear midpoints).
///
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Polygon {
    vertices: SmallVec<[Point; POLYGON_CAPACITY]>,
}

impl Polygon {
    ///
    /// Creates a polygon with no vertices
    ///
    #[inline]
    pub fn empty() -> Polygon {
        Polygon {
            vertices: smallvec![]
        }
    }

    ///
    /// Creates a polygon from a list of vertices
    ///
    /// Vertices after the first `POLYGON_CAPACITY` are discarded (with a warning in the log). The vertices are used
    /// as supplied: call `normalize()` to put them into canonical form.
    ///
    pub fn new(vertices: impl IntoIterator<Item=Point>) -> Polygon {
        let mut vertices    = vertices.into_iter();
        let polygon         = Polygon {
            vertices: vertices.by_ref().take(POLYGON_CAPACITY).collect()
        };

        if vertices.next().is_some() {
            log::warn!("Polygon has more than {} vertices: the extra vertices were discarded", POLYGON_CAPACITY);
        }

        polygon
    }

    ///
    /// Creates a polygon from a list of vertices, or returns `None` if there are more than `POLYGON_CAPACITY` of them
    ///
    pub fn try_new(vertices: impl IntoIterator<Item=Point>) -> Option<Polygon> {
        let mut polygon = Polygon::empty();

        for vertex in vertices {
            if polygon.vertices.len() >= POLYGON_CAPACITY {
                return None;
            }

            polygon.vertices.push(vertex);
        }

        Some(polygon)
    }

    ///
    /// Creates an axis-aligned rectangle, listing the vertices counter-clockwise starting at `min`
    ///
    pub fn rectangle(min: Point, max: Point) -> Polygon {
        Polygon {
            vertices: smallvec![
                Point(min.x(), min.y()),
                Point(max.x(), min.y()),
                Point(max.x(), max.y()),
                Point(min.x(), max.y()),
            ]
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    ///
    /// True if this polygon has too few vertices to enclose any area
    ///
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    ///
    /// Iterates over the vertices of this polygon
    ///
    #[inline]
    pub fn iter(&self) -> impl '_ + Clone + ExactSizeIterator<Item=Point> {
        self.vertices.iter().copied()
    }

    ///
    /// Iterates over the edges of this polygon as `(start, end)` pairs, including the edge that closes the polygon
    ///
    pub fn edges(&self) -> impl '_ + Iterator<Item=(Point, Point)> {
        let closing = if self.vertices.len() >= 2 { self.vertices.len() } else { 0 };

        self.iter()
            .circular_tuple_windows::<(Point, Point)>()
            .take(closing)
    }

    ///
    /// The mean of the vertices of this polygon
    ///
    pub fn centroid(&self) -> Point {
        if self.vertices.is_empty() {
            return Point::undefined();
        }

        let sum = self.iter().fold(Point(0.0, 0.0), |sum, vertex| sum + vertex);
        sum * (1.0 / self.vertices.len() as f64)
    }

    ///
    /// The signed area enclosed by this polygon: positive for a counter-clockwise polygon
    ///
    pub fn signed_area(&self) -> f64 {
        0.5 * self.edges()
            .map(|(start, end)| start.cross(end))
            .sum::<f64>()
    }

    ///
    /// Reverses the order of the vertices
    ///
    #[inline]
    pub fn reverse(&mut self) {
        self.vertices.reverse();
    }

    ///
    /// Re-orders the vertices of a convex polygon so that they run counter-clockwise
    ///
    /// The orientation is decided from the sign of the enclosed area, so repeated or nearly coincident vertices
    /// can't flip it. Degenerate polygons are left alone.
    ///
    pub fn orient_ccw(&mut self) {
        if self.is_degenerate() { return; }

        if self.signed_area() < 0.0 {
            self.reverse();
        }
    }

    ///
    /// Removes vertices that duplicate their predecessor or that lie on the line joining their neighbours
    ///
    /// Neighbours are always taken from the original vertex list, so a run of collinear points is reduced in a
    /// single pass. Degenerate polygons are left alone.
    ///
    pub fn simplify(&mut self) {
        if self.is_degenerate() { return; }

        let num_vertices    = self.vertices.len();
        let vertices        = &self.vertices;

        let simplified = (0..num_vertices)
            .filter(|idx| {
                let prev    = vertices[(idx + num_vertices - 1) % num_vertices];
                let vertex  = vertices[*idx];
                let next    = vertices[(idx + 1) % num_vertices];

                let dp      = next - prev;
                let dq      = vertex - prev;

                dp.cross(dq).abs() > APPROX_ZERO && dp.magnitude() > VERTEX_ATOL
            })
            .map(|idx| vertices[idx])
            .collect::<SmallVec<[Point; POLYGON_CAPACITY]>>();

        self.vertices = simplified;
    }

    ///
    /// Puts this polygon into canonical form: counter-clockwise with no repeated vertices or collinear midpoints
    ///
    #[inline]
    pub fn normalize(&mut self) {
        self.orient_ccw();
        self.simplify();
    }

    ///
    /// Returns a normalized copy of this polygon
    ///
    #[inline]
    pub fn normalized(&self) -> Polygon {
        let mut result = self.clone();
        result.normalize();
        result
    }

    ///
    /// True if a point is inside (or on the boundary of) this polygon, which must be convex and counter-clockwise
    ///
    pub fn contains_point(&self, point: Point) -> bool {
        !self.is_degenerate() && self.edges().all(|(v_, v)| is_point_in_half_plane(point, v_, v))
    }

    ///
    /// True if every vertex of this polygon lies inside (or on the boundary of) `container`
    ///
    /// `container` must be convex and counter-clockwise.
    ///
    pub fn is_contained_in(&self, container: &Polygon) -> bool {
        container.edges()
            .all(|(v_, v)| self.iter().all(|pt| is_point_in_half_plane(pt, v_, v)))
    }

    ///
    /// Adds a vertex found while tracing an intersection
    ///
    /// A vertex equal to the previous one is skipped. Returns `Break` when the vertex closes the polygon (it is equal
    /// to the first vertex) or when the polygon is already full, which are both points where tracing should stop.
    ///
    pub (crate) fn append_vertex(&mut self, vertex: Point) -> ControlFlow<()> {
        if let Some(last) = self.vertices.last() {
            if last.is_near_to(vertex, VERTEX_ATOL) {
                return ControlFlow::Continue(());
            }
        }

        if let Some(first) = self.vertices.first() {
            if first.is_near_to(vertex, VERTEX_ATOL) {
                return ControlFlow::Break(());
            }
        }

        if self.vertices.len() >= POLYGON_CAPACITY {
            return ControlFlow::Break(());
        }

        self.vertices.push(vertex);
        ControlFlow::Continue(())
    }
}

impl FromIterator<Point> for Polygon {
    #[inline]
    fn from_iter<TIter: IntoIterator<Item=Point>>(iter: TIter) -> Polygon {
        Polygon::new(iter)
    }
}

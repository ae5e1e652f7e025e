use super::point::*;
use super::polygon::*;
use super::half_plane::*;
use super::tolerance::*;

///
/// Edge pairs whose cross product is below this are treated as parallel when deciding which polygon to advance
///
const PARALLEL_EDGE_AREA: f64 = 1.0e-12;

///
/// Which of the two polygons the boundary of the intersection is currently following
///
#[derive(Clone, Copy, PartialEq, Debug)]
enum Inside {
    /// No crossing has been found yet
    Unknown,

    /// The boundary is currently following the edges of P
    P,

    /// The boundary is currently following the edges of Q
    Q,
}

///
/// Tracks the current edge while walking around a polygon
///
struct EdgeCursor<'a> {
    vertices:   &'a [Point],
    index:      usize,
    start:      Point,
    end:        Point,
}

impl<'a> EdgeCursor<'a> {
    ///
    /// Starts at the edge joining the last vertex to the first
    ///
    #[inline]
    fn new(vertices: &'a [Point]) -> EdgeCursor<'a> {
        EdgeCursor {
            vertices:   vertices,
            index:      0,
            start:      vertices[vertices.len() - 1],
            end:        vertices[0],
        }
    }

    #[inline]
    fn advance(&mut self) {
        self.index  += 1;
        self.start  = self.end;
        self.end    = self.vertices[self.index % self.vertices.len()];
    }

    #[inline]
    fn direction(&self) -> Point {
        self.end - self.start
    }
}

///
/// Computes the intersection of two convex polygons
///
/// The result is empty if either polygon has fewer than 3 vertices, and will have fewer than 3 vertices if the
/// polygons do not overlap (or only touch). Neither input needs to be in canonical form: copies of both are oriented
/// counter-clockwise before intersecting. The result has its collinear and repeated vertices removed.
///
/// If one polygon is entirely inside the other (boundaries included) then the result is that polygon. Otherwise the
/// boundaries of the two polygons are walked together, advancing along whichever polygon is 'behind' the other
/// and emitting crossing points and the vertices of whichever polygon is currently on the inside. The walk is bounded
/// to `2 * (|p| + |q|) + 1` steps, so degenerate inputs cannot make it loop forever.
///
pub fn intersect(p: &Polygon, q: &Polygon) -> Polygon {
    if p.is_degenerate() || q.is_degenerate() {
        return Polygon::empty();
    }

    let mut p = p.clone();
    let mut q = q.clone();
    p.orient_ccw();
    q.orient_ccw();

    // Containment is the common case when drizzling (input image entirely inside the output image or vice versa)
    if p.is_contained_in(&q) {
        p.simplify();
        return p;
    } else if q.is_contained_in(&p) {
        q.simplify();
        return q;
    }

    let mut p_edge          = EdgeCursor::new(p.vertices());
    let mut q_edge          = EdgeCursor::new(q.vertices());
    let mut inside          = Inside::Unknown;
    let mut first_crossing  = None;
    let mut result          = Polygon::empty();

    let max_steps           = 2 * (p.len() + q.len());

    for step in 0..=max_steps {
        let (pv_, pv)   = (p_edge.start, p_edge.end);
        let (qv_, qv)   = (q_edge.start, q_edge.end);
        let dp          = p_edge.direction();
        let dq          = q_edge.direction();

        // Line-line intersection parameters (t along dp, u along dq), scaled by the cross product of the edges
        let mut t       = (pv_.y() - qv_.y()) * dq.x() - (pv_.x() - qv_.x()) * dq.y();
        let mut u       = (pv_.y() - qv_.y()) * dp.x() - (pv_.x() - qv_.x()) * dp.y();
        let signed_area = dp.cross(dq);
        let d;

        if signed_area >= 0.0 {
            d = signed_area;
        } else {
            t = -t;
            u = -u;
            d = -signed_area;
        }

        let pv_in_hpdq  = is_point_strictly_in_half_plane(qv_, qv, pv);
        let qv_in_hpdp  = is_point_strictly_in_half_plane(pv_, pv, qv);

        if 0.0 <= t && t <= d && 0.0 <= u && u <= d && d > APPROX_ZERO {
            // The edges cross
            let t       = t / d;
            let crossing = pv_ + (pv - pv_) * t;

            match first_crossing {
                None => {
                    first_crossing = Some((step, crossing));
                    if result.append_vertex(crossing).is_break() { break; }
                }

                Some((first_step, first_vertex)) if first_vertex.is_near_to(crossing, VERTEX_ATOL) => {
                    // Back at the start: done unless this is the same crossing seen from the neighbouring edge
                    if step > first_step + 1 { break; }
                    first_crossing = Some((step, first_vertex));
                }

                Some(_) => {
                    if result.append_vertex(crossing).is_break() { break; }
                }
            }

            if pv_in_hpdq {
                inside = Inside::P;
            } else if qv_in_hpdp {
                inside = Inside::Q;
            }
        }

        // Advance whichever edge is behind
        if d < PARALLEL_EDGE_AREA && !pv_in_hpdq && !qv_in_hpdp {
            if inside == Inside::P {
                q_edge.advance();
            } else {
                p_edge.advance();
            }
        } else if signed_area >= 0.0 {
            if qv_in_hpdp {
                if inside == Inside::P {
                    if result.append_vertex(pv).is_break() { break; }
                }
                p_edge.advance();
            } else {
                if inside == Inside::Q {
                    if result.append_vertex(qv).is_break() { break; }
                }
                q_edge.advance();
            }
        } else {
            if pv_in_hpdq {
                if inside == Inside::Q {
                    if result.append_vertex(qv).is_break() { break; }
                }
                q_edge.advance();
            } else {
                if inside == Inside::P {
                    if result.append_vertex(pv).is_break() { break; }
                }
                p_edge.advance();
            }
        }
    }

    result.simplify();
    result
}

impl Polygon {
    ///
    /// Computes the intersection of this polygon with another convex polygon
    ///
    #[inline]
    pub fn intersect(&self, other: &Polygon) -> Polygon {
        intersect(self, other)
    }
}

use super::point::*;
use super::tolerance::*;

///
/// Tests whether a point is in the half-plane to the left of the directed edge `v_ -> v`, including points that lie
/// on the edge itself
///
/// This evaluates `(v - v_) x (pt - v_) >= 0`, expanded as `v x pt - v_ x pt - v x v_` and using `APPROX_ZERO` as
/// the tolerance for 'on the edge'.
///
#[inline]
pub fn is_point_in_half_plane(pt: Point, v_: Point, v: Point) -> bool {
    (v.cross(pt) - v_.cross(pt) - v.cross(v_)) >= -APPROX_ZERO
}

///
/// As for `is_point_in_half_plane()`, but points on the edge are not considered to be inside
///
#[inline]
pub fn is_point_strictly_in_half_plane(pt: Point, v_: Point, v: Point) -> bool {
    (v.cross(pt) - v_.cross(pt) - v.cross(v_)) > APPROX_ZERO
}

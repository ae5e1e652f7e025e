#[cfg(feature = "serialization")]
use serde_derive::{Serialize, Deserialize};

use std::ops::{Add, Sub, Mul};

///
/// A point in either the input-pixel or the output-frame coordinate space
///
/// Which space a point belongs to is decided by the code holding it: the two are never mixed.
///
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Point(pub f64, pub f64);

impl Point {
    ///
    /// Creates a new point
    ///
    #[inline]
    pub fn new(x: f64, y: f64) -> Point {
        Point(x, y)
    }

    ///
    /// A point where neither coordinate is defined
    ///
    #[inline]
    pub fn undefined() -> Point {
        Point(f64::NAN, f64::NAN)
    }

    #[inline]
    pub fn x(&self) -> f64 { self.0 }

    #[inline]
    pub fn y(&self) -> f64 { self.1 }

    ///
    /// True if either coordinate of this point is not-a-number
    ///
    #[inline]
    pub fn is_undefined(&self) -> bool {
        self.0.is_nan() || self.1.is_nan()
    }

    ///
    /// The z-component of the cross product `self x other`
    ///
    /// For two edge vectors this is twice the signed area of the triangle they span, which is what the
    /// orientation and half-plane tests are built on.
    ///
    #[inline]
    pub fn cross(&self, other: Point) -> f64 {
        self.0 * other.1 - self.1 * other.0
    }

    ///
    /// Euclidean length of this point treated as a vector
    ///
    #[inline]
    pub fn magnitude(&self) -> f64 {
        (self.0 * self.0 + self.1 * self.1).sqrt()
    }

    #[inline]
    pub fn distance_to(&self, other: Point) -> f64 {
        (*self - other).magnitude()
    }

    ///
    /// True if both coordinates of the two points differ by less than `atol`
    ///
    #[inline]
    pub fn is_near_to(&self, other: Point, atol: f64) -> bool {
        (self.0 - other.0).abs() < atol && (self.1 - other.1).abs() < atol
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, other: Point) -> Point {
        Point(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, other: Point) -> Point {
        Point(self.0 - other.0, self.1 - other.1)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, factor: f64) -> Point {
        Point(self.0 * factor, self.1 * factor)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Point {
        Point(x, y)
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(point: Point) -> (f64, f64) {
        (point.0, point.1)
    }
}

#[cfg(feature = "serialization")]
use serde_derive::{Serialize, Deserialize};

use std::ops::{RangeInclusive};

///
/// The columns covered by a polygon on a single row (inclusive at both ends)
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct RowInterval {
    pub x1: i32,
    pub x2: i32,
}

impl RowInterval {
    #[inline]
    pub fn new(x1: i32, x2: i32) -> RowInterval {
        RowInterval { x1, x2 }
    }

    ///
    /// The pixel columns in this interval
    ///
    #[inline]
    pub fn columns(&self) -> RangeInclusive<i32> {
        self.x1..=self.x2
    }

    ///
    /// The number of pixels in this interval
    ///
    #[inline]
    pub fn len(&self) -> usize {
        if self.x2 < self.x1 { 0 } else { (self.x2 - self.x1 + 1) as usize }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x2 < self.x1
    }
}

///
/// The result of scanning a row of a polygon
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum RowScan {
    /// The polygon covers these columns on the row
    Interval(RowInterval),

    /// The row is outside the clip bounds or outside the polygon
    OutOfBounds,

    /// The polygon does not cover any pixel centers on this row
    EmptyRow,

    /// The scanner has moved past the top of the polygon: no more rows will produce intervals
    ScanEnded,
}

impl RowScan {
    ///
    /// The interval for this row, if there is one
    ///
    #[inline]
    pub fn interval(&self) -> Option<RowInterval> {
        match self {
            RowScan::Interval(interval) => Some(*interval),
            _                           => None,
        }
    }

    #[inline]
    pub fn is_scan_ended(&self) -> bool {
        *self == RowScan::ScanEnded
    }
}

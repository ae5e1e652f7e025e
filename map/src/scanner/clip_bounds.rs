use crate::pixel_map::*;

#[cfg(feature = "serialization")]
use serde_derive::{Serialize, Deserialize};

///
/// The pixel columns and rows that a scanner is allowed to return
///
/// Rows are limited to `0..=ymax` and columns to `xmin..=xmax`. Setting `xmax < xmin` turns off clipping in the
/// x-direction, and setting `ymax < ymin` turns it off in the y-direction.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ClipBounds {
    pub xmin: i32,
    pub xmax: i32,
    pub ymin: i32,
    pub ymax: i32,
}

impl ClipBounds {
    ///
    /// Clip bounds that allow any row or column
    ///
    #[inline]
    pub fn unbounded() -> ClipBounds {
        ClipBounds { xmin: 0, xmax: -1, ymin: 0, ymax: -1 }
    }

    #[inline]
    pub fn clips_x(&self) -> bool {
        self.xmax >= self.xmin
    }

    #[inline]
    pub fn clips_y(&self) -> bool {
        self.ymax >= self.ymin
    }
}

impl From<ValidRegion> for ClipBounds {
    #[inline]
    fn from(region: ValidRegion) -> ClipBounds {
        ClipBounds {
            xmin: region.xmin,
            xmax: region.xmax,
            ymin: region.ymin,
            ymax: region.ymax,
        }
    }
}

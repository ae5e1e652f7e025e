use super::pixel_map_trait::*;

use drizzle_geometry::*;

#[cfg(feature = "serialization")]
use serde_derive::{Serialize, Deserialize};

///
/// The rectangle of input pixels (inclusive at both ends) where a pixel map can be used
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ValidRegion {
    pub xmin: i32,
    pub xmax: i32,
    pub ymin: i32,
    pub ymax: i32,
}

impl ValidRegion {
    ///
    /// Creates a region covering the pixels `xmin..=xmax`, `ymin..=ymax`
    ///
    #[inline]
    pub fn new(xmin: i32, xmax: i32, ymin: i32, ymax: i32) -> ValidRegion {
        ValidRegion { xmin, xmax, ymin, ymax }
    }

    ///
    /// A region covering every cell of a pixel map
    ///
    pub fn for_pixel_map<TPixelMap: ?Sized + PixelMap>(pixel_map: &TPixelMap) -> ValidRegion {
        ValidRegion {
            xmin: 0,
            xmax: pixel_map.width() as i32 - 1,
            ymin: 0,
            ymax: pixel_map.height() as i32 - 1,
        }
    }

    ///
    /// True if the integer pixel `(x, y)` is inside this region
    ///
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.xmin && x <= self.xmax && y >= self.ymin && y <= self.ymax
    }

    ///
    /// True if this region contains no pixels
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xmax < self.xmin || self.ymax < self.ymin
    }

    ///
    /// The outline of the pixels in this region: pixel centers are at integer coordinates, so this extends half a
    /// pixel beyond the first and last rows and columns
    ///
    pub fn outline(&self) -> Polygon {
        Polygon::rectangle(
            Point(self.xmin as f64 - 0.5, self.ymin as f64 - 0.5),
            Point(self.xmax as f64 + 0.5, self.ymax as f64 + 0.5))
    }
}

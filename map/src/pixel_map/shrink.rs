use super::pixel_map_trait::*;
use super::valid_region::*;

impl ValidRegion {
    ///
    /// Tightens this region to the rows and columns of a pixel map that hold defined values
    ///
    /// The first column is the left-most column holding the first defined value of any row, and the first row is the
    /// first row holding any defined value; the last row and column are found the same way scanning backwards from
    /// the end of the region. Returns `None` if the tightened region would be less than two pixels wide or high
    /// (which includes maps with no defined values at all). Cells outside the pixel map count as undefined.
    ///
    pub fn shrink_to_defined<TPixelMap: ?Sized + PixelMap>(&self, pixel_map: &TPixelMap) -> Option<ValidRegion> {
        let is_defined = |x: i32, y: i32| {
            pixel_map.pixel_at(x, y)
                .map(|point| !point.is_undefined())
                .unwrap_or(false)
        };

        let mut xmin = self.xmax;
        let mut ymin = self.ymax;

        for y in self.ymin..=self.ymax {
            if let Some(x) = (self.xmin..=self.xmax).find(|x| is_defined(*x, y)) {
                xmin = xmin.min(x);
                ymin = ymin.min(y);
            }
        }

        let mut xmax = xmin;
        let mut ymax = ymin;

        for y in (self.ymin..=self.ymax).rev() {
            if let Some(x) = (self.xmin..=self.xmax).rev().find(|x| is_defined(*x, y)) {
                xmax = xmax.max(x);
                ymax = ymax.max(y);
            }
        }

        if xmin >= xmax || ymin >= ymax {
            None
        } else {
            Some(ValidRegion { xmin, xmax, ymin, ymax })
        }
    }
}

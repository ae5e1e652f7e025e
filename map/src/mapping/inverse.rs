use super::pixel_mapping::*;
use crate::error::*;
use crate::pixel_map::*;

use drizzle_geometry::*;

///
/// How close (in input pixels) the inverse mapping gets to the true position
///
pub const INVERSION_TOLERANCE: f64 = 0.03;

///
/// The maximum number of steps the inverse mapping search takes before giving up
///
pub const MAX_INVERSION_ITERATIONS: usize = 50;

/// (sqrt(5) - 1) / 2
const GOLDEN_RATIO: f64 = 0.6180339887498948482;

impl<'a, TPixelMap> PixelMapping<'a, TPixelMap>
where
    TPixelMap: ?Sized + PixelMap,
{
    ///
    /// Squared distance between the forward mapping of an input point and a point in the output frame
    ///
    #[inline]
    fn distance_squared(&self, input: Point, target: Point) -> Result<f64, MapError> {
        let offset = self.interpolate(input)? - target;

        Ok(offset.x() * offset.x() + offset.y() * offset.y())
    }

    ///
    /// Finds the point in the input image that maps to a point in the output frame
    ///
    /// This is a two-dimensional golden-section search over the valid region (extended by half a pixel on each
    /// side). Each step evaluates the mapping at four points and keeps the quadrant of the search rectangle around
    /// the closest of them, until the rectangle is smaller than `INVERSION_TOLERANCE` in both directions. The result
    /// is the center of the final rectangle.
    ///
    /// If the pixel map is undefined anywhere the search visits, this fails with `InversionError::Map`. If the search
    /// runs for `MAX_INVERSION_ITERATIONS` steps, this fails with `InversionError::NotConverged`, which still carries
    /// the best estimate.
    ///
    pub fn invert(&self, output_point: Point) -> Result<Point, InversionError> {
        let mut xmin    = self.valid_region.xmin as f64 - 0.5;
        let mut xmax    = self.valid_region.xmax as f64 + 0.5;
        let mut ymin    = self.valid_region.ymin as f64 - 0.5;
        let mut ymax    = self.valid_region.ymax as f64 + 0.5;

        // The first step is sized from the upper bounds of the region, which is its size when the region starts at 0
        let mut dx      = xmax;
        let mut dy      = ymax;

        let mut iterations = 0;

        while (dx > INVERSION_TOLERANCE || dy > INVERSION_TOLERANCE) && iterations < MAX_INVERSION_ITERATIONS {
            iterations += 1;

            let x1  = xmax - GOLDEN_RATIO * dx;
            let x2  = xmin + GOLDEN_RATIO * dx;
            let y1  = ymax - GOLDEN_RATIO * dy;
            let y2  = ymin + GOLDEN_RATIO * dy;

            let d11 = self.distance_squared(Point(x1, y1), output_point)?;
            let d12 = self.distance_squared(Point(x1, y2), output_point)?;
            let d21 = self.distance_squared(Point(x2, y1), output_point)?;
            let d22 = self.distance_squared(Point(x2, y2), output_point)?;

            if d11 < d12 && d11 < d21 && d11 < d22 {
                xmax = x2;
                ymax = y2;
            } else if d12 < d11 && d12 < d21 && d12 < d22 {
                xmax = x2;
                ymin = y1;
            } else if d21 < d11 && d21 < d12 && d21 < d22 {
                xmin = x1;
                ymax = y2;
            } else {
                xmin = x1;
                ymin = y1;
            }

            dx = xmax - xmin;
            dy = ymax - ymin;
        }

        let estimate = Point(0.5 * (xmin + xmax), 0.5 * (ymin + ymax));

        if iterations >= MAX_INVERSION_ITERATIONS {
            log::warn!("Pixel map inversion at ({:.2}, {:.2}) did not converge after {} iterations (estimate is ({:.2}, {:.2}))",
                output_point.x(), output_point.y(), iterations, estimate.x(), estimate.y());

            Err(InversionError::NotConverged { estimate })
        } else {
            Ok(estimate)
        }
    }
}

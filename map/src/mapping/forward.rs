use super::pixel_mapping::*;
use crate::error::*;
use crate::pixel_map::*;

use drizzle_geometry::*;

impl<'a, TPixelMap> PixelMapping<'a, TPixelMap>
where
    TPixelMap: ?Sized + PixelMap,
{
    ///
    /// Reads the output-frame position of an input pixel center directly from the pixel map
    ///
    /// Fails if the pixel is outside the valid region (or the grid) or if the pixel map is undefined there.
    ///
    pub fn map_pixel(&self, x: i32, y: i32) -> Result<Point, MapError> {
        if !self.valid_region.contains(x, y) {
            return Err(MapError::OutsideValidRegion { x, y });
        }

        let point = self.pixel_map.pixel_at(x, y).ok_or(MapError::OutsideValidRegion { x, y })?;

        if point.is_undefined() {
            Err(MapError::Undefined { x: x as f64, y: y as f64 })
        } else {
            Ok(point)
        }
    }

    ///
    /// Maps a point in the input image to the output frame
    ///
    /// Pixel centers (integer coordinates) inside the valid region are read directly from the grid, so they map to
    /// exactly the stored value. Everything else is interpolated with `interpolate()`.
    ///
    pub fn map_forward(&self, point: Point) -> Result<Point, MapError> {
        let x = point.x() as i32;
        let y = point.y() as i32;

        if x as f64 == point.x() && y as f64 == point.y() && self.valid_region.contains(x, y) {
            if let Some(pixel) = self.pixel_map.pixel_at(x, y) {
                return if pixel.is_undefined() {
                    Err(MapError::Undefined { x: point.x(), y: point.y() })
                } else {
                    Ok(pixel)
                };
            }
        }

        self.interpolate(point)
    }

    ///
    /// Maps a point in the input image to the output frame by bilinear interpolation between the four surrounding
    /// pixel centers
    ///
    /// Points beyond the last row or column of the grid are extrapolated from the nearest cell rather than rejected,
    /// which allows mapping pixel edges (half a pixel outside the grid). Fails if any of the four samples are
    /// undefined.
    ///
    pub fn interpolate(&self, point: Point) -> Result<Point, MapError> {
        let width   = self.pixel_map.width();
        let height  = self.pixel_map.height();

        if width < 2 || height < 2 {
            return Err(MapError::GridTooSmall { width, height });
        }

        // Base cell, clamped so that (i0+1, j0+1) is still inside the grid
        let i0      = (point.x() as i32).max(0).min(width as i32 - 2);
        let j0      = (point.y() as i32).max(0).min(height as i32 - 2);
        let (i, j)  = (i0 as usize, j0 as usize);

        let x       = point.x() - i0 as f64;
        let y       = point.y() - j0 as f64;
        let x1      = 1.0 - x;
        let y1      = 1.0 - y;

        let p00     = self.pixel_map.pixel(i, j);
        let p10     = self.pixel_map.pixel(i + 1, j);
        let p01     = self.pixel_map.pixel(i, j + 1);
        let p11     = self.pixel_map.pixel(i + 1, j + 1);

        let result  = Point(
            p00.x() * x1 * y1 + p10.x() * x * y1 + p01.x() * x1 * y + p11.x() * x * y,
            p00.y() * x1 * y1 + p10.y() * x * y1 + p01.y() * x1 * y + p11.y() * x * y,
        );

        if result.is_undefined() {
            Err(MapError::Undefined { x: point.x(), y: point.y() })
        } else {
            Ok(result)
        }
    }
}

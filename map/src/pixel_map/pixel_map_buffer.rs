use super::pixel_map_trait::*;
use crate::error::*;

use drizzle_geometry::*;
use itertools::{iproduct};

///
/// A pixel map stored in memory, row by row
///
#[derive(Clone, PartialEq, Debug)]
pub struct PixelMapBuffer {
    width:  usize,
    height: usize,
    pixels: Vec<Point>,
}

impl PixelMapBuffer {
    ///
    /// Creates a pixel map where every cell is undefined
    ///
    pub fn undefined(width: usize, height: usize) -> PixelMapBuffer {
        PixelMapBuffer {
            width:  width,
            height: height,
            pixels: vec![Point::undefined(); width * height],
        }
    }

    ///
    /// Creates a pixel map by calling a function for every cell (with the column and row of the cell)
    ///
    pub fn from_fn(width: usize, height: usize, mut pixel_fn: impl FnMut(usize, usize) -> Point) -> PixelMapBuffer {
        let pixels = iproduct!(0..height, 0..width)
            .map(|(y, x)| pixel_fn(x, y))
            .collect();

        PixelMapBuffer { width, height, pixels }
    }

    ///
    /// Creates a pixel map that maps every pixel onto the same position in the output frame
    ///
    pub fn identity(width: usize, height: usize) -> PixelMapBuffer {
        Self::from_fn(width, height, |x, y| Point(x as f64, y as f64))
    }

    ///
    /// Creates a pixel map from interleaved coordinates: `[x0, y0, x1, y1, ...]`, stored row by row
    ///
    /// This is the layout of a `(height, width, 2)` array of doubles.
    ///
    pub fn from_interleaved(width: usize, height: usize, coordinates: &[f64]) -> Result<PixelMapBuffer, MapError> {
        let expected = width * height * 2;
        if coordinates.len() != expected {
            return Err(MapError::BufferSize { expected: expected, actual: coordinates.len() });
        }

        let pixels = coordinates.chunks_exact(2)
            .map(|xy| Point(xy[0], xy[1]))
            .collect();

        Ok(PixelMapBuffer { width, height, pixels })
    }

    ///
    /// Changes the value of a single cell
    ///
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, point: Point) {
        debug_assert!(x < self.width && y < self.height, "Pixel ({}, {}) is outside a {}x{} map", x, y, self.width, self.height);

        self.pixels[y * self.width + x] = point;
    }

    ///
    /// Marks a cell as undefined
    ///
    #[inline]
    pub fn clear_pixel(&mut self, x: usize, y: usize) {
        self.set_pixel(x, y, Point::undefined());
    }
}

impl PixelMap for PixelMapBuffer {
    #[inline]
    fn width(&self) -> usize { self.width }

    #[inline]
    fn height(&self) -> usize { self.height }

    #[inline]
    fn pixel(&self, x: usize, y: usize) -> Point {
        self.pixels[y * self.width + x]
    }
}

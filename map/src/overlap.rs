use crate::error::*;
use crate::mapping::*;
use crate::pixel_map::*;
use crate::scanner::*;

use drizzle_geometry::*;

use std::ops::{RangeInclusive};

///
/// The part of an input image that overlaps an output image, ready to be scanned row by row
///
#[derive(Debug)]
pub struct ImageOverlap {
    /// Scanner for the overlap region in input-pixel space
    scanner: Scanner,

    /// The input rows that can contain pixels in the overlap region
    rows: RangeInclusive<i32>,
}

///
/// Iterates over the rows of an `ImageOverlap`, returning the interval of columns for every row that has one
///
pub struct RowIntervals {
    scanner:    Scanner,
    rows:       RangeInclusive<i32>,
}

impl ImageOverlap {
    ///
    /// The input rows to scan (this range will be empty if no rows overlap)
    ///
    #[inline]
    pub fn rows(&self) -> RangeInclusive<i32> {
        self.rows.clone()
    }

    #[inline]
    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    ///
    /// The scanner for the overlap region, for callers that want to drive it directly
    ///
    #[inline]
    pub fn scanner_mut(&mut self) -> &mut Scanner {
        &mut self.scanner
    }

    #[inline]
    pub fn into_parts(self) -> (Scanner, RangeInclusive<i32>) {
        (self.scanner, self.rows)
    }

    ///
    /// Scans every row in order, returning the row number and the columns covered for each row that has pixels
    ///
    /// Rows that are out of bounds or empty are skipped, and iteration stops once the scan ends.
    ///
    #[inline]
    pub fn intervals(self) -> RowIntervals {
        RowIntervals {
            scanner:    self.scanner,
            rows:       self.rows,
        }
    }
}

impl Iterator for RowIntervals {
    type Item = (i32, RowInterval);

    fn next(&mut self) -> Option<(i32, RowInterval)> {
        while let Some(y) = self.rows.next() {
            match self.scanner.next_row_interval(y) {
                RowScan::Interval(interval)                 => { return Some((y, interval)); }
                RowScan::OutOfBounds | RowScan::EmptyRow    => { }
                RowScan::ScanEnded                          => { break; }
            }
        }

        None
    }
}

///
/// The rows that a scanner can produce intervals for: its polygon (allowing for the inversion tolerance), limited to
/// the image
///
fn scanner_rows(scanner: &Scanner, clip: ClipBounds) -> RangeInclusive<i32> {
    let ymin = 0.max((scanner.min_y() + 0.5 + 2.0 * INVERSION_TOLERANCE) as i32);
    let ymax = clip.ymax.min((scanner.max_y() + 2.0 * INVERSION_TOLERANCE) as i32);

    ymin..=ymax
}

///
/// Finds the part of an input image that falls on an output image
///
/// The outline of the valid region of the input image is mapped to the output frame and intersected with the outline
/// of the output image (`output_size` is its width and height in pixels). The intersection is then mapped back to
/// the input image, and the result is a scanner for that region along with the input rows to scan.
///
/// When this fails the input image contributes nothing through the overlap. Callers that still want its pixels can
/// use `scan_input_region()` to scan the whole input image instead.
///
pub fn compute_overlap<TPixelMap>(mapping: &PixelMapping<'_, TPixelMap>, output_size: (usize, usize)) -> Result<ImageOverlap, OverlapError>
where
    TPixelMap: ?Sized + PixelMap,
{
    let valid_region    = mapping.valid_region();
    let (width, height) = output_size;

    // Outline of the input image in the output frame
    let input_outline   = valid_region.outline().iter()
        .map(|corner| mapping.map_forward(corner))
        .collect::<Result<Polygon, _>>()
        .map_err(|err| {
            log::debug!("Could not map the input image outline to the output frame: {}", err);
            OverlapError::BoundingBox(err)
        })?;

    // Outline of the output image
    let output_outline  = Polygon::rectangle(Point(-0.5, -0.5), Point(width as f64 - 0.5, height as f64 - 0.5));

    let overlap         = intersect(&input_outline, &output_outline);
    log::trace!("Overlap with the output image has {} vertices", overlap.len());

    if overlap.is_degenerate() {
        log::debug!("Input image does not overlap the {}x{} output image", width, height);
        return Err(OverlapError::NoOverlap);
    }

    // Map the overlap back to the input image
    let mut input_overlap = overlap.iter()
        .map(|vertex| mapping.invert(vertex)
            .map_err(|err| {
                log::debug!("Could not invert the pixel map at ({:.2}, {:.2}): {}", vertex.x(), vertex.y(), err);
                OverlapError::Inversion { x: vertex.x(), y: vertex.y(), source: err }
            }))
        .collect::<Result<Polygon, _>>()?;

    // Nearby vertices can invert to the same point, and a map that mirrors the image reverses the winding
    input_overlap.normalize();

    let clip            = ClipBounds::from(valid_region);
    let scanner         = Scanner::new(&input_overlap, clip)?;
    let rows            = scanner_rows(&scanner, clip);

    Ok(ImageOverlap { scanner, rows })
}

///
/// Creates a scanner covering the whole valid region of an input image
///
/// This is the fallback for when `compute_overlap()` fails: every pixel of the input image is scanned, and the caller
/// must check where each one lands on the output image itself.
///
pub fn scan_input_region<TPixelMap>(mapping: &PixelMapping<'_, TPixelMap>) -> Result<ImageOverlap, ScannerError>
where
    TPixelMap: ?Sized + PixelMap,
{
    let valid_region    = mapping.valid_region();
    let clip            = ClipBounds::from(valid_region);
    let scanner         = Scanner::new(&valid_region.outline(), clip)?;
    let rows            = scanner_rows(&scanner, clip);

    Ok(ImageOverlap { scanner, rows })
}

impl<'a, TPixelMap> PixelMapping<'a, TPixelMap>
where
    TPixelMap: ?Sized + PixelMap,
{
    ///
    /// Finds the part of the input image that falls on an output image of the specified width and height
    ///
    #[inline]
    pub fn compute_overlap(&self, output_size: (usize, usize)) -> Result<ImageOverlap, OverlapError> {
        compute_overlap(self, output_size)
    }
}

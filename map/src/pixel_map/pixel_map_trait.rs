use drizzle_geometry::*;

///
/// A read-only grid that gives the position in the output frame of the center of each pixel of an input image
///
/// Cells are addressed by column (`x`) and row (`y`). A cell either holds a defined point or is undefined, in which case
/// both of its coordinates are not-a-number. Pixel maps are shared between overlap calculations that may run on
/// different threads, so they must be `Send + Sync`.
///
pub trait PixelMap : Send + Sync {
    ///
    /// The number of columns in this pixel map
    ///
    fn width(&self) -> usize;

    ///
    /// The number of rows in this pixel map
    ///
    fn height(&self) -> usize;

    ///
    /// Retrieves the output-frame position of the input pixel at `(x, y)`
    ///
    /// The position must be inside the grid (`x < width()` and `y < height()`). Implementations may panic otherwise.
    ///
    fn pixel(&self, x: usize, y: usize) -> Point;

    ///
    /// Retrieves a pixel by signed coordinates, returning `None` if the position is outside the grid
    ///
    #[inline]
    fn pixel_at(&self, x: i32, y: i32) -> Option<Point> {
        if x < 0 || y < 0 || x as usize >= self.width() || y as usize >= self.height() {
            None
        } else {
            Some(self.pixel(x as usize, y as usize))
        }
    }
}

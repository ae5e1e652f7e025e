use drizzle_geometry::*;

///
/// Which side of a polygon an edge bounds
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EdgeSide {
    Left,
    Right,
}

impl EdgeSide {
    ///
    /// -1 for the left side, 1 for the right
    ///
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            EdgeSide::Left  => -1.0,
            EdgeSide::Right => 1.0,
        }
    }
}

///
/// An edge of a polygon being scanned, running upwards (in the direction of increasing y)
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScanEdge {
    /// The lower end of the edge
    start: Point,

    /// The upper end of the edge
    end: Point,

    /// Which side of the polygon this edge is on
    side: EdgeSide,

    /// dx/dy along the edge
    slope: f64,

    /// x where the line through the edge crosses y=0
    intercept: f64,

    /// As for intercept, but moved inwards so that the line bounds the centers of the pixels that are inside the edge
    pixel_intercept: f64,
}

impl ScanEdge {
    ///
    /// Creates an edge running from `start` to `end`, which must be at different y positions
    ///
    pub fn new(start: Point, end: Point, side: EdgeSide) -> ScanEdge {
        let dy              = end.y() - start.y();
        let slope           = (end.x() - start.x()) / dy;
        let intercept       = (start.x() * end.y() - start.y() * end.x()) / dy;
        let pixel_intercept = intercept - (0.5 + 0.5 * slope.abs()).copysign(side.sign());

        ScanEdge { start, end, side, slope, intercept, pixel_intercept }
    }

    #[inline]
    pub fn start(&self) -> Point { self.start }

    #[inline]
    pub fn end(&self) -> Point { self.end }

    #[inline]
    pub fn side(&self) -> EdgeSide { self.side }

    #[inline]
    pub fn slope(&self) -> f64 { self.slope }

    #[inline]
    pub fn intercept(&self) -> f64 { self.intercept }

    #[inline]
    pub fn pixel_intercept(&self) -> f64 { self.pixel_intercept }

    ///
    /// The x position of the line through this edge at a given y position
    ///
    #[inline]
    pub fn x_at(&self, y: f64) -> f64 {
        self.slope * y + self.intercept
    }

    ///
    /// The x position of the pixel-center boundary for this edge at a given y position
    ///
    #[inline]
    pub fn pixel_x_at(&self, y: f64) -> f64 {
        self.slope * y + self.pixel_intercept
    }
}

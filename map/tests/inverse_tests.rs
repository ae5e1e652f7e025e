use drizzle_map::*;
use drizzle_map::geometry::*;

use rand::prelude::*;
use rand::rngs::{StdRng};

///
/// Checks that inverting the forward mapping of a set of random points gets back to where we started
///
fn check_round_trip(pixel_map: &PixelMapBuffer, seed: u64) {
    let mapping     = PixelMapping::for_pixel_map(pixel_map);
    let mut rng     = StdRng::seed_from_u64(seed);
    let max_x       = pixel_map.width() as f64 - 1.0;
    let max_y       = pixel_map.height() as f64 - 1.0;

    for _ in 0..200 {
        let input       = Point(rng.gen_range(0.0..max_x), rng.gen_range(0.0..max_y));
        let output      = mapping.map_forward(input).unwrap();
        let inverted    = mapping.invert(output).unwrap();

        assert!(inverted.distance_to(input) <= INVERSION_TOLERANCE, "{:?} -> {:?} -> {:?}", input, output, inverted);
    }
}

#[test]
pub fn invert_identity() {
    let pixel_map   = PixelMapBuffer::identity(10, 10);
    let mapping     = PixelMapping::for_pixel_map(&pixel_map);

    let inverted    = mapping.invert(Point(3.3, 6.7)).unwrap();
    assert!(inverted.distance_to(Point(3.3, 6.7)) <= INVERSION_TOLERANCE, "{:?}", inverted);

    check_round_trip(&pixel_map, 42);
}

#[test]
pub fn invert_scale_and_offset() {
    let pixel_map = PixelMapBuffer::from_fn(20, 15, |x, y| Point(2.0 * x as f64 + 3.0, 0.5 * y as f64 - 1.0));

    check_round_trip(&pixel_map, 1234);
}

#[test]
pub fn invert_rotation() {
    let (sin, cos)  = 0.3f64.sin_cos();
    let pixel_map   = PixelMapBuffer::from_fn(64, 48, |x, y| {
        let (x, y) = (x as f64, y as f64);
        Point(cos * x - sin * y + 20.0, sin * x + cos * y)
    });

    check_round_trip(&pixel_map, 7);
}

#[test]
pub fn invert_mild_distortion() {
    let pixel_map = PixelMapBuffer::from_fn(64, 48, |x, y| {
        let (x, y) = (x as f64, y as f64);
        Point(x + 0.002 * (x - 32.0) * (x - 32.0), y + 0.1 * x)
    });

    check_round_trip(&pixel_map, 99);
}

#[test]
pub fn invert_pixel_edges() {
    // Points half a pixel outside the grid are inside the search area
    let pixel_map   = PixelMapBuffer::identity(10, 10);
    let mapping     = PixelMapping::for_pixel_map(&pixel_map);

    for corner in [Point(-0.5, -0.5), Point(9.5, -0.5), Point(9.5, 9.5), Point(-0.5, 9.5)].iter() {
        let inverted = mapping.invert(*corner).unwrap();
        assert!(inverted.distance_to(*corner) <= INVERSION_TOLERANCE, "{:?} -> {:?}", corner, inverted);
    }
}

#[test]
pub fn invert_undefined_map() {
    let pixel_map   = PixelMapBuffer::undefined(10, 10);
    let mapping     = PixelMapping::for_pixel_map(&pixel_map);

    let inverted    = mapping.invert(Point(4.0, 4.0));
    assert!(match inverted { Err(InversionError::Map(MapError::Undefined { .. })) => true, _ => false }, "{:?}", inverted);
    assert!(inverted.unwrap_err().estimate().is_none());
}

#[test]
pub fn not_converged_keeps_estimate() {
    let error = InversionError::NotConverged { estimate: Point(1.0, 2.0) };

    assert!(error.estimate() == Some(Point(1.0, 2.0)));
    assert!(!error.to_string().is_empty());
}

#[test]
pub fn invert_stops_at_iteration_limit() {
    // The search area is far too large to narrow down to the tolerance in the available steps
    let pixel_map   = PixelMapBuffer::identity(2, 2);
    let mapping     = PixelMapping::new(&pixel_map, ValidRegion::new(0, 2_000_000_000, 0, 2_000_000_000));

    let inverted    = mapping.invert(Point(5.0, 5.0));
    assert!(match inverted { Err(InversionError::NotConverged { .. }) => true, _ => false }, "{:?}", inverted);

    let estimate    = inverted.unwrap_err().estimate().unwrap();
    assert!(estimate.distance_to(Point(5.0, 5.0)) < 0.1, "{:?}", estimate);
}

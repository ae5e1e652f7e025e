use drizzle_map::*;
use drizzle_map::geometry::*;

fn polygon(vertices: &[(f64, f64)]) -> Polygon {
    vertices.iter().map(|(x, y)| Point(*x, *y)).collect()
}

fn scan_rows(scanner: &mut Scanner, rows: impl IntoIterator<Item=i32>) -> Vec<(i32, RowScan)> {
    rows.into_iter()
        .map(|y| (y, scanner.next_row_interval(y)))
        .collect()
}

#[test]
pub fn scan_square() {
    let mut scanner = Scanner::new(&polygon(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]), ClipBounds::unbounded()).unwrap();
    let rows        = scan_rows(&mut scanner, -2..8);

    assert!(rows == vec![
        (-2, RowScan::OutOfBounds),
        (-1, RowScan::OutOfBounds),
        (0, RowScan::Interval(RowInterval::new(0, 4))),
        (1, RowScan::Interval(RowInterval::new(0, 4))),
        (2, RowScan::Interval(RowInterval::new(0, 4))),
        (3, RowScan::Interval(RowInterval::new(0, 4))),
        (4, RowScan::Interval(RowInterval::new(0, 4))),
        (5, RowScan::ScanEnded),
        (6, RowScan::ScanEnded),
        (7, RowScan::ScanEnded),
    ], "{:?}", rows);
    assert!(scanner.is_exhausted());
}

#[test]
pub fn square_edge_chains() {
    let scanner = Scanner::new(&polygon(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]), ClipBounds::unbounded()).unwrap();

    assert!(scanner.min_y() == 0.0);
    assert!(scanner.max_y() == 4.0);
    assert!(scanner.left_edges().len() == 1, "{:?}", scanner.left_edges());
    assert!(scanner.right_edges().len() == 1, "{:?}", scanner.right_edges());

    assert!(scanner.left_edges()[0].start() == Point(0.0, 0.0));
    assert!(scanner.left_edges()[0].end() == Point(0.0, 4.0));
    assert!(scanner.right_edges()[0].start() == Point(4.0, 0.0));
    assert!(scanner.right_edges()[0].end() == Point(4.0, 4.0));
}

#[test]
pub fn scan_triangle() {
    let mut scanner = Scanner::new(&polygon(&[(0.0, 0.0), (8.0, 0.0), (4.0, 6.0)]), ClipBounds::unbounded()).unwrap();
    let rows        = scan_rows(&mut scanner, -1..8);

    assert!(scanner.left_edges().len() == 1);
    assert!(scanner.right_edges().len() == 1);

    assert!(rows == vec![
        (-1, RowScan::OutOfBounds),
        (0, RowScan::Interval(RowInterval::new(1, 7))),
        (1, RowScan::Interval(RowInterval::new(1, 7))),
        (2, RowScan::Interval(RowInterval::new(2, 6))),
        (3, RowScan::Interval(RowInterval::new(3, 5))),
        (4, RowScan::Interval(RowInterval::new(3, 5))),
        (5, RowScan::EmptyRow),
        (6, RowScan::EmptyRow),
        (7, RowScan::ScanEnded),
    ], "{:?}", rows);
}

#[test]
pub fn scan_clipped_triangle() {
    let clip        = ClipBounds { xmin: 0, xmax: 5, ymin: 0, ymax: 3 };
    let mut scanner = Scanner::new(&polygon(&[(0.0, 0.0), (8.0, 0.0), (4.0, 6.0)]), clip).unwrap();
    let rows        = scan_rows(&mut scanner, -1..8);

    assert!(rows == vec![
        (-1, RowScan::OutOfBounds),
        (0, RowScan::Interval(RowInterval::new(1, 5))),
        (1, RowScan::Interval(RowInterval::new(1, 5))),
        (2, RowScan::Interval(RowInterval::new(2, 5))),
        (3, RowScan::Interval(RowInterval::new(3, 5))),
        (4, RowScan::OutOfBounds),
        (5, RowScan::OutOfBounds),
        (6, RowScan::OutOfBounds),
        (7, RowScan::OutOfBounds),
    ], "{:?}", rows);
}

#[test]
pub fn thin_polygon_covers_no_pixels() {
    // Too narrow to contain any pixel centers on any row
    let mut scanner = Scanner::new(&polygon(&[(1.2, 0.5), (1.4, 0.5), (1.4, 8.0), (1.2, 8.0)]), ClipBounds::unbounded()).unwrap();
    let rows        = scan_rows(&mut scanner, 0..10);

    assert!(rows[0] == (0, RowScan::OutOfBounds), "{:?}", rows);
    assert!(rows[1..9].iter().all(|(_, scan)| *scan == RowScan::EmptyRow), "{:?}", rows);
    assert!(rows[9] == (9, RowScan::ScanEnded), "{:?}", rows);
}

#[test]
pub fn rows_must_not_go_backwards() {
    let mut scanner = Scanner::new(&polygon(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]), ClipBounds::unbounded()).unwrap();
    let rows        = scan_rows(&mut scanner, vec![1, 3, 2, 3, 4, 5, 6, 2]);

    assert!(rows == vec![
        (1, RowScan::Interval(RowInterval::new(0, 4))),
        (3, RowScan::Interval(RowInterval::new(0, 4))),
        (2, RowScan::OutOfBounds),
        (3, RowScan::Interval(RowInterval::new(0, 4))),
        (4, RowScan::Interval(RowInterval::new(0, 4))),
        (5, RowScan::ScanEnded),
        (6, RowScan::ScanEnded),
        (2, RowScan::ScanEnded),
    ], "{:?}", rows);
}

#[test]
pub fn scan_ended_is_permanent() {
    let mut scanner = Scanner::new(&polygon(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]), ClipBounds::unbounded()).unwrap();

    assert!(scanner.next_row_interval(5) == RowScan::ScanEnded);
    assert!(scanner.is_exhausted());

    // Even rows inside the polygon are no longer scanned
    for y in -1..6 {
        assert!(scanner.next_row_interval(y).is_scan_ended(), "{}", y);
    }
}

#[test]
pub fn scan_rotated_square() {
    // Diamond with its lowest vertex at (5, 0): intervals widen then narrow again
    let mut scanner = Scanner::new(&polygon(&[(5.0, 0.0), (10.0, 5.0), (5.0, 10.0), (0.0, 5.0)]), ClipBounds::unbounded()).unwrap();

    assert!(scanner.left_edges().len() == 2, "{:?}", scanner.left_edges());
    assert!(scanner.right_edges().len() == 2, "{:?}", scanner.right_edges());

    let intervals = (0..=10)
        .filter_map(|y| scanner.next_row_interval(y).interval().map(|interval| (y, interval)))
        .collect::<Vec<_>>();

    // Widest at the middle row
    let widest = intervals.iter().max_by_key(|(_, interval)| interval.len()).unwrap();
    assert!(widest.0 == 5, "{:?}", intervals);

    // Symmetric about x=5
    for (y, interval) in intervals.iter() {
        assert!(interval.x1 + interval.x2 == 10, "{} {:?}", y, interval);
        assert!(interval.x1 >= 0 && interval.x2 <= 10, "{} {:?}", y, interval);
    }
}

#[test]
pub fn scanner_needs_a_polygon() {
    let line    = polygon(&[(0.0, 0.0), (4.0, 4.0)]);
    let scanner = Scanner::new(&line, ClipBounds::unbounded());

    assert!(match scanner { Err(ScannerError::NotAPolygon { vertices: 2 }) => true, _ => false }, "{:?}", scanner);
    assert!(Scanner::new(&Polygon::empty(), ClipBounds::unbounded()).is_err());
}

#[test]
pub fn row_interval_columns() {
    let interval = RowInterval::new(2, 5);

    assert!(interval.columns().collect::<Vec<_>>() == vec![2, 3, 4, 5]);
    assert!(interval.len() == 4);
    assert!(!interval.is_empty());

    assert!(RowInterval::new(3, 2).is_empty());
    assert!(RowInterval::new(3, 2).len() == 0);
}

use approx::assert_relative_eq;
use bezier_curve_editor::{
    evaluate_point, evaluate_point_recursive, evaluate_polyline, find_nearest, BezierError, Point,
};

fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().copied().map(Point::from).collect()
}

/// Deterministischer Pseudozufall (xorshift), damit Tests reproduzierbar bleiben.
struct XorShift(u64);

impl XorShift {
    fn next_f64(&mut self) -> f64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    fn point(&mut self) -> Point {
        Point::new(self.next_f64() * 1000.0, self.next_f64() * 1000.0)
    }
}

#[test]
fn test_scenario_a_quadratic_midpoint() {
    let points = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
    let mid = evaluate_point(&points, 0.5).expect("Auswertung sollte gelingen");
    // B(1,0) = (5,0), B(1,1) = (10,5) → Mittelpunkt (7.5, 2.5)
    assert_relative_eq!(mid.x, 7.5);
    assert_relative_eq!(mid.y, 2.5);
}

#[test]
fn test_endpoints_are_first_and_last_control_point() {
    let mut rng = XorShift(0x9E37_79B9_7F4A_7C15);
    for n in 1..=8 {
        let points: Vec<Point> = (0..n).map(|_| rng.point()).collect();
        assert_eq!(evaluate_point(&points, 0.0), Ok(points[0]));
        assert_eq!(evaluate_point(&points, 1.0), Ok(points[n - 1]));
    }
}

#[test]
fn test_single_point_is_constant() {
    let points = pts(&[(3.0, -4.0)]);
    for t in [0.0, 0.25, 0.5, 1.0] {
        assert_eq!(evaluate_point(&points, t), Ok(Point::new(3.0, -4.0)));
    }
}

#[test]
fn test_two_points_is_exact_lerp() {
    let a = Point::new(-2.0, 8.0);
    let b = Point::new(6.0, 1.5);
    for t in [0.0, 0.1, 0.3, 0.5, 0.77, 1.0] {
        assert_eq!(evaluate_point(&[a, b], t), Ok(Point::lerp(a, b, t)));
    }
}

#[test]
fn test_table_matches_recursion_for_random_sets() {
    let mut rng = XorShift(0x2545_F491_4F6C_DD1D);
    for _ in 0..50 {
        let n = 1 + (rng.next_f64() * 10.0) as usize;
        let points: Vec<Point> = (0..n).map(|_| rng.point()).collect();
        let t = rng.next_f64();

        let table = evaluate_point(&points, t).expect("Tabelle sollte gelingen");
        let recursive = evaluate_point_recursive(&points, t).expect("Rekursion sollte gelingen");
        assert_relative_eq!(table.x, recursive.x, epsilon = 1e-9);
        assert_relative_eq!(table.y, recursive.y, epsilon = 1e-9);
    }
}

#[test]
fn test_polyline_starts_and_ends_on_curve_endpoints() {
    let points = pts(&[(0.0, 0.0), (30.0, 90.0), (120.0, -40.0), (200.0, 10.0)]);
    for step in [0.005, 0.01, 0.1, 0.3, 0.7] {
        let polyline = evaluate_polyline(&points, step).expect("Polylinie sollte gelingen");
        assert_eq!(polyline.first().copied(), Some(points[0]));
        assert_eq!(polyline.last().copied(), Some(points[3]));
        assert!(polyline.len() >= 2);
    }
}

#[test]
fn test_polyline_default_step_sample_count() {
    let points = pts(&[(0.0, 0.0), (10.0, 10.0)]);
    let polyline = evaluate_polyline(&points, 0.005).expect("Polylinie sollte gelingen");
    // 201 Stützstellen, Endpunkt nie doppelt
    assert_eq!(polyline.len(), 201);
    assert_ne!(polyline[199], polyline[200]);
}

#[test]
fn test_errors_are_reported_not_clamped() {
    assert_eq!(evaluate_point(&[], 0.5), Err(BezierError::NoControlPoints));
    assert_eq!(evaluate_polyline(&[], 0.1), Err(BezierError::NoControlPoints));

    let points = pts(&[(0.0, 0.0), (1.0, 1.0)]);
    assert_eq!(
        evaluate_point(&points, 1.5),
        Err(BezierError::ParameterOutOfRange { t: 1.5 })
    );
    assert!(matches!(
        evaluate_polyline(&points, 0.0),
        Err(BezierError::InvalidStep { .. })
    ));
}

#[test]
fn test_hit_test_picks_lowest_index_on_overlap() {
    let points = pts(&[(100.0, 100.0), (104.0, 104.0), (0.0, 0.0)]);
    assert_eq!(
        find_nearest(&points, Point::new(102.0, 102.0), 10.0),
        Some(0)
    );
    assert_eq!(find_nearest(&points, Point::new(50.0, 50.0), 10.0), None);
}

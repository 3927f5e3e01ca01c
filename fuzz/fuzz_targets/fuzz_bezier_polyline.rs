#![no_main]

use bezier_curve_editor::{evaluate_point, evaluate_polyline, Point};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Erstes f64: Schrittweite, Rest: Koordinatenpaare
    let mut values = data
        .chunks_exact(8)
        .map(|chunk| f64::from_le_bytes(chunk.try_into().unwrap_or([0; 8])));

    let Some(step) = values.next() else {
        return;
    };

    let coords: Vec<f64> = values.take(32).collect();
    let points: Vec<Point> = coords
        .chunks_exact(2)
        .map(|xy| Point::new(xy[0], xy[1]))
        .collect();

    let Ok(polyline) = evaluate_polyline(&points, step) else {
        return;
    };

    let end = evaluate_point(&points, 1.0).expect("t = 1 ist immer gültig");
    let last = polyline.last().copied().expect("Polylinie ist nie leer");
    assert!(last == end || (last.x.is_nan() || last.y.is_nan()));
});

//! Tests for haversine distance and point validation

use super::*;

#[test]
fn test_one_degree_longitude_at_equator() {
    let d = distance_meters(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
    assert!(
        (d - 111_195.0).abs() < 50.0,
        "Expected ~111195m at the equator, got {}",
        d
    );
}

#[test]
fn test_zero_distance_for_same_point() {
    let p = GeoPoint::new(28.6139, 77.2090);
    assert_eq!(distance_meters(p, p), 0.0);
}

#[test]
fn test_distance_is_symmetric() {
    let delhi = GeoPoint::new(28.6139, 77.2090);
    let gurgaon = GeoPoint::new(28.4595, 77.0266);

    let there = distance_meters(delhi, gurgaon);
    let back = distance_meters(gurgaon, delhi);
    assert!((there - back).abs() < 1e-6);
}

#[test]
fn test_short_city_block_distance() {
    // Two points ~100m apart along a meridian (0.0009 degrees of latitude)
    let a = GeoPoint::new(12.9716, 77.5946);
    let b = GeoPoint::new(12.9725, 77.5946);

    let d = distance_meters(a, b);
    assert!((d - 100.0).abs() < 1.0, "Expected ~100m, got {}", d);
}

#[test]
fn test_out_of_range_input_does_not_panic() {
    let d = distance_meters(GeoPoint::new(120.0, 400.0), GeoPoint::new(-95.0, -200.0));
    assert!(d.is_finite());
}

#[test]
fn test_antipodal_points_stay_finite() {
    let half_circumference = std::f64::consts::PI * EARTH_RADIUS_M;

    let d = distance_meters(GeoPoint::new(0.08, 0.0), GeoPoint::new(-0.08, 180.0));
    assert!(d.is_finite(), "Expected a finite distance, got {}", d);
    assert!((d - half_circumference).abs() < 1.0);
}

#[test]
fn test_near_antipodal_sweep_never_nan() {
    for step in 0..=9000 {
        let lat = step as f64 / 100.0;
        let d = distance_meters(GeoPoint::new(lat, 0.0), GeoPoint::new(-lat, 180.0));
        assert!(d.is_finite(), "lat {} gave {}", lat, d);
    }
}

#[test]
fn test_non_finite_input_yields_nan() {
    let d = distance_meters(GeoPoint::new(f64::NAN, 0.0), GeoPoint::new(0.0, 0.0));
    assert!(d.is_nan());
}

#[test]
fn test_new_checked_accepts_finite() {
    let p = GeoPoint::new_checked(51.5, -0.12).unwrap();
    assert_eq!(p, GeoPoint::new(51.5, -0.12));
}

#[test]
fn test_new_checked_rejects_nan_latitude() {
    let err = GeoPoint::new_checked(f64::NAN, 0.0).unwrap_err();
    assert!(matches!(
        err,
        GeoError::NonFiniteCoordinate { axis: "lat", .. }
    ));
}

#[test]
fn test_new_checked_rejects_infinite_longitude() {
    let err = GeoPoint::new_checked(0.0, f64::INFINITY).unwrap_err();
    assert!(matches!(
        err,
        GeoError::NonFiniteCoordinate { axis: "lng", .. }
    ));
}

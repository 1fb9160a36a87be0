use kepler_planets::orbits::normalize_mean_anomaly as norm;

#[test]
fn mean_anomaly_folding_is_one_sided() {
    assert_eq!(norm(180.0), 180.0);
    assert!((norm(180.00001) - (-179.99999)).abs() < 1e-9);
    assert!((norm(540.0) - 180.0).abs() < 1e-12);
    assert!((norm(541.0) - (-179.0)).abs() < 1e-12);
    // Nothing raises values below -180
    assert_eq!(norm(-180.5), -180.5);
    assert_eq!(norm(-4000.0), -4000.0);
}

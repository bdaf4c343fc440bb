//! End-to-end diagnostics on synthetic vortices.

use polar_diagnostics::{
    axisymmetricity, circular_avg, interp_circle, rmw, safe_search_radius, AxisymOptions,
    CircleSampler, Integration, RmwOptions, SamplerOptions,
};
use tc_common::Center;
use test_utils::{asymmetric_ring_wind, constant_field, gaussian_ring_wind, uniform_lonlat_grid};

const PEAK_RADIUS_KM: f64 = 60.0;
const RING_WIDTH_KM: f64 = 30.0;
const MAX_WIND: f64 = 40.0;

fn storm_setup() -> (tc_common::GridCoords, Center) {
    // ~6 degree square domain at 0.05 degree spacing, storm at the middle.
    let coords = uniform_lonlat_grid(121, 121, 120.0, 20.0, 0.05);
    let center = Center::new(123.0, 23.0);
    (coords, center)
}

#[test]
fn ring_matrix_shape_is_exact() {
    let (coords, center) = storm_setup();
    let field = constant_field(&coords, 1.0);

    let radii = [10.0, 30.0, 50.0, 70.0, 90.0];
    let ring = interp_circle(&coords, &field, center, &radii, &SamplerOptions::default()).unwrap();
    assert_eq!(ring.shape(), (5, 360));

    let options = SamplerOptions {
        azimuths: Some((0..24).map(|k| k as f64 * 15.0_f64.to_radians()).collect()),
        ..Default::default()
    };
    let ring = interp_circle(&coords, &field, center, &radii[..2], &options).unwrap();
    assert_eq!(ring.shape(), (2, 24));
}

#[test]
fn constant_field_has_constant_mean_and_full_symmetry() {
    let (coords, center) = storm_setup();
    let field = constant_field(&coords, 17.5);
    let radii = [20.0, 40.0, 80.0];

    let means = circular_avg(&coords, &field, center, &radii, &SamplerOptions::default()).unwrap();
    for m in means {
        assert!((m - 17.5).abs() < 1e-9, "mean {}", m);
    }

    let a = axisymmetricity(&coords, &field, &radii, center, &AxisymOptions::default()).unwrap();
    for v in a {
        assert!((v - 1.0).abs() < 1e-9, "axisymmetricity {}", v);
    }
}

#[test]
fn rmw_recovers_synthetic_peak_within_one_step() {
    let (coords, center) = storm_setup();
    let wind = gaussian_ring_wind(&coords, center, PEAK_RADIUS_KM, RING_WIDTH_KM, MAX_WIND);

    let (dx, dy) = geodesy::mean_spacing_km(&coords).unwrap();
    let dr = dx.max(dy);

    let options = RmwOptions {
        max_distance_km: Some(120.0), // comfortably past the true peak
        ..Default::default()
    };
    let recovered = rmw(&coords, &wind, center, &options).unwrap();
    assert!(
        (recovered - PEAK_RADIUS_KM).abs() <= dr,
        "recovered {} km, expected {} +/- {}",
        recovered,
        PEAK_RADIUS_KM,
        dr
    );
}

#[test]
fn rmw_defaults_search_to_the_safe_extent() {
    let coords = uniform_lonlat_grid(61, 61, 120.0, 20.0, 0.05);
    let center = Center::new(121.5, 21.5);
    let wind = gaussian_ring_wind(&coords, center, 40.0, 20.0, MAX_WIND);

    let bound = safe_search_radius(&coords, center).unwrap();
    let recovered = rmw(&coords, &wind, center, &RmwOptions::default()).unwrap();
    assert!(recovered.is_finite());
    assert!(recovered < bound);
    assert!((recovered - 40.0).abs() < 12.0, "recovered {}", recovered);
}

#[test]
fn oversized_maxdist_is_clamped_not_fatal() {
    let coords = uniform_lonlat_grid(61, 61, 120.0, 20.0, 0.05);
    let center = Center::new(121.5, 21.5);
    let wind = gaussian_ring_wind(&coords, center, 40.0, 20.0, MAX_WIND);

    let bound = safe_search_radius(&coords, center).unwrap();
    let options = RmwOptions {
        max_distance_km: Some(bound * 100.0), // far beyond the domain
        ..Default::default()
    };

    let recovered = rmw(&coords, &wind, center, &options).unwrap();
    assert!(recovered.is_finite());
    assert!(recovered < bound, "rmw {} exceeds safe bound {}", recovered, bound);
    // The clamp target itself stays inside the domain half-extent.
    assert!(bound < 170.0, "suspicious safe bound {}", bound);
}

#[test]
fn integration_rules_agree_and_unknown_rule_is_rejected() {
    let (coords, center) = storm_setup();
    let wind = asymmetric_ring_wind(&coords, center, PEAK_RADIUS_KM, RING_WIDTH_KM, MAX_WIND, 0.3);
    let radii = [30.0, 60.0, 90.0];

    let trapz = axisymmetricity(
        &coords,
        &wind,
        &radii,
        center,
        &AxisymOptions {
            integration: Integration::Trapezoidal,
            ..Default::default()
        },
    )
    .unwrap();
    let simps = axisymmetricity(
        &coords,
        &wind,
        &radii,
        center,
        &AxisymOptions {
            integration: Integration::Simpson,
            ..Default::default()
        },
    )
    .unwrap();

    for (t, s) in trapz.iter().zip(&simps) {
        assert!(t.is_finite() && s.is_finite());
        assert!((t - s).abs() < 1e-3, "trapz {} vs simps {}", t, s);
    }

    assert!(Integration::from_name("romberg").is_err());
}

#[test]
fn asymmetry_lowers_the_metric() {
    let (coords, center) = storm_setup();
    let radii = [PEAK_RADIUS_KM];

    let symmetric = gaussian_ring_wind(&coords, center, PEAK_RADIUS_KM, RING_WIDTH_KM, MAX_WIND);
    let perturbed =
        asymmetric_ring_wind(&coords, center, PEAK_RADIUS_KM, RING_WIDTH_KM, MAX_WIND, 0.4);

    let a_sym =
        axisymmetricity(&coords, &symmetric, &radii, center, &AxisymOptions::default()).unwrap();
    let a_asym =
        axisymmetricity(&coords, &perturbed, &radii, center, &AxisymOptions::default()).unwrap();

    assert!(a_sym[0] > 0.99, "symmetric vortex scored {}", a_sym[0]);
    assert!(
        a_asym[0] < a_sym[0],
        "perturbed {} not below symmetric {}",
        a_asym[0],
        a_sym[0]
    );
    assert!((0.0..=1.0).contains(&a_asym[0]));
}

#[test]
fn sampler_reuse_across_fields_matches_one_shot() {
    let (coords, center) = storm_setup();
    let radii = [25.0, 50.0, 75.0];
    let sampler = CircleSampler::new(&coords, center, &radii, &SamplerOptions::default()).unwrap();

    let f1 = gaussian_ring_wind(&coords, center, PEAK_RADIUS_KM, RING_WIDTH_KM, MAX_WIND);
    let f2 = constant_field(&coords, 5.0);

    let r1 = sampler.interpolate(&f1).unwrap();
    let r2 = sampler.interpolate(&f2).unwrap();
    let o1 = interp_circle(&coords, &f1, center, &radii, &SamplerOptions::default()).unwrap();
    let o2 = interp_circle(&coords, &f2, center, &radii, &SamplerOptions::default()).unwrap();
    assert_eq!(r1, o1);
    assert_eq!(r2, o2);

    let many = sampler.interpolate_many(&[&f1, &f2]).unwrap();
    assert_eq!(many[0], r1);
    assert_eq!(many[1], r2);
}

#[test]
fn circles_beyond_the_domain_come_back_as_nan() {
    let coords = uniform_lonlat_grid(41, 41, 120.0, 20.0, 0.05);
    let center = Center::new(121.0, 21.0);
    let field = constant_field(&coords, 2.0);

    // ~110 km half-extent; a 500 km circle cannot be covered.
    let ring = interp_circle(&coords, &field, center, &[500.0], &SamplerOptions::default())
        .unwrap();
    assert!(ring.ring(0).iter().all(|v| v.is_nan()));

    let means = circular_avg(&coords, &field, center, &[500.0], &SamplerOptions::default())
        .unwrap();
    assert!(means[0].is_nan());
}

//! Derived matrices vs published reference tables
//!
//! Every named space is rebuilt from its chromaticities and compared against
//! the matrices published for it.

use chromat_core::{
    ChromaticAdaptationMethod, Chromaticity, StandardSpace, TransformChain, aces,
    build_chromatic_adaptation, build_rgb_to_xyz, white_point,
};
use chromat_tests::{compare_matrices, reference, reference_matrices};

#[test]
fn derived_matrices_match_published_tables() {
    for reference in reference_matrices() {
        let derived = reference.space.matrices().expect("standard space derives");

        let forward = compare_matrices(&derived.to_xyz, &reference.to_xyz);
        eprintln!(
            "{:<10} RGB→XYZ max {:.2e} mean {:.2e} ({})",
            reference.space.name(),
            forward.max,
            forward.mean,
            reference.source
        );
        assert!(
            forward.within(reference.tolerance),
            "{} RGB→XYZ off by {:.3e} at {:?}",
            reference.space,
            forward.max,
            forward.worst
        );

        let inverse = compare_matrices(&derived.from_xyz, &reference.from_xyz);
        assert!(
            inverse.within(reference.tolerance),
            "{} XYZ→RGB off by {:.3e} at {:?}",
            reference.space,
            inverse.max,
            inverse.worst
        );
    }
}

#[test]
fn srgb_first_row_matches_well_known_values() {
    let m = build_rgb_to_xyz(
        Chromaticity::new(0.64, 0.33),
        Chromaticity::new(0.3, 0.6),
        Chromaticity::new(0.15, 0.06),
        Chromaticity::new(0.3127, 0.3290),
    )
    .unwrap();

    for (got, want) in m.to_xyz[0].iter().zip([0.4124, 0.3576, 0.1805]) {
        assert!((got - want).abs() < 1e-3, "{got} vs {want}");
    }
}

#[test]
fn srgb_to_ap1_matches_published_with_d65_to_d60_adaptation() {
    let srgb = build_rgb_to_xyz(
        Chromaticity::new(0.64, 0.33),
        Chromaticity::new(0.3, 0.6),
        Chromaticity::new(0.15, 0.06),
        Chromaticity::new(0.3127, 0.3290),
    )
    .unwrap();
    let ap1 = build_rgb_to_xyz(
        Chromaticity::new(0.713, 0.293),
        Chromaticity::new(0.165, 0.830),
        Chromaticity::new(0.128, 0.044),
        Chromaticity::new(0.32168, 0.33767),
    )
    .unwrap();
    let cat = build_chromatic_adaptation(
        Chromaticity::new(0.3127, 0.3290),
        Chromaticity::new(0.32168, 0.33767),
    )
    .unwrap();

    let derived = ap1.from_xyz.multiply(&cat.multiply(&srgb.to_xyz));
    let stats = compare_matrices(&derived, &aces::SRGB_TO_AP1);
    assert!(stats.within(1e-3), "max diff {:.3e}\n{derived}", stats.max);

    // The published table is far closer than the 1e-3 acceptance bound
    assert!(stats.within(1e-5), "max diff {:.3e}", stats.max);
}

#[test]
fn srgb_to_ap1_without_adaptation_differs_from_published() {
    // The published table includes the white point change; skipping it is a
    // visible error, not a rounding difference.
    let chain = TransformChain::between_standard(
        StandardSpace::Srgb,
        StandardSpace::Ap1,
        ChromaticAdaptationMethod::None,
    )
    .unwrap();
    let stats = compare_matrices(&chain.matrix(), &aces::SRGB_TO_AP1);
    assert!(stats.max > 1e-2, "max diff {:.3e}", stats.max);
}

#[test]
fn ap1_to_srgb_matches_published() {
    let chain = TransformChain::between_standard(
        StandardSpace::Ap1,
        StandardSpace::Srgb,
        ChromaticAdaptationMethod::Bradford,
    )
    .unwrap();
    let stats = compare_matrices(&chain.matrix(), &aces::AP1_TO_SRGB);
    assert!(stats.within(1e-5), "max diff {:.3e}", stats.max);
}

#[test]
fn bradford_matches_aces_d60_to_d65() {
    let derived =
        build_chromatic_adaptation(white_point::ACES.chromaticity, white_point::D65.chromaticity)
            .unwrap();
    let stats = compare_matrices(&derived, &aces::D60_TO_D65_CAT);
    assert!(stats.within(1e-5), "max diff {:.3e}", stats.max);

    let reverse =
        build_chromatic_adaptation(white_point::D65.chromaticity, white_point::ACES.chromaticity)
            .unwrap();
    let published_inverse = aces::d65_to_d60_cat().unwrap();
    let stats = compare_matrices(&reverse, &published_inverse);
    assert!(stats.within(1e-5), "max diff {:.3e}", stats.max);
}

#[test]
fn published_xyz_to_ap1_includes_adaptation() {
    let derived = aces::derived_xyz_to_ap1().unwrap();
    assert!(compare_matrices(&derived, &aces::XYZ_TO_AP1).within(1e-6));
}

#[test]
fn xyz_to_ap1_tables_differ_by_white() {
    // ACES-white XYZ vs D65 XYZ: the two published tables are not interchangeable
    let plain = compare_matrices(&reference::XYZ_TO_AP1_ACES_WHITE, &aces::XYZ_TO_AP1);
    assert!(plain.max > 1e-2, "max diff {:.3e}", plain.max);

    let derived = StandardSpace::Ap1.matrices().unwrap().from_xyz;
    assert!(compare_matrices(&derived, &reference::XYZ_TO_AP1_ACES_WHITE).within(1e-8));
}

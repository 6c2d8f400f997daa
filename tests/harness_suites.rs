//! Every registered case runs on the small configuration, and each chunked
//! case agrees with its eager twin.

use std::collections::HashMap;

use genotensor::harness::{AlleleCounts2DSuite, AlleleCounts3DSuite, Genotypes3DSuite};
use genotensor::{Backend, BenchConfig, CaseOutput, Suite};

fn run_suite<S: Suite>() -> HashMap<(&'static str, Backend), CaseOutput> {
    let suite = S::setup(&BenchConfig::small()).unwrap();
    S::cases()
        .iter()
        .map(|case| {
            let output = case
                .run(&suite)
                .unwrap_or_else(|e| panic!("{} {} failed: {}", S::NAME, case.id(), e));
            ((case.name(), case.backend()), output)
        })
        .collect()
}

fn assert_backends_agree<S: Suite>(expected_names: &[&'static str]) {
    let outputs = run_suite::<S>();
    assert_eq!(outputs.len(), expected_names.len() * 2, "{}", S::NAME);

    for name in expected_names {
        let eager = &outputs[&(*name, Backend::Eager)];
        let chunked = &outputs[&(*name, Backend::Chunked)];
        assert_eq!(eager, chunked, "{} {}", S::NAME, name);
        assert!(eager.shape().iter().all(|&n| n > 0), "{} {}", S::NAME, name);
    }
}

#[test]
fn genotypes_3d_backends_agree() {
    assert_backends_agree::<Genotypes3DSuite>(&[
        "locate_called",
        "locate_missing",
        "locate_hom",
        "locate_het",
        "locate_call",
        "count_alleles",
        "to_allele_counts",
        "to_allele_counts_melt",
    ]);
}

#[test]
fn allele_counts_2d_backends_agree() {
    assert_backends_agree::<AlleleCounts2DSuite>(&[
        "to_frequencies",
        "allelism",
        "max_allele",
        "locate_variant",
        "locate_non_variant",
        "locate_segregating",
    ]);
}

#[test]
fn allele_counts_3d_backends_agree() {
    assert_backends_agree::<AlleleCounts3DSuite>(&[
        "locate_called",
        "locate_missing",
        "locate_hom",
        "locate_het",
        "locate_call",
        "to_frequencies",
        "allelism",
        "max_allele",
        "locate_variant",
        "locate_non_variant",
        "locate_segregating",
    ]);
}

#[test]
fn non_variant_case_is_complement_of_variant() {
    let outputs = run_suite::<AlleleCounts2DSuite>();
    let (
        CaseOutput::VariantMask(variant),
        CaseOutput::VariantMask(non_variant),
        CaseOutput::Counts1(allelism),
    ) = (
        &outputs[&("locate_variant", Backend::Eager)],
        &outputs[&("locate_non_variant", Backend::Eager)],
        &outputs[&("allelism", Backend::Eager)],
    )
    else {
        panic!("unexpected output kinds");
    };

    for ((&v, &nv), &n) in variant.iter().zip(non_variant).zip(allelism) {
        assert_eq!(v, n > 1);
        assert_eq!(nv, n == 1);
    }
}

#[test]
fn suite_setup_is_deterministic() {
    let config = BenchConfig::small();
    let a = Genotypes3DSuite::setup(&config).unwrap();
    let b = Genotypes3DSuite::setup(&config).unwrap();
    assert_eq!(a.genotypes(), b.genotypes());
    assert_eq!(a.n_elements(), 60 * 25 * 2);
}

#[test]
fn invalid_chunks_fail_setup() {
    let mut config = BenchConfig::small();
    config.allele_counts.chunks[0] = genotensor::backend::chunked::ChunkSpec::Fixed(0);
    assert!(AlleleCounts2DSuite::setup(&config).is_err());
}

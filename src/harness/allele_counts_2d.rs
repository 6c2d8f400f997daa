//! Per-variant allele count suite.

use std::sync::Arc;

use rayon::ThreadPool;
use tracing::{info, instrument};

use super::{Case, CaseOutput, Suite};
use crate::backend::chunked::{self, ChunkedAlleleCounts2D, ChunkedArray};
use crate::backend::eager;
use crate::config::BenchConfig;
use crate::data::synthetic::random_allele_counts;
use crate::data::AlleleCounts2D;
use crate::error::Result;
use crate::utils::threading::build_thread_pool;

pub struct AlleleCounts2DSuite {
    counts: Arc<AlleleCounts2D>,
    chunked: ChunkedAlleleCounts2D,
    pool: ThreadPool,
}

impl AlleleCounts2DSuite {
    pub fn counts(&self) -> &AlleleCounts2D {
        &self.counts
    }

    pub fn chunked(&self) -> &ChunkedAlleleCounts2D {
        &self.chunked
    }
}

impl Suite for AlleleCounts2DSuite {
    const NAME: &'static str = "allele_counts_2d";

    #[instrument(name = "allele_counts_2d_setup", skip_all)]
    fn setup(config: &BenchConfig) -> Result<Self> {
        let ac = &config.allele_counts;
        let counts = Arc::new(random_allele_counts(
            (ac.n_variants, ac.n_alleles),
            ac.high,
            config.seed,
        )?);
        let chunked = ChunkedArray::from_shared(Arc::clone(&counts), &ac.chunks)?;
        info!(
            shape = ?counts.shape(),
            n_blocks = chunked.n_blocks(),
            "allele count suite ready"
        );

        Ok(Self {
            counts,
            chunked,
            pool: build_thread_pool(config.nthreads())?,
        })
    }

    fn n_elements(&self) -> u64 {
        self.counts.len() as u64
    }

    fn cases() -> Vec<Case<Self>> {
        type C = Case<AlleleCounts2DSuite>;
        use chunked::allele_counts_2d as lazy;
        use eager::allele_counts_2d as now;
        use CaseOutput::{Counts1, Frequencies2, VariantMask};

        vec![
            C::eager("to_frequencies", |s| Ok(Frequencies2(now::to_frequencies(s.counts.view())))),
            C::chunked("to_frequencies", |s| {
                Ok(Frequencies2(lazy::to_frequencies(&s.chunked).compute_on(&s.pool)?))
            }),
            C::eager("allelism", |s| Ok(Counts1(now::allelism(s.counts.view())))),
            C::chunked("allelism", |s| {
                Ok(Counts1(lazy::allelism(&s.chunked).compute_on(&s.pool)?))
            }),
            C::eager("max_allele", |s| Ok(Counts1(now::max_allele(s.counts.view())))),
            C::chunked("max_allele", |s| {
                Ok(Counts1(lazy::max_allele(&s.chunked).compute_on(&s.pool)?))
            }),
            C::eager("locate_variant", |s| Ok(VariantMask(now::locate_variant(s.counts.view())))),
            C::chunked("locate_variant", |s| {
                Ok(VariantMask(lazy::locate_variant(&s.chunked).compute_on(&s.pool)?))
            }),
            C::eager("locate_non_variant", |s| {
                Ok(VariantMask(now::locate_non_variant(s.counts.view())))
            }),
            C::chunked("locate_non_variant", |s| {
                Ok(VariantMask(lazy::locate_non_variant(&s.chunked).compute_on(&s.pool)?))
            }),
            C::eager("locate_segregating", |s| {
                Ok(VariantMask(now::locate_segregating(s.counts.view())))
            }),
            C::chunked("locate_segregating", |s| {
                Ok(VariantMask(lazy::locate_segregating(&s.chunked).compute_on(&s.pool)?))
            }),
        ]
    }
}

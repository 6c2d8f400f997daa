//! Per-sample allele count suite, derived from the genotype dataset.

use std::sync::Arc;

use rayon::ThreadPool;
use tracing::{info, instrument};

use super::{Case, CaseOutput, Suite};
use crate::backend::chunked::{self, ChunkedAlleleCounts3D, ChunkedArray};
use crate::backend::eager;
use crate::config::BenchConfig;
use crate::data::synthetic::random_genotypes;
use crate::data::AlleleCounts3D;
use crate::error::Result;
use crate::utils::threading::build_thread_pool;

pub struct AlleleCounts3DSuite {
    counts: Arc<AlleleCounts3D>,
    chunked: ChunkedAlleleCounts3D,
    call: Vec<i8>,
    pool: ThreadPool,
}

impl AlleleCounts3DSuite {
    pub fn counts(&self) -> &AlleleCounts3D {
        &self.counts
    }

    pub fn chunked(&self) -> &ChunkedAlleleCounts3D {
        &self.chunked
    }
}

impl Suite for AlleleCounts3DSuite {
    const NAME: &'static str = "allele_counts_3d";

    #[instrument(name = "allele_counts_3d_setup", skip_all)]
    fn setup(config: &BenchConfig) -> Result<Self> {
        let g = &config.genotypes;
        let genotypes = random_genotypes(
            (g.n_variants, g.n_samples, g.ploidy),
            g.low,
            g.high,
            config.seed,
        )?;
        let counts = Arc::new(eager::genotypes_3d::to_allele_counts(
            genotypes.view(),
            g.max_allele,
        ));
        let chunked = ChunkedArray::from_shared(Arc::clone(&counts), &g.counts_chunks)?;
        info!(
            shape = ?counts.shape(),
            n_blocks = chunked.n_blocks(),
            "per-sample allele count suite ready"
        );

        Ok(Self {
            counts,
            chunked,
            call: g.call.clone(),
            pool: build_thread_pool(config.nthreads())?,
        })
    }

    fn n_elements(&self) -> u64 {
        self.counts.len() as u64
    }

    fn cases() -> Vec<Case<Self>> {
        type C = Case<AlleleCounts3DSuite>;
        use chunked::allele_counts_3d as lazy;
        use eager::allele_counts_3d as now;
        use CaseOutput::{CallMask, Counts2, Frequencies3};

        vec![
            C::eager("locate_called", |s| Ok(CallMask(now::locate_called(s.counts.view())))),
            C::chunked("locate_called", |s| {
                Ok(CallMask(lazy::locate_called(&s.chunked).compute_on(&s.pool)?))
            }),
            C::eager("locate_missing", |s| Ok(CallMask(now::locate_missing(s.counts.view())))),
            C::chunked("locate_missing", |s| {
                Ok(CallMask(lazy::locate_missing(&s.chunked).compute_on(&s.pool)?))
            }),
            C::eager("locate_hom", |s| Ok(CallMask(now::locate_hom(s.counts.view())))),
            C::chunked("locate_hom", |s| {
                Ok(CallMask(lazy::locate_hom(&s.chunked).compute_on(&s.pool)?))
            }),
            C::eager("locate_het", |s| Ok(CallMask(now::locate_het(s.counts.view())))),
            C::chunked("locate_het", |s| {
                Ok(CallMask(lazy::locate_het(&s.chunked).compute_on(&s.pool)?))
            }),
            C::eager("locate_call", |s| Ok(CallMask(now::locate_call(s.counts.view(), &s.call)?))),
            C::chunked("locate_call", |s| {
                Ok(CallMask(lazy::locate_call(&s.chunked, &s.call)?.compute_on(&s.pool)?))
            }),
            C::eager("to_frequencies", |s| Ok(Frequencies3(now::to_frequencies(s.counts.view())))),
            C::chunked("to_frequencies", |s| {
                Ok(Frequencies3(lazy::to_frequencies(&s.chunked).compute_on(&s.pool)?))
            }),
            C::eager("allelism", |s| Ok(Counts2(now::allelism(s.counts.view())))),
            C::chunked("allelism", |s| {
                Ok(Counts2(lazy::allelism(&s.chunked).compute_on(&s.pool)?))
            }),
            C::eager("max_allele", |s| Ok(Counts2(now::max_allele(s.counts.view())))),
            C::chunked("max_allele", |s| {
                Ok(Counts2(lazy::max_allele(&s.chunked).compute_on(&s.pool)?))
            }),
            C::eager("locate_variant", |s| Ok(CallMask(now::locate_variant(s.counts.view())))),
            C::chunked("locate_variant", |s| {
                Ok(CallMask(lazy::locate_variant(&s.chunked).compute_on(&s.pool)?))
            }),
            C::eager("locate_non_variant", |s| {
                Ok(CallMask(now::locate_non_variant(s.counts.view())))
            }),
            C::chunked("locate_non_variant", |s| {
                Ok(CallMask(lazy::locate_non_variant(&s.chunked).compute_on(&s.pool)?))
            }),
            C::eager("locate_segregating", |s| {
                Ok(CallMask(now::locate_segregating(s.counts.view())))
            }),
            C::chunked("locate_segregating", |s| {
                Ok(CallMask(lazy::locate_segregating(&s.chunked).compute_on(&s.pool)?))
            }),
        ]
    }
}

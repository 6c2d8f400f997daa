//! Genotype call suite: masks and allele counting over `(variants, samples, ploidy)`.

use std::sync::Arc;

use rayon::ThreadPool;
use tracing::{info, instrument};

use super::{Case, CaseOutput, Suite};
use crate::backend::chunked::{self, ChunkedArray, ChunkedGenotypes};
use crate::backend::eager;
use crate::config::BenchConfig;
use crate::data::synthetic::random_genotypes;
use crate::data::Genotypes3D;
use crate::error::Result;
use crate::utils::threading::build_thread_pool;

pub struct Genotypes3DSuite {
    genotypes: Arc<Genotypes3D>,
    chunked: ChunkedGenotypes,
    call: Vec<i8>,
    max_allele: u8,
    pool: ThreadPool,
}

impl Genotypes3DSuite {
    pub fn genotypes(&self) -> &Genotypes3D {
        &self.genotypes
    }

    pub fn chunked(&self) -> &ChunkedGenotypes {
        &self.chunked
    }
}

impl Suite for Genotypes3DSuite {
    const NAME: &'static str = "genotypes_3d";

    #[instrument(name = "genotypes_3d_setup", skip_all)]
    fn setup(config: &BenchConfig) -> Result<Self> {
        let g = &config.genotypes;
        let genotypes = Arc::new(random_genotypes(
            (g.n_variants, g.n_samples, g.ploidy),
            g.low,
            g.high,
            config.seed,
        )?);
        let chunked = ChunkedArray::from_shared(Arc::clone(&genotypes), &g.chunks)?;
        info!(
            shape = ?genotypes.shape(),
            n_blocks = chunked.n_blocks(),
            "genotype suite ready"
        );

        Ok(Self {
            genotypes,
            chunked,
            call: g.call.clone(),
            max_allele: g.max_allele,
            pool: build_thread_pool(config.nthreads())?,
        })
    }

    fn n_elements(&self) -> u64 {
        self.genotypes.len() as u64
    }

    fn cases() -> Vec<Case<Self>> {
        type C = Case<Genotypes3DSuite>;
        use chunked::genotypes_3d as lazy;
        use eager::genotypes_3d as now;
        use CaseOutput::{CallMask, Counts2, Counts3};

        vec![
            C::eager("locate_called", |s| Ok(CallMask(now::locate_called(s.genotypes.view())))),
            C::chunked("locate_called", |s| {
                Ok(CallMask(lazy::locate_called(&s.chunked).compute_on(&s.pool)?))
            }),
            C::eager("locate_missing", |s| Ok(CallMask(now::locate_missing(s.genotypes.view())))),
            C::chunked("locate_missing", |s| {
                Ok(CallMask(lazy::locate_missing(&s.chunked).compute_on(&s.pool)?))
            }),
            C::eager("locate_hom", |s| Ok(CallMask(now::locate_hom(s.genotypes.view())))),
            C::chunked("locate_hom", |s| {
                Ok(CallMask(lazy::locate_hom(&s.chunked).compute_on(&s.pool)?))
            }),
            C::eager("locate_het", |s| Ok(CallMask(now::locate_het(s.genotypes.view())))),
            C::chunked("locate_het", |s| {
                Ok(CallMask(lazy::locate_het(&s.chunked).compute_on(&s.pool)?))
            }),
            C::eager("locate_call", |s| {
                Ok(CallMask(now::locate_call(s.genotypes.view(), &s.call)?))
            }),
            C::chunked("locate_call", |s| {
                Ok(CallMask(lazy::locate_call(&s.chunked, &s.call)?.compute_on(&s.pool)?))
            }),
            C::eager("count_alleles", |s| {
                Ok(Counts2(now::count_alleles(s.genotypes.view(), s.max_allele)))
            }),
            C::chunked("count_alleles", |s| {
                Ok(Counts2(lazy::count_alleles(&s.chunked, s.max_allele).compute_on(&s.pool)?))
            }),
            C::eager("to_allele_counts", |s| {
                Ok(Counts3(now::to_allele_counts(s.genotypes.view(), s.max_allele)))
            }),
            C::chunked("to_allele_counts", |s| {
                Ok(Counts3(lazy::to_allele_counts(&s.chunked, s.max_allele).compute_on(&s.pool)?))
            }),
            C::eager("to_allele_counts_melt", |s| {
                Ok(Counts2(now::to_allele_counts_melt(s.genotypes.view(), s.max_allele)))
            }),
            C::chunked("to_allele_counts_melt", |s| {
                Ok(Counts2(
                    lazy::to_allele_counts_melt(&s.chunked, s.max_allele).compute_on(&s.pool)?,
                ))
            }),
        ]
    }
}

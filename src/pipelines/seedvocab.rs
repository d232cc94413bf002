//! Seed vocabulary mining pipeline.
//!
//! The corpus is a folder of review partition files (optionally grouped one
//! directory level down). Each partition is mined independently:
//!
//! 1. Reviews are parsed from the partition file and their bodies are
//!    annotated into sentence units.
//! 2. Keyword occurrences are expanded into candidate phrases, each recorded
//!    against its sentence's compound score.
//! 3. The partition accumulator reduces to locally supported seed rows.
//!
//! Partition results are then sorted and merged, support-weighted, into the
//! global seed table. Unreadable partitions are logged and skipped; only an
//! absent or empty corpus aborts the run.
use std::collections::HashSet;
use std::path::PathBuf;

use log::{debug, error, info};
use rayon::prelude::*;

use crate::aggregate::{GlobalAggregator, GlobalSeed, LocalSeed, PartitionAggregator};
use crate::error::Error;
use crate::filtering::SeedThresholds;
use crate::io::{write_partition_seed_table, write_seed_table};
use crate::lexicon::AspectLexicon;
use crate::nlp::{Annotate, ReviewAnnotator, Stopwords};
use crate::phrase::WindowConfig;
use crate::pipelines::pipeline::Pipeline;
use crate::sources::{Partition, PartitionId, ReviewCorpus};

pub struct SeedVocab {
    src: PathBuf,
    dst: PathBuf,
    by_source: Option<PathBuf>,
    aspects: Option<PathBuf>,
    thresholds: SeedThresholds,
    window: WindowConfig,
}

impl SeedVocab {
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        by_source: Option<PathBuf>,
        aspects: Option<PathBuf>,
        thresholds: SeedThresholds,
        window: WindowConfig,
    ) -> Self {
        Self {
            src,
            dst,
            by_source,
            aspects,
            thresholds,
            window,
        }
    }

    fn lexicon(&self, annotator: &ReviewAnnotator) -> Result<AspectLexicon, Error> {
        match &self.aspects {
            Some(path) => AspectLexicon::from_json(path, annotator),
            None => Ok(AspectLexicon::builtin(annotator)),
        }
    }

    /// Mine one partition into its locally supported seed rows.
    fn process_partition(
        &self,
        partition: &Partition,
        annotator: &ReviewAnnotator,
        lexicon: &AspectLexicon,
        boundary: &HashSet<String>,
    ) -> Result<Vec<LocalSeed>, Error> {
        info!("mining {}", partition.id);
        let reviews = partition.reviews()?;
        debug!("{}: {} reviews", partition.id, reviews.len());

        let mut aggregator = PartitionAggregator::new();
        for review in &reviews {
            for unit in annotator.annotate(&review.body)? {
                aggregator.consume(&unit, lexicon, boundary, &self.window);
            }
        }
        Ok(aggregator.reduce(&self.thresholds))
    }
}

impl Pipeline<Vec<GlobalSeed>> for SeedVocab {
    fn run(&self) -> Result<Vec<GlobalSeed>, Error> {
        let annotator = ReviewAnnotator::new();
        let lexicon = self.lexicon(&annotator)?;
        let stopwords = Stopwords::english();
        let boundary = stopwords.boundary_set();

        let corpus = ReviewCorpus::discover(&self.src)?;
        info!(
            "mining {} partitions under {:?}",
            corpus.len(),
            self.src
        );

        let mut results: Vec<(PartitionId, Vec<LocalSeed>)> = corpus
            .partitions()
            .par_iter()
            .filter_map(|partition| {
                match self.process_partition(partition, &annotator, &lexicon, boundary) {
                    Ok(seeds) => Some((partition.id.clone(), seeds)),
                    Err(e) => {
                        error!("skipping partition {}: {:?}", partition.id, e);
                        None
                    }
                }
            })
            .collect();

        // merge in partition order regardless of worker scheduling
        results.sort_by(|a, b| a.0.cmp(&b.0));

        let mut global = GlobalAggregator::new();
        for (_, seeds) in &results {
            global.absorb(seeds);
        }
        let seeds = global.reduce(&self.thresholds);

        write_seed_table(&self.dst, &seeds)?;
        info!("wrote {} seed rows to {:?}", seeds.len(), self.dst);

        if let Some(by_source) = &self.by_source {
            write_partition_seed_table(by_source, &results)?;
            let rows: usize = results.iter().map(|(_, seeds)| seeds.len()).sum();
            info!("wrote {} partition seed rows to {:?}", rows, by_source);
        }

        Ok(seeds)
    }
}

//! Per-review aspect scoring pipeline.
//!
//! For every review: the whole-review compound score and polarity label,
//! plus, per aspect, the mean compound of the review's sentences that touch
//! that aspect. A sentence counts once per aspect no matter how many of the
//! aspect's keywords it contains. Aspects a review never touches are left
//! empty in the table.
use std::collections::BTreeMap;
use std::path::PathBuf;

use log::{debug, error, info};
use rayon::prelude::*;

use crate::error::Error;
use crate::io::{ReviewRecord, ReviewTableWriter};
use crate::lexicon::AspectLexicon;
use crate::matcher;
use crate::nlp::{Annotate, ReviewAnnotator};
use crate::pipelines::pipeline::Pipeline;
use crate::sources::{Partition, PartitionId, ReviewCorpus};

pub struct ReviewScores {
    src: PathBuf,
    dst: PathBuf,
    aspects: Option<PathBuf>,
}

impl ReviewScores {
    pub fn new(src: PathBuf, dst: PathBuf, aspects: Option<PathBuf>) -> Self {
        Self { src, dst, aspects }
    }

    fn lexicon(&self, annotator: &ReviewAnnotator) -> Result<AspectLexicon, Error> {
        match &self.aspects {
            Some(path) => AspectLexicon::from_json(path, annotator),
            None => Ok(AspectLexicon::builtin(annotator)),
        }
    }

    /// Score every review of one partition.
    fn process_partition(
        partition: &Partition,
        annotator: &ReviewAnnotator,
        lexicon: &AspectLexicon,
    ) -> Result<Vec<ReviewRecord>, Error> {
        info!("scoring {}", partition.id);
        let reviews = partition.reviews()?;
        debug!("{}: {} reviews", partition.id, reviews.len());

        let mut records = Vec::with_capacity(reviews.len());
        for review in reviews {
            let compound = annotator.compound(&review.body);

            let mut per_aspect: BTreeMap<&str, Vec<f64>> =
                lexicon.aspects().map(|aspect| (aspect, Vec::new())).collect();
            for unit in annotator.annotate(&review.body)? {
                let matched: std::collections::HashSet<&str> =
                    matcher::find_occurrences(&unit, lexicon)
                        .iter()
                        .map(|occurrence| occurrence.aspect)
                        .collect();
                for aspect in matched {
                    if let Some(scores) = per_aspect.get_mut(aspect) {
                        scores.push(unit.compound());
                    }
                }
            }

            let aspect_scores: Vec<Option<f64>> = per_aspect
                .values()
                .map(|scores| {
                    if scores.is_empty() {
                        None
                    } else {
                        Some(scores.iter().sum::<f64>() / scores.len() as f64)
                    }
                })
                .collect();

            records.push(ReviewRecord {
                source: partition.id.source.clone(),
                group: partition.id.group.clone(),
                date: review.date,
                subject: review.subject,
                body: review.body,
                compound,
                aspect_scores,
            });
        }
        Ok(records)
    }
}

impl Pipeline<()> for ReviewScores {
    fn run(&self) -> Result<(), Error> {
        let annotator = ReviewAnnotator::new();
        let lexicon = self.lexicon(&annotator)?;
        let aspects: Vec<String> = lexicon.aspects().map(String::from).collect();

        let corpus = ReviewCorpus::discover(&self.src)?;
        info!(
            "scoring reviews of {} partitions under {:?}",
            corpus.len(),
            self.src
        );

        let mut blocks: Vec<(PartitionId, Vec<ReviewRecord>)> = corpus
            .partitions()
            .par_iter()
            .filter_map(|partition| {
                match Self::process_partition(partition, &annotator, &lexicon) {
                    Ok(records) => Some((partition.id.clone(), records)),
                    Err(e) => {
                        error!("skipping partition {}: {:?}", partition.id, e);
                        None
                    }
                }
            })
            .collect();
        blocks.sort_by(|a, b| a.0.cmp(&b.0));

        let mut writer = ReviewTableWriter::create(&self.dst, &aspects)?;
        let mut rows = 0usize;
        for (_, records) in &blocks {
            for record in records {
                writer.write(record)?;
                rows += 1;
            }
        }
        writer.finish()?;
        info!("wrote {} review rows to {:?}", rows, self.dst);
        Ok(())
    }
}

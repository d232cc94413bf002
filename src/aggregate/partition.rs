//! Partition-local accumulation of phrase observations.
use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use crate::filtering::{Filter, SeedThresholds};
use crate::lexicon::AspectLexicon;
use crate::matcher;
use crate::nlp::SentenceUnit;
use crate::phrase::{self, WindowConfig};

/// Threshold-passing statistic for one (aspect, phrase) pair within one
/// partition: mean sentence sentiment and the number of observations
/// backing it.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalSeed {
    pub aspect: String,
    pub phrase: String,
    pub average: f64,
    pub support: usize,
}

/// Accumulates (aspect, phrase) -> sentiment-score observations for one
/// partition, then reduces them to [`LocalSeed`] rows.
///
/// Owned by exactly one partition pass; [`reduce`](Self::reduce) consumes the
/// accumulator so no observation survives past reduction.
#[derive(Debug, Default)]
pub struct PartitionAggregator {
    observations: HashMap<(String, String), Vec<f64>>,
}

impl PartitionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every admissible phrase around every keyword occurrence of
    /// `unit`, each against the sentence's compound score.
    ///
    /// A sentence with several occurrences of the same phrase contributes
    /// one observation per occurrence; that multiplicity is intended.
    pub fn consume(
        &mut self,
        unit: &SentenceUnit,
        lexicon: &AspectLexicon,
        boundary: &HashSet<String>,
        window: &WindowConfig,
    ) {
        for occurrence in matcher::find_occurrences(unit, lexicon) {
            let phrases = phrase::generate_phrases(
                unit.tokens(),
                unit.tags(),
                occurrence.index,
                boundary,
                window,
            );
            for phrase in phrases {
                self.record(occurrence.aspect, phrase, unit.compound());
            }
        }
    }

    /// Append a single observation.
    pub fn record(&mut self, aspect: &str, phrase: String, score: f64) {
        self.observations
            .entry((aspect.to_string(), phrase))
            .or_default()
            .push(score);
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Reduce to rows passing `thresholds`, sorted by (aspect, phrase).
    ///
    /// Pairs failing either threshold are dropped here and never reach the
    /// global merge. An accumulator that saw no observations reduces to an
    /// empty vector.
    pub fn reduce(self, thresholds: &SeedThresholds) -> Vec<LocalSeed> {
        self.observations
            .into_iter()
            .map(|((aspect, phrase), scores)| {
                // entries only exist once a score was pushed
                let support = scores.len();
                let average = scores.iter().sum::<f64>() / support as f64;
                LocalSeed {
                    aspect,
                    phrase,
                    average,
                    support,
                }
            })
            .filter(|seed| thresholds.detect((seed.average, seed.support)))
            .sorted_by(|a, b| {
                (a.aspect.as_str(), a.phrase.as_str()).cmp(&(b.aspect.as_str(), b.phrase.as_str()))
            })
            .collect()
    }
}

//! Support-weighted merge of partition rows into the global seed table.
use std::collections::BTreeMap;

use super::partition::LocalSeed;
use crate::filtering::{Filter, SeedThresholds};

/// Final deduplicated row: one per surviving (aspect, phrase) pair across
/// the whole corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalSeed {
    pub aspect: String,
    pub phrase: String,
    pub weight: f64,
}

/// Merges partition rows keyed by (aspect, phrase), weighting each local
/// average by its support:
///
/// `weight = sum(average_p * support_p) / sum(support_p)`
///
/// over exactly the partitions whose local row survived the partition-level
/// thresholds. The accumulator is a plain value scoped to one merge pass and
/// combines associatively, so partition results may be folded in any
/// grouping; the backing map is ordered, making emission sorted by
/// (aspect, phrase).
#[derive(Debug, Default)]
pub struct GlobalAggregator {
    merged: BTreeMap<(String, String), (f64, usize)>,
}

impl GlobalAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one partition's surviving rows into the merge.
    pub fn absorb(&mut self, seeds: &[LocalSeed]) {
        for seed in seeds {
            let entry = self
                .merged
                .entry((seed.aspect.clone(), seed.phrase.clone()))
                .or_insert((0.0, 0));
            entry.0 += seed.average * seed.support as f64;
            entry.1 += seed.support;
        }
    }

    /// Combine two merge accumulators.
    pub fn merge(mut self, other: Self) -> Self {
        for (key, (weighted_sum, support)) in other.merged {
            let entry = self.merged.entry(key).or_insert((0.0, 0));
            entry.0 += weighted_sum;
            entry.1 += support;
        }
        self
    }

    /// Reduce to rows passing `thresholds` again, sorted by (aspect, phrase).
    pub fn reduce(self, thresholds: &SeedThresholds) -> Vec<GlobalSeed> {
        self.merged
            .into_iter()
            .map(|((aspect, phrase), (weighted_sum, total_support))| {
                let weight = weighted_sum / total_support as f64;
                (aspect, phrase, weight, total_support)
            })
            .filter(|(_, _, weight, total_support)| thresholds.detect((*weight, *total_support)))
            .map(|(aspect, phrase, weight, _)| GlobalSeed {
                aspect,
                phrase,
                weight,
            })
            .collect()
    }
}

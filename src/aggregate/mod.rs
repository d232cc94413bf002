/*! Two-stage statistical aggregation of phrase observations.

Stage one ([partition::PartitionAggregator]) accumulates sentiment
observations per (aspect, phrase) inside a single corpus partition and
reduces them to threshold-passing local rows. Stage two
([global::GlobalAggregator]) merges every partition's surviving rows,
weighted by their support, into the final deduplicated seed table.

Partition accumulators never share state, so stage one parallelizes per
partition; stage two is an associative merge over the collected results.
!*/
mod global;
mod partition;

pub use global::{GlobalAggregator, GlobalSeed};
pub use partition::{LocalSeed, PartitionAggregator};

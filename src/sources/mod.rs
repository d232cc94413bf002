/*! Corpus access.

Partition discovery under a corpus root and parsing of the tab-separated
review lines inside each partition file.
!*/
mod corpus;
mod review;

pub use corpus::{Partition, PartitionId, ReviewCorpus};
pub use review::Review;

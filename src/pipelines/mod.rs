//! Pipelines.
//!
//! One pipeline per output family, behind a light [pipeline::Pipeline]
//! trait that keeps pipeline creation easy and flexible.
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod reviewscores;
pub mod seedvocab;

pub use pipeline::Pipeline;
pub use reviewscores::ReviewScores;
pub use seedvocab::SeedVocab;

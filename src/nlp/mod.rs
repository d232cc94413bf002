/*! Text annotation primitives.

Sentence splitting, tokenization, stopword removal, part-of-speech tagging,
lemmatization and polarity scoring, assembled behind the [`Annotate`] trait
consumed by the mining pipelines.
!*/
mod annotator;
mod lemma;
mod sentence;
mod sentiment;
mod stopwords;
mod tagger;

pub use annotator::{Annotate, ReviewAnnotator};
pub use sentence::SentenceUnit;
pub use sentiment::{Polarity, SentimentScorer};
pub use stopwords::Stopwords;

//! Turning raw review text into annotated sentence units.
//!
//! [`ReviewAnnotator`] is the shipped rule-based implementation: sentence
//! splitting on terminal punctuation, unicode word segmentation, stopword
//! removal, heuristic tagging and suffix lemmatization, with the polarity
//! scorer run over the raw sentence so negators survive scoring even though
//! they are dropped from the token stream.
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Error;
use crate::nlp::lemma;
use crate::nlp::sentence::SentenceUnit;
use crate::nlp::sentiment::SentimentScorer;
use crate::nlp::stopwords::Stopwords;
use crate::nlp::tagger;

/// Annotation contract for the mining stages.
///
/// Implementations must keep tokens, tags and lemmas index-aligned per
/// sentence and produce compound scores in [-1, 1].
pub trait Annotate {
    /// Split `text` into sentences and annotate each one. Sentences left
    /// without tokens after normalization are dropped.
    fn annotate(&self, text: &str) -> Result<Vec<SentenceUnit>, Error>;

    /// Noun-lemmatized tokens of `text`, for normalizing aspect keywords the
    /// same way sentence tokens are normalized.
    fn lemmatize(&self, text: &str) -> Vec<String>;

    /// Compound polarity of `text` as a whole.
    fn compound(&self, text: &str) -> f64;
}

/// Default annotator built from the in-crate tagger, lemmatizer and
/// sentiment lexicon.
pub struct ReviewAnnotator {
    stopwords: Stopwords,
    scorer: SentimentScorer,
}

impl ReviewAnnotator {
    pub fn new() -> Self {
        Self {
            stopwords: Stopwords::english(),
            scorer: SentimentScorer::new(),
        }
    }

    /// Lowercased alphabetic tokens of `sentence` with stopwords removed.
    fn normalize_tokens(&self, sentence: &str) -> Vec<String> {
        sentence
            .unicode_words()
            .filter(|w| w.chars().all(char::is_alphabetic))
            .map(|w| w.to_lowercase())
            .filter(|w| !self.stopwords.rejects(w))
            .collect()
    }
}

impl Default for ReviewAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotate for ReviewAnnotator {
    fn annotate(&self, text: &str) -> Result<Vec<SentenceUnit>, Error> {
        let mut units = Vec::new();
        for sentence in split_sentences(text) {
            let compound = self.scorer.compound(&sentence);
            let tokens = self.normalize_tokens(&sentence);
            if tokens.is_empty() {
                continue;
            }
            let tags = tagger::tag_tokens(&tokens);
            let lemmas = tokens
                .iter()
                .zip(tags.iter())
                .map(|(token, tag)| lemma::lemmatize(token, tag))
                .collect();
            units.push(SentenceUnit::new(tokens, tags, lemmas, compound)?);
        }
        Ok(units)
    }

    fn lemmatize(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .map(|w| w.to_lowercase())
            .map(|w| lemma::lemmatize(&w, "NN"))
            .collect()
    }

    fn compound(&self, text: &str) -> f64 {
        self.scorer.compound(text)
    }
}

/// Split on sentence-terminal punctuation and newlines, keeping the
/// terminal run with its sentence so emphasis marks reach the scorer.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\n' {
            flush(&mut current, &mut sentences);
            continue;
        }
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            let run_continues = matches!(chars.peek().copied(), Some('.' | '!' | '?'));
            if !run_continues {
                flush(&mut current, &mut sentences);
            }
        }
    }
    flush(&mut current, &mut sentences);
    sentences
}

fn flush(current: &mut String, sentences: &mut Vec<String>) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

//! Stopword and token-rejection sets.
//!
//! Three sets cooperate during normalization:
//! - the NLTK English stopword list (from the `stop-words` crate),
//! - a junk set for tokenization artifacts left over from HTML escapes,
//! - a filler set for words too weak to anchor a phrase.
//!
//! The boundary set (stopwords plus coordinating conjunctions) is used when
//! trimming candidate phrases, never during token filtering.
use std::collections::HashSet;

use lazy_static::lazy_static;

lazy_static! {
    /// Tokenization artifacts that survive the alphabetic filter.
    pub static ref JUNK_TOKENS: HashSet<&'static str> = {
        let mut m = HashSet::new();
        m.insert("quot");
        m
    };

    /// Weak filler words removed on top of the standard stopword list.
    pub static ref FILLER_TOKENS: HashSet<&'static str> = {
        let mut m = HashSet::new();
        m.insert("just");
        m.insert("even");
        m.insert("still");
        m.insert("get");
        m.insert("got");
        m
    };
}

/// Coordinating conjunctions added to the boundary set.
const COORDINATORS: [&str; 3] = ["and", "but", "or"];

/// English stopword sets shared by the annotator and the phrase generator.
#[derive(Debug, Clone)]
pub struct Stopwords {
    base: HashSet<String>,
    boundary: HashSet<String>,
}

impl Stopwords {
    /// Build the standard English sets.
    pub fn english() -> Self {
        // nltk list; the larger iso list swallows "room", "great", "good"
        let base: HashSet<String> = stop_words::get(stop_words::LANGUAGE::English)
            .into_iter()
            .collect();

        let mut boundary = base.clone();
        for c in COORDINATORS {
            boundary.insert(c.to_string());
        }

        Self { base, boundary }
    }

    /// Token-level rejection: stopword, junk or filler.
    pub fn rejects(&self, token: &str) -> bool {
        self.base.contains(token) || JUNK_TOKENS.contains(token) || FILLER_TOKENS.contains(token)
    }

    /// Membership in the phrase boundary set (stopwords + "and"/"but"/"or").
    pub fn is_boundary(&self, token: &str) -> bool {
        self.boundary.contains(token)
    }

    /// The boundary set itself, for callers that trim phrases.
    pub fn boundary_set(&self) -> &HashSet<String> {
        &self.boundary
    }
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::english()
    }
}

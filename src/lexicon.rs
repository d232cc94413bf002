//! Aspect lexicon: thematic categories and the lemma sets that identify them.
//!
//! Built once per run from the built-in table or a JSON file, then shared
//! read-only by every partition worker. Aspect iteration is sorted by name so
//! downstream matching and output ordering stay reproducible.
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::Error;
use crate::nlp::Annotate;

/// Built-in aspect table for hotel-style review corpora.
///
/// Multi-word seeds contribute one lemma per word.
const BUILTIN_ASPECTS: &[(&str, &[&str])] = &[
    (
        "cleanliness",
        &[
            "clean", "dirty", "filthy", "spotless", "tidy", "stain", "grimy", "dusty", "fresh",
        ],
    ),
    (
        "service",
        &[
            "service",
            "staff",
            "reception",
            "manager",
            "rude",
            "helpful",
            "check",
            "checkin",
            "checkout",
            "housekeeping",
            "front desk",
        ],
    ),
    (
        "location",
        &[
            "location",
            "walk",
            "near",
            "close",
            "distance",
            "station",
            "tube",
            "area",
            "convenient",
            "central",
            "neighborhood",
        ],
    ),
    (
        "comfort",
        &[
            "bed",
            "room",
            "comfortable",
            "noise",
            "noisy",
            "quiet",
            "hot",
            "cold",
            "air",
            "ac",
            "heating",
            "pillow",
            "mattress",
            "sleep",
        ],
    ),
    (
        "price",
        &[
            "price", "cost", "expensive", "cheap", "value", "worth", "deal", "rate", "charge",
            "fee",
        ],
    ),
];

/// Immutable mapping of aspect name to the lemma forms that identify it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AspectLexicon {
    aspects: BTreeMap<String, HashSet<String>>,
}

impl AspectLexicon {
    /// Lexicon from the built-in aspect table, seed forms expanded to lemmas
    /// through `annotator`.
    pub fn builtin(annotator: &impl Annotate) -> Self {
        Self::from_entries(
            BUILTIN_ASPECTS
                .iter()
                .map(|(aspect, seeds)| (aspect.to_string(), seeds.iter().map(|s| s.to_string()))),
            annotator,
        )
    }

    /// Lexicon from a JSON file shaped `{"aspect": ["seed", ...], ...}`.
    pub fn from_json(path: &Path, annotator: &impl Annotate) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        let table: BTreeMap<String, Vec<String>> = serde_json::from_reader(reader)?;
        Ok(Self::from_entries(
            table
                .into_iter()
                .map(|(aspect, seeds)| (aspect, seeds.into_iter())),
            annotator,
        ))
    }

    fn from_entries<I, S>(entries: I, annotator: &impl Annotate) -> Self
    where
        I: IntoIterator<Item = (String, S)>,
        S: Iterator<Item = String>,
    {
        let aspects = entries
            .into_iter()
            .map(|(aspect, seeds)| {
                let lemmas = seeds
                    .flat_map(|seed| annotator.lemmatize(&seed))
                    .collect::<HashSet<_>>();
                (aspect, lemmas)
            })
            .collect();
        Self { aspects }
    }

    /// Aspect names in sorted order.
    pub fn aspects(&self) -> impl Iterator<Item = &str> {
        self.aspects.keys().map(String::as_str)
    }

    /// (aspect, lemma set) pairs in sorted aspect order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HashSet<String>)> {
        self.aspects.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn contains(&self, aspect: &str, lemma: &str) -> bool {
        self.aspects
            .get(aspect)
            .map(|lemmas| lemmas.contains(lemma))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.aspects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aspects.is_empty()
    }
}

/// Title-cases each alphabetic run: first letter uppercased, the rest
/// lowercased. Used for aspect display names and partition labels.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

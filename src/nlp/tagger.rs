//! Heuristic part-of-speech tagging.
//!
//! Emits Penn-style tag strings over normalized tokens: closed-class words,
//! irregular verb forms and known adjectives come from embedded lexicons, the
//! rest falls through suffix rules, and anything unresolved defaults to `NN`.
//! The noun default matches the downstream contract, where only the `N`/`J`
//! prefixes carry meaning.
use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use super::lemma;

lazy_static! {
    /// Closed-class words with fixed tags.
    static ref CLOSED_CLASS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        for w in ["a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no"] {
            m.insert(w, "DT");
        }
        for w in ["in", "on", "at", "by", "for", "with", "from", "of", "to", "near", "about", "over", "under", "between", "during", "before", "after", "against", "into", "through"] {
            m.insert(w, "IN");
        }
        for w in ["and", "but", "or", "nor", "so", "yet"] {
            m.insert(w, "CC");
        }
        for w in ["i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our", "their"] {
            m.insert(w, "PRP");
        }
        for w in ["can", "could", "will", "would", "shall", "should", "may", "might", "must"] {
            m.insert(w, "MD");
        }
        for w in ["very", "really", "too", "quite", "never", "always", "often", "sometimes", "rarely", "not", "here", "there"] {
            m.insert(w, "RB");
        }
        m
    };

    /// Adjectives that no suffix rule can identify.
    static ref ADJECTIVES: HashSet<&'static str> = [
        "good", "great", "bad", "better", "best", "worse", "worst",
        "nice", "lovely", "awful", "terrible", "horrible",
        "excellent", "amazing", "perfect", "poor", "superb", "pleasant", "unpleasant",
        "decent", "efficient", "convenient", "clean", "dirty", "filthy", "spotless",
        "tidy", "grimy", "dusty", "fresh", "stale", "comfy", "cozy", "cosy",
        "noisy", "quiet", "loud", "hot", "cold", "warm", "cool", "rude", "friendly",
        "helpful", "unhelpful", "polite", "cheap", "expensive", "pricey", "affordable",
        "central", "close", "far", "modern", "old", "new", "big", "small", "large",
        "tiny", "huge", "spacious", "cramped", "dark", "bright", "beautiful", "ugly",
        "busy", "quick", "slow", "fast", "easy", "hard", "soft", "firm", "happy",
        "unhappy", "worth", "dim", "shabby", "smelly", "damp", "mouldy", "moldy",
    ]
    .into_iter()
    .collect();

    /// `-ing` words that are nouns in review prose, kept off the verb rule.
    static ref ING_NOUNS: HashSet<&'static str> = [
        "heating", "housekeeping", "ceiling", "building", "parking", "booking",
        "bedding", "plumbing", "lighting", "flooring", "morning", "evening",
        "everything", "something", "anything", "nothing",
    ]
    .into_iter()
    .collect();
}

/// Tag one normalized (lowercase, alphabetic) token.
pub fn tag_token(token: &str) -> String {
    if let Some(tag) = CLOSED_CLASS.get(token) {
        return (*tag).to_string();
    }
    // irregular pasts carry no suffix cue ("slept", "went", "felt")
    if lemma::irregular_verb(token).is_some() {
        return "VBD".to_string();
    }
    if ADJECTIVES.contains(token) {
        return "JJ".to_string();
    }
    if ING_NOUNS.contains(token) {
        return "NN".to_string();
    }
    if token.len() > 3 && token.ends_with("ly") {
        return "RB".to_string();
    }
    if token.len() > 4 && token.ends_with("ing") {
        return "VBG".to_string();
    }
    if token.len() > 3 && token.ends_with("ed") {
        return "VBN".to_string();
    }
    if let Some((degree, _)) = comparative(token) {
        return degree.to_string();
    }
    for suffix in ["able", "ible", "ful", "ous", "ive", "less", "ish", "al", "ic"] {
        if token.len() > suffix.len() + 2 && token.ends_with(suffix) {
            return "JJ".to_string();
        }
    }
    if is_plural(token) {
        return "NNS".to_string();
    }
    "NN".to_string()
}

/// Tag a normalized token sequence. Output is parallel to the input.
pub fn tag_tokens(tokens: &[String]) -> Vec<String> {
    tokens.iter().map(|t| tag_token(t)).collect()
}

/// `cleaner`/`cleanest` style degrees of a known adjective, with the restored
/// base form.
///
/// Returns a hit only when stripping the suffix lands on a listed adjective,
/// so `manager` stays a noun. The lemmatizer reuses the base form.
pub(crate) fn comparative(token: &str) -> Option<(&'static str, String)> {
    for (suffix, tag) in [("est", "JJS"), ("er", "JJR")] {
        if let Some(stem) = token.strip_suffix(suffix) {
            if ADJECTIVES.contains(stem) {
                return Some((tag, stem.to_string()));
            }
            // dirtier -> dirti -> dirty
            if let Some(short) = stem.strip_suffix('i') {
                let restored = format!("{}y", short);
                if ADJECTIVES.contains(restored.as_str()) {
                    return Some((tag, restored));
                }
            }
            // closer -> clos -> close
            let restored = format!("{}e", stem);
            if ADJECTIVES.contains(restored.as_str()) {
                return Some((tag, restored));
            }
            // bigger -> bigg -> big
            let mut rev = stem.char_indices().rev();
            if let (Some((split, last)), Some((_, prev))) = (rev.next(), rev.next()) {
                if last == prev {
                    let undoubled = &stem[..split];
                    if ADJECTIVES.contains(undoubled) {
                        return Some((tag, undoubled.to_string()));
                    }
                }
            }
        }
    }
    None
}

fn is_plural(token: &str) -> bool {
    token.len() > 3
        && token.ends_with('s')
        && !token.ends_with("ss")
        && !token.ends_with("us")
        && !token.ends_with("is")
}

//! Rule-based lemmatization.
//!
//! Maps inflected surface forms to base forms so that keyword matching is
//! insensitive to number and degree. The tables cover the irregular forms that
//! matter in review prose; everything else goes through ordered suffix
//! substitutions in the style of WordNet's morphy. The tag decides which rule
//! family applies, with nouns as the fallback family.
use std::collections::HashMap;

use lazy_static::lazy_static;

use super::tagger;

lazy_static! {
    static ref IRREGULAR_NOUNS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("men", "man");
        m.insert("women", "woman");
        m.insert("children", "child");
        m.insert("feet", "foot");
        m.insert("teeth", "tooth");
        m.insert("mice", "mouse");
        m.insert("buses", "bus");
        m.insert("wives", "wife");
        m.insert("knives", "knife");
        m.insert("lives", "life");
        m.insert("leaves", "leaf");
        m.insert("shelves", "shelf");
        m.insert("halves", "half");
        m
    };

    static ref IRREGULAR_VERBS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        for (form, base) in [
            ("was", "be"), ("were", "be"), ("is", "be"), ("are", "be"), ("am", "be"),
            ("been", "be"), ("being", "be"),
            ("got", "get"), ("gotten", "get"),
            ("went", "go"), ("gone", "go"), ("goes", "go"),
            ("did", "do"), ("done", "do"), ("does", "do"),
            ("had", "have"), ("has", "have"),
            ("made", "make"), ("took", "take"), ("taken", "take"),
            ("came", "come"), ("said", "say"), ("saw", "see"), ("seen", "see"),
            ("felt", "feel"), ("found", "find"), ("left", "leave"),
            ("kept", "keep"), ("slept", "sleep"), ("paid", "pay"),
            ("gave", "give"), ("given", "give"), ("told", "tell"),
            ("thought", "think"), ("brought", "bring"), ("stood", "stand"),
            ("broke", "break"), ("broken", "break"), ("chose", "choose"),
            ("chosen", "choose"), ("wore", "wear"), ("worn", "wear"),
        ] {
            m.insert(form, base);
        }
        m
    };

    static ref IRREGULAR_ADJECTIVES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("better", "good");
        m.insert("best", "good");
        m.insert("worse", "bad");
        m.insert("worst", "bad");
        m
    };
}

/// Base form of a known irregular verb form. The tagger consults this too,
/// since these pasts carry none of the suffix cues it otherwise relies on.
pub(super) fn irregular_verb(token: &str) -> Option<&'static str> {
    IRREGULAR_VERBS.get(token).copied()
}

/// Lemmatize one normalized token given its Penn-style tag.
///
/// Unknown tags fall back to the noun rules, mirroring the WordNet default.
pub fn lemmatize(token: &str, tag: &str) -> String {
    match tag.chars().next() {
        Some('J') => adjective_lemma(token),
        Some('V') => verb_lemma(token),
        Some('R') => token.to_string(),
        _ => noun_lemma(token),
    }
}

fn noun_lemma(token: &str) -> String {
    if let Some(base) = IRREGULAR_NOUNS.get(token) {
        return (*base).to_string();
    }
    if token.len() > 4 {
        if let Some(stem) = token.strip_suffix("ies") {
            return format!("{}y", stem);
        }
        for suffix in ["ches", "shes", "sses", "xes", "zes"] {
            if token.ends_with(suffix) {
                return token[..token.len() - 2].to_string();
            }
        }
    }
    if strippable_plural(token) {
        return token[..token.len() - 1].to_string();
    }
    token.to_string()
}

fn verb_lemma(token: &str) -> String {
    if let Some(base) = irregular_verb(token) {
        return base.to_string();
    }
    if token.len() > 4 {
        if let Some(stem) = token.strip_suffix("ies") {
            return format!("{}y", stem);
        }
        if let Some(stem) = token.strip_suffix("ied") {
            return format!("{}y", stem);
        }
        for suffix in ["ches", "shes", "sses", "xes", "zes"] {
            if token.ends_with(suffix) {
                return token[..token.len() - 2].to_string();
            }
        }
    }
    if token.len() > 5 {
        if let Some(stem) = token.strip_suffix("ing") {
            return undouble(stem);
        }
    }
    if token.len() > 4 {
        if let Some(stem) = token.strip_suffix("ed") {
            return undouble(stem);
        }
    }
    if strippable_plural(token) {
        return token[..token.len() - 1].to_string();
    }
    token.to_string()
}

fn adjective_lemma(token: &str) -> String {
    if let Some(base) = IRREGULAR_ADJECTIVES.get(token) {
        return (*base).to_string();
    }
    if let Some((_, base)) = tagger::comparative(token) {
        return base;
    }
    token.to_string()
}

/// `stopp` -> `stop`, keeping legitimate doubles like `tell` and `miss`.
fn undouble(stem: &str) -> String {
    let mut rev = stem.char_indices().rev();
    if let (Some((split, last)), Some((_, prev))) = (rev.next(), rev.next()) {
        if split > 1 && last == prev && !matches!(last, 'l' | 's' | 'f' | 'e' | 'o') {
            return stem[..split].to_string();
        }
    }
    stem.to_string()
}

fn strippable_plural(token: &str) -> bool {
    token.len() > 3
        && token.ends_with('s')
        && !token.ends_with("ss")
        && !token.ends_with("us")
        && !token.ends_with("is")
}

#[cfg(test)]
mod tests {
    use super::lemmatize;

    #[test]
    fn noun_plurals() {
        assert_eq!(lemmatize("rooms", "NNS"), "room");
        assert_eq!(lemmatize("beds", "NNS"), "bed");
        assert_eq!(lemmatize("stains", "NNS"), "stain");
        assert_eq!(lemmatize("mattresses", "NNS"), "mattress");
        assert_eq!(lemmatize("amenities", "NNS"), "amenity");
        assert_eq!(lemmatize("houses", "NNS"), "house");
        assert_eq!(lemmatize("mattress", "NN"), "mattress");
    }

    #[test]
    fn verbs() {
        assert_eq!(lemmatize("was", "VBD"), "be");
        assert_eq!(lemmatize("got", "VBD"), "get");
        assert_eq!(lemmatize("slept", "VBD"), "sleep");
        assert_eq!(lemmatize("felt", "VBD"), "feel");
        assert_eq!(lemmatize("checked", "VBN"), "check");
        assert_eq!(lemmatize("checking", "VBG"), "check");
        assert_eq!(lemmatize("stopped", "VBN"), "stop");
        assert_eq!(lemmatize("telling", "VBG"), "tell");
        assert_eq!(lemmatize("tried", "VBD"), "try");
    }

    #[test]
    fn multibyte_stems() {
        // equal trailing bytes across a char boundary must not split the char
        assert_eq!(lemmatize("tतed", "VBN"), "tत");
        assert_eq!(lemmatize("ततed", "VBN"), "त");
    }

    #[test]
    fn adjectives() {
        assert_eq!(lemmatize("clean", "JJ"), "clean");
        assert_eq!(lemmatize("cleaner", "JJR"), "clean");
        assert_eq!(lemmatize("dirtiest", "JJS"), "dirty");
        assert_eq!(lemmatize("better", "JJR"), "good");
        assert_eq!(lemmatize("worst", "JJS"), "bad");
    }

    #[test]
    fn default_is_noun_family() {
        assert_eq!(lemmatize("walks", "XX"), "walk");
        assert_eq!(lemmatize("quiet", "JJ"), "quiet");
    }

    #[test]
    fn short_words_untouched() {
        assert_eq!(lemmatize("gas", "NN"), "gas");
        assert_eq!(lemmatize("was", "NN"), "was");
        assert_eq!(lemmatize("ac", "NN"), "ac");
    }
}

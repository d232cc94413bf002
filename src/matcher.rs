//! Locating aspect keywords inside annotated sentences.
use crate::lexicon::AspectLexicon;
use crate::nlp::SentenceUnit;

/// One aspect keyword hit: the aspect it belongs to and the token index of
/// the matching lemma inside its sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordOccurrence<'a> {
    pub aspect: &'a str,
    pub index: usize,
}

/// Every (aspect, token index) pair of `unit` whose lemma belongs to that
/// aspect's lemma set. Pure membership lookup; aspects are visited in sorted
/// order and indices ascend within an aspect, so the result order is
/// deterministic.
pub fn find_occurrences<'a>(
    unit: &SentenceUnit,
    lexicon: &'a AspectLexicon,
) -> Vec<KeywordOccurrence<'a>> {
    let mut occurrences = Vec::new();
    for (aspect, lemmas) in lexicon.iter() {
        for (index, lemma) in unit.lemmas().iter().enumerate() {
            if lemmas.contains(lemma) {
                occurrences.push(KeywordOccurrence { aspect, index });
            }
        }
    }
    occurrences
}

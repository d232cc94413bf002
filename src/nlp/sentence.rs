//! Annotated sentence record shared across the mining stages.
use crate::error::Error;

/// One sentence after annotation: surface tokens, their part-of-speech tags,
/// their lemmas and the sentence compound polarity.
///
/// The three sequences are index-aligned; construction fails on mismatched
/// lengths rather than letting a skew surface later as off-by-one phrases.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceUnit {
    tokens: Vec<String>,
    tags: Vec<String>,
    lemmas: Vec<String>,
    compound: f64,
}

impl SentenceUnit {
    pub fn new(
        tokens: Vec<String>,
        tags: Vec<String>,
        lemmas: Vec<String>,
        compound: f64,
    ) -> Result<Self, Error> {
        if tokens.len() != tags.len() || tokens.len() != lemmas.len() {
            return Err(Error::SequenceMismatch {
                tokens: tokens.len(),
                tags: tags.len(),
                lemmas: lemmas.len(),
            });
        }
        Ok(Self {
            tokens,
            tags,
            lemmas,
            compound,
        })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn lemmas(&self) -> &[String] {
        &self.lemmas
    }

    pub fn compound(&self) -> f64 {
        self.compound
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::SentenceUnit;
    use crate::error::Error;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn aligned_sequences() {
        let unit = SentenceUnit::new(
            strings(&["room", "clean"]),
            strings(&["NN", "JJ"]),
            strings(&["room", "clean"]),
            0.4,
        )
        .unwrap();
        assert_eq!(unit.len(), 2);
        assert_eq!(unit.compound(), 0.4);
    }

    #[test]
    fn mismatch_rejected() {
        let err = SentenceUnit::new(
            strings(&["room", "clean"]),
            strings(&["NN"]),
            strings(&["room", "clean"]),
            0.0,
        )
        .unwrap_err();
        match err {
            Error::SequenceMismatch { tokens, tags, lemmas } => {
                assert_eq!((tokens, tags, lemmas), (2, 1, 2));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

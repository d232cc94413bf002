//! Error enum
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Serde(serde_json::Error),
    /// Parallel token/tag/lemma sequences of differing lengths.
    /// This is a contract violation from the annotator, not a state to recover from.
    SequenceMismatch {
        tokens: usize,
        tags: usize,
        lemmas: usize,
    },
    /// The corpus root exists but lists no processable partition file.
    EmptyCorpus(PathBuf),
    Custom(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

//! Candidate phrase generation around keyword occurrences.
//!
//! Pure function of the sentence's token/tag sequences: no aggregation, no
//! state across calls. Window combinations are enumerated around the keyword,
//! gated on length and part of speech, stripped of boundary stopwords at the
//! edges and deduplicated per occurrence.
use std::collections::HashSet;

/// Tokens taken on each side of the keyword.
pub const CONTEXT_WINDOW: usize = 2;

/// Token-count bounds for admissible phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            min_len: 2,
            max_len: 3,
        }
    }
}

/// Distinct phrases admissible around the keyword at `keyword` in `tokens`.
///
/// The keyword must be tagged as a noun (tag starting with `N`) or the
/// occurrence yields nothing. Each left-length/right-length combination
/// within [`CONTEXT_WINDOW`] is kept when its token count lies inside the
/// configured bounds; boundary stopwords are then stripped from both ends.
/// A combination still carrying tokens left of the keyword additionally
/// requires the token at `keyword - 1` to be tagged adjective or noun.
///
/// `keyword` must be a valid index and `tags` parallel to `tokens`.
pub fn generate_phrases(
    tokens: &[String],
    tags: &[String],
    keyword: usize,
    boundary: &HashSet<String>,
    config: &WindowConfig,
) -> HashSet<String> {
    debug_assert!(keyword < tokens.len() && tokens.len() == tags.len());

    let mut phrases = HashSet::new();
    // noun gate, decided once for the whole occurrence
    if !tags[keyword].starts_with('N') {
        return phrases;
    }

    let left_max = keyword.min(CONTEXT_WINDOW);
    let right_max = (tokens.len() - keyword - 1).min(CONTEXT_WINDOW);

    for left in 0..=left_max {
        for right in 0..=right_max {
            let count = left + 1 + right;
            if count < config.min_len || count > config.max_len {
                continue;
            }

            let mut start = keyword - left;
            let mut end = keyword + right + 1;
            while start < end && boundary.contains(&tokens[start]) {
                start += 1;
            }
            while end > start && boundary.contains(&tokens[end - 1]) {
                end -= 1;
            }
            if start == end {
                continue;
            }
            if start < keyword {
                let left_tag = &tags[keyword - 1];
                if !(left_tag.starts_with('J') || left_tag.starts_with('N')) {
                    continue;
                }
            }
            phrases.insert(tokens[start..end].join(" "));
        }
    }
    phrases
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{generate_phrases, WindowConfig};

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn no_boundary() -> HashSet<String> {
        HashSet::new()
    }

    #[test]
    fn non_noun_keyword_yields_nothing() {
        // "clean" matched as a cleanliness keyword but tagged adjective
        let tokens = strings(&["room", "clean", "comfortable"]);
        let tags = strings(&["NN", "JJ", "JJ"]);
        let got = generate_phrases(&tokens, &tags, 1, &no_boundary(), &WindowConfig::default());
        assert!(got.is_empty());
    }

    #[test]
    fn two_token_sentence() {
        let tokens = strings(&["bed", "comfortable"]);
        let tags = strings(&["NN", "JJ"]);
        let got = generate_phrases(&tokens, &tags, 0, &no_boundary(), &WindowConfig::default());
        let expected: HashSet<String> = ["bed comfortable".to_string()].into_iter().collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn right_context_expansion() {
        let tokens = strings(&["staff", "friendly", "helpful", "reception"]);
        let tags = strings(&["NN", "JJ", "JJ", "NN"]);
        let got = generate_phrases(&tokens, &tags, 0, &no_boundary(), &WindowConfig::default());
        let expected: HashSet<String> = [
            "staff friendly".to_string(),
            "staff friendly helpful".to_string(),
        ]
        .into_iter()
        .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn left_neighbor_must_be_adjective_or_noun() {
        // "walked" tagged as a verb blocks left expansions only
        let tokens = strings(&["walked", "station", "quickly"]);
        let tags = strings(&["VBD", "NN", "RB"]);
        let got = generate_phrases(&tokens, &tags, 1, &no_boundary(), &WindowConfig::default());
        let expected: HashSet<String> = ["station quickly".to_string()].into_iter().collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn adjective_left_neighbor_admits_left_expansion() {
        let tokens = strings(&["spotless", "room", "spacious"]);
        let tags = strings(&["JJ", "NN", "JJ"]);
        let got = generate_phrases(&tokens, &tags, 1, &no_boundary(), &WindowConfig::default());
        let expected: HashSet<String> = [
            "spotless room".to_string(),
            "room spacious".to_string(),
            "spotless room spacious".to_string(),
        ]
        .into_iter()
        .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn boundary_tokens_stripped_from_edges() {
        let tokens = strings(&["hotel", "room", "spacious"]);
        let tags = strings(&["NN", "NN", "JJ"]);
        let boundary: HashSet<String> = ["hotel".to_string()].into_iter().collect();
        let got = generate_phrases(&tokens, &tags, 1, &boundary, &WindowConfig::default());
        assert!(got.iter().all(|p| !p.starts_with("hotel")));
        assert!(got.contains("room spacious"));
    }

    #[test]
    fn window_is_capped_at_two() {
        let tokens = strings(&["a1", "a2", "a3", "bed", "b1", "b2", "b3"]);
        let tags = strings(&["NN", "NN", "NN", "NN", "NN", "NN", "NN"]);
        let config = WindowConfig {
            min_len: 2,
            max_len: 5,
        };
        let got = generate_phrases(&tokens, &tags, 3, &no_boundary(), &config);
        assert!(got.iter().all(|p| !p.contains("a1")));
        assert!(got.iter().all(|p| !p.contains("b3")));
        assert!(got.contains("a2 a3 bed b1 b2"));
    }

    #[test]
    fn length_bounds_respected() {
        let tokens = strings(&["big", "soft", "bed", "great", "value"]);
        let tags = strings(&["JJ", "JJ", "NN", "JJ", "NN"]);
        let got = generate_phrases(&tokens, &tags, 2, &no_boundary(), &WindowConfig::default());
        for phrase in &got {
            let count = phrase.split(' ').count();
            assert!((2..=3).contains(&count), "bad length: {phrase}");
        }
        // the bare keyword never qualifies at min_len 2
        assert!(!got.contains("bed"));
    }

    #[test]
    fn keyword_at_sentence_end() {
        let tokens = strings(&["lumpy", "old", "mattress"]);
        let tags = strings(&["JJ", "JJ", "NN"]);
        let got = generate_phrases(&tokens, &tags, 2, &no_boundary(), &WindowConfig::default());
        let expected: HashSet<String> = [
            "old mattress".to_string(),
            "lumpy old mattress".to_string(),
        ]
        .into_iter()
        .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn duplicate_combinations_collapse() {
        // stripping makes two combinations produce the same phrase
        let tokens = strings(&["bed", "comfortable", "though"]);
        let tags = strings(&["NN", "JJ", "IN"]);
        let boundary: HashSet<String> = ["though".to_string()].into_iter().collect();
        let got = generate_phrases(&tokens, &tags, 0, &boundary, &WindowConfig::default());
        let expected: HashSet<String> = ["bed comfortable".to_string()].into_iter().collect();
        assert_eq!(got, expected);
    }
}

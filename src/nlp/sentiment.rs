//! Lexicon-based sentence polarity scoring.
//!
//! A compact valence dictionary scored on the VADER scale, with negation
//! flipping, booster words and exclamation emphasis, normalized into a
//! compound score in [-1, 1]. This is the shipped default for the annotator
//! contract; any scorer producing a compound in that range can stand in.
use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

/// Damping applied to a valence hit inside a negation window.
const NEGATION_SCALAR: f64 = -0.74;
/// Intensity shift contributed by a booster word.
const BOOSTER_STEP: f64 = 0.293;
/// Emphasis added per exclamation mark (capped at four marks).
const EXCLAMATION_STEP: f64 = 0.292;
/// Normalization constant for the compound score.
const ALPHA: f64 = 15.0;

/// Coarse polarity label derived from a compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    /// Thresholds at +0.05 / -0.05.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= 0.05 {
            Polarity::Positive
        } else if compound <= -0.05 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
            Polarity::Neutral => "neutral",
        }
    }
}

/// Sentence-level sentiment scorer over an embedded valence lexicon.
pub struct SentimentScorer {
    lexicon: HashMap<&'static str, f64>,
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self {
            lexicon: default_valences(),
        }
    }

    /// Compound polarity of `text` in [-1, 1]. Zero for text without any
    /// lexicon hit.
    pub fn compound(&self, text: &str) -> f64 {
        let words: Vec<String> = text
            .unicode_words()
            .map(|w| w.to_lowercase())
            .collect();

        let mut sum = 0.0;
        for (i, word) in words.iter().enumerate() {
            if booster(word) != 0.0 {
                continue;
            }
            let Some(&valence) = self.lexicon.get(word.as_str()) else {
                continue;
            };

            let mut v = valence;
            // boosters lose strength with distance from the scored word
            for (dist, damp) in [(1usize, 1.0), (2, 0.95), (3, 0.9)] {
                if i >= dist {
                    let b = booster(&words[i - dist]);
                    if b != 0.0 {
                        v += v.signum() * b * damp;
                    }
                }
            }
            if (i.saturating_sub(3)..i).any(|j| is_negator(&words[j])) {
                v *= NEGATION_SCALAR;
            }
            sum += v;
        }

        if sum != 0.0 {
            let marks = text.matches('!').count().min(4) as f64;
            sum += sum.signum() * marks * EXCLAMATION_STEP;
        }

        normalize(sum)
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(sum: f64) -> f64 {
    let compound = sum / (sum * sum + ALPHA).sqrt();
    compound.clamp(-1.0, 1.0)
}

fn booster(word: &str) -> f64 {
    match word {
        "very" | "really" | "extremely" | "incredibly" | "absolutely" | "totally" | "super"
        | "quite" | "so" => BOOSTER_STEP,
        "slightly" | "somewhat" | "marginally" | "barely" => -BOOSTER_STEP,
        _ => 0.0,
    }
}

fn is_negator(word: &str) -> bool {
    if word.ends_with("n't") {
        return true;
    }
    matches!(
        word,
        "not" | "no" | "never" | "none" | "nothing" | "nowhere" | "neither" | "nor" | "cannot"
            | "without" | "rarely" | "seldom" | "dont" | "cant" | "didnt" | "doesnt" | "wasnt"
            | "werent" | "isnt" | "arent" | "wont" | "wouldnt" | "couldnt" | "shouldnt"
            | "havent" | "hasnt" | "hadnt" | "aint"
    )
}

/// Valence table on the VADER -4..4 scale, trimmed to review vocabulary.
fn default_valences() -> HashMap<&'static str, f64> {
    let entries: &[(&str, f64)] = &[
        // positive
        ("good", 1.9),
        ("great", 3.1),
        ("excellent", 2.7),
        ("amazing", 2.8),
        ("awesome", 3.1),
        ("wonderful", 2.7),
        ("fantastic", 2.6),
        ("perfect", 2.7),
        ("superb", 3.1),
        ("lovely", 2.8),
        ("beautiful", 2.9),
        ("charming", 2.2),
        ("nice", 1.8),
        ("pleasant", 2.3),
        ("enjoy", 2.2),
        ("enjoyed", 2.3),
        ("love", 3.2),
        ("loved", 2.9),
        ("like", 1.5),
        ("liked", 1.7),
        ("best", 3.2),
        ("happy", 2.7),
        ("pleased", 1.9),
        ("friendly", 2.2),
        ("helpful", 1.8),
        ("polite", 1.6),
        ("clean", 1.7),
        ("spotless", 2.0),
        ("tidy", 1.5),
        ("fresh", 1.3),
        ("comfortable", 1.9),
        ("comfy", 1.7),
        ("cozy", 1.5),
        ("cosy", 1.5),
        ("quiet", 0.9),
        ("convenient", 1.4),
        ("spacious", 1.6),
        ("recommend", 1.5),
        ("recommended", 1.6),
        ("worth", 0.9),
        ("fine", 0.8),
        ("okay", 0.9),
        ("decent", 1.3),
        ("delicious", 2.5),
        ("generous", 1.9),
        // negative
        ("bad", -2.5),
        ("terrible", -2.4),
        ("awful", -2.0),
        ("horrible", -2.5),
        ("disgusting", -2.7),
        ("nightmare", -2.8),
        ("worse", -2.1),
        ("hate", -2.7),
        ("hated", -2.9),
        ("poor", -1.9),
        ("mediocre", -0.9),
        ("disappointing", -2.2),
        ("disappointed", -2.3),
        ("disappointment", -2.3),
        ("unacceptable", -2.1),
        ("dirty", -1.9),
        ("filthy", -2.5),
        ("grimy", -1.6),
        ("dusty", -1.1),
        ("stain", -1.5),
        ("stained", -1.6),
        ("smelly", -1.9),
        ("mouldy", -2.0),
        ("moldy", -2.0),
        ("damp", -1.2),
        ("shabby", -1.7),
        ("stale", -1.3),
        ("outdated", -1.2),
        ("noisy", -1.5),
        ("noise", -1.1),
        ("loud", -0.8),
        ("cold", -0.6),
        ("rude", -2.4),
        ("unhelpful", -1.7),
        ("unfriendly", -1.9),
        ("slow", -1.0),
        ("broken", -1.8),
        ("uncomfortable", -1.4),
        ("cramped", -1.3),
        ("dark", -0.7),
        ("overpriced", -1.9),
        ("problem", -1.7),
        ("problems", -1.7),
        ("complaint", -1.4),
        ("complained", -1.6),
        ("avoid", -1.2),
    ];
    entries.iter().copied().collect()
}

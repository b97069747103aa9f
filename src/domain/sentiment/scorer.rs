use super::error::SentimentError;
use super::lexicon::Lexicon;
use super::Sentiment;
use regex::Regex;
use std::sync::LazyLock;

/// Inputs longer than this are rejected instead of scored
pub const MAX_SCORING_CHARS: usize = 10_000;

/// Normalization constant approximating the max expected sum of valences
const ALPHA: f64 = 15.0;
const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
/// How many preceding tokens a booster or negation can reach
const MODIFIER_WINDOW: usize = 3;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}]+)*").expect("valid token pattern"));

/// Breakdown of a single scoring pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    /// Normalized sum of valences in [-1, 1]
    pub compound: f64,
}

impl PolarityScores {
    fn empty() -> Self {
        Self {
            positive: 0.0,
            negative: 0.0,
            neutral: 0.0,
            compound: 0.0,
        }
    }
}

/// Rule-based headline sentiment scorer.
///
/// Scores are computed from word valences with adjustments for boosters,
/// negations, ALL-CAPS emphasis, exclamation marks and "but" clauses. The
/// scorer holds no mutable state, so one instance can be shared across
/// every request.
#[derive(Debug, Clone, Copy)]
pub struct SentimentScorer {
    lexicon: &'static Lexicon,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::builtin())
    }

    pub fn with_lexicon(lexicon: &'static Lexicon) -> Self {
        Self { lexicon }
    }

    /// Classify a text. Never fails: scoring errors are logged and the text
    /// is treated as neutral.
    pub fn classify(&self, text: &str) -> Sentiment {
        match self.polarity_scores(text) {
            Ok(scores) => Sentiment::from_compound(scores.compound),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    text_length = text.len(),
                    "Sentiment analysis failed, defaulting to neutral"
                );
                Sentiment::Neutral
            }
        }
    }

    pub fn polarity_scores(&self, text: &str) -> Result<PolarityScores, SentimentError> {
        let char_count = text.chars().count();
        if char_count > MAX_SCORING_CHARS {
            return Err(SentimentError::TooLong {
                len: char_count,
                max: MAX_SCORING_CHARS,
            });
        }
        if text.chars().any(|c| c.is_control() && !c.is_whitespace()) {
            return Err(SentimentError::ControlCharacters);
        }

        let tokens: Vec<&str> = TOKEN_PATTERN.find_iter(text).map(|m| m.as_str()).collect();
        if tokens.is_empty() {
            return Ok(PolarityScores::empty());
        }

        let lowered: Vec<String> = tokens
            .iter()
            .map(|t| t.to_lowercase().replace('’', "'"))
            .collect();
        let caps_differ = caps_differential(&tokens);

        let mut valences: Vec<f64> = lowered
            .iter()
            .enumerate()
            .map(|(i, word)| self.token_valence(i, word, &tokens, &lowered, caps_differ))
            .collect();

        apply_but_shift(&lowered, &mut valences);

        let emphasis = punctuation_emphasis(text);
        let scores = score_valences(&valences, emphasis);

        if !scores.compound.is_finite() {
            return Err(SentimentError::NonFinite);
        }
        Ok(scores)
    }

    fn token_valence(
        &self,
        i: usize,
        word: &str,
        tokens: &[&str],
        lowered: &[String],
        caps_differ: bool,
    ) -> f64 {
        if self.lexicon.booster(word).is_some() {
            return 0.0;
        }
        let Some(mut valence) = self.lexicon.valence(word) else {
            return 0.0;
        };

        if caps_differ && is_all_caps(tokens[i]) {
            valence += CAPS_INCREMENT * valence.signum();
        }

        let mut negated = false;
        for distance in 1..=MODIFIER_WINDOW.min(i) {
            let prev = lowered[i - distance].as_str();
            if let Some(boost) = self.lexicon.booster(prev) {
                let mut scalar = boost * valence.signum();
                if caps_differ && is_all_caps(tokens[i - distance]) {
                    scalar += CAPS_INCREMENT * valence.signum();
                }
                // Modifiers lose reach with distance
                scalar *= match distance {
                    1 => 1.0,
                    2 => 0.95,
                    _ => 0.9,
                };
                valence += scalar;
            }
            if self.lexicon.is_negation(prev) {
                negated = true;
            }
        }
        if negated {
            valence *= NEGATION_SCALAR;
        }

        valence
    }
}

/// True when some, but not all, tokens are shouted.
fn caps_differential(tokens: &[&str]) -> bool {
    let shouted = tokens.iter().filter(|t| is_all_caps(t)).count();
    shouted > 0 && shouted < tokens.len()
}

fn is_all_caps(token: &str) -> bool {
    token.chars().count() > 1
        && token.chars().any(char::is_alphabetic)
        && token
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(char::is_uppercase)
}

/// Words before "but" carry half weight, words after it carry one and a half.
fn apply_but_shift(lowered: &[String], valences: &mut [f64]) {
    let Some(pivot) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (i, valence) in valences.iter_mut().enumerate() {
        if i < pivot {
            *valence *= 0.5;
        } else if i > pivot {
            *valence *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    exclamations as f64 * EXCLAMATION_INCREMENT
}

fn score_valences(valences: &[f64], emphasis: f64) -> PolarityScores {
    let mut sum: f64 = valences.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = round4(normalize(sum));

    let mut positive_sum = 0.0;
    let mut negative_sum = 0.0;
    let mut neutral_count = 0.0;
    for v in valences {
        if *v > 0.0 {
            positive_sum += v + 1.0;
        } else if *v < 0.0 {
            negative_sum += v - 1.0;
        } else {
            neutral_count += 1.0;
        }
    }
    if positive_sum > negative_sum.abs() {
        positive_sum += emphasis;
    } else if positive_sum < negative_sum.abs() {
        negative_sum -= emphasis;
    }

    let total = positive_sum + negative_sum.abs() + neutral_count;
    if total == 0.0 {
        return PolarityScores {
            compound,
            ..PolarityScores::empty()
        };
    }

    PolarityScores {
        positive: round4(positive_sum / total),
        negative: round4(negative_sum.abs() / total),
        neutral: round4(neutral_count / total),
        compound,
    }
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

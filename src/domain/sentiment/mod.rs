pub mod error;
pub mod lexicon;
pub mod scorer;

use serde::{Deserialize, Serialize};

pub use error::SentimentError;
pub use lexicon::Lexicon;
pub use scorer::{PolarityScores, SentimentScorer, MAX_SCORING_CHARS};

/// Compound score at or above which a text is positive
pub const POSITIVE_THRESHOLD: f64 = 0.2;
/// Compound score at or below which a text is negative
pub const NEGATIVE_THRESHOLD: f64 = -0.2;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "text")]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Bucket a compound score. Both thresholds are inclusive on the polar side.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if compound <= NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

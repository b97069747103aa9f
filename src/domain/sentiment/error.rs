#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SentimentError {
    #[error("text too long to score: {len} characters (max {max})")]
    TooLong { len: usize, max: usize },
    #[error("text contains control characters")]
    ControlCharacters,
    #[error("score is not a finite number")]
    NonFinite,
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("detection {index}: box has non-finite coordinates or negative size")]
    MalformedBox { index: usize },

    #[error("detection {index}: score {score} is outside [0, 1]")]
    ScoreOutOfRange { index: usize, score: f64 },
}

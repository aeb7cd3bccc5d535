use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid audiometric frequency: {0} Hz")]
    InvalidFrequency(u32),

    #[error("threshold set is missing the {0} Hz band")]
    MissingFrequency(u32),
}

use thiserror::Error;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("degenerate range: {0}")]
    DegenerateRange(String),

    #[error("no {kind} mapping for `{key}`")]
    Lookup { kind: &'static str, key: String },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("serialization failed: {0}")]
    Serialization(String),
}

use lambda_stubs_core::StubError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JavaError {
    #[error("Failed to load the Java grammar: {0}")]
    Language(String),
    #[error("Failed to parse Java source")]
    Parse,
    #[error("Offset {offset} is outside the source ({len} bytes)")]
    OffsetOutOfRange { offset: usize, len: usize },
    #[error(transparent)]
    Stub(#[from] StubError),
}

pub type Result<T> = std::result::Result<T, JavaError>;

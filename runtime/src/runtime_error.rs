use thiserror::Error;

use streamagg_common::error::{ErrorExt, StatusCode};

pub type RuntimeResult<T> = Result<T, RuntimeError>;

#[derive(Debug, PartialEq, Clone, Error)]
pub enum RuntimeError {
    #[error("{op}: expected {expected} keys, found {actual}")]
    KeyCountMismatch {
        op: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("eval: expected batch of {expected} values, found {actual}")]
    BatchLengthMismatch { expected: usize, actual: usize },
    #[error("Duplicate key `{0}`")]
    DuplicateKey(String),
    #[error("Argument error: {0}")]
    ArgumentError(String),
}

impl RuntimeError {
    pub(crate) fn key_count(op: &'static str, expected: usize, actual: usize) -> Self {
        RuntimeError::KeyCountMismatch {
            op,
            expected,
            actual,
        }
    }

    /// Every error raised by the runtime is a caller error; kept as a method so
    /// call sites don't depend on the variant list.
    pub fn is_invalid_argument(&self) -> bool {
        self.status_code() == StatusCode::InvalidArguments
    }
}

impl ErrorExt for RuntimeError {
    fn status_code(&self) -> StatusCode {
        match self {
            RuntimeError::KeyCountMismatch { .. }
            | RuntimeError::BatchLengthMismatch { .. }
            | RuntimeError::DuplicateKey(_)
            | RuntimeError::ArgumentError(_) => StatusCode::InvalidArguments,
        }
    }
}

impl From<&str> for RuntimeError {
    fn from(message: &str) -> Self {
        RuntimeError::ArgumentError(String::from(message))
    }
}

impl From<String> for RuntimeError {
    fn from(message: String) -> Self {
        RuntimeError::ArgumentError(message)
    }
}

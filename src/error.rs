use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid data provided: expected an array, got {kind}")]
    InvalidInput { kind: &'static str },

    #[error("input cannot be empty")]
    EmptyInput,

    #[error("empty data provided")]
    EmptyData,
}

impl Error {
    #[inline]
    #[must_use]
    pub const fn invalid_input(kind: &'static str) -> Self {
        Self::InvalidInput { kind }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

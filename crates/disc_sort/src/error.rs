//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! rejected sampling configuration and sort ranges that cannot be started.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("range of {len} element(s) has nothing to sort")]
    EmptyRange { len: usize },

    #[error("range {left}..={right} is out of bounds for a sequence of length {len}")]
    RangeOutOfBounds {
        left: usize,
        right: usize,
        len: usize,
    },
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_wraps_message() {
        let err = Error::invalid("radius must be > 0");
        assert!(matches!(err, Error::InvalidConfiguration(ref msg) if msg == "radius must be > 0"));
    }

    #[test]
    fn display_includes_range_details() {
        let err = Error::RangeOutOfBounds {
            left: 2,
            right: 9,
            len: 4,
        };
        assert_eq!(
            err.to_string(),
            "range 2..=9 is out of bounds for a sequence of length 4"
        );
        assert_eq!(
            Error::EmptyRange { len: 1 }.to_string(),
            "range of 1 element(s) has nothing to sort"
        );
    }
}

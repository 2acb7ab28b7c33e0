//! Error taxonomy shared by all entry points

use thiserror::Error;

/// Failures reported by the numeric entry points.
///
/// Every variant is produced during argument validation, before any reduction
/// or iteration starts, so a failing call does no work and holds no state;
/// repeating the same call yields the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The N-ary GCD entry point received no array at all.
    #[error("the numbers array is absent")]
    NullInput,
    /// The arguments are structurally unusable for the requested operation.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// The arguments fall outside the accepted or representable range.
    #[error("out of range: {0}")]
    OutOfRange(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

/// Errors raised while configuring a [`FuzzyReplacer`](crate::FuzzyReplacer).
///
/// Matching itself never fails; only construction does.
#[derive(Error, Debug)]
pub enum Error {
    /// A mapping entry has no words at all (empty or whitespace-only phrase).
    #[error("mapping entry #{index} has an empty phrase")]
    EmptyPhrase { index: usize },

    /// The cutoff is NaN or lies outside `[0, 1]`.
    #[error("cutoff must lie within [0, 1], got {0}")]
    InvalidCutoff(f32),

    /// The separator pattern did not compile.
    #[error("invalid separator pattern: {0}")]
    InvalidSeparator(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

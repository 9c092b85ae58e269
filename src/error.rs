//! Error types for plot_colormap.

use thiserror::Error;

/// Errors raised when binding data to a colormap.
///
/// Both variants report a caller precondition violation; nothing is
/// retried and no partial result is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A scatter plot was built from a sequence with no points.
    #[error("must have more than zero points")]
    EmptyInput,

    /// Parallel coordinate sequences do not have the same length.
    #[error("length mismatch: {axis} has {found} values, expected {expected}")]
    LengthMismatch {
        axis: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Result type alias for plot_colormap operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(Error::EmptyInput.to_string(), "must have more than zero points");
        let e = Error::LengthMismatch { axis: "y", expected: 3, found: 2 };
        assert_eq!(e.to_string(), "length mismatch: y has 2 values, expected 3");
    }
}

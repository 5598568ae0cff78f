//! Error types for chronos-series.

use std::path::PathBuf;

/// Error type for all fallible operations in the chronos-series crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when an observation is NaN or infinite.
    #[error("observation {index} is not finite")]
    NonFiniteData {
        /// Zero-based position of the offending observation.
        index: usize,
    },

    /// Returned when a line of an observation file is not a number.
    #[error("line {line}: cannot parse '{value}' as a number")]
    Parse {
        /// One-based line number.
        line: usize,
        /// Trimmed content of the offending line.
        value: String,
    },

    /// Returned when an observation file cannot be read.
    #[error("failed to read {}: {reason}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_non_finite() {
        let err = SeriesError::NonFiniteData { index: 3 };
        assert_eq!(err.to_string(), "observation 3 is not finite");
    }

    #[test]
    fn error_parse() {
        let err = SeriesError::Parse {
            line: 7,
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "line 7: cannot parse 'abc' as a number");
    }

    #[test]
    fn error_io() {
        let err = SeriesError::Io {
            path: PathBuf::from("obs.txt"),
            reason: "no such file".to_string(),
        };
        assert_eq!(err.to_string(), "failed to read obs.txt: no such file");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<SeriesError>();
    }
}

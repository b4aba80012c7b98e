use thiserror::Error;

#[cfg(feature = "std")]
use std::path::PathBuf;

/// Fatal failure while building a [`CodePointTable`](crate::CodePointTable).
#[derive(Debug, Error)]
pub enum LoadError {
    /// The records source could not be opened or read.
    #[cfg(feature = "std")]
    #[error("Can't open records file: {}", path.display())]
    Io {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// A records line did not have the `HEX<TAB>NAME` shape.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number in the records source.
        line: usize,
        /// What was wrong with the line.
        reason: RecordError,
    },
}

/// Why a single records line was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// No TAB separates the code field from the name.
    #[error("missing tab between code and name")]
    MissingTab,
    /// The code field is blank.
    #[error("empty code field")]
    EmptyCode,
    /// The code field contains a non-hex digit.
    #[error("code field is not hexadecimal")]
    InvalidHex,
    /// The code field is hex but exceeds `u32::MAX`.
    #[error("code does not fit in 32 bits")]
    CodeOverflow,
    /// The name is longer than [`MAX_NAME_LEN`](crate::MAX_NAME_LEN) bytes.
    #[error("name is {0} bytes, longer than the {max} byte limit", max = crate::MAX_NAME_LEN)]
    NameTooLong(usize),
}

/// Fatal failure of a whole run.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum RunError {
    /// The input file could not be read.
    #[error("Can't open file: {}", path.display())]
    Input {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The records source could not be loaded.
    #[error(transparent)]
    Records(#[from] LoadError),
    /// Writing to standard output or standard error failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

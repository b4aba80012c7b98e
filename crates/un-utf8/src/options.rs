use std::path::PathBuf;

/// Records file used when none is given.
pub const DEFAULT_RECORDS_PATH: &str = "unicode.txt";

/// Inputs for one end-to-end run.
///
/// # Examples
///
/// ```rust
/// use un_utf8::RunOptions;
///
/// let options = RunOptions {
///     input: "input.txt".into(),
///     ..Default::default()
/// };
/// assert_eq!(options.records.to_str(), Some("unicode.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// File whose bytes are scanned.
    pub input: PathBuf,

    /// `HEX<TAB>NAME` records file the code point table is loaded from.
    ///
    /// # Default
    ///
    /// `unicode.txt`, relative to the working directory.
    pub records: PathBuf,
}

impl RunOptions {
    /// Options scanning `input` against the default records file.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            records: PathBuf::from(DEFAULT_RECORDS_PATH),
        }
    }
}

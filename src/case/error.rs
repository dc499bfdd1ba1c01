use thiserror::Error;

/// Reasons an input cannot be recognized, split or converted.
///
/// Every variant is produced by the fingerprint extractor or the style engine
/// and handed back to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    /// More than one distinct separator character, e.g. `some-string.with`.
    #[error("Multiple separators: {}", join_chars(.0))]
    MultipleSeparators(Vec<char>),

    /// The input starts with a non-letter, e.g. `-leading`.
    #[error("Useless leading separator: {0}")]
    UselessLeadingSeparator(char),

    /// The input ends with a non-letter, e.g. `trailing-`.
    #[error("Useless trailing separator: {0}")]
    UselessTrailingSeparator(char),

    /// Two or more identical separators in a row, e.g. `multi---sep`.
    #[error("Extra sequenced separators: {}", .0.join(", "))]
    ExtraSequencedSeparators(Vec<String>),

    /// Empty input, whitespace, an unknown target label, or a casing pattern
    /// outside the style table.
    #[error("Unknown case type")]
    UnrecognizedStyle,
}

impl CaseError {
    /// Stable snake_case name of the error kind, used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            CaseError::MultipleSeparators(_) => "multiple_separators",
            CaseError::UselessLeadingSeparator(_) => "useless_leading_separator",
            CaseError::UselessTrailingSeparator(_) => "useless_trailing_separator",
            CaseError::ExtraSequencedSeparators(_) => "extra_sequenced_separators",
            CaseError::UnrecognizedStyle => "unrecognized_style",
        }
    }

    /// Process exit code reported by the CLI for this kind. Codes 0 to 2 are
    /// left to success and clap's usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            CaseError::MultipleSeparators(_) => 3,
            CaseError::UselessLeadingSeparator(_) => 4,
            CaseError::UselessTrailingSeparator(_) => 5,
            CaseError::ExtraSequencedSeparators(_) => 6,
            CaseError::UnrecognizedStyle => 7,
        }
    }
}

fn join_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

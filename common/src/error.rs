use thiserror::Error;

/// Errors raised while turning an input dataset into a table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("line {line_no}: {reason}: {line:?}")]
    MalformedLine {
        /// 1-based line number in the input file.
        line_no: usize,
        line: String,
        reason: String,
    },
    #[error("invalid prefix {token:?}: {reason}")]
    InvalidPrefix { token: String, reason: String },
}

impl TableError {
    pub fn malformed(line_no: usize, line: &str, reason: impl Into<String>) -> Self {
        TableError::MalformedLine {
            line_no,
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("placeholder {placeholder} not found in template")]
    MissingPlaceholder { placeholder: String },
    #[error("placeholder {placeholder} appears {count} times in template, expected once")]
    AmbiguousPlaceholder { placeholder: String, count: usize },
    #[error("placeholder {placeholder} overlaps another substitution")]
    OverlappingPlaceholder { placeholder: String },
}

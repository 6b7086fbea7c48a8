use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// One persisted submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub identifier: String,
    pub total_score: f64,
}

impl Record {
    /// Render as a CSV row without the line terminator.
    ///
    /// `{:?}` keeps a decimal point on whole numbers (`100.0`, not `100`).
    pub fn to_row(&self) -> String {
        format!("{},{:?}", self.identifier, self.total_score)
    }

    /// Parse a `<identifier>,<score>` row.
    pub fn from_row(row: &str) -> Option<Self> {
        let (identifier, score) = row.split_once(',')?;
        let total_score = score.trim().parse().ok()?;
        Some(Self {
            identifier: identifier.to_string(),
            total_score,
        })
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("This DoD ID has already been recorded.")]
    Duplicate { identifier: String },

    #[error("Failed to access score log at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed score log row {line}: '{content}'")]
    Malformed { line: usize, content: String },
}

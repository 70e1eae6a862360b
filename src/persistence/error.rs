//! Persistence errors

/// Failure to decode, validate, or store a saved game
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Text is not valid JSON or does not match the saved-state shape
    #[error("invalid saved state: {0}")]
    Parse(#[from] serde_json::Error),

    /// Board array does not hold exactly nine cells
    #[error("board must have 9 cells, found {len}")]
    BoardLength { len: usize },

    /// Key-value store rejected the operation
    #[error("storage error: {0}")]
    Storage(String),

    /// Browser API failure while exporting or reading a file
    #[error("browser error: {0}")]
    Browser(String),
}

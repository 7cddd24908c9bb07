use thiserror::Error;

/// Rejected form input. The `Display` text is what the user sees in the
/// validation dialog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Fill in the name and the life!")]
    MissingNameOrLife,
    #[error("Life should be a positive integer!")]
    InvalidLife { input: String },
    #[error("Enter an integer (positive or negative)")]
    InvalidAmount { input: String },
    #[error("The clone needs a name")]
    BlankCloneName,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no monster at position {index}")]
    NoSuchMonster { index: usize },
}

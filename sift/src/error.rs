//! Error types for dropdown lifecycle misuse.

/// Errors returned by [`Dropdown`](crate::Dropdown) operations.
///
/// Interaction on a disabled control is not an error; it is silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiftError {
    /// `mount` was called on a control that is already mounted.
    #[error("dropdown {id} is already mounted")]
    AlreadyMounted { id: String },

    /// The operation needs a mounted control.
    #[error("dropdown {id} is not mounted")]
    NotMounted { id: String },

    /// A row index did not address a filtered item.
    #[error("row {index} out of range ({len} filtered items)")]
    RowOutOfRange { index: usize, len: usize },
}

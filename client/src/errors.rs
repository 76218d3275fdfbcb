use thiserror::Error;

/// Failure reported by the remote store client.
///
/// The `Display` text of `Status` keeps the HTTP status visible because list
/// views surface it verbatim to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Error {0}")]
    Status(u16),

    /// Transport or serialization failure outside the HTTP exchange
    #[error("store request failed: {0}")]
    Request(String),
}

/// Errors produced by the client core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// No valid user session is persisted locally
    #[error("authentication required: no valid user session")]
    AuthenticationRequired,

    /// The selected proof file has a disallowed extension
    #[error("unsupported file type \".{extension}\": allowed types are jpg, jpeg and png")]
    UnsupportedFileType { extension: String },

    /// The file input fired a change without an actual file attached
    #[error("no file selected")]
    NoFileSelected,

    /// A proof file upload is still in flight; selections are serialized
    #[error("a file upload is already in progress")]
    UploadInProgress,

    /// The amount field could not be parsed as an integer
    #[error("invalid amount {0:?}")]
    InvalidAmount(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, ClientError>;

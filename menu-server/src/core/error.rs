use thiserror::Error;

/// Process-level server error
///
/// Covers startup and serve failures; request-level errors are
/// [`crate::utils::AppError`].
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Result alias for server startup and shutdown paths
pub type Result<T> = std::result::Result<T, ServerError>;

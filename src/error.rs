//! Error types for column fragment construction

use thiserror::Error;

/// Errors produced while building column fragments.
#[derive(Debug, Error)]
pub enum ScreenError {
	/// Re-serializing the request query string failed.
	#[error("failed to serialize query string: {0}")]
	QuerySerialization(#[from] serde_urlencoded::ser::Error),
}

/// Convenience result alias for screen operations.
pub type Result<T> = std::result::Result<T, ScreenError>;

//! Error types for `visage-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The account exists but has no WebID link. Surfaced to the caller.
  #[error("no WebID is linked to account {0}")]
  MissingWebId(String),

  /// Shape/format violations in a candidate profile record. Every violation
  /// is collected; validation never stops at the first error.
  #[error("invalid profile: {}", .0.join("; "))]
  Validation(Vec<String>),

  #[error("resource not found: {0}")]
  NotFound(String),

  #[error("malformed photo data URI")]
  InvalidDataUri,

  /// Any pod-store failure other than not-found. Fatal for the request.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

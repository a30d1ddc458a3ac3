//! Error type for `visage-store-mem`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("rdf error: {0}")]
  Rdf(#[from] visage_rdf::Error),

  /// A patch was addressed at a resource that does not exist.
  #[error("patch target not found: {0}")]
  TargetNotFound(String),

  /// A patch deletion did not match any statement in the target resource.
  #[error("patch deletion matches no statement: {0}")]
  MissingDeletion(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

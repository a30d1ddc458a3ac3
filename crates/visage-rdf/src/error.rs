//! Error types for the visage-rdf codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("malformed statement: {0}")]
  MalformedStatement(String),

  #[error("unterminated IRI reference: {0}")]
  UnterminatedIri(String),

  #[error("unterminated literal: {0}")]
  UnterminatedLiteral(String),

  #[error("unexpected end of input")]
  UnexpectedEof,

  #[error("patch document missing InsertDeletePatch declaration")]
  MissingPatchDeclaration,

  #[error("unterminated {0} block in patch document")]
  UnterminatedBlock(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

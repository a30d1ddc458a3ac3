//! The term algebra and statement type — the fundamental units of a profile
//! document.
//!
//! A statement is an immutable subject/predicate/object assertion. Terms are
//! compared structurally; equality between two terms of the same kind and
//! value is what every set-membership and matching operation in the diff and
//! extraction passes rests on.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Term ────────────────────────────────────────────────────────────────────

/// A statement term: a named reference, a literal, or an anonymous node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Term {
  /// A term identified by an absolute IRI.
  Named { iri: String },

  /// A text value, optionally tagged with a language or a datatype IRI.
  /// At most one of `language` / `datatype` is set.
  Literal {
    value:    String,
    language: Option<String>,
    datatype: Option<String>,
  },

  /// A document-scoped identity with no inherent name. The id carries a
  /// single leading generator-prefix character which the codec strips when
  /// rendering `_:` labels.
  Blank { id: String },
}

impl Term {
  pub fn named(iri: impl Into<String>) -> Self {
    Self::Named { iri: iri.into() }
  }

  pub fn literal(value: impl Into<String>) -> Self {
    Self::Literal {
      value:    value.into(),
      language: None,
      datatype: None,
    }
  }

  pub fn lang_literal(value: impl Into<String>, lang: impl Into<String>) -> Self {
    Self::Literal {
      value:    value.into(),
      language: Some(lang.into()),
      datatype: None,
    }
  }

  pub fn typed_literal(
    value: impl Into<String>,
    datatype: impl Into<String>,
  ) -> Self {
    Self::Literal {
      value:    value.into(),
      language: None,
      datatype: Some(datatype.into()),
    }
  }

  pub fn blank(id: impl Into<String>) -> Self {
    Self::Blank { id: id.into() }
  }

  /// Mint an anonymous node with a fresh, collision-free local id.
  /// The leading `b` is the generator prefix; see the codec for how labels
  /// are rendered.
  pub fn fresh_blank() -> Self {
    Self::Blank {
      id: format!("b{}", Uuid::new_v4().simple()),
    }
  }

  pub fn is_named(&self) -> bool { matches!(self, Self::Named { .. }) }

  pub fn is_blank(&self) -> bool { matches!(self, Self::Blank { .. }) }

  /// The IRI of a named reference, `None` for other kinds.
  pub fn as_iri(&self) -> Option<&str> {
    match self {
      Self::Named { iri } => Some(iri),
      _ => None,
    }
  }

  /// The text carried by the term: the IRI, the literal value, or the
  /// anonymous-node id. Used by tolerant read paths that accept either a
  /// named reference or a literal in object position.
  pub fn lexical_value(&self) -> &str {
    match self {
      Self::Named { iri } => iri,
      Self::Literal { value, .. } => value,
      Self::Blank { id } => id,
    }
  }
}

// ─── Statement ───────────────────────────────────────────────────────────────

/// A subject–predicate–object assertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statement {
  pub subject:   Term,
  pub predicate: Term,
  pub object:    Term,
}

impl Statement {
  pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
    Self {
      subject,
      predicate,
      object,
    }
  }

  /// True when the statement's subject is the given term and its predicate
  /// is the given IRI.
  pub fn is_about(&self, subject: &Term, predicate_iri: &str) -> bool {
    &self.subject == subject && self.predicate.as_iri() == Some(predicate_iri)
  }
}

// ─── Patch set ───────────────────────────────────────────────────────────────

/// The output of diff-building: the statements to delete, the statements to
/// insert, and the match conditions (always empty for profile updates).
#[derive(Debug, Clone, Default)]
pub struct PatchSet {
  pub deletions:  Vec<Statement>,
  pub insertions: Vec<Statement>,
  pub conditions: Vec<Statement>,
}

impl PatchSet {
  pub fn is_empty(&self) -> bool {
    self.deletions.is_empty()
      && self.insertions.is_empty()
      && self.conditions.is_empty()
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

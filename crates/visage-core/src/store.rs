//! Collaborator traits consumed by the orchestrator.
//!
//! The traits are implemented by storage backends (e.g. `visage-store-mem`)
//! or adapters over a remote pod. Higher layers depend on these
//! abstractions, not on any concrete backend.
//!
//! All methods return `Send` futures so the traits can be used in
//! multi-threaded async runtimes (e.g. tokio with `axum`).

use std::future::Future;

use serde::{Deserialize, Serialize};

// ─── Lookup result types ─────────────────────────────────────────────────────

/// A WebID linked to an account. The orchestrator always uses the first
/// link returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebIdLink {
  pub web_id: String,
}

/// An email credential attached to an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailCredential {
  pub email: String,
}

// ─── Traits ──────────────────────────────────────────────────────────────────

/// Abstraction over the durable resource store holding profile documents.
///
/// Identifiers are absolute IRIs — for profiles, the WebID with its fragment
/// removed. The store owns all concurrency control; the core awaits calls
/// sequentially and never retries.
pub trait PodStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fetch a resource representation. Returns `None` when the resource does
  /// not exist.
  fn get<'a>(
    &'a self,
    iri: &'a str,
    content_type: &'a str,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + 'a;

  /// Create or replace a resource.
  fn set<'a>(
    &'a self,
    iri: &'a str,
    body: &'a str,
    content_type: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Apply a patch document to an existing resource.
  fn modify<'a>(
    &'a self,
    iri: &'a str,
    patch: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Store an opaque binary resource (e.g. a decoded profile photo).
  fn put_binary<'a>(
    &'a self,
    iri: &'a str,
    bytes: Vec<u8>,
    content_type: &'a str,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}

/// Resolves the WebIDs linked to an account.
pub trait LinkLookup: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn find_links<'a>(
    &'a self,
    account_id: &'a str,
  ) -> impl Future<Output = Result<Vec<WebIdLink>, Self::Error>> + Send + 'a;
}

/// Resolves the email credentials attached to an account. Lookup failures
/// are best-effort: the orchestrator logs and treats them as "no value".
pub trait CredentialLookup: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn find_by_account<'a>(
    &'a self,
    account_id: &'a str,
  ) -> impl Future<Output = Result<Vec<EmailCredential>, Self::Error>> + Send + 'a;
}

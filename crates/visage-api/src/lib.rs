//! JSON profile API for Visage.
//!
//! Exposes an axum [`Router`] backed by any combination of the
//! [`visage_core`] collaborator traits. Auth, TLS, and transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", visage_api::router(handler.clone()))
//! ```

pub mod error;
pub mod handler;
pub mod photo;

use std::sync::Arc;

use axum::{
  Json, Router,
  extract::{Path, State},
  routing::get,
};
use serde_json::Value;
use visage_core::{
  record::ProfileRecord,
  store::{CredentialLookup, LinkLookup, PodStore},
};

pub use error::ApiError;
pub use handler::{ProfileHandler, ProfileView, document_iri};

/// Build a fully-materialised profile router for `handler`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn router<S, L, C>(handler: Arc<ProfileHandler<S, L, C>>) -> Router<()>
where
  S: PodStore + 'static,
  L: LinkLookup + 'static,
  C: CredentialLookup + 'static,
{
  Router::new()
    .route(
      "/accounts/{account_id}/profile",
      get(get_profile::<S, L, C>).put(put_profile::<S, L, C>),
    )
    .with_state(handler)
}

async fn get_profile<S, L, C>(
  State(handler): State<Arc<ProfileHandler<S, L, C>>>,
  Path(account_id): Path<String>,
) -> Result<Json<ProfileView>, ApiError>
where
  S: PodStore + 'static,
  L: LinkLookup + 'static,
  C: CredentialLookup + 'static,
{
  Ok(Json(handler.get_view(&account_id).await?))
}

async fn put_profile<S, L, C>(
  State(handler): State<Arc<ProfileHandler<S, L, C>>>,
  Path(account_id): Path<String>,
  Json(candidate): Json<Value>,
) -> Result<Json<ProfileRecord>, ApiError>
where
  S: PodStore + 'static,
  L: LinkLookup + 'static,
  C: CredentialLookup + 'static,
{
  Ok(Json(handler.update(&account_id, candidate).await?))
}

// ─── Integration tests ────────────────────────────────────────────────────────

//! The profile orchestrator — the only component with side effects.
//!
//! Reads the existing profile document (or treats it as absent), validates
//! input, delegates to the extractor / diff builder / patch serialiser, and
//! issues the store calls. Collaborators are explicit dependencies; nothing
//! here reaches for process-global state.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use visage_core::{
  Error, Result,
  record::ProfileRecord,
  store::{CredentialLookup, LinkLookup, PodStore},
  term::{Statement, Term},
  vocab,
};
use visage_profile::{build_diff, extract_profile, validate};
use visage_rdf::{parse_graph, render_graph, render_patch};

use crate::photo::{decode_data_uri, is_data_uri, photo_iri};

const TEXT_TURTLE: &str = "text/turtle";

// ─── View type ───────────────────────────────────────────────────────────────

/// The read-path result: the resolved WebID plus the extracted record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
  pub web_id:  String,
  pub profile: ProfileRecord,
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// The profile document IRI: the WebID with its fragment removed.
pub fn document_iri(web_id: &str) -> &str {
  web_id.split_once('#').map(|(doc, _)| doc).unwrap_or(web_id)
}

fn store_err<E>(e: E) -> Error
where
  E: std::error::Error + Send + Sync + 'static,
{
  Error::Store(Box::new(e))
}

// ─── Orchestrator ────────────────────────────────────────────────────────────

/// Profile read/write orchestration over a pod store, a WebID-link lookup,
/// and a best-effort credential lookup.
pub struct ProfileHandler<S, L, C> {
  store:       S,
  links:       L,
  credentials: C,
}

impl<S, L, C> ProfileHandler<S, L, C>
where
  S: PodStore,
  L: LinkLookup,
  C: CredentialLookup,
{
  pub fn new(store: S, links: L, credentials: C) -> Self {
    Self {
      store,
      links,
      credentials,
    }
  }

  /// Resolve the account's WebID; the first link wins.
  async fn web_id_for(&self, account_id: &str) -> Result<String> {
    let links = self
      .links
      .find_links(account_id)
      .await
      .map_err(store_err)?;
    links
      .first()
      .map(|link| link.web_id.clone())
      .ok_or_else(|| Error::MissingWebId(account_id.to_string()))
  }

  /// The account's email, if any. Lookup failures are logged and treated as
  /// "value unavailable" — never surfaced as a request failure.
  async fn email_for(&self, account_id: &str) -> Option<String> {
    match self.credentials.find_by_account(account_id).await {
      Ok(credentials) => credentials.into_iter().next().map(|c| c.email),
      Err(e) => {
        tracing::warn!(account_id, error = %e, "credential lookup failed");
        None
      }
    }
  }

  /// Read path: resolve the WebID, extract the profile document, and apply
  /// the account email override. An absent document yields an empty record.
  pub async fn get_view(&self, account_id: &str) -> Result<ProfileView> {
    let web_id = self.web_id_for(account_id).await?;
    let email = self.email_for(account_id).await;

    let document = document_iri(&web_id);
    let body = self
      .store
      .get(document, TEXT_TURTLE)
      .await
      .map_err(store_err)?;

    let mut profile = match body {
      Some(text) => {
        let statements = parse_graph(&text).map_err(store_err)?;
        extract_profile(&statements, &web_id)
      }
      None => ProfileRecord::default(),
    };

    // The account-supplied email always wins over document-stored email.
    if email.is_some() {
      profile.email = email;
    }

    Ok(ProfileView { web_id, profile })
  }

  /// Decode an inline photo, store the bytes under the pod root, and return
  /// the storage IRI that replaces the data URI in the record.
  async fn store_photo(&self, web_id: &str, data_uri: &str) -> Result<String> {
    let image = decode_data_uri(data_uri)?;
    let iri = photo_iri(web_id, image.extension)?;
    self
      .store
      .put_binary(&iri, image.bytes, image.content_type)
      .await
      .map_err(store_err)?;
    Ok(iri)
  }

  /// Write path: validate, resolve the photo, merge the account email, then
  /// patch the existing document or create a fresh one.
  ///
  /// Validation failures abort before any mutation. A failed document write
  /// after a successful photo upload leaves the photo in place; image
  /// storage is not rolled back.
  pub async fn update(
    &self,
    account_id: &str,
    candidate: Value,
  ) -> Result<ProfileRecord> {
    let web_id = self.web_id_for(account_id).await?;

    let validation = validate(&candidate);
    if !validation.valid {
      return Err(Error::Validation(validation.errors));
    }
    let mut record: ProfileRecord = serde_json::from_value(candidate)?;

    if let Some(photo) = record.photo.as_deref()
      && is_data_uri(photo)
    {
      let stored = self.store_photo(&web_id, photo).await?;
      record.photo = Some(stored);
    }

    if let Some(email) = self.email_for(account_id).await {
      record.email = Some(email);
    }

    let document = document_iri(&web_id);
    let existing = self
      .store
      .get(document, TEXT_TURTLE)
      .await
      .map_err(store_err)?;

    match existing {
      Some(text) => {
        let statements = parse_graph(&text).map_err(store_err)?;
        let patch = build_diff(&web_id, &record, &statements);
        self
          .store
          .modify(document, &render_patch(&patch))
          .await
          .map_err(store_err)?;
      }
      None => {
        // A new document is seeded with a type assertion plus the insertion
        // set of a diff against the empty statement collection.
        let mut statements = vec![Statement::new(
          Term::named(&web_id),
          Term::named(vocab::RDF_TYPE),
          Term::named(vocab::FOAF_PERSON),
        )];
        statements.extend(build_diff(&web_id, &record, &[]).insertions);
        self
          .store
          .set(document, &render_graph(&statements), TEXT_TURTLE)
          .await
          .map_err(store_err)?;
      }
    }

    Ok(record)
  }
}

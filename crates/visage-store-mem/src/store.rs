//! [`MemoryPod`] — the in-memory implementation of the collaborator traits.

use std::{
  collections::HashMap,
  future::Future,
  sync::{Arc, RwLock},
};

use visage_core::store::{
  CredentialLookup, EmailCredential, LinkLookup, PodStore, WebIdLink,
};
use visage_rdf::{parse_graph, parse_patch, render_graph, render_statement};

use crate::{Error, Result};

// ─── Inner state ─────────────────────────────────────────────────────────────

struct TextResource {
  body:         String,
  content_type: String,
}

struct BinaryResource {
  bytes:        Vec<u8>,
  content_type: String,
}

#[derive(Default)]
struct Inner {
  resources:   HashMap<String, TextResource>,
  binaries:    HashMap<String, BinaryResource>,
  links:       HashMap<String, Vec<WebIdLink>>,
  credentials: HashMap<String, Vec<EmailCredential>>,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// An in-process pod. Cloning is cheap — the inner state is
/// reference-counted and shared.
#[derive(Clone, Default)]
pub struct MemoryPod {
  inner: Arc<RwLock<Inner>>,
}

impl MemoryPod {
  pub fn new() -> Self { Self::default() }

  /// Link a WebID to an account. Later links are appended; lookups use the
  /// first entry.
  pub fn link_web_id(&self, account_id: &str, web_id: &str) {
    self
      .inner
      .write()
      .expect("lock poisoned")
      .links
      .entry(account_id.to_string())
      .or_default()
      .push(WebIdLink {
        web_id: web_id.to_string(),
      });
  }

  /// Attach an email credential to an account.
  pub fn add_credential(&self, account_id: &str, email: &str) {
    self
      .inner
      .write()
      .expect("lock poisoned")
      .credentials
      .entry(account_id.to_string())
      .or_default()
      .push(EmailCredential {
        email: email.to_string(),
      });
  }

  /// The stored representation of a text resource, if any. Test hook.
  pub fn resource_body(&self, iri: &str) -> Option<String> {
    self
      .inner
      .read()
      .expect("lock poisoned")
      .resources
      .get(iri)
      .map(|r| r.body.clone())
  }

  /// The content type of a stored binary resource, if any. Test hook.
  pub fn binary_content_type(&self, iri: &str) -> Option<String> {
    self
      .inner
      .read()
      .expect("lock poisoned")
      .binaries
      .get(iri)
      .map(|b| b.content_type.clone())
  }

  /// The bytes of a stored binary resource, if any. Test hook.
  pub fn binary_bytes(&self, iri: &str) -> Option<Vec<u8>> {
    self
      .inner
      .read()
      .expect("lock poisoned")
      .binaries
      .get(iri)
      .map(|b| b.bytes.clone())
  }

  fn apply_patch(&self, iri: &str, patch_text: &str) -> Result<()> {
    let patch = parse_patch(patch_text)?;

    let mut inner = self.inner.write().expect("lock poisoned");
    let resource = inner
      .resources
      .get(iri)
      .ok_or_else(|| Error::TargetNotFound(iri.to_string()))?;

    let mut statements = parse_graph(&resource.body)?;
    for deletion in &patch.deletions {
      let position = statements
        .iter()
        .position(|st| st == deletion)
        .ok_or_else(|| Error::MissingDeletion(render_statement(deletion)))?;
      statements.remove(position);
    }
    statements.extend(patch.insertions.iter().cloned());

    let content_type = resource.content_type.clone();
    inner.resources.insert(
      iri.to_string(),
      TextResource {
        body: render_graph(&statements),
        content_type,
      },
    );
    Ok(())
  }
}

// ─── Trait implementations ───────────────────────────────────────────────────

impl PodStore for MemoryPod {
  type Error = Error;

  fn get<'a>(
    &'a self,
    iri: &'a str,
    _content_type: &'a str,
  ) -> impl Future<Output = Result<Option<String>>> + Send + 'a {
    async move {
      Ok(
        self
          .inner
          .read()
          .expect("lock poisoned")
          .resources
          .get(iri)
          .map(|r| r.body.clone()),
      )
    }
  }

  fn set<'a>(
    &'a self,
    iri: &'a str,
    body: &'a str,
    content_type: &'a str,
  ) -> impl Future<Output = Result<()>> + Send + 'a {
    async move {
      self.inner.write().expect("lock poisoned").resources.insert(
        iri.to_string(),
        TextResource {
          body:         body.to_string(),
          content_type: content_type.to_string(),
        },
      );
      Ok(())
    }
  }

  fn modify<'a>(
    &'a self,
    iri: &'a str,
    patch: &'a str,
  ) -> impl Future<Output = Result<()>> + Send + 'a {
    async move { self.apply_patch(iri, patch) }
  }

  fn put_binary<'a>(
    &'a self,
    iri: &'a str,
    bytes: Vec<u8>,
    content_type: &'a str,
  ) -> impl Future<Output = Result<()>> + Send + 'a {
    async move {
      self.inner.write().expect("lock poisoned").binaries.insert(
        iri.to_string(),
        BinaryResource {
          bytes,
          content_type: content_type.to_string(),
        },
      );
      Ok(())
    }
  }
}

impl LinkLookup for MemoryPod {
  type Error = Error;

  fn find_links<'a>(
    &'a self,
    account_id: &'a str,
  ) -> impl Future<Output = Result<Vec<WebIdLink>>> + Send + 'a {
    async move {
      Ok(
        self
          .inner
          .read()
          .expect("lock poisoned")
          .links
          .get(account_id)
          .cloned()
          .unwrap_or_default(),
      )
    }
  }
}

impl CredentialLookup for MemoryPod {
  type Error = Error;

  fn find_by_account<'a>(
    &'a self,
    account_id: &'a str,
  ) -> impl Future<Output = Result<Vec<EmailCredential>>> + Send + 'a {
    async move {
      Ok(
        self
          .inner
          .read()
          .expect("lock poisoned")
          .credentials
          .get(account_id)
          .cloned()
          .unwrap_or_default(),
      )
    }
  }
}

//! Integration-style tests for [`MemoryPod`].

use visage_core::{
  store::{CredentialLookup, LinkLookup, PodStore},
  term::{PatchSet, Statement, Term},
};
use visage_rdf::{parse_graph, render_graph, render_patch};

use crate::{Error, MemoryPod};

const DOC: &str = "https://alice.example/profile/card";

fn name_statement(value: &str) -> Statement {
  Statement::new(
    Term::named("https://alice.example/profile/card#me"),
    Term::named("http://xmlns.com/foaf/0.1/name"),
    Term::literal(value),
  )
}

#[tokio::test]
async fn get_absent_resource_returns_none() {
  let pod = MemoryPod::new();
  let body = pod.get(DOC, "text/turtle").await.unwrap();
  assert!(body.is_none());
}

#[tokio::test]
async fn set_then_get_round_trips() {
  let pod = MemoryPod::new();
  let body = render_graph(&[name_statement("Alice")]);
  pod.set(DOC, &body, "text/turtle").await.unwrap();
  let fetched = pod.get(DOC, "text/turtle").await.unwrap().unwrap();
  assert_eq!(fetched, body);
}

#[tokio::test]
async fn modify_applies_deletions_and_insertions() {
  let pod = MemoryPod::new();
  let body = render_graph(&[name_statement("Alice")]);
  pod.set(DOC, &body, "text/turtle").await.unwrap();

  let patch = PatchSet {
    deletions:  vec![name_statement("Alice")],
    insertions: vec![name_statement("Bob")],
    conditions: vec![],
  };
  pod.modify(DOC, &render_patch(&patch)).await.unwrap();

  let fetched = pod.get(DOC, "text/turtle").await.unwrap().unwrap();
  let statements = parse_graph(&fetched).unwrap();
  assert_eq!(statements, vec![name_statement("Bob")]);
}

#[tokio::test]
async fn modify_with_unmatched_deletion_fails() {
  let pod = MemoryPod::new();
  let body = render_graph(&[name_statement("Alice")]);
  pod.set(DOC, &body, "text/turtle").await.unwrap();

  let patch = PatchSet {
    deletions: vec![name_statement("Nobody")],
    ..Default::default()
  };
  let result = pod.modify(DOC, &render_patch(&patch)).await;
  assert!(matches!(result, Err(Error::MissingDeletion(_))));

  // The resource is untouched.
  let fetched = pod.get(DOC, "text/turtle").await.unwrap().unwrap();
  assert_eq!(parse_graph(&fetched).unwrap(), vec![name_statement("Alice")]);
}

#[tokio::test]
async fn modify_absent_resource_fails() {
  let pod = MemoryPod::new();
  let patch = PatchSet::default();
  let result = pod.modify(DOC, &render_patch(&patch)).await;
  assert!(matches!(result, Err(Error::TargetNotFound(_))));
}

#[tokio::test]
async fn put_binary_records_content_type() {
  let pod = MemoryPod::new();
  pod
    .put_binary(
      "https://alice.example/photos/x.png",
      vec![0x89, b'P', b'N', b'G'],
      "image/png",
    )
    .await
    .unwrap();
  assert_eq!(
    pod
      .binary_content_type("https://alice.example/photos/x.png")
      .as_deref(),
    Some("image/png")
  );
  assert_eq!(
    pod.binary_bytes("https://alice.example/photos/x.png"),
    Some(vec![0x89, b'P', b'N', b'G'])
  );
}

#[tokio::test]
async fn first_linked_web_id_wins() {
  let pod = MemoryPod::new();
  pod.link_web_id("acct-1", "https://alice.example/card#me");
  pod.link_web_id("acct-1", "https://other.example/card#me");
  let links = pod.find_links("acct-1").await.unwrap();
  assert_eq!(links[0].web_id, "https://alice.example/card#me");
}

#[tokio::test]
async fn credentials_lookup_is_per_account() {
  let pod = MemoryPod::new();
  pod.add_credential("acct-1", "alice@example.org");
  let creds = pod.find_by_account("acct-1").await.unwrap();
  assert_eq!(creds.len(), 1);
  assert_eq!(creds[0].email, "alice@example.org");
  assert!(pod.find_by_account("acct-2").await.unwrap().is_empty());
}

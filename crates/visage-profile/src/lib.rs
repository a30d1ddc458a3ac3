//! Profile semantics for Visage: validation, extraction, and diff building.
//!
//! Pure synchronous; no HTTP or storage dependencies. The orchestrator in
//! `visage-api` wires these functions to the pod store.
//!
//! # Quick start
//!
//! ```no_run
//! use visage_profile::{build_diff, extract_profile};
//!
//! let statements = vec![];
//! let record = extract_profile(&statements, "https://alice.example/card#me");
//! let patch = build_diff("https://alice.example/card#me", &record, &statements);
//! assert!(patch.insertions.is_empty());
//! ```

pub mod diff;
pub mod extract;
pub mod validator;

pub use diff::build_diff;
pub use extract::extract_profile;
pub use validator::{Validation, validate};

// ─── Round-trip and idempotence properties ───────────────────────────────────

#[cfg(test)]
mod property_tests {
  use visage_core::{
    record::{AccountEntry, OrganizationEntry, ProfileRecord, RoleType},
    term::Statement,
    vocab,
  };

  use super::*;

  const ME: &str = "https://alice.example/profile/card#me";

  fn full_record() -> ProfileRecord {
    ProfileRecord {
      profile_background_color: Some("aabbcc".to_string()),
      profile_highlight_color: Some("112233".to_string()),
      name: Some("Alice Smith".to_string()),
      nickname: Some("ally".to_string()),
      phone: Some("+1 555 0100".to_string()),
      homepage: Some("https://alice.example/".to_string()),
      email: Some("alice@example.org".to_string()),
      preferred_subject_pronoun: Some("she".to_string()),
      preferred_object_pronoun: Some("her".to_string()),
      preferred_relative_pronoun: Some("hers".to_string()),
      photo: Some("https://alice.example/photos/me.png".to_string()),
      knows: vec![
        "https://bob.example/card#me".to_string(),
        "https://carol.example/card#me".to_string(),
      ],
      knows_language: vec!["https://lang.example/en".to_string()],
      skills: vec!["https://skill.example/rust".to_string()],
      accounts: vec![AccountEntry {
        account_type: Some("https://example.org/ns#MastodonAccount".to_string()),
        account_name: Some("@alice@example.social".to_string()),
        account_service_homepage: Some("https://example.social/".to_string()),
        icon: Some("https://example.social/favicon.png".to_string()),
        label: Some("Mastodon".to_string()),
      }],
      organizations: vec![
        OrganizationEntry {
          organization: Some("http://org.example/".to_string()),
          role: Some("Engineer".to_string()),
          start_date: Some("2020-03-01".to_string()),
          description: Some("Distributed systems".to_string()),
          role_type: Some(RoleType::CurrentRole),
          ..Default::default()
        },
        OrganizationEntry {
          organization_name: Some("Acme Corp".to_string()),
          role: Some("Advisor".to_string()),
          role_type: Some(RoleType::PastRole),
          ..Default::default()
        },
      ],
    }
  }

  /// Apply a patch to a statement set the way a store would: remove the
  /// deletions, append the insertions.
  fn apply(
    statements: &[Statement],
    patch: &visage_core::term::PatchSet,
  ) -> Vec<Statement> {
    let mut result: Vec<Statement> = statements
      .iter()
      .filter(|st| !patch.deletions.contains(st))
      .cloned()
      .collect();
    result.extend(patch.insertions.iter().cloned());
    result
  }

  #[test]
  fn diff_then_extract_round_trips() {
    let record = full_record();
    let patch = build_diff(ME, &record, &[]);
    assert!(patch.deletions.is_empty());

    let extracted = extract_profile(&patch.insertions, ME);

    assert_eq!(extracted.profile_background_color, record.profile_background_color);
    assert_eq!(extracted.profile_highlight_color, record.profile_highlight_color);
    assert_eq!(extracted.name, record.name);
    assert_eq!(extracted.nickname, record.nickname);
    assert_eq!(extracted.phone, record.phone);
    assert_eq!(extracted.homepage, record.homepage);
    assert_eq!(extracted.email, record.email);
    assert_eq!(extracted.preferred_subject_pronoun, record.preferred_subject_pronoun);
    assert_eq!(extracted.preferred_object_pronoun, record.preferred_object_pronoun);
    assert_eq!(extracted.preferred_relative_pronoun, record.preferred_relative_pronoun);
    assert_eq!(extracted.photo, record.photo);
    assert_eq!(extracted.knows, record.knows);
    assert_eq!(extracted.knows_language, record.knows_language);
    assert_eq!(extracted.skills, record.skills);

    // Accounts and organizations compare as sets: entry order is not part of
    // the contract.
    assert_eq!(extracted.accounts.len(), record.accounts.len());
    for entry in &record.accounts {
      assert!(extracted.accounts.contains(entry), "missing {entry:?}");
    }
    assert_eq!(extracted.organizations.len(), record.organizations.len());
    for entry in &record.organizations {
      assert!(extracted.organizations.contains(entry), "missing {entry:?}");
    }
  }

  #[test]
  fn second_diff_is_a_fixpoint_for_scalar_and_sequence_fields() {
    let record = full_record();
    let first = build_diff(ME, &record, &[]);
    let state = apply(&[], &first);

    let second = build_diff(ME, &record, &state);
    let state_again = apply(&state, &second);

    // For every managed scalar/sequence predicate the second diff's
    // insertions exactly cancel its deletions.
    for predicate in vocab::MANAGED_SINGLE.iter().chain(
      [vocab::FOAF_KNOWS, vocab::SCHEMA_KNOWS_LANGUAGE, vocab::SCHEMA_SKILLS]
        .iter(),
    ) {
      let deleted: Vec<_> = second
        .deletions
        .iter()
        .filter(|st| st.predicate.as_iri() == Some(*predicate))
        .collect();
      let inserted: Vec<_> = second
        .insertions
        .iter()
        .filter(|st| st.predicate.as_iri() == Some(*predicate))
        .collect();
      assert_eq!(deleted, inserted, "net change for {predicate}");
    }

    // And the document converges: extraction from both states agrees.
    assert_eq!(extract_profile(&state, ME), extract_profile(&state_again, ME));
  }
}

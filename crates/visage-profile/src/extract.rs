//! Profile extraction: an unordered statement collection → a structured
//! profile record.
//!
//! Extraction never signals errors; malformed or partial statements simply
//! fail to populate the corresponding field. Where a single-valued predicate
//! appears more than once, the first statement encountered wins, which makes
//! extraction deterministic for a given statement order.

use visage_core::{
  record::{AccountEntry, OrganizationEntry, ProfileRecord, RoleType},
  term::{Statement, Term},
  vocab,
};

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// First-seen-wins assignment for single-valued fields.
fn set_once(slot: &mut Option<String>, object: &Term) {
  if slot.is_none() {
    *slot = Some(object.lexical_value().to_string());
  }
}

/// Mailbox objects are `mailto:` URIs; expose the bare address.
fn strip_mailto(value: &str) -> String {
  value
    .strip_prefix("mailto:")
    .unwrap_or(value)
    .to_string()
}

/// All statements whose subject is `node`, in iteration order.
fn statements_about<'a>(
  statements: &'a [Statement],
  node: &'a Term,
) -> impl Iterator<Item = &'a Statement> {
  statements.iter().filter(move |st| &st.subject == node)
}

// ─── Account reconstruction ──────────────────────────────────────────────────

fn extract_account(statements: &[Statement], node: &Term) -> AccountEntry {
  let mut entry = AccountEntry::default();
  for st in statements_about(statements, node) {
    match st.predicate.as_iri() {
      Some(vocab::RDF_TYPE) => {
        if entry.account_type.is_none() {
          entry.account_type = st.object.as_iri().map(str::to_string);
        }
      }
      Some(vocab::FOAF_ACCOUNT_NAME) => set_once(&mut entry.account_name, &st.object),
      Some(vocab::FOAF_ACCOUNT_SERVICE_HOMEPAGE) => {
        set_once(&mut entry.account_service_homepage, &st.object)
      }
      Some(vocab::SCHEMA_IMAGE) => set_once(&mut entry.icon, &st.object),
      Some(vocab::RDFS_LABEL) => set_once(&mut entry.label, &st.object),
      _ => {}
    }
  }
  entry
}

// ─── Role reconstruction ─────────────────────────────────────────────────────

fn extract_role(statements: &[Statement], role_node: &Term) -> OrganizationEntry {
  let mut entry = OrganizationEntry::default();
  for st in statements_about(statements, role_node) {
    match st.predicate.as_iri() {
      Some(vocab::ORG_ORGANIZATION) => match &st.object {
        Term::Named { iri } => {
          if entry.organization.is_none() {
            entry.organization = Some(iri.clone());
          }
        }
        // An anonymous organization node: resolve its name statement.
        blank @ Term::Blank { .. } => {
          if entry.organization_name.is_none() {
            entry.organization_name = statements_about(statements, blank)
              .find(|st| st.predicate.as_iri() == Some(vocab::SCHEMA_NAME))
              .map(|st| st.object.lexical_value().to_string());
          }
        }
        Term::Literal { .. } => {}
      },
      Some(vocab::VCARD_ROLE) => set_once(&mut entry.role, &st.object),
      Some(vocab::SCHEMA_START_DATE) => set_once(&mut entry.start_date, &st.object),
      Some(vocab::SCHEMA_END_DATE) => set_once(&mut entry.end_date, &st.object),
      Some(vocab::SCHEMA_DESCRIPTION) => {
        set_once(&mut entry.description, &st.object)
      }
      Some(vocab::RDF_TYPE) => {
        if entry.role_type.is_none() {
          entry.role_type = RoleType::from_type_iri(st.object.lexical_value());
        }
      }
      _ => {}
    }
  }
  entry
}

// ─── Entry point ─────────────────────────────────────────────────────────────

/// Reconstruct a profile record from the full statement collection of a
/// profile document.
pub fn extract_profile(statements: &[Statement], web_id: &str) -> ProfileRecord {
  let subject = Term::named(web_id);
  let mut record = ProfileRecord::default();
  let mut account_nodes: Vec<Term> = Vec::new();

  // Pass 1: direct statements about the subject.
  for st in statements_about(statements, &subject) {
    let Some(predicate) = st.predicate.as_iri() else {
      continue;
    };
    match predicate {
      vocab::UI_BACKGROUND_COLOR => {
        set_once(&mut record.profile_background_color, &st.object)
      }
      vocab::UI_HIGHLIGHT_COLOR => {
        set_once(&mut record.profile_highlight_color, &st.object)
      }
      vocab::FOAF_NAME => set_once(&mut record.name, &st.object),
      vocab::FOAF_NICK => set_once(&mut record.nickname, &st.object),
      vocab::FOAF_PHONE => set_once(&mut record.phone, &st.object),
      vocab::FOAF_HOMEPAGE => set_once(&mut record.homepage, &st.object),
      vocab::VCARD_HAS_PHOTO => set_once(&mut record.photo, &st.object),
      vocab::SOLID_SUBJECT_PRONOUN => {
        set_once(&mut record.preferred_subject_pronoun, &st.object)
      }
      vocab::SOLID_OBJECT_PRONOUN => {
        set_once(&mut record.preferred_object_pronoun, &st.object)
      }
      vocab::SOLID_RELATIVE_PRONOUN => {
        set_once(&mut record.preferred_relative_pronoun, &st.object)
      }
      vocab::FOAF_MBOX => {
        if record.email.is_none() {
          record.email = Some(strip_mailto(st.object.lexical_value()));
        }
      }
      vocab::FOAF_KNOWS => {
        record.knows.push(st.object.lexical_value().to_string())
      }
      vocab::SCHEMA_KNOWS_LANGUAGE => {
        record.knows_language.push(st.object.lexical_value().to_string())
      }
      vocab::SCHEMA_SKILLS => {
        record.skills.push(st.object.lexical_value().to_string())
      }
      vocab::FOAF_ACCOUNT => account_nodes.push(st.object.clone()),
      _ => {}
    }
  }

  record.accounts = account_nodes
    .iter()
    .map(|node| extract_account(statements, node))
    .filter(|entry| *entry != AccountEntry::default())
    .collect();

  // Pass 2: reified organization memberships. The role-node identifier set
  // is the set of statements asserting membership of the subject.
  let mut role_nodes: Vec<&Term> = Vec::new();
  for st in statements {
    if st.predicate.as_iri() == Some(vocab::ORG_MEMBER)
      && st.object == subject
      && !role_nodes.contains(&&st.subject)
    {
      role_nodes.push(&st.subject);
    }
  }

  record.organizations = role_nodes
    .into_iter()
    .map(|node| extract_role(statements, node))
    .filter(OrganizationEntry::is_substantive)
    .collect();

  record
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  const ME: &str = "https://alice.example/profile/card#me";

  fn st(subject: Term, predicate: &str, object: Term) -> Statement {
    Statement::new(subject, Term::named(predicate), object)
  }

  fn me() -> Term { Term::named(ME) }

  #[test]
  fn scalar_fields_are_populated() {
    let statements = vec![
      st(me(), vocab::FOAF_NAME, Term::literal("Alice")),
      st(me(), vocab::FOAF_NICK, Term::literal("ally")),
      st(me(), vocab::UI_BACKGROUND_COLOR, Term::literal("aabbcc")),
      st(me(), vocab::SOLID_SUBJECT_PRONOUN, Term::literal("she")),
    ];
    let record = extract_profile(&statements, ME);
    assert_eq!(record.name.as_deref(), Some("Alice"));
    assert_eq!(record.nickname.as_deref(), Some("ally"));
    assert_eq!(record.profile_background_color.as_deref(), Some("aabbcc"));
    assert_eq!(record.preferred_subject_pronoun.as_deref(), Some("she"));
    assert!(record.email.is_none());
  }

  #[test]
  fn statements_about_other_subjects_are_ignored() {
    let statements = vec![st(
      Term::named("https://bob.example/card#me"),
      vocab::FOAF_NAME,
      Term::literal("Bob"),
    )];
    let record = extract_profile(&statements, ME);
    assert!(record.name.is_none());
  }

  #[test]
  fn email_strips_mailto_prefix() {
    let statements = vec![st(
      me(),
      vocab::FOAF_MBOX,
      Term::named("mailto:alice@example.org"),
    )];
    let record = extract_profile(&statements, ME);
    assert_eq!(record.email.as_deref(), Some("alice@example.org"));
  }

  #[test]
  fn bare_mailbox_value_is_kept_as_is() {
    let statements =
      vec![st(me(), vocab::FOAF_MBOX, Term::literal("alice@example.org"))];
    let record = extract_profile(&statements, ME);
    assert_eq!(record.email.as_deref(), Some("alice@example.org"));
  }

  #[test]
  fn duplicate_single_valued_predicate_first_seen_wins() {
    let statements = vec![
      st(me(), vocab::FOAF_NAME, Term::literal("First")),
      st(me(), vocab::FOAF_NAME, Term::literal("Second")),
    ];
    let record = extract_profile(&statements, ME);
    assert_eq!(record.name.as_deref(), Some("First"));
  }

  #[test]
  fn sequences_preserve_iteration_order() {
    let statements = vec![
      st(me(), vocab::FOAF_KNOWS, Term::named("https://b.example/#me")),
      st(me(), vocab::FOAF_KNOWS, Term::named("https://a.example/#me")),
      st(me(), vocab::SCHEMA_SKILLS, Term::named("https://skill.example/rust")),
    ];
    let record = extract_profile(&statements, ME);
    assert_eq!(
      record.knows,
      vec!["https://b.example/#me", "https://a.example/#me"]
    );
    assert_eq!(record.skills, vec!["https://skill.example/rust"]);
  }

  #[test]
  fn account_nodes_are_reconstructed() {
    let account = Term::blank("bacct1");
    let statements = vec![
      st(me(), vocab::FOAF_ACCOUNT, account.clone()),
      st(
        account.clone(),
        vocab::RDF_TYPE,
        Term::named("https://example.org/ns#MastodonAccount"),
      ),
      st(
        account.clone(),
        vocab::FOAF_ACCOUNT_NAME,
        Term::literal("@alice@example.social"),
      ),
      st(
        account.clone(),
        vocab::RDFS_LABEL,
        Term::literal("Mastodon"),
      ),
    ];
    let record = extract_profile(&statements, ME);
    assert_eq!(record.accounts.len(), 1);
    let entry = &record.accounts[0];
    assert_eq!(
      entry.account_type.as_deref(),
      Some("https://example.org/ns#MastodonAccount")
    );
    assert_eq!(entry.account_name.as_deref(), Some("@alice@example.social"));
    assert_eq!(entry.label.as_deref(), Some("Mastodon"));
    assert!(entry.icon.is_none());
  }

  #[test]
  fn role_node_with_named_organization() {
    let role = Term::blank("br1");
    let statements = vec![
      st(role.clone(), vocab::ORG_MEMBER, me()),
      st(
        role.clone(),
        vocab::ORG_ORGANIZATION,
        Term::named("http://org.example/"),
      ),
      st(role.clone(), vocab::VCARD_ROLE, Term::literal("Engineer")),
    ];
    let record = extract_profile(&statements, ME);
    assert_eq!(record.organizations.len(), 1);
    let entry = &record.organizations[0];
    assert_eq!(entry.organization.as_deref(), Some("http://org.example/"));
    assert_eq!(entry.role.as_deref(), Some("Engineer"));
    assert!(entry.organization_name.is_none());
  }

  #[test]
  fn anonymous_organization_resolves_name() {
    let role = Term::blank("br1");
    let org = Term::blank("borg1");
    let statements = vec![
      st(role.clone(), vocab::ORG_MEMBER, me()),
      st(role.clone(), vocab::ORG_ORGANIZATION, org.clone()),
      st(org.clone(), vocab::SCHEMA_NAME, Term::literal("Acme Corp")),
      st(
        role.clone(),
        vocab::RDF_TYPE,
        Term::named(vocab::SOLID_PAST_ROLE),
      ),
      st(role.clone(), vocab::SCHEMA_START_DATE, Term::literal("2019-01-01")),
    ];
    let record = extract_profile(&statements, ME);
    assert_eq!(record.organizations.len(), 1);
    let entry = &record.organizations[0];
    assert!(entry.organization.is_none());
    assert_eq!(entry.organization_name.as_deref(), Some("Acme Corp"));
    assert_eq!(entry.role_type, Some(RoleType::PastRole));
    assert_eq!(entry.start_date.as_deref(), Some("2019-01-01"));
  }

  #[test]
  fn empty_role_nodes_are_dropped() {
    let role = Term::blank("br1");
    let statements = vec![
      st(role.clone(), vocab::ORG_MEMBER, me()),
      // Dates alone do not make a role substantive.
      st(role.clone(), vocab::SCHEMA_END_DATE, Term::literal("2020-01-01")),
    ];
    let record = extract_profile(&statements, ME);
    assert!(record.organizations.is_empty());
  }

  #[test]
  fn role_type_tolerates_foreign_namespaces() {
    let role = Term::blank("br1");
    let statements = vec![
      st(role.clone(), vocab::ORG_MEMBER, me()),
      st(role.clone(), vocab::VCARD_ROLE, Term::literal("Advisor")),
      st(
        role.clone(),
        vocab::RDF_TYPE,
        Term::named("http://example.org/vocab#FutureRole"),
      ),
    ];
    let record = extract_profile(&statements, ME);
    assert_eq!(record.organizations[0].role_type, Some(RoleType::FutureRole));
  }
}

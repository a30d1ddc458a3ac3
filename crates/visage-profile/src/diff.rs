//! Profile diff building: a target record against the document's current
//! statements → the deletion and insertion sets that reach the target state.
//!
//! The strategy is replace-not-merge: for every managed predicate, all
//! existing statements on the subject are deleted unconditionally, and the
//! target's values (when present and non-empty) are inserted fresh. Reified
//! sub-entities (accounts, roles) are replaced wholesale with new anonymous
//! nodes; they are never matched or updated incrementally.

use chrono::NaiveDate;
use url::Url;
use visage_core::{
  record::{AccountEntry, OrganizationEntry, ProfileRecord},
  term::{PatchSet, Statement, Term},
  vocab,
};

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn is_absolute_uri(s: &str) -> bool { Url::parse(s).is_ok() }

/// Collect every existing statement on `subject` + `predicate` into the
/// deletion set.
fn delete_existing(
  patch: &mut PatchSet,
  existing: &[Statement],
  subject: &Term,
  predicate: &str,
) {
  patch
    .deletions
    .extend(existing.iter().filter(|st| st.is_about(subject, predicate)).cloned());
}

fn insert(patch: &mut PatchSet, subject: Term, predicate: &str, object: Term) {
  patch
    .insertions
    .push(Statement::new(subject, Term::named(predicate), object));
}

/// Replace a single-valued literal field: delete all existing statements,
/// insert the target value when supplied and non-empty.
fn replace_scalar(
  patch: &mut PatchSet,
  existing: &[Statement],
  subject: &Term,
  predicate: &str,
  target: Option<&str>,
) {
  delete_existing(patch, existing, subject, predicate);
  if let Some(value) = target
    && !value.is_empty()
  {
    insert(patch, subject.clone(), predicate, Term::literal(value));
  }
}

/// Replace a link-valued sequence field: delete all existing statements,
/// insert one named reference per non-empty entry, preserving order.
fn replace_links(
  patch: &mut PatchSet,
  existing: &[Statement],
  subject: &Term,
  predicate: &str,
  targets: &[String],
) {
  delete_existing(patch, existing, subject, predicate);
  for entry in targets {
    if entry.is_empty() {
      continue;
    }
    insert(patch, subject.clone(), predicate, Term::named(entry));
  }
}

/// A role date becomes a typed `xsd:date` literal when it parses as a
/// calendar date, a plain literal otherwise.
fn date_literal(value: &str) -> Term {
  if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
    Term::typed_literal(value, vocab::XSD_DATE)
  } else {
    Term::literal(value)
  }
}

// ─── Reified sub-entities ────────────────────────────────────────────────────

fn insert_account(patch: &mut PatchSet, subject: &Term, entry: &AccountEntry) {
  let node = Term::fresh_blank();
  insert(patch, subject.clone(), vocab::FOAF_ACCOUNT, node.clone());
  if let Some(account_type) = &entry.account_type {
    insert(patch, node.clone(), vocab::RDF_TYPE, Term::named(account_type));
  }
  if let Some(name) = &entry.account_name {
    insert(patch, node.clone(), vocab::FOAF_ACCOUNT_NAME, Term::literal(name));
  }
  if let Some(homepage) = &entry.account_service_homepage {
    insert(
      patch,
      node.clone(),
      vocab::FOAF_ACCOUNT_SERVICE_HOMEPAGE,
      Term::named(homepage),
    );
  }
  if let Some(icon) = &entry.icon {
    insert(patch, node.clone(), vocab::SCHEMA_IMAGE, Term::named(icon));
  }
  if let Some(label) = &entry.label {
    insert(patch, node, vocab::RDFS_LABEL, Term::literal(label));
  }
}

fn insert_role(patch: &mut PatchSet, subject: &Term, entry: &OrganizationEntry) {
  let role = Term::fresh_blank();
  insert(patch, role.clone(), vocab::ORG_MEMBER, subject.clone());

  // A target organization that is an absolute URI links directly; anything
  // else becomes a fresh anonymous organization node carrying the name.
  match entry.organization.as_deref() {
    Some(org) if is_absolute_uri(org) => {
      insert(patch, role.clone(), vocab::ORG_ORGANIZATION, Term::named(org));
    }
    other => {
      let name = other.or(entry.organization_name.as_deref());
      if let Some(name) = name {
        let org_node = Term::fresh_blank();
        insert(patch, role.clone(), vocab::ORG_ORGANIZATION, org_node.clone());
        insert(patch, org_node.clone(), vocab::SCHEMA_NAME, Term::literal(name));
        insert(
          patch,
          org_node,
          vocab::RDF_TYPE,
          Term::named(vocab::SCHEMA_ORGANIZATION),
        );
      }
    }
  }

  if let Some(role_text) = &entry.role {
    insert(patch, role.clone(), vocab::VCARD_ROLE, Term::literal(role_text));
  }
  if let Some(start) = &entry.start_date {
    insert(patch, role.clone(), vocab::SCHEMA_START_DATE, date_literal(start));
  }
  if let Some(end) = &entry.end_date {
    insert(patch, role.clone(), vocab::SCHEMA_END_DATE, date_literal(end));
  }
  if let Some(description) = &entry.description {
    insert(
      patch,
      role.clone(),
      vocab::SCHEMA_DESCRIPTION,
      Term::literal(description),
    );
  }
  if let Some(role_type) = entry.role_type {
    insert(patch, role, vocab::RDF_TYPE, Term::named(role_type.iri()));
  }
}

// ─── Entry point ─────────────────────────────────────────────────────────────

/// Compute the deletion and insertion sets that transition the document's
/// managed statements to match `target`. Statements using predicates outside
/// the managed set are never touched.
pub fn build_diff(
  web_id: &str,
  target: &ProfileRecord,
  existing: &[Statement],
) -> PatchSet {
  let subject = Term::named(web_id);
  let mut patch = PatchSet::default();

  replace_scalar(
    &mut patch,
    existing,
    &subject,
    vocab::UI_BACKGROUND_COLOR,
    target.profile_background_color.as_deref(),
  );
  replace_scalar(
    &mut patch,
    existing,
    &subject,
    vocab::UI_HIGHLIGHT_COLOR,
    target.profile_highlight_color.as_deref(),
  );
  replace_scalar(&mut patch, existing, &subject, vocab::FOAF_NAME, target.name.as_deref());
  replace_scalar(&mut patch, existing, &subject, vocab::FOAF_NICK, target.nickname.as_deref());
  replace_scalar(&mut patch, existing, &subject, vocab::FOAF_PHONE, target.phone.as_deref());
  replace_scalar(
    &mut patch,
    existing,
    &subject,
    vocab::FOAF_HOMEPAGE,
    target.homepage.as_deref(),
  );
  replace_scalar(
    &mut patch,
    existing,
    &subject,
    vocab::VCARD_HAS_PHOTO,
    target.photo.as_deref(),
  );
  replace_scalar(
    &mut patch,
    existing,
    &subject,
    vocab::SOLID_SUBJECT_PRONOUN,
    target.preferred_subject_pronoun.as_deref(),
  );
  replace_scalar(
    &mut patch,
    existing,
    &subject,
    vocab::SOLID_OBJECT_PRONOUN,
    target.preferred_object_pronoun.as_deref(),
  );
  replace_scalar(
    &mut patch,
    existing,
    &subject,
    vocab::SOLID_RELATIVE_PRONOUN,
    target.preferred_relative_pronoun.as_deref(),
  );

  // Email: mailbox statements are deleted like any scalar, but the insertion
  // is a `mailto:` named reference, prefixing only when absent.
  delete_existing(&mut patch, existing, &subject, vocab::FOAF_MBOX);
  if let Some(email) = target.email.as_deref()
    && !email.is_empty()
  {
    let mbox = if email.starts_with("mailto:") {
      email.to_string()
    } else {
      format!("mailto:{email}")
    };
    insert(&mut patch, subject.clone(), vocab::FOAF_MBOX, Term::named(mbox));
  }

  replace_links(&mut patch, existing, &subject, vocab::FOAF_KNOWS, &target.knows);
  replace_links(
    &mut patch,
    existing,
    &subject,
    vocab::SCHEMA_KNOWS_LANGUAGE,
    &target.knows_language,
  );
  replace_links(&mut patch, existing, &subject, vocab::SCHEMA_SKILLS, &target.skills);

  // Accounts: the link statements are deleted wholesale; each target account
  // gets a brand-new anonymous node.
  delete_existing(&mut patch, existing, &subject, vocab::FOAF_ACCOUNT);
  for entry in &target.accounts {
    insert_account(&mut patch, &subject, entry);
  }

  // Organizations are replace-wholesale: existing reverse-membership links
  // are deleted and fresh role nodes inserted per target entry. Attribute
  // statements of prior role nodes are not swept; once unlinked, stale role
  // nodes are left orphaned rather than removed.
  patch.deletions.extend(
    existing
      .iter()
      .filter(|st| {
        st.predicate.as_iri() == Some(vocab::ORG_MEMBER) && st.object == subject
      })
      .cloned(),
  );
  for entry in &target.organizations {
    if entry.is_substantive() {
      insert_role(&mut patch, &subject, entry);
    }
  }

  patch
}

// ─── Tests ───────────────────────────────────────────────────────────────────

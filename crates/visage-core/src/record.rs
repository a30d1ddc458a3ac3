//! The structured, caller-facing profile record.
//!
//! The record is ephemeral: constructed fresh per request, either from a
//! caller-supplied JSON body or by extraction from the profile document.
//! Field names serialise in camelCase to match the JSON surface.

use serde::{Deserialize, Serialize};

use crate::vocab;

// ─── Sub-records ─────────────────────────────────────────────────────────────

/// A social account, persisted as an anonymous account node. Replaced
/// wholesale on every write; never matched or updated incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountEntry {
  /// Account class IRI asserted as the node's `rdf:type`.
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub account_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub account_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub account_service_homepage: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub icon: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub label: Option<String>,
}

/// Whether an organization membership is current, past, or upcoming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleType {
  CurrentRole,
  PastRole,
  FutureRole,
}

impl RoleType {
  /// The class IRI written into the role node's `rdf:type` statement.
  pub fn iri(self) -> &'static str {
    match self {
      Self::CurrentRole => vocab::SOLID_CURRENT_ROLE,
      Self::PastRole => vocab::SOLID_PAST_ROLE,
      Self::FutureRole => vocab::SOLID_FUTURE_ROLE,
    }
  }

  /// Recover a role type from a type IRI by substring containment — a
  /// deliberate tolerance for namespace variation in existing documents.
  pub fn from_type_iri(iri: &str) -> Option<Self> {
    if iri.contains("CurrentRole") {
      Some(Self::CurrentRole)
    } else if iri.contains("PastRole") {
      Some(Self::PastRole)
    } else if iri.contains("FutureRole") {
      Some(Self::FutureRole)
    } else {
      None
    }
  }
}

/// An organization membership, persisted as a reified role node. Replaced
/// wholesale on every write that includes organizations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationEntry {
  /// Organization IRI, or a plain name for organizations without one.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub organization: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub organization_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub role: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub start_date: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub end_date: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub role_type: Option<RoleType>,
}

impl OrganizationEntry {
  /// A role entry is kept only if it names an organization, an organization
  /// name, or a role; empty entries are dropped.
  pub fn is_substantive(&self) -> bool {
    self.organization.is_some()
      || self.organization_name.is_some()
      || self.role.is_some()
  }
}

// ─── ProfileRecord ───────────────────────────────────────────────────────────

/// The structured representation of a profile document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileRecord {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub profile_background_color: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub profile_highlight_color: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub nickname: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub homepage: Option<String>,
  /// Supplied externally by the account system; always wins over any value
  /// found in the document.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub preferred_subject_pronoun: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub preferred_object_pronoun: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub preferred_relative_pronoun: Option<String>,
  /// Absolute URL, or (on input only) a base64 data URI with an image
  /// subtype. After a successful write this is always a storage URL.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub photo: Option<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub knows: Vec<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub knows_language: Vec<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub skills: Vec<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub accounts: Vec<AccountEntry>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub organizations: Vec<OrganizationEntry>,
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn json_field_names_are_camel_case() {
    let record = ProfileRecord {
      profile_background_color: Some("00aaff".to_string()),
      preferred_subject_pronoun: Some("they".to_string()),
      knows_language: vec!["http://example.org/lang/en".to_string()],
      ..Default::default()
    };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["profileBackgroundColor"], "00aaff");
    assert_eq!(json["preferredSubjectPronoun"], "they");
    assert!(json["knowsLanguage"].is_array());
  }

  #[test]
  fn account_type_round_trips_under_type_key() {
    let json = serde_json::json!({
      "type": "http://example.org/ns#MastodonAccount",
      "accountName": "@alice@example.social",
    });
    let entry: AccountEntry = serde_json::from_value(json).unwrap();
    assert_eq!(
      entry.account_type.as_deref(),
      Some("http://example.org/ns#MastodonAccount")
    );
    assert_eq!(entry.account_name.as_deref(), Some("@alice@example.social"));
    let back = serde_json::to_value(&entry).unwrap();
    assert!(back.get("type").is_some());
  }

  #[test]
  fn role_type_from_iri_uses_substring_containment() {
    assert_eq!(
      RoleType::from_type_iri("http://www.w3.org/ns/solid/terms#CurrentRole"),
      Some(RoleType::CurrentRole)
    );
    // Foreign namespace, same local name — still recognised.
    assert_eq!(
      RoleType::from_type_iri("http://example.org/vocab#PastRole"),
      Some(RoleType::PastRole)
    );
    assert_eq!(RoleType::from_type_iri("http://example.org/vocab#Role"), None);
  }

  #[test]
  fn empty_organization_entry_is_not_substantive() {
    let entry = OrganizationEntry {
      start_date: Some("2020-01-01".to_string()),
      ..Default::default()
    };
    assert!(!entry.is_substantive());
    let named = OrganizationEntry {
      role: Some("Engineer".to_string()),
      ..Default::default()
    };
    assert!(named.is_substantive());
  }

  #[test]
  fn unknown_json_fields_are_ignored() {
    let json = serde_json::json!({
      "name": "Alice",
      "somethingElse": 42,
    });
    let record: ProfileRecord = serde_json::from_value(json).unwrap();
    assert_eq!(record.name.as_deref(), Some("Alice"));
  }
}

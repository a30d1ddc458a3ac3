//! Predicate and class IRIs used in profile documents.
//!
//! The managed predicate set is the fixed list the service owns exclusively
//! for a given subject: updates never delete or insert statements using
//! predicates outside this set.

// ─── Namespaces ──────────────────────────────────────────────────────────────

pub const NS_FOAF: &str = "http://xmlns.com/foaf/0.1/";
pub const NS_VCARD: &str = "http://www.w3.org/2006/vcard/ns#";
pub const NS_SOLID: &str = "http://www.w3.org/ns/solid/terms#";
pub const NS_ORG: &str = "http://www.w3.org/ns/org#";
pub const NS_SCHEMA: &str = "http://schema.org/";
pub const NS_UI: &str = "http://www.w3.org/ns/ui#";
pub const NS_RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const NS_RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const NS_XSD: &str = "http://www.w3.org/2001/XMLSchema#";

// ─── Subject predicates (single-valued) ──────────────────────────────────────

pub const UI_BACKGROUND_COLOR: &str = "http://www.w3.org/ns/ui#backgroundColor";
pub const UI_HIGHLIGHT_COLOR: &str = "http://www.w3.org/ns/ui#highlightColor";
pub const FOAF_NAME: &str = "http://xmlns.com/foaf/0.1/name";
pub const FOAF_NICK: &str = "http://xmlns.com/foaf/0.1/nick";
pub const FOAF_PHONE: &str = "http://xmlns.com/foaf/0.1/phone";
pub const FOAF_HOMEPAGE: &str = "http://xmlns.com/foaf/0.1/homepage";
pub const FOAF_MBOX: &str = "http://xmlns.com/foaf/0.1/mbox";
pub const VCARD_HAS_PHOTO: &str = "http://www.w3.org/2006/vcard/ns#hasPhoto";
pub const SOLID_SUBJECT_PRONOUN: &str =
  "http://www.w3.org/ns/solid/terms#preferredSubjectPronoun";
pub const SOLID_OBJECT_PRONOUN: &str =
  "http://www.w3.org/ns/solid/terms#preferredObjectPronoun";
pub const SOLID_RELATIVE_PRONOUN: &str =
  "http://www.w3.org/ns/solid/terms#preferredRelativePronoun";

// ─── Subject predicates (multi-valued) ───────────────────────────────────────

pub const FOAF_KNOWS: &str = "http://xmlns.com/foaf/0.1/knows";
pub const SCHEMA_KNOWS_LANGUAGE: &str = "http://schema.org/knowsLanguage";
pub const SCHEMA_SKILLS: &str = "http://schema.org/skills";
pub const FOAF_ACCOUNT: &str = "http://xmlns.com/foaf/0.1/account";

// ─── Account-node predicates ─────────────────────────────────────────────────

pub const FOAF_ACCOUNT_NAME: &str = "http://xmlns.com/foaf/0.1/accountName";
pub const FOAF_ACCOUNT_SERVICE_HOMEPAGE: &str =
  "http://xmlns.com/foaf/0.1/accountServiceHomepage";
pub const SCHEMA_IMAGE: &str = "http://schema.org/image";
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

// ─── Role-node predicates ────────────────────────────────────────────────────

pub const ORG_MEMBER: &str = "http://www.w3.org/ns/org#member";
pub const ORG_ORGANIZATION: &str = "http://www.w3.org/ns/org#organization";
pub const VCARD_ROLE: &str = "http://www.w3.org/2006/vcard/ns#role";
pub const SCHEMA_START_DATE: &str = "http://schema.org/startDate";
pub const SCHEMA_END_DATE: &str = "http://schema.org/endDate";
pub const SCHEMA_DESCRIPTION: &str = "http://schema.org/description";
pub const SCHEMA_NAME: &str = "http://schema.org/name";

// ─── Classes & misc ──────────────────────────────────────────────────────────

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const FOAF_PERSON: &str = "http://xmlns.com/foaf/0.1/Person";
pub const SCHEMA_ORGANIZATION: &str = "http://schema.org/Organization";
pub const SOLID_CURRENT_ROLE: &str =
  "http://www.w3.org/ns/solid/terms#CurrentRole";
pub const SOLID_PAST_ROLE: &str = "http://www.w3.org/ns/solid/terms#PastRole";
pub const SOLID_FUTURE_ROLE: &str =
  "http://www.w3.org/ns/solid/terms#FutureRole";
pub const SOLID_INSERT_DELETE_PATCH: &str =
  "http://www.w3.org/ns/solid/terms#InsertDeletePatch";
pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

/// The single-valued managed predicates on the WebID subject. After a
/// successful update the document carries at most one statement per entry.
pub const MANAGED_SINGLE: &[&str] = &[
  UI_BACKGROUND_COLOR,
  UI_HIGHLIGHT_COLOR,
  FOAF_NAME,
  FOAF_NICK,
  FOAF_PHONE,
  FOAF_HOMEPAGE,
  FOAF_MBOX,
  VCARD_HAS_PHOTO,
  SOLID_SUBJECT_PRONOUN,
  SOLID_OBJECT_PRONOUN,
  SOLID_RELATIVE_PRONOUN,
];

/// The multi-valued managed predicates on the WebID subject.
pub const MANAGED_MULTI: &[&str] = &[
  FOAF_KNOWS,
  SCHEMA_KNOWS_LANGUAGE,
  SCHEMA_SKILLS,
  FOAF_ACCOUNT,
];

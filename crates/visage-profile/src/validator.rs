//! Shape/format validation of a candidate profile record.
//!
//! Validation runs over the raw JSON value, before deserialisation into a
//! [`visage_core::record::ProfileRecord`], so that malformed bodies produce
//! field-level messages instead of serde errors. All checks run
//! independently; every violation is collected and returned together.

use serde_json::Value;
use url::Url;

// ─── Result type ─────────────────────────────────────────────────────────────

/// The outcome of validating a candidate value.
#[derive(Debug, Clone)]
pub struct Validation {
  pub valid:  bool,
  pub errors: Vec<String>,
}

impl Validation {
  fn ok() -> Self {
    Self {
      valid:  true,
      errors: Vec::new(),
    }
  }

  fn failed(errors: Vec<String>) -> Self {
    Self {
      valid: false,
      errors,
    }
  }
}

// ─── Field checks ────────────────────────────────────────────────────────────

fn is_absolute_url(s: &str) -> bool { Url::parse(s).is_ok() }

/// A 6-hex-digit color string, with or without a leading `#`.
fn is_hex_color(s: &str) -> bool {
  let digits = s.strip_prefix('#').unwrap_or(s);
  digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// `data:image/<subtype>;base64,<payload>`
fn is_image_data_uri(s: &str) -> bool {
  s.strip_prefix("data:image/")
    .and_then(|rest| rest.split_once(";base64,"))
    .is_some_and(|(subtype, _)| !subtype.is_empty())
}

fn check_color(candidate: &Value, field: &str, errors: &mut Vec<String>) {
  let Some(value) = candidate.get(field) else {
    return;
  };
  if value.is_null() {
    return;
  }
  match value.as_str() {
    Some(s) if is_hex_color(s) => {}
    _ => errors.push(format!("{field} must be a 6-hex-digit color string")),
  }
}

fn check_sequence(candidate: &Value, field: &str, errors: &mut Vec<String>) {
  if let Some(value) = candidate.get(field)
    && !value.is_null()
    && !value.is_array()
  {
    errors.push(format!("{field} must be a sequence"));
  }
}

// ─── Entry point ─────────────────────────────────────────────────────────────

/// Validate a candidate profile value. Never short-circuits: the returned
/// error list names every violation found.
pub fn validate(candidate: &Value) -> Validation {
  let Some(_) = candidate.as_object() else {
    return Validation::failed(vec![
      "profile must be a JSON object".to_string(),
    ]);
  };

  let mut errors = Vec::new();

  check_color(candidate, "profileBackgroundColor", &mut errors);
  check_color(candidate, "profileHighlightColor", &mut errors);

  if let Some(photo) = candidate.get("photo")
    && !photo.is_null()
  {
    // `data:` values must be base64 image URIs; `Url::parse` would accept
    // any data URI as absolute, so they are checked first.
    match photo.as_str() {
      Some("") => {}
      Some(s) if s.starts_with("data:") && is_image_data_uri(s) => {}
      Some(s) if !s.starts_with("data:") && is_absolute_url(s) => {}
      _ => errors.push(
        "photo must be an absolute URL or a base64 image data URI".to_string(),
      ),
    }
  }

  if let Some(homepage) = candidate.get("homepage")
    && !homepage.is_null()
  {
    match homepage.as_str() {
      Some("") => {}
      Some(s) if is_absolute_url(s) => {}
      _ => errors.push("homepage must be an absolute URL".to_string()),
    }
  }

  if let Some(phone) = candidate.get("phone")
    && !phone.is_null()
    && phone.as_str().is_none()
  {
    errors.push("phone must be text".to_string());
  }

  for field in ["knowsLanguage", "skills", "accounts", "organizations", "knows"]
  {
    check_sequence(candidate, field, &mut errors);
  }

  if let Some(entries) = candidate.get("knows").and_then(Value::as_array) {
    for entry in entries {
      match entry.as_str() {
        Some(s) if is_absolute_url(s) => {}
        Some(s) => {
          errors.push(format!("knows entry is not an absolute URI: {s}"));
        }
        None => {
          errors.push(format!("knows entry is not an absolute URI: {entry}"));
        }
      }
    }
  }

  if errors.is_empty() {
    Validation::ok()
  } else {
    Validation::failed(errors)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

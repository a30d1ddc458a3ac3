//! Profile photo handling: data-URI decoding and storage-path derivation.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use url::Url;
use uuid::Uuid;
use visage_core::{Error, Result};

/// A decoded inline image ready for binary storage.
pub struct DecodedImage {
  pub bytes:        Vec<u8>,
  pub content_type: &'static str,
  pub extension:    &'static str,
}

/// True when the value is an inline image rather than a storage URL.
pub fn is_data_uri(value: &str) -> bool { value.starts_with("data:") }

/// Map a declared image subtype to a content type and file extension.
/// Unrecognised subtypes default to JPEG.
fn media_type(subtype: &str) -> (&'static str, &'static str) {
  match subtype.to_ascii_lowercase().as_str() {
    "png" => ("image/png", "png"),
    "jpeg" | "jpg" => ("image/jpeg", "jpg"),
    "gif" => ("image/gif", "gif"),
    "webp" => ("image/webp", "webp"),
    "svg+xml" => ("image/svg+xml", "svg"),
    _ => ("image/jpeg", "jpg"),
  }
}

/// Decode a `data:image/<subtype>;base64,<payload>` URI.
pub fn decode_data_uri(uri: &str) -> Result<DecodedImage> {
  let rest = uri.strip_prefix("data:image/").ok_or(Error::InvalidDataUri)?;
  let (subtype, payload) =
    rest.split_once(";base64,").ok_or(Error::InvalidDataUri)?;
  let bytes = B64
    .decode(payload.trim())
    .map_err(|_| Error::InvalidDataUri)?;
  let (content_type, extension) = media_type(subtype);
  Ok(DecodedImage {
    bytes,
    content_type,
    extension,
  })
}

/// Derive a fresh storage IRI for a photo under the identity's pod root.
pub fn photo_iri(web_id: &str, extension: &str) -> Result<String> {
  let url = Url::parse(web_id).map_err(|_| {
    Error::Store(format!("linked WebID is not an absolute URL: {web_id}").into())
  })?;
  let origin = url.origin().ascii_serialization();
  Ok(format!("{origin}/photos/{}.{extension}", Uuid::new_v4().simple()))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

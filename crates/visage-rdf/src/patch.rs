//! `solid:InsertDeletePatch` serialisation and parsing.
//!
//! The rendered text must stay bit-exact for interoperability with
//! downstream patch consumers: a declaration that the empty-subject
//! resource is an insert-delete patch, followed by up to three braced
//! blocks (`solid:deletes`, `solid:inserts`, `solid:where`), separated by
//! semicolons, each omitted entirely when empty.

use visage_core::term::{PatchSet, Statement};

use crate::{
  codec::{Cursor, render_statement},
  error::{Error, Result},
};

const SOLID_PREFIX: &str =
  "@prefix solid: <http://www.w3.org/ns/solid/terms#>.";

// ─── Rendering ───────────────────────────────────────────────────────────────

fn render_block(out: &mut String, keyword: &str, statements: &[Statement]) {
  out.push_str(";\n  solid:");
  out.push_str(keyword);
  out.push_str(" {\n");
  for statement in statements {
    out.push_str("    ");
    out.push_str(&render_statement(statement));
    out.push('\n');
  }
  out.push_str("  }");
}

/// Render a patch set in the insert-delete patch grammar.
pub fn render_patch(patch: &PatchSet) -> String {
  let mut out = String::new();
  out.push_str(SOLID_PREFIX);
  out.push('\n');
  out.push_str("<> a solid:InsertDeletePatch");

  if patch.is_empty() {
    out.push('.');
    return out;
  }

  if !patch.deletions.is_empty() {
    render_block(&mut out, "deletes", &patch.deletions);
  }
  if !patch.insertions.is_empty() {
    render_block(&mut out, "inserts", &patch.insertions);
  }
  if !patch.conditions.is_empty() {
    render_block(&mut out, "where", &patch.conditions);
  }
  out.push('.');
  out
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Find `needle` outside any double-quoted literal, so block markers and
/// braces inside statement text never confuse the block scan.
fn find_unquoted(haystack: &str, needle: &str) -> Option<usize> {
  let mut in_quotes = false;
  let mut skip_next = false;
  for (i, c) in haystack.char_indices() {
    if skip_next {
      skip_next = false;
      continue;
    }
    match c {
      '\\' if in_quotes => skip_next = true,
      '"' => in_quotes = !in_quotes,
      _ => {}
    }
    if !in_quotes && haystack[i..].starts_with(needle) {
      return Some(i);
    }
  }
  None
}

fn parse_block(input: &str, keyword: &'static str) -> Result<Vec<Statement>> {
  let marker = format!("solid:{keyword}");
  let Some(start) = find_unquoted(input, &marker) else {
    return Ok(Vec::new());
  };
  let after = &input[start + marker.len()..];
  let Some(open) = find_unquoted(after, "{") else {
    return Err(Error::UnterminatedBlock(keyword));
  };
  let body = &after[open + 1..];
  let Some(close) = find_unquoted(body, "}") else {
    return Err(Error::UnterminatedBlock(keyword));
  };

  let mut statements = Vec::new();
  let mut cursor = Cursor::new(&body[..close]);
  loop {
    cursor.skip_whitespace();
    if cursor.at_end() {
      break;
    }
    statements.push(cursor.parse_statement()?);
  }
  Ok(statements)
}

/// Parse a patch document back into a patch set.
///
/// Accepts exactly the subset [`render_patch`] emits; used by in-process
/// stores to apply patches without a full N3 parser.
pub fn parse_patch(input: &str) -> Result<PatchSet> {
  if !input.contains("solid:InsertDeletePatch") {
    return Err(Error::MissingPatchDeclaration);
  }
  Ok(PatchSet {
    deletions:  parse_block(input, "deletes")?,
    insertions: parse_block(input, "inserts")?,
    conditions: parse_block(input, "where")?,
  })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

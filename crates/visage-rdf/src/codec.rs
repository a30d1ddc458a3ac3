//! Statement codec: domain terms ⇄ the flat statement notation.
//!
//! Pipeline (render):
//!   Term
//!     └─ render_term()      → `<iri>` / `"literal"` / `_:label`
//!          └─ render_statement() → `<s> <p> o.`
//!               └─ render_graph() → statement-per-line document
//!
//! The parse direction accepts exactly the subset the render direction
//! emits, which is also valid Turtle.

use visage_core::term::{Statement, Term};

use crate::error::{Error, Result};

// ─── Literal escaping ────────────────────────────────────────────────────────

/// Escape a literal value: `\`, `"`, newline, carriage-return, tab.
/// Backslash first, so later replacements never double-escape.
pub fn escape_literal(s: &str) -> String {
  s.replace('\\', "\\\\")
    .replace('"', "\\\"")
    .replace('\n', "\\n")
    .replace('\r', "\\r")
    .replace('\t', "\\t")
}

fn unescape_literal(s: &str) -> String {
  let mut result = String::with_capacity(s.len());
  let mut chars = s.chars();
  while let Some(c) = chars.next() {
    if c == '\\' {
      match chars.next() {
        Some('n') => result.push('\n'),
        Some('r') => result.push('\r'),
        Some('t') => result.push('\t'),
        Some('"') => result.push('"'),
        Some('\\') => result.push('\\'),
        Some(other) => {
          result.push('\\');
          result.push(other);
        }
        None => result.push('\\'),
      }
    } else {
      result.push(c);
    }
  }
  result
}

// ─── Rendering ───────────────────────────────────────────────────────────────

/// Render a single term.
///
/// Anonymous-node labels drop the single leading generator-prefix character
/// of their local id, keeping generated labels stable and grammar-legal.
pub fn render_term(term: &Term) -> String {
  match term {
    Term::Named { iri } => format!("<{iri}>"),
    Term::Literal {
      value,
      language,
      datatype,
    } => {
      let mut out = format!("\"{}\"", escape_literal(value));
      if let Some(lang) = language {
        out.push('@');
        out.push_str(lang);
      } else if let Some(dt) = datatype {
        out.push_str("^^<");
        out.push_str(dt);
        out.push('>');
      }
      out
    }
    Term::Blank { id } => {
      let label = if id.len() > 1 { &id[1..] } else { id.as_str() };
      format!("_:{label}")
    }
  }
}

/// Render one statement, terminated with a period.
pub fn render_statement(statement: &Statement) -> String {
  format!(
    "{} {} {}.",
    render_term(&statement.subject),
    render_term(&statement.predicate),
    render_term(&statement.object)
  )
}

/// Render a statement collection as a statement-per-line document.
pub fn render_graph(statements: &[Statement]) -> String {
  let mut out = String::new();
  for statement in statements {
    out.push_str(&render_statement(statement));
    out.push('\n');
  }
  out
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

pub(crate) struct Cursor<'a> {
  input: &'a str,
  pos:   usize,
}

impl<'a> Cursor<'a> {
  pub(crate) fn new(input: &'a str) -> Self { Self { input, pos: 0 } }

  fn rest(&self) -> &'a str { &self.input[self.pos..] }

  fn peek(&self) -> Option<char> { self.rest().chars().next() }

  fn bump(&mut self) -> Option<char> {
    let c = self.peek()?;
    self.pos += c.len_utf8();
    Some(c)
  }

  pub(crate) fn skip_whitespace(&mut self) {
    while self.peek().is_some_and(|c| c.is_whitespace()) {
      self.bump();
    }
  }

  pub(crate) fn at_end(&self) -> bool { self.pos >= self.input.len() }

  fn take_until(&mut self, terminator: char) -> Option<&'a str> {
    let start = self.pos;
    while let Some(c) = self.peek() {
      if c == terminator {
        let s = &self.input[start..self.pos];
        self.bump();
        return Some(s);
      }
      self.bump();
    }
    None
  }

  /// Parse one term at the cursor.
  pub(crate) fn parse_term(&mut self) -> Result<Term> {
    self.skip_whitespace();
    match self.peek() {
      Some('<') => {
        self.bump();
        let iri = self
          .take_until('>')
          .ok_or_else(|| Error::UnterminatedIri(self.rest().to_string()))?;
        Ok(Term::named(iri))
      }
      Some('"') => self.parse_literal(),
      Some('_') => {
        self.bump();
        if self.peek() != Some(':') {
          return Err(Error::MalformedStatement(self.rest().to_string()));
        }
        self.bump();
        let start = self.pos;
        while self
          .peek()
          .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
          self.bump();
        }
        let label = &self.input[start..self.pos];
        if label.is_empty() {
          return Err(Error::MalformedStatement(self.rest().to_string()));
        }
        // Re-attach a prefix character so render(parse(x)) is stable.
        Ok(Term::blank(format!("b{label}")))
      }
      Some(_) => Err(Error::MalformedStatement(self.rest().to_string())),
      None => Err(Error::UnexpectedEof),
    }
  }

  fn parse_literal(&mut self) -> Result<Term> {
    debug_assert_eq!(self.peek(), Some('"'));
    self.bump();
    let start = self.pos;
    loop {
      match self.peek() {
        Some('\\') => {
          self.bump();
          self.bump();
        }
        Some('"') => break,
        Some(_) => {
          self.bump();
        }
        None => {
          return Err(Error::UnterminatedLiteral(
            self.input[start..].to_string(),
          ));
        }
      }
    }
    let raw = &self.input[start..self.pos];
    self.bump(); // closing quote
    let value = unescape_literal(raw);

    // Optional @lang or ^^<datatype> suffix.
    if self.peek() == Some('@') {
      self.bump();
      let lang_start = self.pos;
      while self
        .peek()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '-')
      {
        self.bump();
      }
      let lang = &self.input[lang_start..self.pos];
      return Ok(Term::lang_literal(value, lang));
    }
    if self.rest().starts_with("^^<") {
      self.pos += 3;
      let dt = self
        .take_until('>')
        .ok_or_else(|| Error::UnterminatedIri(self.rest().to_string()))?;
      return Ok(Term::typed_literal(value, dt));
    }
    Ok(Term::literal(value))
  }

  /// Parse one `subject predicate object .` statement.
  pub(crate) fn parse_statement(&mut self) -> Result<Statement> {
    let subject = self.parse_term()?;
    let predicate = self.parse_term()?;
    let object = self.parse_term()?;
    self.skip_whitespace();
    if self.peek() != Some('.') {
      return Err(Error::MalformedStatement(self.rest().to_string()));
    }
    self.bump();
    Ok(Statement::new(subject, predicate, object))
  }
}

/// Parse a statement-per-line document into a statement collection.
///
/// `@prefix` directives and `#` comment lines are skipped; the statements
/// themselves must be in the flat notation this codec emits.
pub fn parse_graph(input: &str) -> Result<Vec<Statement>> {
  let mut statements = Vec::new();
  for line in input.lines() {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with("@prefix") {
      continue;
    }
    let mut cursor = Cursor::new(line);
    statements.push(cursor.parse_statement()?);
    cursor.skip_whitespace();
    if !cursor.at_end() {
      return Err(Error::MalformedStatement(line.to_string()));
    }
  }
  Ok(statements)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

//! Statement codec and patch serialiser for Visage.
//!
//! Converts between [`visage_core`] terms and their textual notation, and
//! renders/parses `solid:InsertDeletePatch` documents. Pure synchronous; no
//! HTTP or storage dependencies.
//!
//! # Quick start
//!
//! ```no_run
//! use visage_core::term::{PatchSet, Statement, Term};
//! use visage_rdf::render_patch;
//!
//! let patch = PatchSet {
//!   insertions: vec![Statement::new(
//!     Term::named("https://alice.example/card#me"),
//!     Term::named("http://xmlns.com/foaf/0.1/name"),
//!     Term::literal("Alice"),
//!   )],
//!   ..Default::default()
//! };
//! println!("{}", render_patch(&patch));
//! ```

pub mod codec;
pub mod error;
pub mod patch;

pub use codec::{escape_literal, parse_graph, render_graph, render_statement, render_term};
pub use error::{Error, Result};
pub use patch::{parse_patch, render_patch};

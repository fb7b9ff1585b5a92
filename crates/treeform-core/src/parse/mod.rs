//! Text-to-tree parsers.
//!
//! Two independent notations feed the same [`crate::domain::Tree`]:
//!
//! - [`indent`] — whitespace/box-drawing ASCII trees (`├──`, `└──`, plain
//!   indentation); structure only, no payload.
//! - [`outline`] — Markdown outlines: ATX headings nest directories, bullet
//!   entries declare files, fenced code blocks supply file content, prose
//!   becomes descriptions.
//!
//! Both parsers are total: malformed lines degrade (skip or prose), they
//! never reject input. Reading the source text is the caller's job; the
//! parsers take `&str`.

pub mod indent;
pub mod outline;

pub use indent::IndentTreeParser;
pub use outline::OutlineParser;

//! Fill in `%placeholder%` snippets, one field per placeholder.
//!
//! # Features
//!
//! * Parse a snippet once into a [`Template`] with all distinct placeholders in order of first appearance.
//! * Render the template with values from a [`HashMap`][std::collections::HashMap],
//!   [`BTreeMap`][std::collections::BTreeMap], key-value slices or any other [`ValueMap`].
//! * Placeholders without a value are rendered as themselves, so a partially filled snippet stays readable.
//! * Keep the editing state of a snippet in a [`Session`], with one highlighted placeholder for interactive display.
//! * Fill a session from any line-based input with a [`form::Form`].
//! * Load named snippets from YAML files with includes (optional, requires the `yaml` feature).
//!
//! A placeholder is everything between two `%` characters.
//! Placeholder names can contain anything except `%`, including whitespace, and may even be empty.
//! A `%` without a closing `%` is literal text.
//!
//! # Examples
//!
//! The [`Template::expand()`] function renders the final text:
//!
//! ```
//! # use std::collections::HashMap;
//! let template = snipfill::parse("git rebase --onto %commit%^ %commit%");
//! assert_eq!(template.identities().collect::<Vec<_>>(), ["commit"]);
//!
//! let mut values = HashMap::new();
//! values.insert("commit", "abc123");
//! assert_eq!(template.expand(&values), "git rebase --onto abc123^ abc123");
//! ```
//!
//! A [`Session`] keeps track of the values while they are being edited:
//!
//! ```
//! let mut session = snipfill::Session::new("%a% and %b%");
//! session.set("a", "X");
//! session.focus(Some("b"));
//! assert_eq!(session.render(false), "X and %b%");
//! ```
#![warn(missing_docs, missing_debug_implementations)]
#![cfg_attr(feature = "doc-cfg", feature(doc_cfg))]

pub mod error;
pub use error::Error;

mod map;
pub use map::*;

mod template;
pub use template::*;

mod session;
pub use session::Session;

mod features;
#[allow(unused_imports)]
pub use features::*;

pub mod form;
pub mod style;

#[cfg(feature = "yaml")]
#[cfg_attr(feature = "doc-cfg", doc(cfg(feature = "yaml")))]
pub mod select;

/// The character that opens and closes a placeholder.
pub const DELIMITER: u8 = b'%';

/// Parse a template from a string.
///
/// This is a shorthand for [`Template::parse()`].
pub fn parse(source: impl Into<String>) -> Template {
	Template::parse(source)
}

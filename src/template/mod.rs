use crate::style::StyleSheet;
use crate::ValueMap;

mod raw;

/// A parsed snippet template that owns the source string.
///
/// You can parse the template once and call [`Self::render()`] or [`Self::expand()`] multiple times.
/// Parsing never fails: text that does not form a `%name%` placeholder is kept as literal text.
///
/// The template keeps the source together with the parsed catalog of placeholders,
/// so the catalog can never be used with a different source string.
#[derive(Clone, PartialEq, Eq)]
pub struct Template {
	source: String,
	raw: raw::Catalog,
}

impl std::fmt::Debug for Template {
	#[inline]
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Template").field(&self.source).finish()
	}
}

/// One appearance of a placeholder in the template source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence<'a> {
	/// The name of the placeholder, without delimiters.
	pub identity: &'a str,

	/// The byte range of the full token in the source, including both delimiters.
	pub range: std::ops::Range<usize>,
}

impl Occurrence<'_> {
	/// The byte offset of the opening delimiter.
	#[inline]
	pub fn start(&self) -> usize {
		self.range.start
	}

	/// The byte offset just past the closing delimiter.
	#[inline]
	pub fn end(&self) -> usize {
		self.range.end
	}
}

impl Template {
	/// Parse a template from a string.
	///
	/// Placeholders have the form `%name%`.
	/// A name is everything between two delimiters, and may be empty (`%%`).
	/// A delimiter without a matching closing delimiter is literal text.
	pub fn parse(source: impl Into<String>) -> Self {
		let source = source.into();
		let raw = raw::Catalog::parse(&source);
		Self { source, raw }
	}

	/// Get the original source string.
	#[inline]
	pub fn source(&self) -> &str {
		&self.source
	}

	/// Consume the template to get the original source string.
	#[inline]
	pub fn into_source(self) -> String {
		self.source
	}

	/// The number of distinct placeholders.
	#[inline]
	pub fn len(&self) -> usize {
		self.raw.len()
	}

	/// Check if the template has no placeholders at all.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Iterate over the distinct placeholder names, in order of first appearance.
	pub fn identities(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
		self.raw.names(&self.source)
	}

	/// Check if the template contains a placeholder with the given name.
	pub fn contains(&self, identity: &str) -> bool {
		self.raw.find(&self.source, identity).is_some()
	}

	/// Iterate over all placeholder occurrences, sorted by start position.
	pub fn occurrences(&self) -> impl ExactSizeIterator<Item = Occurrence<'_>> + '_ {
		self.raw.occurrences().map(|(index, range)| Occurrence {
			identity: self.raw.name(&self.source, index),
			range,
		})
	}

	/// Iterate over the occurrences of one placeholder, sorted by start position.
	///
	/// Yields nothing if the template doesn't contain the placeholder.
	pub fn occurrences_of<'a>(&'a self, identity: &str) -> impl Iterator<Item = Occurrence<'a>> + 'a {
		let index = self.raw.find(&self.source, identity);
		index
			.into_iter()
			.flat_map(move |index| {
				let identity = self.raw.name(&self.source, index);
				self.raw.occurrences_of(index).map(move |range| Occurrence { identity, range })
			})
	}

	/// Render the template without any styling.
	///
	/// This will substitute all placeholders with the values from the given map.
	/// Placeholders that are missing from the map or have an empty value are left as they are.
	///
	/// You can pass a [`HashMap`][std::collections::HashMap], [`BTreeMap`][std::collections::BTreeMap],
	/// a slice of key-value pairs, or any other [`ValueMap`] as the `values` parameter.
	pub fn expand<'a, M>(&self, values: &'a M) -> String
	where
		M: ValueMap<'a> + ?Sized,
		M::Value: AsRef<str>,
	{
		self.raw.render(&self.source, values, None, None)
	}

	/// Render the template.
	///
	/// Works like [`Self::expand()`], but if `styles` is given,
	/// all occurrences of the `highlight` placeholder are wrapped in the focused style.
	///
	/// Without `styles`, the result is exactly the output text, regardless of `highlight`.
	pub fn render<'a, M>(&self, values: &'a M, highlight: Option<&str>, styles: Option<&StyleSheet>) -> String
	where
		M: ValueMap<'a> + ?Sized,
		M::Value: AsRef<str>,
	{
		self.raw.render(&self.source, values, highlight, styles)
	}
}

impl From<String> for Template {
	#[inline]
	fn from(other: String) -> Self {
		Self::parse(other)
	}
}

impl From<&str> for Template {
	#[inline]
	fn from(other: &str) -> Self {
		Self::parse(other)
	}
}

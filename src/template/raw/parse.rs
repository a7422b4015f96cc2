use std::collections::HashMap;

use super::{Catalog, Identity, Occurrence};
use crate::DELIMITER;

impl Catalog {
	/// Parse the catalog from a source string.
	///
	/// A placeholder is a delimiter, any run of non-delimiter bytes and a closing delimiter.
	/// Matching is greedy from left to right and never overlaps,
	/// so every byte of the source is part of at most one placeholder.
	///
	/// Parsing can not fail: text that doesn't form a placeholder is simply not part of the catalog.
	pub fn parse(source: &str) -> Self {
		let source_bytes = source.as_bytes();
		let mut catalog = Self::default();
		let mut seen: HashMap<&str, usize> = HashMap::new();
		let mut finger = 0;

		while finger < source_bytes.len() {
			let open = match memchr::memchr(DELIMITER, &source_bytes[finger..]) {
				Some(x) => finger + x,
				None => break,
			};

			// If there is no closing delimiter, there can be no further placeholders either.
			let close = match memchr::memchr(DELIMITER, &source_bytes[open + 1..]) {
				Some(x) => open + 1 + x,
				None => break,
			};

			// The delimiter is ASCII, so these are valid char boundaries.
			let name = &source[open + 1..close];
			let identity = *seen.entry(name).or_insert_with(|| {
				catalog.identities.push(Identity {
					name: open + 1..close,
					occurrences: Vec::with_capacity(1),
				});
				catalog.identities.len() - 1
			});

			catalog.identities[identity].occurrences.push(catalog.occurrences.len());
			catalog.occurrences.push(Occurrence {
				range: open..close + 1,
				identity,
			});
			finger = close + 1;
		}

		catalog
	}
}

mod parse;
mod render;

/// Raw catalog that doesn't track the original source.
///
/// Internally, this keeps a bunch of offsets into the original source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
	/// The distinct identities, in order of first appearance.
	identities: Vec<Identity>,

	/// All occurrences of all identities, sorted by start position.
	occurrences: Vec<Occurrence>,
}

/// One distinct placeholder name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
	/// The range of the name (without delimiters) of the first occurrence in the source.
	name: std::ops::Range<usize>,

	/// Indices into [`Catalog::occurrences`], in ascending order.
	occurrences: Vec<usize>,
}

/// One appearance of a placeholder in the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occurrence {
	/// The range of the full token in the source, including both delimiters.
	range: std::ops::Range<usize>,

	/// Index into [`Catalog::identities`].
	identity: usize,
}

impl Catalog {
	/// The number of distinct identities.
	pub fn len(&self) -> usize {
		self.identities.len()
	}

	/// Get the name of the identity at the given index.
	pub fn name<'s>(&self, source: &'s str, index: usize) -> &'s str {
		&source[self.identities[index].name.clone()]
	}

	/// Find the index of an identity by name.
	pub fn find(&self, source: &str, name: &str) -> Option<usize> {
		self.identities.iter().position(|x| &source[x.name.clone()] == name)
	}

	/// Iterate over all identity names in order of first appearance.
	pub fn names<'s>(&'s self, source: &'s str) -> impl ExactSizeIterator<Item = &'s str> + 's {
		self.identities.iter().map(move |x| &source[x.name.clone()])
	}

	/// Iterate over all occurrences sorted by start position, as `(identity index, range)`.
	pub fn occurrences(&self) -> impl ExactSizeIterator<Item = (usize, std::ops::Range<usize>)> + '_ {
		self.occurrences.iter().map(|x| (x.identity, x.range.clone()))
	}

	/// Iterate over the occurrence ranges of one identity in source order.
	pub fn occurrences_of(&self, index: usize) -> impl ExactSizeIterator<Item = std::ops::Range<usize>> + '_ {
		self.identities[index]
			.occurrences
			.iter()
			.map(|&i| self.occurrences[i].range.clone())
	}
}

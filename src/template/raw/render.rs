use super::Catalog;
use crate::style::StyleSheet;
use crate::ValueMap;

impl Catalog {
	/// Render the source with all placeholders substituted.
	///
	/// The source must be the same string the catalog was parsed from.
	///
	/// Placeholders without a value, or with an empty value, are rendered as the original token.
	/// If `styles` is given, occurrences of the `highlight` identity are wrapped in the focused style.
	pub fn render<'a, M>(
		&self,
		source: &str,
		values: &'a M,
		highlight: Option<&str>,
		styles: Option<&StyleSheet>,
	) -> String
	where
		M: ValueMap<'a> + ?Sized,
		M::Value: AsRef<str>,
	{
		let mut output = String::with_capacity(source.len() + source.len() / 8);
		output.push_str(source);

		// Growth of the output relative to the source, from all substitutions so far.
		// Occurrences are sorted by start, so every substitution only shifts later occurrences.
		let mut delta: isize = 0;

		for occurrence in &self.occurrences {
			let name = &source[self.identities[occurrence.identity].name.clone()];
			let token = &source[occurrence.range.clone()];
			let value = values.get(name);
			let replacement = match value.as_ref().map(|x| x.as_ref()) {
				Some(value) if !value.is_empty() => value,
				_ => token,
			};

			let styled;
			let replacement = match styles {
				Some(styles) if highlight == Some(name) => {
					styled = styles.focused.apply_to(replacement).to_string();
					styled.as_str()
				},
				_ => replacement,
			};

			// The delta can only move an occurrence back as far as the text preceding it shrank,
			// and literal text between occurrences is never removed, so this can not underflow.
			let start = occurrence.range.start.wrapping_add_signed(delta);
			let end = occurrence.range.end.wrapping_add_signed(delta);
			output.replace_range(start..end, replacement);
			delta += replacement.len() as isize - occurrence.range.len() as isize;
		}

		output
	}
}

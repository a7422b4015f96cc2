//! Line-oriented browser to pick one snippet from a catalogue.

use std::io::{BufRead, Write};

use crate::style::StyleSheet;
use crate::yaml::Snippet;
use crate::Error;

/// The title shown above the snippet list.
pub const TITLE: &str = "Snippet Search";

/// A line-oriented browser over a list of snippets.
///
/// The browser lists all snippets whose name matches the current filter, numbered from 1.
/// On every line of input:
/// * a number picks the snippet with that number,
/// * an empty line picks the first listed snippet,
/// * anything else becomes the new filter.
///
/// The end of input cancels the browser without a choice.
#[derive(Debug)]
pub struct Browser<'a> {
	snippets: &'a [Snippet],
	styles: StyleSheet,
}

impl<'a> Browser<'a> {
	/// Create a browser over a list of snippets.
	pub fn new(snippets: &'a [Snippet]) -> Self {
		Self {
			snippets,
			styles: StyleSheet::default(),
		}
	}

	/// Use the given style sheet.
	pub fn with_styles(mut self, styles: StyleSheet) -> Self {
		self.styles = styles;
		self
	}

	/// Get the snippets whose name contains the filter, ignoring case.
	pub fn matching(&self, filter: &str) -> Vec<&'a Snippet> {
		let filter = filter.to_lowercase();
		self.snippets
			.iter()
			.filter(|x| x.name.to_lowercase().contains(&filter))
			.collect()
	}

	/// Run the browser until a snippet is picked or the input ends.
	pub fn run(&self, mut input: impl BufRead, mut output: impl Write) -> Result<Option<&'a Snippet>, Error> {
		let mut filter = String::new();
		let mut line = String::new();
		loop {
			let matches = self.matching(&filter);
			self.write_list(&mut output, &filter, &matches)?;
			write!(output, "{}", self.styles.focused.apply_to("> "))?;
			output.flush()?;

			line.clear();
			if input.read_line(&mut line)? == 0 {
				writeln!(output)?;
				return Ok(None);
			}

			let entry = line.trim();
			if entry.is_empty() {
				if let Some(&first) = matches.first() {
					return Ok(Some(first));
				}
			} else if let Ok(number) = entry.parse::<usize>() {
				match number.checked_sub(1).and_then(|i| matches.get(i).copied()) {
					Some(choice) => return Ok(Some(choice)),
					None => writeln!(output, "No snippet with number {number}.")?,
				}
			} else if self.matching(entry).is_empty() {
				writeln!(output, "No snippets match {entry:?}.")?;
			} else {
				log::trace!("Filtering snippets by {entry:?}");
				filter = entry.to_owned();
			}
		}
	}

	fn write_list(&self, output: &mut impl Write, filter: &str, matches: &[&Snippet]) -> std::io::Result<()> {
		writeln!(output)?;
		if filter.is_empty() {
			writeln!(output, "{TITLE}")?;
		} else {
			writeln!(output, "{TITLE} {}", self.styles.blurred.apply_to(format!("(filter: {filter})")))?;
		}
		let width = matches.len().to_string().len();
		for (i, snippet) in matches.iter().enumerate() {
			writeln!(output, "{:>width$}. {}", i + 1, snippet.name)?;
			writeln!(output, "{:width$}  {}", "", self.styles.blurred.apply_to(&snippet.snippet))?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod test {
	use std::io::Cursor;

	use assert2::{assert, check, let_assert};

	use super::*;

	fn snippets() -> Vec<Snippet> {
		[
			("git rebase onto", "git rebase --onto %commit%^ %commit%"),
			("git checkout", "git checkout %branch%"),
			("kubectl logs", "kubectl -n %ns% logs %pod%"),
		]
		.into_iter()
		.map(|(name, snippet)| Snippet {
			name: name.into(),
			snippet: snippet.into(),
		})
		.collect()
	}

	fn pick(snippets: &[Snippet], input: &str) -> (Option<String>, String) {
		let browser = Browser::new(snippets).with_styles(StyleSheet::plain());
		let mut output = Vec::new();
		let_assert!(Ok(choice) = browser.run(Cursor::new(input), &mut output));
		(choice.map(|x| x.name.clone()), String::from_utf8_lossy(&output).into_owned())
	}

	#[test]
	fn pick_by_number() {
		let snippets = snippets();
		let (choice, output) = pick(&snippets, "3\n");
		check!(choice.as_deref() == Some("kubectl logs"));
		#[rustfmt::skip]
		assert!(output == concat!(
			"\n",
			"Snippet Search\n",
			"1. git rebase onto\n",
			"   git rebase --onto %commit%^ %commit%\n",
			"2. git checkout\n",
			"   git checkout %branch%\n",
			"3. kubectl logs\n",
			"   kubectl -n %ns% logs %pod%\n",
			"> ",
		));
	}

	#[test]
	fn pick_after_filter() {
		let snippets = snippets();
		let (choice, output) = pick(&snippets, "GIT\n2\n");
		check!(choice.as_deref() == Some("git checkout"));
		check!(output.contains("Snippet Search (filter: GIT)\n"));
		check!(!output.ends_with("kubectl logs\n> "));
	}

	#[test]
	fn empty_line_picks_first_match() {
		let snippets = snippets();
		let (choice, _) = pick(&snippets, "logs\n\n");
		check!(choice.as_deref() == Some("kubectl logs"));
	}

	#[test]
	fn invalid_choices_are_reported() {
		let snippets = snippets();
		let (choice, output) = pick(&snippets, "0\n9\nnothing\n");
		check!(choice == None);
		check!(output.contains("No snippet with number 0."));
		check!(output.contains("No snippet with number 9."));
		check!(output.contains("No snippets match \"nothing\"."));
	}

	#[test]
	fn end_of_input_cancels() {
		let (choice, _) = pick(&snippets(), "");
		check!(choice == None);
		let (choice, _) = pick(&[], "\n");
		check!(choice == None);
	}
}

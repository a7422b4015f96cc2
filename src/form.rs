//! Line-oriented input form to fill in the placeholders of a session.
//!
//! The form shows one input field per placeholder, in order of first appearance in the template.
//! Every field is labeled with the placeholder name.
//! Before every field, the form writes a styled preview of the template with the current values,
//! with the placeholder of the field highlighted.

use std::io::{BufRead, Write};

use unicode_width::UnicodeWidthStr;

use crate::{Error, Session};

/// The default maximum number of characters accepted for one value.
pub const CHAR_LIMIT: usize = 32;

/// Input that clears the value of a field.
pub const CLEAR: &str = "-";

/// How a form run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	/// Every field was visited.
	Completed,

	/// The input ended before every field was visited.
	///
	/// Values entered so far are kept in the session.
	Interrupted,
}

/// A line-oriented input form for a [`Session`].
#[derive(Debug)]
pub struct Form<'a> {
	session: &'a mut Session,
	char_limit: usize,
	preview: bool,
}

impl<'a> Form<'a> {
	/// Create a form for a session.
	pub fn new(session: &'a mut Session) -> Self {
		Self {
			session,
			char_limit: CHAR_LIMIT,
			preview: true,
		}
	}

	/// Set the maximum number of characters accepted for one value.
	///
	/// Longer input is truncated.
	pub fn char_limit(mut self, char_limit: usize) -> Self {
		self.char_limit = char_limit;
		self
	}

	/// Enable or disable the preview before every field.
	pub fn preview(mut self, preview: bool) -> Self {
		self.preview = preview;
		self
	}

	/// Run the form.
	///
	/// Reads one line of input per field from `input`, and writes previews and prompts to `output`.
	/// An empty line keeps the current value of the field, and a line with only [`CLEAR`] removes it.
	///
	/// Focus is cleared when the form is done.
	pub fn run(&mut self, mut input: impl BufRead, mut output: impl Write) -> Result<Outcome, Error> {
		let identities: Vec<String> = self.session.identities().map(str::to_owned).collect();
		let label_width = identities.iter().map(|x| x.width()).max().unwrap_or(0);

		let mut outcome = Outcome::Completed;
		let mut line = String::new();
		for identity in &identities {
			self.session.focus(Some(identity.as_str()));
			if self.preview {
				writeln!(output, "{}", self.session.render(true))?;
			}
			self.write_prompt(&mut output, identity, label_width)?;
			output.flush()?;

			line.clear();
			if input.read_line(&mut line)? == 0 {
				log::trace!("Input ended at field {identity:?}");
				writeln!(output)?;
				outcome = Outcome::Interrupted;
				break;
			}

			let value = truncate(line.trim_end_matches(['\n', '\r']), self.char_limit);
			if value.is_empty() {
				log::trace!("Keeping value of field {identity:?}");
			} else if value == CLEAR {
				log::trace!("Clearing field {identity:?}");
				self.session.clear(identity);
			} else {
				log::trace!("Setting field {identity:?} to {value:?}");
				self.session.set(identity, value);
			}
		}

		self.session.focus(None);
		if self.preview && !identities.is_empty() {
			writeln!(output, "{}", self.session.render(true))?;
		}
		output.flush()?;
		Ok(outcome)
	}

	fn write_prompt(&self, output: &mut impl Write, identity: &str, label_width: usize) -> std::io::Result<()> {
		let styles = self.session.styles();
		let padding = " ".repeat(label_width - identity.width());
		let prompt = format!("{identity}{padding}> ");
		write!(output, "{}", styles.focused.apply_to(prompt))?;
		let current = self.session.get(identity);
		if !current.is_empty() {
			write!(output, "{} ", styles.blurred.apply_to(format!("[{current}]")))?;
		}
		Ok(())
	}
}

/// Truncate a string to at most `limit` characters.
fn truncate(value: &str, limit: usize) -> &str {
	match value.char_indices().nth(limit) {
		Some((end, _)) => &value[..end],
		None => value,
	}
}

#[cfg(test)]
mod test {
	use std::io::Cursor;

	use assert2::{assert, check, let_assert};

	use super::*;
	use crate::style::StyleSheet;

	fn run(session: &mut Session, input: &str) -> (Outcome, String) {
		let mut output = Vec::new();
		let_assert!(Ok(outcome) = Form::new(session).run(Cursor::new(input), &mut output));
		let_assert!(Ok(output) = String::from_utf8(output));
		(outcome, output)
	}

	fn session(source: &str) -> Session {
		Session::new(source).with_styles(StyleSheet::plain())
	}

	#[test]
	fn fills_every_field_in_order() {
		let mut session = session("git rebase --onto %commit%^ %commit% # %note%");
		let (outcome, output) = run(&mut session, "abc123\nsquash\n");
		assert!(outcome == Outcome::Completed);
		assert!(session.render(false) == "git rebase --onto abc123^ abc123 # squash");
		assert!(session.focused() == None);
		#[rustfmt::skip]
		assert!(output == concat!(
			"git rebase --onto %commit%^ %commit% # %note%\n",
			"commit> ",
			"git rebase --onto abc123^ abc123 # %note%\n",
			"note  > ",
			"git rebase --onto abc123^ abc123 # squash\n",
		));
	}

	#[test]
	fn end_of_input_keeps_entered_values() {
		let mut session = session("%a% %b% %c%");
		let (outcome, _) = run(&mut session, "1\n");
		check!(outcome == Outcome::Interrupted);
		check!(session.render(false) == "1 %b% %c%");
	}

	#[test]
	fn empty_line_keeps_current_value() {
		let mut session = session("%a% %b%");
		session.set("a", "preset");
		let (_, output) = run(&mut session, "\r\nx\r\n");
		check!(session.render(false) == "preset x");
		check!(output.contains("a> [preset] "));
	}

	#[test]
	fn dash_clears_current_value() {
		let mut session = session("%a% %b%");
		session.set("a", "preset");
		session.set("b", "kept");
		let (outcome, _) = run(&mut session, "-\n\n");
		check!(outcome == Outcome::Completed);
		check!(session.get("a") == "");
		check!(session.render(false) == "%a% kept");
	}

	#[test]
	fn values_are_truncated() {
		let mut session = session("%a% %b%");
		let long = "x".repeat(40);
		let _ = run(&mut session, &format!("{long}\nnaïve-日本\n"));
		check!(session.get("a") == "x".repeat(CHAR_LIMIT));
		check!(session.get("b") == "naïve-日本");

		let mut output = Vec::new();
		let mut session = self::session("%a%");
		let_assert!(Ok(_) = Form::new(&mut session).char_limit(3).preview(false).run(Cursor::new("日本語です\n"), &mut output));
		check!(session.get("a") == "日本語");
		check!(output == b"a> ");
	}

	#[test]
	fn empty_template_has_no_fields() {
		let mut session = session("nothing to fill");
		let (outcome, output) = run(&mut session, "ignored\n");
		check!(outcome == Outcome::Completed);
		check!(output == "");
		check!(session.render(false) == "nothing to fill");
	}

	#[test]
	fn truncate_on_char_boundaries() {
		check!(truncate("abc", 5) == "abc");
		check!(truncate("abc", 2) == "ab");
		check!(truncate("日本語", 1) == "日");
		check!(truncate("", 0) == "");
	}
}

use std::collections::HashMap;

use crate::style::StyleSheet;
use crate::Template;

/// The editing state of one template.
///
/// A session owns the parsed [`Template`], the current value of every placeholder,
/// and the placeholder that currently has focus.
/// The input form drives a session by calling [`Self::set()`] and [`Self::focus()`]
/// for every input event, and [`Self::render()`] to get the text to display.
#[derive(Debug, Clone)]
pub struct Session {
	template: Template,
	values: HashMap<String, String>,
	focus: Option<String>,
	styles: StyleSheet,
}

impl Session {
	/// Create a new session for a template, with no values and no focus.
	pub fn new(template: impl Into<Template>) -> Self {
		Self {
			template: template.into(),
			values: HashMap::new(),
			focus: None,
			styles: StyleSheet::default(),
		}
	}

	/// Use the given style sheet for styled rendering.
	pub fn with_styles(mut self, styles: StyleSheet) -> Self {
		self.styles = styles;
		self
	}

	/// Get the template being edited.
	#[inline]
	pub fn template(&self) -> &Template {
		&self.template
	}

	/// Get the style sheet used for styled rendering.
	#[inline]
	pub fn styles(&self) -> &StyleSheet {
		&self.styles
	}

	/// Get all values that have been set.
	#[inline]
	pub fn values(&self) -> &HashMap<String, String> {
		&self.values
	}

	/// Iterate over the placeholder names, in order of first appearance in the template.
	///
	/// There is exactly one input field per identity.
	pub fn identities(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
		self.template.identities()
	}

	/// Set the value of a placeholder, overwriting any previous value.
	///
	/// The value is not validated.
	/// Setting a value for a name that is not in the template is allowed, but has no effect on rendering.
	pub fn set(&mut self, identity: &str, value: impl Into<String>) {
		self.values.insert(identity.to_owned(), value.into());
	}

	/// Get the value of a placeholder, or an empty string if it was never set.
	pub fn get(&self, identity: &str) -> &str {
		self.values.get(identity).map_or("", String::as_str)
	}

	/// Remove the value of a placeholder, so it renders as the placeholder itself again.
	pub fn clear(&mut self, identity: &str) {
		self.values.remove(identity);
	}

	/// Set or clear the placeholder that has focus.
	pub fn focus(&mut self, identity: Option<&str>) {
		self.focus = identity.map(str::to_owned);
	}

	/// Get the placeholder that has focus, if any.
	pub fn focused(&self) -> Option<&str> {
		self.focus.as_deref()
	}

	/// Render the template with the current values.
	///
	/// If `styled` is true, the placeholder with focus is highlighted using the style sheet of the session.
	/// If `styled` is false, the result is the final output text.
	pub fn render(&self, styled: bool) -> String {
		let styles = styled.then_some(&self.styles);
		self.template.render(&self.values, self.focused(), styles)
	}

	/// Consume the session and render the final output text.
	pub fn finish(self) -> String {
		self.render(false)
	}
}

#[cfg(test)]
mod test {
	use assert2::{assert, check};

	use super::*;

	fn forced() -> StyleSheet {
		StyleSheet::default().force_styling(true)
	}

	#[test]
	fn set_and_get() {
		let mut session = Session::new("%a% and %b%");
		check!(session.get("a") == "");
		session.set("a", "X");
		check!(session.get("a") == "X");
		check!(session.render(false) == "X and %b%");
		session.set("a", "Y");
		check!(session.render(false) == "Y and %b%");
		session.clear("a");
		check!(session.get("a") == "");
		check!(session.render(false) == "%a% and %b%");
	}

	#[test]
	fn explicit_empty_value_renders_token() {
		let mut session = Session::new("%a%");
		session.set("a", "");
		check!(session.render(false) == "%a%");
		check!(session.values().len() == 1);
	}

	#[test]
	fn unknown_identity_is_ignored() {
		let mut session = Session::new("%a%");
		session.set("zzz", "value");
		check!(session.get("zzz") == "value");
		check!(session.render(false) == "%a%");
	}

	#[test]
	fn identities_drive_fields() {
		let session = Session::new("git rebase --onto %commit%^ %commit% %branch%");
		check!(session.identities().collect::<Vec<_>>() == ["commit", "branch"]);
		check!(Session::new("").identities().len() == 0);
	}

	#[test]
	fn focus_only_affects_styled_render() {
		let mut session = Session::new("%a% %b%").with_styles(forced());
		session.set("a", "1");
		session.focus(Some("a"));
		check!(session.focused() == Some("a"));
		check!(session.render(false) == "1 %b%");
		check!(session.render(true) == "\x1b[38;5;205m1\x1b[0m %b%");

		session.focus(None);
		check!(session.focused() == None);
		check!(session.render(true) == "1 %b%");
	}

	#[test]
	fn render_is_idempotent() {
		let mut session = Session::new("a %x% b %x% c").with_styles(forced());
		session.set("x", "LONG_VALUE");
		session.focus(Some("x"));
		let styled = session.render(true);
		let plain = session.render(false);
		for _ in 0..3 {
			assert!(session.render(true) == styled);
			assert!(session.render(false) == plain);
		}
		check!(session.finish() == "a LONG_VALUE b LONG_VALUE c");
	}
}

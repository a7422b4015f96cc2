//! Display styles for interactive rendering.

use console::Style;

/// The ANSI 256-color code used for the focused placeholder and input field.
pub const FOCUSED_COLOR: u8 = 205;

/// The ANSI 256-color code used for secondary text, like key hints.
pub const BLURRED_COLOR: u8 = 240;

/// The styles used while editing a template interactively.
///
/// A style sheet is passed explicitly to every styled render call.
/// Rendering without a style sheet always produces the plain output text.
#[derive(Debug, Clone)]
pub struct StyleSheet {
	/// Style for the placeholder that currently has focus, and its input field.
	pub focused: Style,

	/// Style for secondary text.
	pub blurred: Style,
}

impl StyleSheet {
	/// Create a style sheet from explicit styles.
	pub fn new(focused: Style, blurred: Style) -> Self {
		Self { focused, blurred }
	}

	/// Create a style sheet with no styling at all.
	pub fn plain() -> Self {
		Self::new(Style::new(), Style::new())
	}

	/// Create the default style sheet for output on standard error.
	///
	/// Colors are only emitted if standard error is a terminal that supports them.
	pub fn for_stderr() -> Self {
		Self::new(
			Style::new().color256(FOCUSED_COLOR).for_stderr(),
			Style::new().color256(BLURRED_COLOR).for_stderr(),
		)
	}

	/// Force styling on or off, regardless of the terminal.
	pub fn force_styling(self, value: bool) -> Self {
		Self::new(self.focused.force_styling(value), self.blurred.force_styling(value))
	}
}

impl Default for StyleSheet {
	fn default() -> Self {
		Self::for_stderr()
	}
}

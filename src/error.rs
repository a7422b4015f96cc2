//! Module containing error details.
//!
//! Parsing and rendering templates can not fail.
//! These errors come from loading snippet catalogues and from terminal I/O.

use std::path::{Path, PathBuf};

/// An error that can occur while loading snippets or talking to the terminal.
#[derive(Debug)]
pub enum Error {
	/// Reading or writing a file or stream failed.
	Io(IoError),

	/// A snippet file does not contain a valid snippet catalogue.
	#[cfg(feature = "yaml")]
	#[cfg_attr(feature = "doc-cfg", doc(cfg(feature = "yaml")))]
	Yaml(YamlError),

	/// The root snippet file does not exist.
	MissingConfig(MissingConfig),

	/// The snippet files did not define any snippet.
	NoSnippets(NoSnippets),
}

impl From<IoError> for Error {
	fn from(other: IoError) -> Self {
		Self::Io(other)
	}
}

#[cfg(feature = "yaml")]
impl From<YamlError> for Error {
	fn from(other: YamlError) -> Self {
		Self::Yaml(other)
	}
}

impl From<MissingConfig> for Error {
	fn from(other: MissingConfig) -> Self {
		Self::MissingConfig(other)
	}
}

impl From<NoSnippets> for Error {
	fn from(other: NoSnippets) -> Self {
		Self::NoSnippets(other)
	}
}

impl From<std::io::Error> for Error {
	fn from(other: std::io::Error) -> Self {
		Self::Io(IoError { path: None, inner: other })
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Io(e) => Some(&e.inner),
			#[cfg(feature = "yaml")]
			Self::Yaml(e) => Some(&e.inner),
			Self::MissingConfig(_) => None,
			Self::NoSnippets(_) => None,
		}
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Io(e) => e.fmt(f),
			#[cfg(feature = "yaml")]
			Self::Yaml(e) => e.fmt(f),
			Self::MissingConfig(e) => e.fmt(f),
			Self::NoSnippets(e) => e.fmt(f),
		}
	}
}

/// Reading or writing a file or stream failed.
#[derive(Debug)]
pub struct IoError {
	/// The path of the file, if the error is about a file.
	pub path: Option<PathBuf>,

	/// The underlying I/O error.
	pub inner: std::io::Error,
}

impl IoError {
	pub(crate) fn with_path(path: &Path, inner: std::io::Error) -> Self {
		Self {
			path: Some(path.to_owned()),
			inner,
		}
	}
}

impl std::fmt::Display for IoError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match &self.path {
			Some(path) => write!(f, "{}: {}", path.display(), self.inner),
			None => write!(f, "{}", self.inner),
		}
	}
}

/// A snippet file does not contain a valid snippet catalogue.
#[cfg(feature = "yaml")]
#[cfg_attr(feature = "doc-cfg", doc(cfg(feature = "yaml")))]
#[derive(Debug)]
pub struct YamlError {
	/// The path of the snippet file.
	pub path: PathBuf,

	/// The underlying YAML error.
	pub inner: serde_yaml::Error,
}

#[cfg(feature = "yaml")]
impl std::fmt::Display for YamlError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}: {}", self.path.display(), self.inner)
	}
}

#[cfg(feature = "yaml")]
impl YamlError {
	/// Get the byte range in the source text that contains the error.
	///
	/// Returns `None` if the YAML parser did not report a location.
	/// Locations past the end of `source` are reported as an empty range at the end.
	pub fn source_range(&self, source: &str) -> Option<std::ops::Range<usize>> {
		let location = self.inner.location()?;
		let mut line_start = 0;
		let mut lines = source.split_inclusive('\n');
		for _ in 1..location.line() {
			match lines.next() {
				Some(line) => line_start += line.len(),
				None => break,
			}
		}
		let Some(line) = lines.next() else {
			return Some(source.len()..source.len());
		};
		let line = line.trim_end_matches(['\n', '\r']);
		let (offset, c) = line
			.char_indices()
			.nth(location.column().saturating_sub(1))
			.unwrap_or((line.len(), ' '));
		let start = line_start + offset;
		Some(start..start + c.len_utf8().min(line.len() - offset))
	}

	/// Write source highlighting for the error location.
	///
	/// The highlighting ends with a newline.
	///
	/// Note: this function doesn't print anything if there is no location or the source line exceeds 100 characters in width.
	pub fn write_source_highlighting(&self, f: &mut impl std::fmt::Write, source: &str) -> std::fmt::Result {
		use unicode_width::UnicodeWidthStr;

		let Some(range) = self.source_range(source) else {
			return Ok(());
		};
		let start = line_start(source, range.start);
		let end = line_end(source, range.start);
		let line = &source[start..end];
		if line.width() > 100 {
			return Ok(());
		}
		write!(f, "  {}\n  ", line)?;
		write_underline(f, line, range.start - start..range.end - start)?;
		writeln!(f)
	}

	/// Get source highlighting for the error location as a string.
	///
	/// The highlighting ends with a newline.
	pub fn source_highlighting(&self, source: &str) -> String {
		let mut output = String::new();
		// Writing to a String can not fail.
		let _ = self.write_source_highlighting(&mut output, source);
		output
	}
}

/// The root snippet file does not exist.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub struct MissingConfig {
	/// The path that was looked up.
	pub path: PathBuf,
}

impl std::fmt::Display for MissingConfig {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "No snippet config defined: {} does not exist", self.path.display())
	}
}

/// The snippet files did not define any snippet.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub struct NoSnippets {
	/// The root snippet file.
	pub root: PathBuf,
}

impl std::fmt::Display for NoSnippets {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "No snippets found in {} or its includes", self.root.display())
	}
}

#[cfg(feature = "yaml")]
fn line_start(source: &str, position: usize) -> usize {
	match source[..position].rfind(['\n', '\r']) {
		Some(line_end) => line_end + 1,
		None => 0,
	}
}

#[cfg(feature = "yaml")]
fn line_end(source: &str, position: usize) -> usize {
	match source[position..].find(['\n', '\r']) {
		Some(line_end) => position + line_end,
		None => source.len(),
	}
}

#[cfg(feature = "yaml")]
fn write_underline(f: &mut impl std::fmt::Write, line: &str, range: std::ops::Range<usize>) -> std::fmt::Result {
	use unicode_width::UnicodeWidthStr;
	let spaces = line[..range.start].width();
	let carets = line[range].width().max(1);
	write!(f, "{}", " ".repeat(spaces))?;
	write!(f, "{}", "^".repeat(carets))?;
	Ok(())
}

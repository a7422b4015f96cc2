//! Support for loading snippet catalogues from YAML files.
//!
//! A snippet file looks like this:
//!
//! ```yaml
//! items:
//!   - name: rebase onto
//!     snippet: git rebase --onto %commit%^ %commit%
//! includes:
//!   - snippets/kubernetes.yaml
//! ```
//!
//! Both keys are optional.
//! Included files are loaded recursively, and every file is loaded at most once,
//! so include cycles are harmless.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Error, IoError, MissingConfig, NoSnippets, YamlError};
use crate::Template;

/// The default name of the root snippet file, relative to the working directory.
pub const DEFAULT_CONFIG: &str = "snipsearch.yaml";

/// A named snippet template.
///
/// Missing keys are read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Snippet {
	/// The name shown in the snippet browser.
	pub name: String,

	/// The template text, which may contain `%name%` placeholders.
	pub snippet: String,
}

impl Snippet {
	/// Parse the snippet text as a template.
	pub fn template(&self) -> Template {
		Template::parse(self.snippet.as_str())
	}
}

/// The contents of one snippet file.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
	/// The snippets defined in this file.
	pub items: Vec<Snippet>,

	/// Other snippet files to load.
	///
	/// Relative paths are resolved against the current working directory.
	pub includes: Vec<PathBuf>,
}

impl Config {
	/// Parse a snippet file from a string.
	///
	/// An empty document is an empty config.
	#[allow(clippy::should_implement_trait)]
	pub fn from_str(data: &str) -> Result<Self, serde_yaml::Error> {
		if data.trim().is_empty() {
			return Ok(Self::default());
		}
		serde_yaml::from_str(data)
	}

	/// Read and parse a snippet file.
	pub fn from_file(path: &Path) -> Result<Self, Error> {
		let data = std::fs::read_to_string(path).map_err(|e| IoError::with_path(path, e))?;
		Self::from_str(&data).map_err(|inner| {
			YamlError {
				path: path.to_owned(),
				inner,
			}
			.into()
		})
	}
}

/// Load all snippets from a root snippet file and everything it includes.
///
/// Files are visited depth first.
/// The includes of a file are taken from a stack, so the last include of a file is loaded first.
/// A file that was already loaded (by absolute path) is skipped.
///
/// Returns an error if the root file does not exist, if any file can not be read or parsed,
/// or if no snippets were found at all.
pub fn load(root: &Path) -> Result<Vec<Snippet>, Error> {
	match std::fs::metadata(root) {
		Ok(_) => (),
		Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
			return Err(MissingConfig { path: root.to_owned() }.into());
		},
		Err(e) => return Err(IoError::with_path(root, e).into()),
	}

	let mut snippets = Vec::new();
	let mut visited = HashSet::new();
	let mut stack = vec![root.to_owned()];

	while let Some(next) = stack.pop() {
		let path = std::path::absolute(&next).map_err(|e| IoError::with_path(&next, e))?;
		if !visited.insert(path.clone()) {
			log::debug!("Skipping {}: already loaded", path.display());
			continue;
		}

		log::debug!("Loading snippets from {}", path.display());
		let config = Config::from_file(&path)?;
		log::debug!(
			"Found {} snippets and {} includes in {}",
			config.items.len(),
			config.includes.len(),
			path.display()
		);
		snippets.extend(config.items);
		stack.extend(config.includes);
	}

	if snippets.is_empty() {
		return Err(NoSnippets { root: root.to_owned() }.into());
	}

	Ok(snippets)
}

#[cfg(test)]
mod test {
	use std::fs;

	use assert2::{assert, check, let_assert};

	use super::*;

	fn names(snippets: &[Snippet]) -> Vec<&str> {
		snippets.iter().map(|x| x.name.as_str()).collect()
	}

	#[test]
	fn test_from_str() {
		#[rustfmt::skip]
		let_assert!(Ok(config) = Config::from_str(concat!(
			"items:\n",
			"  - name: rebase\n",
			"    snippet: git rebase --onto %commit%^ %commit%\n",
			"includes:\n",
			"  - other.yaml\n",
		)));
		assert!(config.items.len() == 1);
		assert!(config.items[0].name == "rebase");
		assert!(config.items[0].template().identities().collect::<Vec<_>>() == ["commit"]);
		assert!(config.includes == [PathBuf::from("other.yaml")]);
	}

	#[test]
	fn test_optional_keys() {
		let_assert!(Ok(config) = Config::from_str("  \n"));
		check!(config == Config::default());
		check!(let Ok(_) = Config::from_str("includes: [a.yaml]\n"));
		check!(let Ok(_) = Config::from_str("items: []\nextra: ignored\n"));
	}

	#[test]
	fn test_missing_snippet_keys() {
		let_assert!(Ok(config) = Config::from_str("items: [{name: only}, {snippet: 'echo %x%'}]\n"));
		assert!(config.items.len() == 2);
		check!(config.items[0].name == "only");
		check!(config.items[0].snippet == "");
		check!(config.items[1].name == "");
		check!(config.items[1].template().identities().collect::<Vec<_>>() == ["x"]);
	}

	#[test]
	fn test_load_with_includes() {
		let_assert!(Ok(dir) = tempfile::tempdir());
		let root = dir.path().join("root.yaml");
		let a = dir.path().join("a.yaml");
		let b = dir.path().join("b.yaml");
		fs::write(&root, format!(
			"items:\n  - {{name: root, snippet: '%x%'}}\nincludes:\n  - {}\n  - {}\n",
			a.display(),
			b.display(),
		)).unwrap();
		// `b` includes `a` and the root again, which must not be loaded twice.
		fs::write(&a, "items:\n  - {name: a, snippet: 'echo %a%'}\n").unwrap();
		fs::write(&b, format!(
			"items:\n  - {{name: b, snippet: 'echo %b%'}}\nincludes: [{}, {}]\n",
			a.display(),
			root.display(),
		)).unwrap();

		let_assert!(Ok(snippets) = load(&root));
		assert!(names(&snippets) == ["root", "b", "a"]);
	}

	#[test]
	fn test_missing_root() {
		let_assert!(Ok(dir) = tempfile::tempdir());
		let root = dir.path().join("snipsearch.yaml");
		let_assert!(Err(Error::MissingConfig(e)) = load(&root));
		assert!(e.path == root);
	}

	#[test]
	fn test_unreadable_root_is_not_missing() {
		let_assert!(Ok(dir) = tempfile::tempdir());
		let file = dir.path().join("file");
		fs::write(&file, "").unwrap();
		// A path below a regular file fails with something other than "not found".
		let root = file.join("snipsearch.yaml");
		let_assert!(Err(Error::Io(e)) = load(&root));
		assert!(e.path == Some(root));
	}

	#[test]
	fn test_missing_include() {
		let_assert!(Ok(dir) = tempfile::tempdir());
		let root = dir.path().join("root.yaml");
		let missing = dir.path().join("missing.yaml");
		fs::write(&root, format!("includes: [{}]\n", missing.display())).unwrap();
		let_assert!(Err(Error::Io(e)) = load(&root));
		assert!(e.path == Some(missing));
	}

	#[test]
	fn test_invalid_yaml() {
		let_assert!(Ok(dir) = tempfile::tempdir());
		let root = dir.path().join("root.yaml");
		fs::write(&root, "items: [\n").unwrap();
		let_assert!(Err(Error::Yaml(e)) = load(&root));
		assert!(e.to_string().starts_with(&root.display().to_string()));
	}

	#[test]
	fn test_no_snippets() {
		let_assert!(Ok(dir) = tempfile::tempdir());
		let root = dir.path().join("root.yaml");
		fs::write(&root, "items: []\n").unwrap();
		let_assert!(Err(Error::NoSnippets(e)) = load(&root));
		assert!(e.root == root);
	}
}

//! Lookup of placeholder values during rendering.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Source of placeholder values, looked up by placeholder name.
///
/// The render engine asks the map for the value of every placeholder occurrence.
/// A placeholder that has no value in the map is rendered as its original token.
///
/// Implemented for [`HashMap`] and [`BTreeMap`] with `String` or `&str` keys,
/// for slices of key-value pairs and for the empty map [`NoValues`].
pub trait ValueMap<'a> {
	/// The type returned by the [`get()`][Self::get] function.
	type Value;

	/// Get the value of a placeholder.
	fn get(&'a self, name: &str) -> Option<Self::Value>;
}

/// Key-value slices, searched front to back.
///
/// The first pair with a matching name wins.
/// Fine for the handful of presets a snippet usually has.
///
/// # Example
/// ```rust
/// # use snipfill::ValueMap;
/// let values: &[(&str, &str)] = &[("commit", "abc123"), ("commit", "ignored")];
///
/// assert_eq!(ValueMap::get(values, "commit"), Some(&"abc123"));
/// assert_eq!(ValueMap::get(values, "branch"), None);
/// ```
impl<'a, K, V> ValueMap<'a> for [(K, V)]
where
	K: Borrow<str>,
	V: 'a,
{
	type Value = &'a V;

	fn get(&'a self, name: &str) -> Option<Self::Value> {
		self.iter().find_map(|(k, v)| (k.borrow() == name).then_some(v))
	}
}

impl<'a, K, V, S> ValueMap<'a> for HashMap<K, V, S>
where
	K: Borrow<str> + Hash + Eq,
	V: 'a,
	S: BuildHasher,
{
	type Value = &'a V;

	#[inline]
	fn get(&'a self, name: &str) -> Option<Self::Value> {
		HashMap::get(self, name)
	}
}

impl<'a, K, V> ValueMap<'a> for BTreeMap<K, V>
where
	K: Borrow<str> + Ord,
	V: 'a,
{
	type Value = &'a V;

	#[inline]
	fn get(&'a self, name: &str) -> Option<Self::Value> {
		BTreeMap::get(self, name)
	}
}

/// A map without any values.
///
/// Rendering with this map gives back the template source unchanged.
#[derive(Debug)]
pub struct NoValues;

impl<'a> ValueMap<'a> for NoValues {
	type Value = NeverValue;

	#[inline]
	fn get(&'a self, _name: &str) -> Option<Self::Value> {
		None
	}
}

/// Value type of [`NoValues`], which can not be constructed.
#[derive(Debug)]
pub enum NeverValue {}

impl<T: ?Sized> AsRef<T> for NeverValue {
	#[inline]
	fn as_ref(&self) -> &T {
		match *self {}
	}
}

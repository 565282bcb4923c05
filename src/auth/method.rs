//! Requested multifactor method tokens.

// std
use std::slice::Iter;
// self
use crate::_prelude::*;

/// Ordered collection of method tokens demanded by a request or a service policy.
///
/// Absent, empty, and whitespace-only tokens are dropped while the collection is built, so a
/// blank entry can never reach a provider's `matches` predicate. Surviving tokens are kept
/// verbatim (no trimming or case folding) because matching semantics belong to providers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequestedMethods(Vec<String>);
impl RequestedMethods {
	/// Builds a collection from possibly-absent tokens.
	pub fn new<I, S>(tokens: I) -> Self
	where
		I: IntoIterator<Item = Option<S>>,
		S: Into<String>,
	{
		Self(tokens.into_iter().flatten().map(Into::into).filter(|t| !is_blank(t)).collect())
	}

	/// Wraps a single token; `None` yields an empty collection.
	pub fn single(token: Option<&str>) -> Self {
		Self::new([token])
	}

	/// Returns an empty collection.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Number of usable tokens.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when no usable token remains.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterator over usable tokens in request order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}

	/// Returns the tokens as a slice.
	pub fn as_slice(&self) -> &[String] {
		&self.0
	}

	/// Returns true when `token` is present verbatim.
	pub fn contains(&self, token: &str) -> bool {
		self.iter().any(|method| method == token)
	}
}
impl<S> FromIterator<S> for RequestedMethods
where
	S: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self::new(iter.into_iter().map(Some))
	}
}
impl<'de> Deserialize<'de> for RequestedMethods {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let values = <Vec<Option<String>>>::deserialize(deserializer)?;

		Ok(Self::new(values))
	}
}
impl<'a> IntoIterator for &'a RequestedMethods {
	type IntoIter = MethodIter<'a>;
	type Item = &'a str;

	fn into_iter(self) -> Self::IntoIter {
		MethodIter { inner: self.0.iter() }
	}
}
impl Display for RequestedMethods {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0.join(","))
	}
}

/// Iterator over requested method tokens.
pub struct MethodIter<'a> {
	inner: Iter<'a, String>,
}
impl<'a> Iterator for MethodIter<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(String::as_str)
	}
}

fn is_blank(token: &str) -> bool {
	token.chars().all(char::is_whitespace)
}

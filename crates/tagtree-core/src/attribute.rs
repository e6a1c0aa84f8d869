//! Attribute values with set semantics.

use crate::util::html_escape;
use indexmap::IndexSet;

/// Separator used to join attribute values unless the creator picks another.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Separator used for the `style` attribute.
pub const STYLE_SEPARATOR: &str = ";";

/// The set of values held under one attribute name.
///
/// Adding a value twice keeps a single copy. Values are formatted in the order
/// they were first added. Removing the last value leaves an empty attribute,
/// which renders as `name=""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
	name: String,
	separator: String,
	values: IndexSet<String>,
}

impl Attribute {
	/// Creates an empty attribute joined by [`DEFAULT_SEPARATOR`].
	pub fn new(name: impl Into<String>) -> Self {
		Self::with_separator(name, DEFAULT_SEPARATOR)
	}

	/// Creates an empty attribute joined by `separator`.
	pub fn with_separator(name: impl Into<String>, separator: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			separator: separator.into(),
			values: IndexSet::new(),
		}
	}

	/// Returns the attribute name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the separator placed between values.
	pub fn separator(&self) -> &str {
		&self.separator
	}

	/// Returns the values in first-insertion order.
	pub fn values(&self) -> impl ExactSizeIterator<Item = &str> {
		self.values.iter().map(String::as_str)
	}

	/// Returns `true` if `value` is present.
	pub fn contains(&self, value: &str) -> bool {
		self.values.contains(value)
	}

	/// Returns `true` if every value has been removed.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Inserts `value`. Returns `false` if it was already present.
	pub fn add_value(&mut self, value: impl Into<String>) -> bool {
		self.values.insert(value.into())
	}

	/// Removes `value` if present. Returns whether anything was removed.
	pub fn remove_value(&mut self, value: &str) -> bool {
		// shift_remove keeps the remaining values in insertion order
		self.values.shift_remove(value)
	}

	/// Joins the values with the separator, without the `name=` wrapper.
	pub fn joined(&self) -> String {
		self.values
			.iter()
			.map(String::as_str)
			.collect::<Vec<_>>()
			.join(&self.separator)
	}

	/// Formats the attribute as `name="v1<sep>v2"`.
	pub fn text(&self) -> String {
		self.format(false)
	}

	pub(crate) fn format(&self, escape: bool) -> String {
		let joined = self.joined();
		if escape {
			format!("{}=\"{}\"", self.name, html_escape(&joined))
		} else {
			format!("{}=\"{}\"", self.name, joined)
		}
	}
}

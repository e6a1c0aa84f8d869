//! Node types for building HTML trees.
//!
//! This module provides the core types for representing markup in the tree.
//!
//! ## Overview
//!
//! The `Node` enum is the closed set of things that can sit in a tree: elements,
//! text leaves, comment leaves, and whole documents. Elements carry the fluent
//! mutation API; leaves hold literal content and never render a tag of their own.
//!
//! ## Example
//!
//! ```ignore
//! use tagtree_core::{Element, Node};
//!
//! let html = Element::new("div")
//!     .add_class("container")
//!     .append(Element::new("p").add_text("Hello, World!"))
//!     .render()?;
//! ```

use crate::attribute::{Attribute, DEFAULT_SEPARATOR, STYLE_SEPARATOR};
use crate::document::Document;
use crate::error::HtmlResult;
use crate::render::{RenderOptions, Renderer};
use crate::util::is_void_element;
use indexmap::IndexMap;

/// A unified representation of everything that can appear in a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// A tag with attributes and children.
	Element(Element),
	/// A literal text leaf.
	Text(TextNode),
	/// A comment leaf.
	Comment(CommentNode),
	/// A complete document, rendered with its doctype line.
	Document(Box<Document>),
}

impl Node {
	/// Creates an element.
	pub fn element(tag: impl Into<String>) -> Element {
		Element::new(tag)
	}

	/// Creates a text leaf.
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text(TextNode::new(text))
	}

	/// Creates a comment leaf.
	pub fn comment(comment: impl Into<String>) -> Self {
		Self::Comment(CommentNode::new(comment))
	}

	/// Returns `true` for text and comment leaves.
	///
	/// An element stays inline only while all of its children are inline nodes.
	pub fn is_inline(&self) -> bool {
		matches!(self, Node::Text(_) | Node::Comment(_))
	}

	/// Returns the element if this node is one.
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Node::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Returns the element mutably if this node is one.
	pub fn as_element_mut(&mut self) -> Option<&mut Element> {
		match self {
			Node::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Renders the node with default options.
	pub fn render(&self) -> HtmlResult<String> {
		self.render_with(&RenderOptions::default())
	}

	/// Renders the node with custom options.
	pub fn render_with(&self, options: &RenderOptions) -> HtmlResult<String> {
		Renderer::new(options).node(self, 0)
	}
}

/// Outcome of [`Element::try_append`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
	/// The child was pushed onto the element's children.
	Appended,
	/// The value did not carry a node and was dropped.
	Ignored,
}

impl AppendOutcome {
	/// Returns `true` if the child was appended.
	pub fn is_appended(self) -> bool {
		self == AppendOutcome::Appended
	}
}

/// A literal text leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
	text: String,
}

impl TextNode {
	/// Creates a text leaf.
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into() }
	}

	/// Returns the text payload.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Appends this leaf to `parent` and returns the parent.
	pub fn append_to(self, parent: Element) -> Element {
		parent.append(self)
	}
}

/// A comment leaf, rendered as `<!-- comment -->`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentNode {
	comment: String,
}

impl CommentNode {
	/// Creates a comment leaf.
	pub fn new(comment: impl Into<String>) -> Self {
		Self {
			comment: comment.into(),
		}
	}

	/// Returns the comment payload.
	pub fn comment(&self) -> &str {
		&self.comment
	}

	/// Appends this leaf to `parent` and returns the parent.
	pub fn append_to(self, parent: Element) -> Element {
		parent.append(self)
	}
}

/// Represents an element in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	/// The tag name (e.g., "div", "span").
	tag: String,
	/// Attributes keyed by name, in first-add order.
	attributes: IndexMap<String, Attribute>,
	/// Child nodes.
	children: Vec<Node>,
	/// Whether every child appended so far is a text or comment leaf.
	inline: bool,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
}

impl Element {
	/// Creates a new element.
	pub fn new(tag: impl Into<String>) -> Self {
		let tag = tag.into();
		let is_void = is_void_element(&tag);
		Self {
			tag,
			attributes: IndexMap::new(),
			children: Vec::new(),
			inline: true,
			is_void,
		}
	}

	/// Adds `value` to the attribute `name`, creating it with a space separator
	/// if it does not exist yet.
	pub fn add_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.add_attr_mut(name, value);
		self
	}

	/// Adds `value` to the attribute `name`, creating it with `separator` if it
	/// does not exist yet.
	///
	/// The separator only applies on creation: an existing attribute keeps the
	/// separator it was created with.
	pub fn add_attr_with_separator(
		mut self,
		name: impl Into<String>,
		value: impl Into<String>,
		separator: &str,
	) -> Self {
		self.add_attr_with_separator_mut(name, value, separator);
		self
	}

	/// Removes `value` from the attribute `name`. A no-op if either is absent.
	pub fn remove_attr(mut self, name: &str, value: &str) -> Self {
		self.remove_attr_mut(name, value);
		self
	}

	/// Adds a class.
	pub fn add_class(self, class: impl Into<String>) -> Self {
		self.add_attr("class", class)
	}

	/// Adds every whitespace-separated class in `classes`.
	pub fn add_classes(mut self, classes: &str) -> Self {
		for class in classes.split_whitespace() {
			self.add_attr_mut("class", class);
		}
		self
	}

	/// Removes a class.
	pub fn remove_class(self, class: &str) -> Self {
		self.remove_attr("class", class)
	}

	/// Adds a `key:value` declaration to the `style` attribute.
	pub fn add_style(mut self, key: &str, value: &str) -> Self {
		self.add_style_mut(key, value);
		self
	}

	/// Appends a text leaf.
	pub fn add_text(mut self, text: impl Into<String>) -> Self {
		self.add_text_mut(text);
		self
	}

	/// Appends a comment leaf.
	pub fn add_comment(mut self, comment: impl Into<String>) -> Self {
		self.add_comment_mut(comment);
		self
	}

	/// Appends a child.
	///
	/// Values that carry no node (such as `None`) are ignored. Use
	/// [`try_append`](Self::try_append) to observe that outcome.
	pub fn append(mut self, child: impl IntoNode) -> Self {
		self.try_append(child);
		self
	}

	/// Appends this element to `parent` and returns the parent.
	///
	/// `c.append_to(b).append_to(a)` builds the same tree as
	/// `a.append(b.append(c))`.
	pub fn append_to(self, parent: Element) -> Element {
		parent.append(self)
	}

	/// Adds an attribute value mutably.
	pub fn add_attr_mut(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.add_attr_with_separator_mut(name, value, DEFAULT_SEPARATOR);
	}

	/// Adds an attribute value mutably, choosing the separator on creation.
	pub fn add_attr_with_separator_mut(
		&mut self,
		name: impl Into<String>,
		value: impl Into<String>,
		separator: &str,
	) {
		let name = name.into();
		self.attributes
			.entry(name)
			.or_insert_with_key(|name| Attribute::with_separator(name.as_str(), separator))
			.add_value(value);
	}

	/// Removes an attribute value mutably. Returns whether anything was removed.
	pub fn remove_attr_mut(&mut self, name: &str, value: &str) -> bool {
		self.attributes
			.get_mut(name)
			.is_some_and(|attr| attr.remove_value(value))
	}

	/// Adds a class mutably.
	pub fn add_class_mut(&mut self, class: impl Into<String>) {
		self.add_attr_mut("class", class);
	}

	/// Removes a class mutably. Returns whether anything was removed.
	pub fn remove_class_mut(&mut self, class: &str) -> bool {
		self.remove_attr_mut("class", class)
	}

	/// Adds a style declaration mutably.
	pub fn add_style_mut(&mut self, key: &str, value: &str) {
		self.add_attr_with_separator_mut("style", format!("{key}:{value}"), STYLE_SEPARATOR);
	}

	/// Appends a text leaf mutably.
	pub fn add_text_mut(&mut self, text: impl Into<String>) {
		self.try_append(TextNode::new(text));
	}

	/// Appends a comment leaf mutably.
	pub fn add_comment_mut(&mut self, comment: impl Into<String>) {
		self.try_append(CommentNode::new(comment));
	}

	/// Appends a child mutably and reports whether it was kept.
	pub fn try_append(&mut self, child: impl IntoNode) -> AppendOutcome {
		let Some(node) = child.into_node() else {
			tracing::debug!(parent = %self.tag, "ignoring append of a value without a node");
			return AppendOutcome::Ignored;
		};
		if !node.is_inline() {
			self.inline = false;
		}
		self.children.push(node);
		AppendOutcome::Appended
	}

	/// Inserts a child before all existing children.
	pub(crate) fn prepend(&mut self, node: Node) {
		if !node.is_inline() {
			self.inline = false;
		}
		self.children.insert(0, node);
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes in first-add order.
	pub fn attributes(&self) -> impl ExactSizeIterator<Item = &Attribute> {
		self.attributes.values()
	}

	/// Returns the attribute `name`, if it was ever added.
	pub fn attribute(&self, name: &str) -> Option<&Attribute> {
		self.attributes.get(name)
	}

	/// Returns the child nodes.
	pub fn children(&self) -> &[Node] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns whether every child appended so far is a text or comment leaf.
	///
	/// Once any other child is appended this stays `false`.
	pub fn is_inline(&self) -> bool {
		self.inline
	}

	/// Renders the element with default options.
	pub fn render(&self) -> HtmlResult<String> {
		self.render_with(&RenderOptions::default())
	}

	/// Renders the element with custom options.
	pub fn render_with(&self, options: &RenderOptions) -> HtmlResult<String> {
		Renderer::new(options).element(self, 0)
	}
}

/// Trait for values that can be appended as a child.
///
/// Returning `None` means the value carries no node; [`Element::append`]
/// ignores it.
pub trait IntoNode {
	/// Converts self into a node, if it carries one.
	fn into_node(self) -> Option<Node>;
}

impl IntoNode for Node {
	fn into_node(self) -> Option<Node> {
		Some(self)
	}
}

impl IntoNode for Element {
	fn into_node(self) -> Option<Node> {
		Some(Node::Element(self))
	}
}

impl IntoNode for TextNode {
	fn into_node(self) -> Option<Node> {
		Some(Node::Text(self))
	}
}

impl IntoNode for CommentNode {
	fn into_node(self) -> Option<Node> {
		Some(Node::Comment(self))
	}
}

impl IntoNode for Document {
	fn into_node(self) -> Option<Node> {
		Some(Node::Document(Box::new(self)))
	}
}

impl IntoNode for String {
	fn into_node(self) -> Option<Node> {
		Some(Node::Text(TextNode::new(self)))
	}
}

impl IntoNode for &str {
	fn into_node(self) -> Option<Node> {
		Some(Node::Text(TextNode::new(self)))
	}
}

impl<T: IntoNode> IntoNode for Option<T> {
	fn into_node(self) -> Option<Node> {
		self.and_then(IntoNode::into_node)
	}
}

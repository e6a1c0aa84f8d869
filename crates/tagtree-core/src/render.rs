//! Renderer turning node trees into indented markup.
//!
//! Each element is rendered in three parts: the start tag, the middle (its
//! children), and the end tag. Children whose parent is still inline are joined
//! on the tag's line with single spaces; otherwise each child goes on its own
//! line, indented by one unit, and the closing tag gets a line of its own.

use crate::document::{DOCTYPE, Document};
use crate::error::{HtmlError, HtmlResult};
use crate::node::{Element, Node};
use crate::util::{html_escape, indent_lines};
use serde::Deserialize;
use std::borrow::Cow;

/// Line ending placed between rendered lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
	/// `\n`
	#[default]
	Lf,
	/// `\r\n`
	Crlf,
}

impl LineEnding {
	/// Returns the characters of this line ending.
	pub fn as_str(self) -> &'static str {
		match self {
			LineEnding::Lf => "\n",
			LineEnding::Crlf => "\r\n",
		}
	}
}

/// Options for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
	/// Indentation unit added per nesting level for block children.
	pub indent: String,
	/// Line ending used between lines.
	pub line_ending: LineEnding,
	/// Maximum element nesting depth. `None` disables the check.
	pub max_depth: Option<usize>,
	/// Whether to HTML-escape text payloads and attribute values.
	pub escape_text: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			indent: "    ".to_string(),
			line_ending: LineEnding::Lf,
			max_depth: None,
			escape_text: false,
		}
	}
}

impl RenderOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the indentation unit.
	pub fn indent(mut self, indent: impl Into<String>) -> Self {
		self.indent = indent.into();
		self
	}

	/// Sets the line ending.
	pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
		self.line_ending = line_ending;
		self
	}

	/// Uses `\r\n` between lines.
	pub fn crlf(self) -> Self {
		self.line_ending(LineEnding::Crlf)
	}

	/// Fails rendering once elements nest deeper than `limit`.
	///
	/// The root is at depth 0, so a limit of 0 only allows a childless root
	/// element.
	pub fn max_depth(mut self, limit: usize) -> Self {
		self.max_depth = Some(limit);
		self
	}

	/// Enables HTML escaping of text and attribute values.
	pub fn escape_text(mut self) -> Self {
		self.escape_text = true;
		self
	}

	/// Parses options from TOML. Missing keys keep their defaults.
	///
	/// # Example
	///
	/// ```ignore
	/// let options = RenderOptions::from_toml_str(r#"
	///     indent = "  "
	///     line_ending = "crlf"
	/// "#)?;
	/// ```
	pub fn from_toml_str(source: &str) -> HtmlResult<Self> {
		Ok(toml::from_str(source)?)
	}
}

/// Walks a tree and produces its markup.
pub(crate) struct Renderer<'a> {
	options: &'a RenderOptions,
}

impl<'a> Renderer<'a> {
	pub(crate) fn new(options: &'a RenderOptions) -> Self {
		Self { options }
	}

	pub(crate) fn node(&self, node: &Node, depth: usize) -> HtmlResult<String> {
		match node {
			Node::Element(el) => self.element(el, depth),
			Node::Text(text) => Ok(self.payload(text.text()).into_owned()),
			Node::Comment(comment) => {
				Ok(format!("<!-- {} -->", self.payload(comment.comment())))
			}
			Node::Document(doc) => self.document(doc, depth),
		}
	}

	pub(crate) fn element(&self, el: &Element, depth: usize) -> HtmlResult<String> {
		tracing::trace!(tag = el.tag_name(), depth, "rendering element");
		self.check_depth(depth)?;
		if el.is_void() && !el.children().is_empty() {
			tracing::warn!(
				tag = el.tag_name(),
				children = el.children().len(),
				"void element has children; rendering them without a closing tag"
			);
		}
		let children = el
			.children()
			.iter()
			.map(|child| self.node(child, depth + 1))
			.collect::<HtmlResult<Vec<_>>>()?;
		let attributes = el
			.attributes()
			.map(|attr| attr.format(self.options.escape_text))
			.collect::<Vec<_>>();
		Ok(self.assemble(el.tag_name(), &attributes, &children, el.is_inline(), el.is_void()))
	}

	pub(crate) fn document(&self, doc: &Document, depth: usize) -> HtmlResult<String> {
		tracing::trace!(depth, finalized = doc.is_finalized(), "rendering document");
		self.check_depth(depth)?;
		let html = doc.html();
		let mut children = vec![
			self.element(doc.head(), depth + 1)?,
			self.element(doc.body(), depth + 1)?,
		];
		// Children appended to `<html>` itself follow `head` and `body`.
		for child in html.children() {
			children.push(self.node(child, depth + 1)?);
		}
		let attributes = html
			.attributes()
			.map(|attr| attr.format(self.options.escape_text))
			.collect::<Vec<_>>();
		let markup = self.assemble(html.tag_name(), &attributes, &children, false, false);
		Ok(format!("{DOCTYPE}{}{markup}", self.options.line_ending.as_str()))
	}

	fn check_depth(&self, depth: usize) -> HtmlResult<()> {
		match self.options.max_depth {
			Some(limit) if depth > limit => Err(HtmlError::NestingTooDeep { depth, limit }),
			_ => Ok(()),
		}
	}

	fn payload<'s>(&self, text: &'s str) -> Cow<'s, str> {
		if self.options.escape_text {
			html_escape(text)
		} else {
			Cow::Borrowed(text)
		}
	}

	/// Concatenates start tag, middle and end tag.
	fn assemble(
		&self,
		tag: &str,
		attributes: &[String],
		children: &[String],
		inline: bool,
		is_void: bool,
	) -> String {
		let newline = self.options.line_ending.as_str();
		let mut output = String::new();

		output.push('<');
		output.push_str(tag);
		if !attributes.is_empty() {
			output.push(' ');
			output.push_str(&attributes.join(" "));
		}
		output.push('>');

		let block = !children.is_empty() && !inline;
		if block {
			output.push_str(newline);
			let indented = children
				.iter()
				.map(|child| indent_lines(child, &self.options.indent))
				.collect::<Vec<_>>();
			output.push_str(&indented.join(newline));
		} else {
			output.push_str(&children.join(" "));
		}

		if !is_void {
			if block {
				output.push_str(newline);
			}
			output.push_str("</");
			output.push_str(tag);
			output.push('>');
		}
		output
	}
}

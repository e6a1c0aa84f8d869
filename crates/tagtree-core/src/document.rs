//! Document wrapper with doctype, `head` and `body`.
//!
//! A [`Document`] owns a `<head>` and a `<body>` and renders them inside an
//! `<html>` element preceded by the doctype line. The title element and the
//! `lang` attribute are wired in by [`Document::finalize`], which runs exactly
//! once; [`Document::render`] finalizes on first use, so rendering repeatedly
//! returns the same markup.
//!
//! ## Example
//!
//! ```ignore
//! use tagtree_core::{Document, Element};
//!
//! let mut doc = Document::with_title("Report");
//! doc.body_mut().try_append(Element::new("h1").add_text("Totals"));
//! let html = doc.render()?;
//! ```

use crate::error::{HtmlError, HtmlResult};
use crate::node::{Element, Node};
use crate::render::{RenderOptions, Renderer};

/// Doctype line emitted before the `<html>` element.
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// Language code used when none is set.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// A complete HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
	/// The `<html>` element. `head` and `body` are rendered as its first
	/// children, followed by anything appended to it directly.
	html: Element,
	head: Element,
	body: Element,
	title: Option<String>,
	language_code: String,
	finalized: bool,
}

impl Default for Document {
	fn default() -> Self {
		Self::new()
	}
}

impl Document {
	/// Creates an untitled document in the default language.
	pub fn new() -> Self {
		Self {
			html: Element::new("html"),
			head: Element::new("head"),
			body: Element::new("body"),
			title: None,
			language_code: DEFAULT_LANGUAGE_CODE.to_string(),
			finalized: false,
		}
	}

	/// Creates a document with a title.
	pub fn with_title(title: impl Into<String>) -> Self {
		Self::new().title(title)
	}

	/// Sets the title.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.set_title(Some(title.into()));
		self
	}

	/// Sets the language code placed in the `lang` attribute.
	pub fn language_code(mut self, language_code: impl Into<String>) -> Self {
		self.set_language_code(language_code);
		self
	}

	/// Sets or clears the title mutably.
	///
	/// Changes after [`finalize`](Self::finalize) do not reach the rendered
	/// `<head>`.
	pub fn set_title(&mut self, title: Option<String>) {
		self.title = title;
	}

	/// Sets the language code mutably.
	///
	/// Changes after [`finalize`](Self::finalize) do not reach the rendered
	/// `lang` attribute.
	pub fn set_language_code(&mut self, language_code: impl Into<String>) {
		self.language_code = language_code.into();
	}

	/// Returns the title, if set.
	pub fn get_title(&self) -> Option<&str> {
		self.title.as_deref()
	}

	/// Returns the language code.
	pub fn get_language_code(&self) -> &str {
		&self.language_code
	}

	/// Returns the `<html>` element, without `head` and `body`.
	pub fn html(&self) -> &Element {
		&self.html
	}

	/// Returns the `<html>` element mutably, e.g. to add classes.
	///
	/// Children appended here render after `</body>`.
	pub fn html_mut(&mut self) -> &mut Element {
		&mut self.html
	}

	/// Returns the `<head>` element.
	pub fn head(&self) -> &Element {
		&self.head
	}

	/// Returns the `<head>` element mutably.
	pub fn head_mut(&mut self) -> &mut Element {
		&mut self.head
	}

	/// Returns the `<body>` element.
	pub fn body(&self) -> &Element {
		&self.body
	}

	/// Returns the `<body>` element mutably.
	pub fn body_mut(&mut self) -> &mut Element {
		&mut self.body
	}

	/// Returns whether [`finalize`](Self::finalize) has run.
	pub fn is_finalized(&self) -> bool {
		self.finalized
	}

	/// Wires the `lang` attribute and the title element into the tree.
	///
	/// The title element goes before any existing `<head>` children. Returns
	/// [`HtmlError::AlreadyFinalized`] on a second call and leaves the tree
	/// untouched.
	pub fn finalize(&mut self) -> HtmlResult<()> {
		if self.finalized {
			return Err(HtmlError::AlreadyFinalized);
		}
		tracing::debug!(
			lang = %self.language_code,
			title = self.title.as_deref(),
			"finalizing document"
		);
		self.html.add_attr_mut("lang", self.language_code.as_str());
		if let Some(title) = &self.title {
			let title = Element::new("title").add_text(title.as_str());
			self.head.prepend(Node::Element(title));
		}
		self.finalized = true;
		Ok(())
	}

	/// Finalizes the document if needed and renders it with default options.
	pub fn render(&mut self) -> HtmlResult<String> {
		self.render_with(&RenderOptions::default())
	}

	/// Finalizes the document if needed and renders it with custom options.
	pub fn render_with(&mut self, options: &RenderOptions) -> HtmlResult<String> {
		if !self.finalized {
			self.finalize()?;
		}
		Renderer::new(options).document(self, 0)
	}
}

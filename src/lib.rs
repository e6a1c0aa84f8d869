//! # tagtree
//!
//! Build HTML documents as typed node trees and render them to indented,
//! diffable markup, without a template language.
//!
//! This facade re-exports [`tagtree_core`]; see its documentation for the
//! rendering rules.
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use tagtree::prelude::*;
//!
//! let mut doc = Document::with_title("Report");
//! doc.body_mut().try_append(
//!     Element::new("ul")
//!         .add_class("totals")
//!         .append(Element::new("li").add_text("Revenue"))
//!         .append(Element::new("li").add_text("Costs")),
//! );
//!
//! let html = doc.render()?;
//! ```

pub use tagtree_core::{
	AppendOutcome, Attribute, CommentNode, Document, Element, HtmlError, HtmlResult, IntoNode,
	LineEnding, Node, RenderOptions, TextNode,
};

/// Commonly used types, for glob import.
pub mod prelude {
	pub use tagtree_core::{
		Document, Element, HtmlError, HtmlResult, IntoNode, Node, RenderOptions,
	};
}

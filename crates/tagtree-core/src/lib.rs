//! # tagtree core
//!
//! Node tree model and renderer for building HTML without a template language.
//!
//! ## Overview
//!
//! - [`Element`]: a tag with ordered attributes and children, built through a
//!   fluent chain (`add_attr`, `add_class`, `add_style`, `add_text`,
//!   `add_comment`, `append`, `append_to`).
//! - [`Attribute`]: the deduplicated value set behind one attribute name.
//! - [`Node`]: the closed set of tree members (element, text, comment,
//!   document) sharing one `render` entry point.
//! - [`Document`]: doctype, `<html lang>`, `<head>` with an optional title, and
//!   `<body>`, wired once by [`Document::finalize`].
//! - [`RenderOptions`]: indentation unit, line ending, depth guard and escaping.
//!
//! ## Output rules
//!
//! An element whose children are all text or comments renders them on one line
//! separated by spaces: `<p>Hello <!-- note --> world</p>`. Any other child
//! switches the element to block layout, one indented child per line:
//!
//! ```text
//! <div>
//!     <span></span>
//! </div>
//! ```
//!
//! Void elements such as `br` and `img` render as a lone start tag.

pub mod attribute;
pub mod document;
pub mod error;
pub mod node;
pub mod render;
pub mod util;

pub use attribute::Attribute;
pub use document::Document;
pub use error::{HtmlError, HtmlResult};
pub use node::{AppendOutcome, CommentNode, Element, IntoNode, Node, TextNode};
pub use render::{LineEnding, RenderOptions};

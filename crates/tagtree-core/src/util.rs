//! Utility functions for rendering.
//!
//! This module provides the void-element table and the string helpers shared by
//! the attribute formatter and the renderer.

use std::borrow::Cow;

/// HTML void elements, rendered as a lone start tag with no closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta", "param",
	"source", "track", "wbr",
];

/// Returns `true` if `tag` names a void element.
///
/// Matching is exact; tag names are free-form and never case-folded.
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.contains(&tag)
}

/// Replaces `& < > " '` with their character references.
///
/// Used for text nodes, comment payloads and attribute values when
/// `RenderOptions::escape_text` is set.
/// Input without any of those characters is returned borrowed.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Prefixes every non-blank line of `text` with `prefix`.
///
/// Lines are split on `\n`; a preceding `\r` stays attached to its line, so
/// CRLF output survives indentation unchanged. Blank and whitespace-only lines
/// are left alone.
pub(crate) fn indent_lines(text: &str, prefix: &str) -> String {
	let mut out = String::with_capacity(text.len() + prefix.len() * 4);
	for (i, line) in text.split('\n').enumerate() {
		if i > 0 {
			out.push('\n');
		}
		if !line.trim().is_empty() {
			out.push_str(prefix);
		}
		out.push_str(line);
	}
	out
}

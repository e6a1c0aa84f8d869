//! Document integration tests
//!
//! Success Criteria:
//! 1. Documents render the doctype line, `lang` and an optional title
//! 2. `finalize` wires the document exactly once
//! 3. Rendering a document twice yields the same markup (no duplicate
//!    head, body or title)
//! 4. Documents compose with ordinary elements inside `head` and `body`

use rstest::*;
use tagtree_core::{Document, Element, HtmlError, Node, RenderOptions};

fn sample_page() -> Document {
	let nested = Element::new("div1").add_text("inner text");
	let block = Element::new("d3")
		.add_text("line one<br>\nline two")
		.append(nested.clone());
	let content = Element::new("div")
		.add_text("inner text")
		.add_class("class1")
		.add_classes("class2 class3")
		.add_style("font", "arial")
		.add_style("color", "blue")
		.append(nested)
		.append(block);

	let mut doc = Document::with_title("test doc");
	doc.body_mut().try_append(content);
	doc
}

/// Tests the full sample page against a snapshot.
#[rstest]
fn test_sample_page_snapshot() {
	let html = sample_page().render().unwrap();
	insta::assert_snapshot!(html, @r#"
	<!DOCTYPE html>
	<html lang="en">
	    <head>
	        <title>test doc</title>
	    </head>
	    <body>
	        <div class="class1 class2 class3" style="font:arial;color:blue">
	            inner text
	            <div1>inner text</div1>
	            <d3>
	                line one<br>
	                line two
	                <div1>inner text</div1>
	            </d3>
	        </div>
	    </body>
	</html>
	"#);
}

/// Tests that the doctype is the first line.
#[rstest]
fn test_doctype_first_line() {
	let html = Document::new().render().unwrap();
	assert_eq!(html.lines().next(), Some("<!DOCTYPE html>"));
}

/// Tests a custom language code.
#[rstest]
#[case("en", "<html lang=\"en\">")]
#[case("fr", "<html lang=\"fr\">")]
#[case("pt-BR", "<html lang=\"pt-BR\">")]
fn test_language_code(#[case] code: &str, #[case] expected: &str) {
	let html = Document::new().language_code(code).render().unwrap();
	assert_eq!(html.lines().nth(1), Some(expected));
}

/// Regression: rendering a document twice must not re-append head, body or
/// title; the second render returns identical markup.
#[rstest]
fn test_render_twice_is_identical() {
	let mut doc = sample_page();
	let first = doc.render().unwrap();
	let second = doc.render().unwrap();
	assert_eq!(first, second);
	assert_eq!(second.matches("<head>").count(), 1);
	assert_eq!(second.matches("<body>").count(), 1);
	assert_eq!(second.matches("<title>").count(), 1);
	assert_eq!(doc.head().children().len(), 1);
}

/// Regression: an explicit second `finalize` is rejected.
#[rstest]
fn test_second_finalize_is_rejected() {
	let mut doc = Document::with_title("once");
	assert!(doc.finalize().is_ok());
	assert!(matches!(doc.finalize(), Err(HtmlError::AlreadyFinalized)));
	assert!(doc.render().is_ok());
}

/// Tests that content added to `body` after rendering shows up next time.
#[rstest]
fn test_body_changes_after_render() {
	let mut doc = Document::new();
	let before = doc.render().unwrap();
	assert!(before.contains("<body></body>"));

	doc.body_mut().add_text_mut("hello");
	let after = doc.render().unwrap();
	assert!(after.contains("<body>hello</body>"));
}

/// Tests that a document nested as a node renders with its doctype line.
#[rstest]
fn test_document_as_node() {
	let mut doc = Document::new();
	doc.finalize().unwrap();
	let node: Node = Node::Document(Box::new(doc));
	let html = node.render().unwrap();
	assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
}

/// Tests that an unfinalized document rendered as a node carries no wiring.
#[rstest]
fn test_unfinalized_document_as_node() {
	let doc = Document::with_title("later");
	let html = Node::Document(Box::new(doc)).render().unwrap();
	assert_eq!(
		html,
		"<!DOCTYPE html>\n<html>\n    <head></head>\n    <body></body>\n</html>"
	);
}

/// Regression: children appended to `<html>` are rendered after `body`
/// instead of being dropped.
#[rstest]
fn test_html_children_render_after_body() {
	let mut doc = Document::new();
	let outcome = doc
		.html_mut()
		.try_append(Element::new("noscript").add_text("enable js"));
	assert!(outcome.is_appended());

	let html = doc.render().unwrap();
	assert_eq!(
		html,
		"<!DOCTYPE html>\n<html lang=\"en\">\n    <head></head>\n    <body></body>\n    <noscript>enable js</noscript>\n</html>"
	);
	assert_eq!(doc.render().unwrap(), html);
}

/// Tests document rendering with two-space indentation.
#[rstest]
fn test_document_custom_indent() {
	let mut doc = Document::with_title("t");
	doc.body_mut()
		.try_append(Element::new("main").append(Element::new("p").add_text("x")));
	let html = doc.render_with(&RenderOptions::new().indent("  ")).unwrap();
	assert_eq!(
		html,
		"<!DOCTYPE html>\n<html lang=\"en\">\n  <head>\n    <title>t</title>\n  </head>\n  <body>\n    <main>\n      <p>x</p>\n    </main>\n  </body>\n</html>"
	);
}

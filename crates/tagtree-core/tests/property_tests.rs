//! Tree property-based tests
//!
//! Property tests for attribute set semantics, the inline flag, repeatable
//! rendering and `append_to` chains.

use proptest::prelude::*;
use rstest::*;
use tagtree_core::{Attribute, Element};

/// A child to append: text, comment or a childless element.
#[derive(Debug, Clone)]
enum Step {
	Text(String),
	Comment(String),
	Element(String),
}

fn step_strategy() -> impl Strategy<Value = Step> {
	prop_oneof![
		"[a-z ]{0,12}".prop_map(Step::Text),
		"[a-z ]{0,12}".prop_map(Step::Comment),
		"[a-z]{1,8}".prop_map(Step::Element),
	]
}

fn apply(el: Element, step: &Step) -> Element {
	match step {
		Step::Text(text) => el.add_text(text.as_str()),
		Step::Comment(comment) => el.add_comment(comment.as_str()),
		Step::Element(tag) => el.append(Element::new(tag.as_str())),
	}
}

// ============================================================================
// Property-Based Tests: Attribute
// ============================================================================

proptest! {
	/// Test: every distinct value appears exactly once
	///
	/// Category: Property
	/// Verifies set semantics regardless of add order and duplicates.
	#[rstest]
	fn prop_attribute_values_are_distinct(values in prop::collection::vec("[a-z]{1,6}", 0..20)) {
		let mut attr = Attribute::new("class");
		for value in &values {
			attr.add_value(value.as_str());
		}

		let text = attr.text();
		prop_assert!(text.starts_with("class=\""));
		prop_assert!(text.ends_with('"'));

		let inner = &text["class=\"".len()..text.len() - 1];
		let rendered: Vec<&str> = inner.split(' ').filter(|v| !v.is_empty()).collect();
		for value in &values {
			prop_assert_eq!(rendered.iter().filter(|v| **v == value.as_str()).count(), 1);
		}
		prop_assert!(rendered.iter().all(|v| values.iter().any(|value| value.as_str() == *v)));
	}

	/// Test: adding the same value twice changes nothing
	///
	/// Category: Property
	/// Verifies that `add_value` is idempotent.
	#[rstest]
	fn prop_attribute_add_is_idempotent(values in prop::collection::vec("[a-z]{1,6}", 1..10)) {
		let mut once = Attribute::new("data-tags");
		let mut twice = Attribute::new("data-tags");
		for value in &values {
			once.add_value(value.as_str());
			twice.add_value(value.as_str());
			twice.add_value(value.as_str());
		}
		prop_assert_eq!(once.text(), twice.text());
	}
}

// ============================================================================
// Property-Based Tests: Element
// ============================================================================

proptest! {
	/// Test: inline flag tracks whether any element child was appended
	///
	/// Category: Property
	/// Verifies that text and comments keep the flag and elements clear it for good.
	#[rstest]
	fn prop_inline_flag_is_one_way(steps in prop::collection::vec(step_strategy(), 0..12)) {
		let mut el = Element::new("div");
		let mut seen_element = false;
		for step in &steps {
			el = apply(el, step);
			seen_element |= matches!(step, Step::Element(_));
			prop_assert_eq!(el.is_inline(), !seen_element);
		}
	}

	/// Test: rendering is repeatable
	///
	/// Category: Property
	/// Verifies that rendering the same tree twice gives identical output.
	#[rstest]
	fn prop_render_is_repeatable(steps in prop::collection::vec(step_strategy(), 0..12)) {
		let el = steps.iter().fold(Element::new("section"), apply);
		prop_assert_eq!(el.render().unwrap(), el.render().unwrap());
	}

	/// Test: `append_to` chains equal nested appends
	///
	/// Category: Property
	/// Verifies `a.append(b.append(c)) == c.append_to(b).append_to(a)`.
	#[rstest]
	fn prop_append_to_equivalence(a in "[a-z]{1,6}", b in "[a-z]{1,6}", c in "[a-z]{1,6}") {
		let nested = Element::new(a.as_str())
			.append(Element::new(b.as_str()).append(Element::new(c.as_str())));
		let chained = Element::new(c.as_str())
			.append_to(Element::new(b.as_str()))
			.append_to(Element::new(a.as_str()));
		prop_assert_eq!(nested.render().unwrap(), chained.render().unwrap());
		prop_assert_eq!(nested, chained);
	}
}

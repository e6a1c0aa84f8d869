//! Prints a sample document.
//!
//! Set `RUST_LOG=tagtree_core=trace` to watch the renderer walk the tree.
//! Pass a TOML file path as the first argument to override render options.

use std::process::ExitCode;
use tagtree::prelude::*;
use tracing_subscriber::EnvFilter;

fn sample_document() -> Document {
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

fn load_options() -> Result<RenderOptions, Box<dyn std::error::Error>> {
	match std::env::args().nth(1) {
		Some(path) => {
			let source = std::fs::read_to_string(&path)?;
			Ok(RenderOptions::from_toml_str(&source)?)
		}
		None => Ok(RenderOptions::default()),
	}
}

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let options = match load_options() {
		Ok(options) => options,
		Err(e) => {
			tracing::error!("Failed to load render options: {}", e);
			return ExitCode::FAILURE;
		}
	};

	match sample_document().render_with(&options) {
		Ok(html) => {
			println!("{html}");
			ExitCode::SUCCESS
		}
		Err(e) => {
			tracing::error!("Failed to render document: {}", e);
			ExitCode::FAILURE
		}
	}
}

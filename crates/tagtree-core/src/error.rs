//! Error types for tree rendering and document finalization.
//!
//! Most tree operations are permissive and never fail; the variants here cover
//! the few places where the builder refuses to continue.

use thiserror::Error;

/// Errors that can occur while rendering or finalizing a tree.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum HtmlError {
	/// The tree nests deeper than the configured `max_depth`.
	#[error("Nesting too deep: element at depth {depth} exceeds the limit of {limit}")]
	NestingTooDeep {
		/// Depth of the offending element (the root is depth 0).
		depth: usize,
		/// Configured limit.
		limit: usize,
	},

	/// `Document::finalize` was called on an already finalized document.
	#[error("Document is already finalized")]
	AlreadyFinalized,

	/// Render options could not be parsed.
	#[error("Config error: {0}")]
	Config(#[from] toml::de::Error),
}

/// Result type alias for tagtree operations.
pub type HtmlResult<T> = Result<T, HtmlError>;

use serde::{Deserialize, Serialize};

use super::theme::Theme;

/// Markdown elements and formatting switches applied during generation.
///
/// Field names serialize in camelCase (`codeSnippets`, `noWrap`), matching
/// the API and the stored preferences.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateOptions {
	/// Insert markdown headings.
	pub headers: bool,
	/// Insert fenced code blocks.
	pub code_snippets: bool,
	/// Insert blockquote excerpts.
	pub blockquotes: bool,
	/// Insert bullet lists.
	pub lists: bool,
	/// Insert markdown links.
	pub links: bool,
	/// Keep the original casing (`false` lowercases everything).
	pub capitalize: bool,
	/// Collapse the output to a single line.
	pub no_wrap: bool,
}

impl Default for GenerateOptions {
	/// No markdown elements, capitalize on, wrap on.
	fn default() -> Self {
		Self {
			headers: false,
			code_snippets: false,
			blockquotes: false,
			lists: false,
			links: false,
			capitalize: true,
			no_wrap: false,
		}
	}
}

/// Markdown element tokens, as accepted by the `md` query parameter.
///
/// Order matters: share URLs list enabled elements in this order.
pub const MARKDOWN_TOKENS: [&str; 5] = ["headers", "code", "quotes", "lists", "links"];

impl GenerateOptions {
	/// Sets every markdown flag from a comma-separated token list.
	///
	/// Flags whose token is absent are turned off; unknown tokens are ignored.
	/// `capitalize` and `no_wrap` are left untouched.
	pub fn apply_markdown_tokens(&mut self, tokens: &str) {
		let parts: Vec<&str> = tokens.split(',').collect();
		self.headers = parts.contains(&"headers");
		self.code_snippets = parts.contains(&"code");
		self.blockquotes = parts.contains(&"quotes");
		self.lists = parts.contains(&"lists");
		self.links = parts.contains(&"links");
	}

	/// Returns the tokens of the enabled markdown elements, in canonical order.
	pub fn markdown_tokens(&self) -> Vec<&'static str> {
		let flags = [self.headers, self.code_snippets, self.blockquotes, self.lists, self.links];
		MARKDOWN_TOKENS
			.iter()
			.zip(flags)
			.filter_map(|(token, enabled)| enabled.then_some(*token))
			.collect()
	}
}

/// Full set of parameters for one generation call.
///
/// These values fully determine the output: there is no hidden state,
/// clock or entropy source involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateParams<'a> {
	/// Theme supplying the vocabulary.
	pub theme: &'a Theme,
	/// Number of blocks to produce (1..=20 at the API boundary).
	pub blocks: usize,
	/// Seed driving every random draw.
	pub seed: i64,
	/// Markdown and formatting options.
	pub options: GenerateOptions,
}

impl<'a> GenerateParams<'a> {
	/// Creates parameters with default options.
	pub fn new(theme: &'a Theme, blocks: usize, seed: i64) -> Self {
		Self { theme, blocks, seed, options: GenerateOptions::default() }
	}

	/// Replaces the options.
	pub fn with_options(mut self, options: GenerateOptions) -> Self {
		self.options = options;
		self
	}
}

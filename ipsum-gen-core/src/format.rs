use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use pulldown_cmark::{Parser, html as md_html};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Output representation requested by a caller.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
	/// Raw composed markdown.
	#[default]
	Markdown,
	/// Discrete blocks plus the composed markdown.
	Json,
	/// Markdown with its syntax stripped.
	Text,
	/// Markdown rendered to HTML.
	Html,
}

impl OutputFormat {
	/// Every format, in the order they are advertised.
	pub const ALL: [OutputFormat; 4] =
		[OutputFormat::Markdown, OutputFormat::Json, OutputFormat::Text, OutputFormat::Html];

	/// Returns the query-string token of this format.
	pub fn as_str(&self) -> &'static str {
		match self {
			OutputFormat::Markdown => "markdown",
			OutputFormat::Json => "json",
			OutputFormat::Text => "text",
			OutputFormat::Html => "html",
		}
	}

	/// Returns the tokens of every format.
	pub fn names() -> Vec<&'static str> {
		Self::ALL.iter().map(OutputFormat::as_str).collect()
	}
}

impl fmt::Display for OutputFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for OutputFormat {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|format| format.as_str() == s)
			.ok_or_else(|| format!("Unknown format: {s}"))
	}
}

/// A markdown stripping step: pattern and its replacement.
struct StripRule {
	pattern: Regex,
	replacement: &'static str,
}

/// Stripping steps, applied in order.
static STRIP_RULES: LazyLock<Vec<StripRule>> = LazyLock::new(|| {
	[
		// Heading markers
		(r"(?m)^#{1,6}\s+", ""),
		// Fenced code blocks, content included
		(r"```[\s\S]*?```", ""),
		// Inline code keeps its text
		(r"`([^`]+)`", "$1"),
		// Blockquote markers
		(r"(?m)^>\s+", ""),
		// List bullets
		(r"(?m)^[-*]\s+", ""),
		// Links keep their text
		(r"\[([^\]]+)\]\([^)]+\)", "$1"),
		(r"\n{3,}", "\n\n"),
	]
	.into_iter()
	.map(|(pattern, replacement)| StripRule {
		pattern: Regex::new(pattern).unwrap(),
		replacement,
	})
	.collect()
});

/// Strips markdown syntax from generated text.
///
/// Removes heading markers, fenced code blocks, inline code backticks,
/// blockquote markers, list bullets and link targets, then squeezes runs
/// of blank lines and trims.
pub fn to_plain_text(markdown: &str) -> String {
	let mut text = markdown.to_owned();
	for rule in STRIP_RULES.iter() {
		text = rule.pattern.replace_all(&text, rule.replacement).into_owned();
	}
	text.trim().to_owned()
}

/// Renders generated markdown to HTML (CommonMark, no extensions).
pub fn to_html(markdown: &str) -> String {
	let parser = Parser::new(markdown);
	let mut html = String::new();
	md_html::push_html(&mut html, parser);
	html
}

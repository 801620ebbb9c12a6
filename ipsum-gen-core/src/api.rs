use serde::{Deserialize, Serialize};

use crate::config::{CONFIG, MAX_BLOCKS, MIN_BLOCKS};
use crate::error::RequestError;
use crate::format::{self, OutputFormat};
use crate::model::generator::{generate_blocks, generate_text};
use crate::model::options::{GenerateOptions, GenerateParams};
use crate::model::theme::{Theme, find_theme, theme_ids};

/// Raw query parameters of the generate endpoint.
///
/// Every field is kept as text so that validation can report the exact
/// offending value.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct GenerateQuery {
	/// Theme id (default `lorem`)
	pub theme: Option<String>,
	/// Block count, 1-20 (default 5)
	pub blocks: Option<String>,
	/// Integer seed (default 42)
	pub seed: Option<String>,
	/// `markdown`, `json`, `text` or `html` (default `markdown`)
	pub format: Option<String>,
	/// Comma-separated markdown elements: headers,code,quotes,lists,links
	pub md: Option<String>,
	/// `"1"` disables capitalization
	pub lower: Option<String>,
	/// `"1"` collapses output to a single line
	pub nowrap: Option<String>,
}

/// A validated generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateRequest {
	pub theme: &'static Theme,
	pub blocks: usize,
	pub seed: i64,
	pub format: OutputFormat,
	pub options: GenerateOptions,
}

/// Response payload: a single string, or the block list for `json`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Output {
	Text(String),
	Blocks(Vec<String>),
}

/// Body of a successful generate response.
///
/// `options` and `markdown` are only present for the `json` format.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GenerateResponse {
	pub theme: &'static str,
	pub blocks: usize,
	pub seed: i64,
	pub format: OutputFormat,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub options: Option<GenerateOptions>,
	pub output: Output,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub markdown: Option<String>,
}

/// Treats an empty parameter like a missing one.
fn non_empty(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|v| !v.is_empty())
}

/// Reads a numeric parameter the way a JavaScript `Number()` conversion does,
/// keeping it only if it is a whole number.
///
/// Blank text is zero, `0x`/`0o`/`0b` prefixes are radix literals, and any
/// decimal or exponent form works, so `5.0` and `1e1` are integers.
fn whole_number(raw: &str) -> Option<f64> {
	let text = raw.trim();
	let value = if text.is_empty() {
		0.0
	} else if let Some((radix, digits)) = radix_literal(text) {
		u64::from_str_radix(digits, radix).ok()? as f64
	} else if text.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')) {
		text.parse::<f64>().ok()?
	} else {
		return None;
	};
	(value.is_finite() && value.fract() == 0.0).then_some(value)
}

fn radix_literal(text: &str) -> Option<(u32, &str)> {
	let (prefix, digits) = text.split_at_checked(2)?;
	let radix = match prefix {
		"0x" | "0X" => 16,
		"0o" | "0O" => 8,
		"0b" | "0B" => 2,
		_ => return None,
	};
	(!digits.is_empty()).then_some((radix, digits))
}

impl GenerateQuery {
	/// Validates the query, in the order theme, blocks, seed, format.
	///
	/// # Errors
	/// Returns the first invalid parameter. Missing parameters take their
	/// defaults. `blocks` and `seed` accept any whole number (`5.0`, `1e1`);
	/// an empty value reads as zero, which is a valid seed but not a valid
	/// block count.
	pub fn validate(&self) -> Result<GenerateRequest, RequestError> {
		let theme_id = non_empty(&self.theme).unwrap_or(CONFIG.default_theme_id);
		let theme = find_theme(theme_id).ok_or_else(|| RequestError::InvalidTheme {
			value: theme_id.to_owned(),
			valid: theme_ids(),
		})?;

		let blocks = match &self.blocks {
			None => CONFIG.default_blocks,
			Some(raw) => whole_number(raw)
				.filter(|b| (MIN_BLOCKS as f64..=MAX_BLOCKS as f64).contains(b))
				.map(|b| b as usize)
				.ok_or_else(|| RequestError::InvalidBlockCount {
					value: raw.clone(),
					min: MIN_BLOCKS,
					max: MAX_BLOCKS,
				})?,
		};

		// Seeds beyond the i64 range cannot be replayed exactly and are refused
		let seed = match &self.seed {
			None => CONFIG.default_seed,
			Some(raw) => whole_number(raw)
				.filter(|s| (i64::MIN as f64..i64::MAX as f64).contains(s))
				.map(|s| s as i64)
				.ok_or_else(|| RequestError::InvalidSeed { value: raw.clone() })?,
		};

		let format_name = non_empty(&self.format).unwrap_or("markdown");
		let format = format_name.parse::<OutputFormat>().map_err(|_| RequestError::InvalidFormat {
			value: format_name.to_owned(),
			valid: OutputFormat::names(),
		})?;

		let mut options = GenerateOptions::default();
		if let Some(md) = non_empty(&self.md) {
			options.apply_markdown_tokens(md);
		}
		if self.lower.as_deref() == Some("1") {
			options.capitalize = false;
		}
		if self.nowrap.as_deref() == Some("1") {
			options.no_wrap = true;
		}

		Ok(GenerateRequest { theme, blocks, seed, format, options })
	}
}

impl GenerateRequest {
	/// Returns the engine parameters of this request.
	pub fn params(&self) -> GenerateParams<'static> {
		GenerateParams::new(self.theme, self.blocks, self.seed).with_options(self.options)
	}

	/// Runs the generator and packages the result for the requested format.
	pub fn render(&self) -> GenerateResponse {
		let params = self.params();
		let markdown = generate_text(&params);

		let mut response = GenerateResponse {
			theme: self.theme.id,
			blocks: self.blocks,
			seed: self.seed,
			format: self.format,
			options: None,
			output: Output::Text(String::new()),
			markdown: None,
		};

		response.output = match self.format {
			OutputFormat::Json => {
				response.options = Some(self.options);
				let blocks = generate_blocks(&params);
				response.markdown = Some(markdown);
				Output::Blocks(blocks)
			}
			OutputFormat::Html => Output::Text(format::to_html(&markdown)),
			OutputFormat::Text => Output::Text(format::to_plain_text(&markdown)),
			OutputFormat::Markdown => Output::Text(markdown),
		};
		response
	}
}

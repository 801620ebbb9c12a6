use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::config::{CONFIG, MAX_BLOCKS, MIN_BLOCKS};
use crate::error::StoreError;
use crate::io;
use crate::model::options::GenerateOptions;
use crate::model::theme::find_theme;

/// Key under which preferences are kept in the store.
pub const PREFERENCES_KEY: &str = "ipsumify:preferences";

/// Generator settings remembered between sessions and shared by URL.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserPreferences {
	/// Selected theme id
	pub theme: String,
	/// Number of blocks to generate
	pub blocks: usize,
	/// Markdown and formatting options
	pub options: GenerateOptions,
}

impl Default for UserPreferences {
	fn default() -> Self {
		Self {
			theme: CONFIG.default_theme_id.to_owned(),
			blocks: CONFIG.default_blocks,
			options: GenerateOptions::default(),
		}
	}
}

/// Preferences recovered from a share URL.
///
/// Only values that were present and valid are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialPreferences {
	pub theme: Option<String>,
	pub blocks: Option<usize>,
	pub options: Option<GenerateOptions>,
}

impl PartialPreferences {
	/// Returns `true` when nothing was decoded.
	pub fn is_empty(&self) -> bool {
		self.theme.is_none() && self.blocks.is_none() && self.options.is_none()
	}

	/// Overlays the decoded values onto `base`.
	pub fn apply(self, base: UserPreferences) -> UserPreferences {
		UserPreferences {
			theme: self.theme.unwrap_or(base.theme),
			blocks: self.blocks.unwrap_or(base.blocks),
			options: self.options.unwrap_or(base.options),
		}
	}
}

/// Encodes preferences as a URL query string (without the leading `?`).
///
/// Only enabled markdown elements are listed, and formatting flags are
/// only written when they differ from the defaults, to keep links short.
pub fn encode_preferences(preferences: &UserPreferences) -> String {
	let mut serializer = form_urlencoded::Serializer::new(String::new());
	serializer.append_pair("theme", &preferences.theme);
	serializer.append_pair("blocks", &preferences.blocks.to_string());

	let tokens = preferences.options.markdown_tokens();
	if !tokens.is_empty() {
		serializer.append_pair("md", &tokens.join(","));
	}
	if !preferences.options.capitalize {
		serializer.append_pair("lower", "1");
	}
	if preferences.options.no_wrap {
		serializer.append_pair("nowrap", "1");
	}
	serializer.finish()
}

/// Decodes preferences from a URL query string.
///
/// Block counts are read from their leading digits. Unknown themes and
/// block counts that are out of range or have no digits are dropped
/// silently. Options are only produced when `md`, `lower` or `nowrap` is
/// present, starting from `defaults.options`.
pub fn decode_preferences(query: &str, defaults: &UserPreferences) -> PartialPreferences {
	let query = query.strip_prefix('?').unwrap_or(query);
	let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes()).into_owned().collect();
	let get = |key: &str| first_value(&pairs, key);

	let mut decoded = PartialPreferences::default();

	if let Some(theme) = get("theme").filter(|id| find_theme(id).is_some()) {
		decoded.theme = Some(theme.to_owned());
	}

	if let Some(blocks) = get("blocks").and_then(leading_integer) {
		if (MIN_BLOCKS as i64..=MAX_BLOCKS as i64).contains(&blocks) {
			decoded.blocks = Some(blocks as usize);
		}
	}

	let md = get("md");
	let lower = get("lower");
	let nowrap = get("nowrap");
	if md.is_some() || lower.is_some() || nowrap.is_some() {
		let mut options = defaults.options;
		if let Some(md) = md {
			options.apply_markdown_tokens(md);
		}
		if lower == Some("1") {
			options.capitalize = false;
		}
		if nowrap == Some("1") {
			options.no_wrap = true;
		}
		decoded.options = Some(options);
	}

	decoded
}

/// Reads the integer at the start of `text`, ignoring whatever follows it,
/// so `7abc` and `7.9` both read as 7.
fn leading_integer(text: &str) -> Option<i64> {
	let text = text.trim_start();
	let (negative, rest) = match text.as_bytes().first() {
		Some(b'-') => (true, &text[1..]),
		Some(b'+') => (false, &text[1..]),
		_ => (false, text),
	};
	let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
	let value = rest[..end].parse::<i64>().ok()?;
	Some(if negative { -value } else { value })
}

/// Returns the first value of `key`, treating an empty value as absent.
fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
	pairs
		.iter()
		.find(|(k, _)| k == key)
		.map(|(_, v)| v.as_str())
		.filter(|v| !v.is_empty())
}

/// File-backed key/value store holding the user preferences.
///
/// The file is a JSON object; preferences live under [`PREFERENCES_KEY`]
/// and other keys are preserved on save.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
	path: PathBuf,
}

impl PreferenceStore {
	/// Creates a store backed by the JSON file at `path`.
	///
	/// The file does not need to exist yet.
	pub fn new<P: AsRef<Path>>(path: P) -> Self {
		Self { path: path.as_ref().to_path_buf() }
	}

	/// Returns the backing file path.
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn read_entries(&self) -> Result<Map<String, Value>, StoreError> {
		match io::read_file_if_exists(&self.path)? {
			Some(contents) => Ok(serde_json::from_str(&contents)?),
			None => Ok(Map::new()),
		}
	}

	fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), StoreError> {
		let contents = serde_json::to_string_pretty(entries)?;
		io::write_file(&self.path, &contents)?;
		Ok(())
	}

	/// Loads the saved preferences.
	///
	/// Missing or malformed data yields the defaults; failures are logged,
	/// never returned.
	pub fn load(&self) -> UserPreferences {
		let entries = match self.read_entries() {
			Ok(entries) => entries,
			Err(e) => {
				log::warn!("Error reading preferences from {}: {e}", self.path.display());
				return UserPreferences::default();
			}
		};
		match entries.get(PREFERENCES_KEY) {
			None => UserPreferences::default(),
			Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
				log::warn!("Error reading key \"{PREFERENCES_KEY}\": {e}");
				UserPreferences::default()
			}),
		}
	}

	/// Saves preferences, replacing any previous value.
	///
	/// # Errors
	/// Returns an error if the file cannot be written. An unreadable
	/// existing file is replaced.
	pub fn save(&self, preferences: &UserPreferences) -> Result<(), StoreError> {
		let mut entries = self.read_entries().unwrap_or_default();
		entries.insert(PREFERENCES_KEY.to_owned(), serde_json::to_value(preferences)?);
		self.write_entries(&entries)
	}

	/// Removes saved preferences so the next load returns the defaults.
	///
	/// # Errors
	/// Returns an error if the file exists but cannot be rewritten.
	pub fn reset(&self) -> Result<(), StoreError> {
		let mut entries = match self.read_entries() {
			Ok(entries) => entries,
			Err(_) => return self.write_entries(&Map::new()),
		};
		if entries.remove(PREFERENCES_KEY).is_some() {
			self.write_entries(&entries)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn options(f: impl FnOnce(&mut GenerateOptions)) -> GenerateOptions {
		let mut options = GenerateOptions::default();
		f(&mut options);
		options
	}

	fn pairs(query: &str) -> Vec<(String, String)> {
		form_urlencoded::parse(query.as_bytes()).into_owned().collect()
	}

	fn value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
		pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
	}

	#[test]
	fn encode_basic() {
		let prefs = UserPreferences { theme: "dog".into(), blocks: 10, options: GenerateOptions::default() };
		let encoded = pairs(&encode_preferences(&prefs));
		assert_eq!(value(&encoded, "theme"), Some("dog"));
		assert_eq!(value(&encoded, "blocks"), Some("10"));
		assert_eq!(value(&encoded, "md"), None);
		assert_eq!(value(&encoded, "lower"), None);
		assert_eq!(value(&encoded, "nowrap"), None);
	}

	#[test]
	fn encode_markdown_and_formatting() {
		let prefs = UserPreferences {
			theme: "cat".into(),
			blocks: 3,
			options: options(|o| {
				o.headers = true;
				o.code_snippets = true;
				o.lists = true;
				o.capitalize = false;
				o.no_wrap = true;
			}),
		};
		let encoded = pairs(&encode_preferences(&prefs));
		assert_eq!(value(&encoded, "md"), Some("headers,code,lists"));
		assert_eq!(value(&encoded, "lower"), Some("1"));
		assert_eq!(value(&encoded, "nowrap"), Some("1"));
	}

	#[test]
	fn decode_basic() {
		let decoded = decode_preferences("theme=bbq&blocks=15", &UserPreferences::default());
		assert_eq!(decoded.theme.as_deref(), Some("bbq"));
		assert_eq!(decoded.blocks, Some(15));
		assert_eq!(decoded.options, None);
	}

	#[test]
	fn decode_options() {
		let defaults = UserPreferences::default();
		let decoded = decode_preferences("?md=headers,code,lists", &defaults).options.unwrap();
		assert!(decoded.headers && decoded.code_snippets && decoded.lists);
		assert!(!decoded.blockquotes && !decoded.links);

		let decoded = decode_preferences("lower=1&nowrap=1", &defaults).options.unwrap();
		assert!(!decoded.capitalize);
		assert!(decoded.no_wrap);
	}

	#[test]
	fn decode_rejects_bad_values() {
		let defaults = UserPreferences::default();
		for query in ["blocks=0", "blocks=25", "blocks=invalid", "blocks=", "theme=malicious_theme"] {
			assert!(decode_preferences(query, &defaults).is_empty(), "{query} was accepted");
		}
		assert_eq!(decode_preferences("theme=lorem", &defaults).theme.as_deref(), Some("lorem"));
		assert!(decode_preferences("", &defaults).is_empty());
	}

	#[test]
	fn decode_blocks_reads_leading_digits() {
		let defaults = UserPreferences::default();
		for (query, expected) in [("blocks=7abc", 7), ("blocks=7.9", 7), ("blocks=%2012", 12), ("blocks=+3", 3), ("blocks=20px", 20)] {
			assert_eq!(decode_preferences(query, &defaults).blocks, Some(expected), "{query}");
		}
		for query in ["blocks=x7", "blocks=-3", "blocks=0x5", "blocks=21.5", "blocks=.5"] {
			assert_eq!(decode_preferences(query, &defaults).blocks, None, "{query}");
		}
	}

	#[test]
	fn round_trip_all_option_combinations() {
		let defaults = UserPreferences::default();
		for bits in 0u8..128 {
			let flag = |n: u8| bits & (1 << n) != 0;
			let original = UserPreferences {
				theme: "baked".into(),
				blocks: 7,
				options: GenerateOptions {
					headers: flag(0),
					code_snippets: flag(1),
					blockquotes: flag(2),
					lists: flag(3),
					links: flag(4),
					capitalize: !flag(5),
					no_wrap: flag(6),
				},
			};
			let decoded = decode_preferences(&encode_preferences(&original), &defaults);
			assert_eq!(decoded.apply(defaults.clone()), original);
		}
	}

	#[test]
	fn store_round_trip_and_reset() {
		let dir = tempfile::tempdir().unwrap();
		let store = PreferenceStore::new(dir.path().join("nested").join("prefs.json"));
		assert_eq!(store.load(), UserPreferences::default());

		let prefs = UserPreferences { theme: "cat".into(), blocks: 12, options: options(|o| o.links = true) };
		store.save(&prefs).unwrap();
		assert_eq!(store.load(), prefs);

		store.reset().unwrap();
		assert_eq!(store.load(), UserPreferences::default());
	}

	#[test]
	fn store_keeps_other_keys() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("prefs.json");
		std::fs::write(&path, r#"{"other":1}"#).unwrap();
		let store = PreferenceStore::new(&path);
		store.save(&UserPreferences::default()).unwrap();
		let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
		assert_eq!(raw["other"], 1);
		assert_eq!(raw[PREFERENCES_KEY]["options"]["noWrap"], false);
	}

	#[test]
	fn malformed_store_falls_back_to_defaults() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("prefs.json");

		std::fs::write(&path, "not json").unwrap();
		let store = PreferenceStore::new(&path);
		assert_eq!(store.load(), UserPreferences::default());

		std::fs::write(&path, r#"{"ipsumify:preferences":{"theme":42}}"#).unwrap();
		assert_eq!(store.load(), UserPreferences::default());

		store.save(&UserPreferences::default()).unwrap();
		assert_eq!(store.load(), UserPreferences::default());
	}
}

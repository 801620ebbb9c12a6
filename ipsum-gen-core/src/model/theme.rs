use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use super::data::THEMES;

/// A named vocabulary pool used to compose placeholder text.
///
/// # Invariants
/// - `id` is unique across the registry
/// - `paragraphs`, `headings` and `list_items` each hold at least one entry
///
/// Themes are static data: the engine only ever reads them, shuffles
/// operate on copies.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
	/// Unique identifier (e.g. `lorem`, `dog`)
	pub id: &'static str,
	/// Display name shown in theme selectors
	pub label: &'static str,
	/// Icon class name
	pub icon: &'static str,
	/// Pool of paragraph sentences for body text
	pub paragraphs: &'static [&'static str],
	/// Pool of heading strings for markdown headers
	pub headings: &'static [&'static str],
	/// Items for bullet lists
	pub list_items: &'static [&'static str],
}

/// Display metadata of a theme, without its content pools.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSummary {
	pub id: &'static str,
	pub label: &'static str,
	pub icon: &'static str,
}

impl Theme {
	/// Returns the display metadata of this theme.
	pub fn summary(&self) -> ThemeSummary {
		ThemeSummary { id: self.id, label: self.label, icon: self.icon }
	}
}

/// Index from theme id to its position in `THEMES`, built on first use.
static THEME_INDEX: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
	THEMES.iter().enumerate().map(|(i, theme)| (theme.id, i)).collect()
});

/// Returns every built-in theme, in display order.
pub fn themes() -> &'static [Theme] {
	&THEMES
}

/// Looks up a theme by its identifier.
///
/// Returns `None` for unknown ids; rejecting those is up to the caller.
pub fn find_theme(id: &str) -> Option<&'static Theme> {
	THEME_INDEX.get(id).map(|&i| &THEMES[i])
}

/// Returns the identifiers of every built-in theme, in display order.
pub fn theme_ids() -> Vec<&'static str> {
	THEMES.iter().map(|theme| theme.id).collect()
}

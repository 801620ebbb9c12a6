//! Site configuration.
//!
//! Single source of truth for display metadata and generation defaults.
//! Values are compiled in; nothing here is mutable at runtime.

/// Application configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
	/// Site display name
	pub name: &'static str,
	/// Full page title
	pub title: &'static str,
	/// Long description for meta tags
	pub description: &'static str,
	/// Canonical site URL
	pub url: &'static str,
	/// Application version
	pub version: &'static str,
	/// Default theme id for the generator
	pub default_theme_id: &'static str,
	/// Default number of blocks
	pub default_blocks: usize,
	/// Default seed
	pub default_seed: i64,
}

/// The configuration every component reads.
pub const CONFIG: SiteConfig = SiteConfig {
	name: "Ipsumify",
	title: "Ipsumify - Lorem Ipsum Generator",
	description: "Generate beautiful lorem ipsum placeholder text with markdown support.",
	url: "https://ipsumify.com",
	version: "2.1.0",
	default_theme_id: "lorem",
	default_blocks: 5,
	default_seed: 42,
};

/// Smallest accepted block count.
pub const MIN_BLOCKS: usize = 1;

/// Largest accepted block count.
pub const MAX_BLOCKS: usize = 20;

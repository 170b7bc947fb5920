use std::path::Path;
use std::path::PathBuf;

use globset::Glob;
use globset::GlobSet;
use globset::GlobSetBuilder;
use serde::Deserialize;

use crate::GlosslinkError;
use crate::GlosslinkResult;

/// Default maximum file size in bytes (10 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Glossary location relative to the docs root when not configured.
pub const DEFAULT_GLOSSARY_PATH: &str = "reference/glossary.md";

/// Configuration loaded from a `glosslink.toml` file at the docs root.
///
/// ```toml
/// glossary = "reference/glossary.md"
///
/// [exclude]
/// patterns = ["drafts/**", "generated/**"]
/// ```
#[derive(Debug, Deserialize)]
pub struct LinkerConfig {
	/// Path of the glossary document, relative to the docs root.
	#[serde(default = "default_glossary_path")]
	pub glossary: PathBuf,
	/// Exclusion configuration.
	#[serde(default)]
	pub exclude: ExcludeConfig,
	/// Maximum file size in bytes to scan. Defaults to 10 MB.
	#[serde(default = "default_max_file_size")]
	pub max_file_size: u64,
}

impl Default for LinkerConfig {
	fn default() -> Self {
		Self {
			glossary: default_glossary_path(),
			exclude: ExcludeConfig::default(),
			max_file_size: DEFAULT_MAX_FILE_SIZE,
		}
	}
}

/// Configuration for excluding files and directories from scanning.
#[derive(Debug, Default, Deserialize)]
pub struct ExcludeConfig {
	/// Glob patterns for directories or files to skip during scanning.
	/// These are relative to the docs root.
	#[serde(default)]
	pub patterns: Vec<String>,
}

fn default_glossary_path() -> PathBuf {
	PathBuf::from(DEFAULT_GLOSSARY_PATH)
}

fn default_max_file_size() -> u64 {
	DEFAULT_MAX_FILE_SIZE
}

impl LinkerConfig {
	/// Load the config from `glosslink.toml` at the given docs root.
	/// Returns `None` if the file does not exist.
	pub fn load(root: &Path) -> GlosslinkResult<Option<LinkerConfig>> {
		let config_path = root.join("glosslink.toml");

		if !config_path.exists() {
			return Ok(None);
		}

		let content = std::fs::read_to_string(&config_path)?;
		let config: LinkerConfig =
			toml::from_str(&content).map_err(|e| GlosslinkError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}

	/// Build the exclusion matcher from the configured glob patterns.
	pub fn exclude_set(&self) -> GlobSet {
		build_glob_set(&self.exclude.patterns)
	}
}

/// Build a `GlobSet` from a list of glob pattern strings.
fn build_glob_set(patterns: &[String]) -> GlobSet {
	let mut builder = GlobSetBuilder::new();
	for pattern in patterns {
		if let Ok(glob) = Glob::new(pattern) {
			builder.add(glob);
		}
	}
	builder.build().unwrap_or_else(|_| GlobSet::empty())
}

use std::path::PathBuf;

use anyhow::{Context, Result};

use super::raw::RawSettings;
use super::resolved::ThemeSettings;
use super::sources::build_config;

/// Where to look for configuration.
#[derive(Debug, Clone, Default)]
pub struct SettingsOptions {
	/// Extra files merged after the default locations. Each must exist.
	pub config_files: Vec<PathBuf>,
	/// Skip the per-user and working-directory configuration files.
	pub no_default_files: bool,
}

/// Load settings by combining defaults, configuration files and environment
/// variables.
pub fn load(options: &SettingsOptions) -> Result<ThemeSettings> {
	let raw: RawSettings = build_config(options)?
		.try_deserialize()
		.context("failed to deserialize theme configuration")?;
	raw.resolve()
}

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};

use super::loader::SettingsOptions;
use crate::app_dirs;

pub(super) const ENV_PREFIX: &str = "MACROPAD_THEMES";
const LOCAL_CONFIG_FILE_NAME: &str = ".macropad-themes.toml";

/// Build a [`Config`] from the default locations, explicit files and the
/// environment, in increasing order of precedence.
pub(super) fn build_config(options: &SettingsOptions) -> Result<Config> {
	let mut builder = Config::builder();

	if !options.no_default_files {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &options.config_files {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

	builder
		.build()
		.context("failed to read theme configuration")
}

/// Configuration files consulted when no explicit file is given.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(file) = app_dirs::config_file() {
		files.push(file);
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(LOCAL_CONFIG_FILE_NAME));
	}

	files
}

//! Where theme configuration and theme packages live on disk.
//!
//! Two base folders matter: the config folder holding `themes.toml`, and the
//! data folder holding the bundled and user-installed theme roots. Each can
//! be moved with an environment variable.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "macropad";
const APPLICATION: &str = "macropad";

const CONFIG_DIR_ENV: &str = "MACROPAD_CONFIG_DIR";
const DATA_DIR_ENV: &str = "MACROPAD_DATA_DIR";

const CONFIG_FILE_NAME: &str = "themes.toml";
const DEFAULT_THEMES_DIR: &str = "default-themes";
const USER_THEMES_DIR: &str = "themes";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("no home directory to place macropad themes under"))
}

/// Path named by `var`, if set to something non-empty.
fn dir_from_env(var: &str) -> Option<PathBuf> {
	env::var_os(var)
		.filter(|value| !value.is_empty())
		.map(PathBuf::from)
}

pub fn get_config_dir() -> Result<PathBuf> {
	match dir_from_env(CONFIG_DIR_ENV) {
		Some(dir) => Ok(dir),
		None => Ok(project_dirs()?.config_local_dir().to_path_buf()),
	}
}

pub fn get_data_dir() -> Result<PathBuf> {
	match dir_from_env(DATA_DIR_ENV) {
		Some(dir) => Ok(dir),
		None => Ok(project_dirs()?.data_local_dir().to_path_buf()),
	}
}

/// The per-user `themes.toml`.
pub fn config_file() -> Result<PathBuf> {
	Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Root holding the themes bundled with the application.
pub fn default_themes_dir() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(DEFAULT_THEMES_DIR))
}

/// Root the user drops extra theme folders into.
pub fn user_themes_dir() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(USER_THEMES_DIR))
}

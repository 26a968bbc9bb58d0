use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

use super::errors::SettingsError;
use super::resolved::ThemeSettings;
use crate::app_dirs;
use crate::theme::PlatformVersion;

const DEFAULT_THEME: &str = "default";
const DEFAULT_MIN_PLATFORM_VERSION: PlatformVersion = PlatformVersion::new(1, 0, 0);

/// Mirror of the configuration file before defaults and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawSettings {
	themes: ThemesSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ThemesSection {
	default_root: Option<PathBuf>,
	user_root: Option<PathBuf>,
	default_theme: Option<String>,
	min_platform_version: Option<String>,
}

impl RawSettings {
	/// Fill in defaults and validate the result.
	pub(super) fn resolve(self) -> Result<ThemeSettings> {
		let ThemesSection {
			default_root,
			user_root,
			default_theme,
			min_platform_version,
		} = self.themes;

		let default_root = match default_root {
			Some(path) if !path.as_os_str().is_empty() => path,
			_ => app_dirs::default_themes_dir()?,
		};

		// An explicitly empty user root turns the second scan off.
		let user_root = match user_root {
			Some(path) if path.as_os_str().is_empty() => None,
			Some(path) => Some(path),
			None => app_dirs::user_themes_dir().ok(),
		};

		let default_theme = match default_theme {
			Some(name) => {
				let trimmed = name.trim();
				if trimmed.is_empty() {
					return Err(SettingsError::invalid(
						"themes.default_theme",
						name,
						"must not be empty",
					)
					.into());
				}
				trimmed.to_string()
			}
			None => DEFAULT_THEME.to_string(),
		};

		let min_platform_version = match min_platform_version {
			Some(value) => PlatformVersion::parse(&value).map_err(|err| {
				SettingsError::invalid("themes.min_platform_version", value.clone(), err.to_string())
			})?,
			None => DEFAULT_MIN_PLATFORM_VERSION,
		};

		Ok(ThemeSettings {
			default_root,
			user_root,
			default_theme,
			min_platform_version,
		})
	}
}

use std::path::PathBuf;

use crate::theme::PlatformVersion;

/// Scan configuration after defaults and validation have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSettings {
	/// Root shipped with the application; scanned first.
	pub default_root: PathBuf,
	/// Root holding user-installed themes, if any.
	pub user_root: Option<PathBuf>,
	/// Folder name of the theme used when nothing else is selected.
	pub default_theme: String,
	/// Themes targeting an older platform than this are rejected.
	pub min_platform_version: PlatformVersion,
}

impl ThemeSettings {
	pub fn new(
		default_root: impl Into<PathBuf>,
		default_theme: impl Into<String>,
		min_platform_version: PlatformVersion,
	) -> Self {
		Self {
			default_root: default_root.into(),
			user_root: None,
			default_theme: default_theme.into(),
			min_platform_version,
		}
	}

	pub fn with_user_root(mut self, user_root: impl Into<PathBuf>) -> Self {
		self.user_root = Some(user_root.into());
		self
	}
}

use anyhow::Result;
use tracing::info;

use super::error::ScanError;
use super::registry::{ScanRoot, ThemeRegistry};
use crate::settings::{self, SettingsOptions, ThemeSettings};

/// Scans the configured theme roots and builds a [`ThemeRegistry`].
///
/// The loader holds configuration only. Every call to [`ThemeLoader::load_all`]
/// reads the filesystem again and returns an independent registry.
#[derive(Debug, Clone)]
pub struct ThemeLoader {
	settings: ThemeSettings,
}

impl ThemeLoader {
	pub fn new(settings: ThemeSettings) -> Self {
		Self { settings }
	}

	/// Build a loader from configuration files and environment variables.
	pub fn from_settings(options: &SettingsOptions) -> Result<Self> {
		Ok(Self::new(settings::load(options)?))
	}

	pub fn settings(&self) -> &ThemeSettings {
		&self.settings
	}

	/// Roots in scan order: the default root, then the user root if it differs.
	pub fn roots(&self) -> Vec<ScanRoot> {
		let mut roots = vec![ScanRoot::default_root(&self.settings.default_root)];

		if let Some(user_root) = &self.settings.user_root
			&& user_root != &self.settings.default_root
		{
			roots.push(ScanRoot::user_root(user_root));
		}

		roots
	}

	/// Scan every root once.
	pub fn load_all(&self) -> Result<ThemeRegistry, ScanError> {
		ThemeRegistry::scan(
			&self.roots(),
			&self.settings.default_theme,
			&self.settings.min_platform_version,
		)
	}

	/// Scan again, discarding whatever an earlier scan produced.
	pub fn rescan(&self) -> Result<ThemeRegistry, ScanError> {
		info!("refreshing themes");
		let registry = self.load_all()?;
		info!(
			loaded = registry.len(),
			failed = registry.failures().len(),
			"themes refreshed"
		);
		Ok(registry)
	}
}

//! Theme discovery across one or more root folders.
//!
//! [`ThemeRegistry::scan`] walks the immediate subfolders of every root,
//! loads each one that carries a `theme.xml` and keeps going when a single
//! theme is broken. Only a root that cannot be listed at all aborts a scan.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use super::descriptor::{DESCRIPTOR_FILE, ThemeDescriptor};
use super::error::{LoadError, LoadErrorKind, ScanError};
use super::version::PlatformVersion;

/// A folder holding theme subfolders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRoot {
	path: PathBuf,
	is_default: bool,
}

impl ScanRoot {
	/// Root shipped with the application.
	pub fn default_root(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			is_default: true,
		}
	}

	/// Root holding themes the user installed.
	pub fn user_root(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			is_default: false,
		}
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn is_default(&self) -> bool {
		self.is_default
	}

	fn label(&self) -> &'static str {
		if self.is_default { "default" } else { "user" }
	}
}

/// A theme folder that failed to load, with the reason.
#[derive(Debug)]
pub struct ThemeFailure {
	folder: String,
	error: LoadError,
}

impl ThemeFailure {
	/// Name of the folder that failed.
	pub fn folder(&self) -> &str {
		&self.folder
	}

	pub fn error(&self) -> &LoadError {
		&self.error
	}

	pub fn kind(&self) -> LoadErrorKind {
		self.error.kind()
	}
}

/// Outcome of a single scan: loaded themes plus the folders that failed.
///
/// A registry is never updated in place. Scan again to observe changes on
/// disk.
#[derive(Debug)]
pub struct ThemeRegistry {
	default_theme_name: String,
	entries: Vec<ThemeDescriptor>,
	failures: Vec<ThemeFailure>,
	default_theme_present: bool,
	default_theme_is_broken: bool,
}

impl ThemeRegistry {
	/// Scan `roots` in order and aggregate every theme found.
	///
	/// Themes whose platform version is older than `min_platform_version`
	/// are recorded as failures. When two roots contain a theme with the
	/// same name, the one from the earlier root wins.
	///
	/// # Errors
	///
	/// Returns [`ScanError`] when a root is not a folder or cannot be listed.
	pub fn scan(
		roots: &[ScanRoot],
		default_theme_name: &str,
		min_platform_version: &PlatformVersion,
	) -> Result<Self, ScanError> {
		let mut pass = ScanPass::new(default_theme_name, min_platform_version);
		let mut visited: Vec<PathBuf> = Vec::with_capacity(roots.len());

		for root in roots {
			// Missing roots keep their literal path and fail in `scan_root`.
			let key = fs::canonicalize(root.path()).unwrap_or_else(|_| root.path().to_path_buf());
			if visited.contains(&key) {
				debug!(root = %root.path().display(), "theme root already scanned");
				continue;
			}
			visited.push(key);
			pass.scan_root(root)?;
		}

		Ok(pass.finish())
	}

	/// Loaded themes in scan order, unique by name.
	pub fn entries(&self) -> &[ThemeDescriptor] {
		&self.entries
	}

	/// Folders that failed to load, in scan order.
	pub fn failures(&self) -> &[ThemeFailure] {
		&self.failures
	}

	/// Whether the configured default theme loaded successfully.
	pub fn default_theme_present(&self) -> bool {
		self.default_theme_present
	}

	/// Whether a folder named like the configured default theme failed to load.
	pub fn default_theme_is_broken(&self) -> bool {
		self.default_theme_is_broken
	}

	/// Look up a loaded theme by its folder name.
	pub fn get(&self, name: &str) -> Option<&ThemeDescriptor> {
		self.entries.iter().find(|theme| theme.full_name() == name)
	}

	/// The configured default theme, when it loaded.
	pub fn default_theme(&self) -> Option<&ThemeDescriptor> {
		self.get(&self.default_theme_name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	pub fn names(&self) -> Vec<&str> {
		self.entries.iter().map(ThemeDescriptor::full_name).collect()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// State for one scan invocation. Dropped once the registry is built.
struct ScanPass<'a> {
	default_theme_name: &'a str,
	min_platform_version: &'a PlatformVersion,
	seen: HashSet<String>,
	entries: Vec<ThemeDescriptor>,
	failures: Vec<ThemeFailure>,
	default_theme_present: bool,
	default_theme_is_broken: bool,
}

impl<'a> ScanPass<'a> {
	fn new(default_theme_name: &'a str, min_platform_version: &'a PlatformVersion) -> Self {
		Self {
			default_theme_name,
			min_platform_version,
			seen: HashSet::new(),
			entries: Vec::new(),
			failures: Vec::new(),
			default_theme_present: false,
			default_theme_is_broken: false,
		}
	}

	fn scan_root(&mut self, root: &ScanRoot) -> Result<(), ScanError> {
		let path = root.path();
		if !path.is_dir() {
			return Err(ScanError::NotADirectory {
				path: path.to_path_buf(),
			});
		}

		let folders = list_subfolders(path)?;
		debug!(
			root = %path.display(),
			kind = root.label(),
			folders = folders.len(),
			"scanning theme root"
		);

		for folder in folders {
			self.visit(&folder);
		}

		Ok(())
	}

	fn visit(&mut self, folder: &Path) {
		let Some(name) = folder.file_name().map(|name| name.to_string_lossy().into_owned()) else {
			return;
		};

		if !folder.join(DESCRIPTOR_FILE).is_file() {
			debug!(folder = %name, "no {DESCRIPTOR_FILE}, not a theme");
			return;
		}

		let is_default = name == self.default_theme_name;

		match self.admit(folder) {
			Ok(theme) => {
				if is_default {
					self.default_theme_present = true;
				}

				if self.seen.insert(theme.full_name().to_string()) {
					info!(theme = %name, "added theme");
					self.entries.push(theme);
				} else {
					info!(theme = %name, "skipping theme, already added");
				}
			}
			Err(err) => {
				error!(theme = %name, reason = ?err.kind(), "error adding theme: {err}");
				if is_default {
					self.default_theme_is_broken = true;
				}
				self.failures.push(ThemeFailure {
					folder: name,
					error: err,
				});
			}
		}
	}

	fn admit(&self, folder: &Path) -> Result<ThemeDescriptor, LoadError> {
		let theme = ThemeDescriptor::load(folder)?;

		if self.min_platform_version.is_bigger_than(theme.platform_version()) {
			return Err(LoadError::UnsupportedPlatformVersion {
				name: theme.full_name().to_string(),
				declared: theme.platform_version().clone(),
				minimum: self.min_platform_version.clone(),
			});
		}

		Ok(theme)
	}

	fn finish(self) -> ThemeRegistry {
		ThemeRegistry {
			default_theme_name: self.default_theme_name.to_string(),
			entries: self.entries,
			failures: self.failures,
			default_theme_present: self.default_theme_present,
			default_theme_is_broken: self.default_theme_is_broken,
		}
	}
}

/// Immediate subfolders of `root`, sorted by name.
fn list_subfolders(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
	let unlistable = |source: io::Error| ScanError::Unlistable {
		path: root.to_path_buf(),
		source,
	};

	let mut folders = Vec::new();
	for entry in fs::read_dir(root).map_err(unlistable)? {
		let path = entry.map_err(unlistable)?.path();
		if path.is_dir() {
			folders.push(path);
		}
	}

	folders.sort();
	Ok(folders)
}

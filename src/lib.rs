//! Discovery and validation of theme packages for the macro-pad application.
//!
//! A theme is a folder with a `theme.xml` descriptor and the stylesheets and
//! fonts it references. [`ThemeRegistry::scan`] loads every theme below one or
//! two roots, keeps the broken ones as [`ThemeFailure`]s and reports whether
//! the configured default theme is usable. [`ThemeLoader`] runs the same scan
//! from resolved [`ThemeSettings`].

pub mod app_dirs;
pub mod logging;
pub mod settings;
pub mod theme;

pub use settings::{SettingsError, SettingsOptions, ThemeSettings};
pub use theme::{
	DESCRIPTOR_FILE, LoadError, LoadErrorKind, PlatformVersion, ScanError, ScanRoot,
	ThemeDescriptor, ThemeFailure, ThemeLoader, ThemeRegistry, VersionError,
};

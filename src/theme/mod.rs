//! Theme discovery and validation.
//!
//! - `descriptor`: loads one theme folder into a [`ThemeDescriptor`]
//! - `registry`: scans theme roots into a [`ThemeRegistry`]
//! - `loader`: [`ThemeLoader`] ties a registry scan to resolved settings
//!
//! ```ignore
//! use macropad_themes::{PlatformVersion, ScanRoot, ThemeRegistry};
//!
//! let registry = ThemeRegistry::scan(
//! 	&[
//! 		ScanRoot::default_root("/usr/share/macropad/themes"),
//! 		ScanRoot::user_root("/home/me/.local/share/macropad/themes"),
//! 	],
//! 	"classic",
//! 	&PlatformVersion::new(1, 0, 0),
//! )?;
//!
//! for failure in registry.failures() {
//! 	eprintln!("{}: {}", failure.folder(), failure.error());
//! }
//! ```

mod assets;
mod descriptor;
mod document;
mod error;
mod loader;
mod registry;
mod version;

pub use descriptor::{DESCRIPTOR_FILE, ThemeDescriptor, UNKNOWN};
pub use error::{LoadError, LoadErrorKind, ScanError};
pub use loader::ThemeLoader;
pub use registry::{ScanRoot, ThemeFailure, ThemeRegistry};
pub use version::{PlatformVersion, VersionError};

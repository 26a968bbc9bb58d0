use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::version::{PlatformVersion, VersionError};

/// Reason a single theme folder could not be loaded.
///
/// These failures are recoverable: a scan records them next to the folder
/// name and moves on to the next candidate.
#[derive(Debug, Error)]
pub enum LoadError {
	#[error("theme path {} is not a folder", .path.display())]
	NotADirectory { path: PathBuf },

	#[error("theme folder {} has no theme.xml", .path.display())]
	MissingDescriptor { path: PathBuf },

	#[error("failed to parse theme descriptor {}: {message}", .path.display())]
	MalformedDescriptor { path: PathBuf, message: String },

	#[error("invalid theme-platform-version in {}", .path.display())]
	InvalidPlatformVersion {
		path: PathBuf,
		#[source]
		source: VersionError,
	},

	#[error("invalid theme version in {}", .path.display())]
	InvalidVersion {
		path: PathBuf,
		#[source]
		source: VersionError,
	},

	#[error("no stylesheets found in {}, at least one is required", .path.display())]
	NoStylesheets { path: PathBuf },

	#[error("theme {name} targets platform {declared}, minimum supported is {minimum}")]
	UnsupportedPlatformVersion {
		name: String,
		declared: PlatformVersion,
		minimum: PlatformVersion,
	},
}

/// Field-less reason code for a [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadErrorKind {
	NotADirectory,
	MissingDescriptor,
	MalformedDescriptor,
	InvalidPlatformVersion,
	InvalidVersion,
	NoStylesheets,
	UnsupportedPlatformVersion,
}

impl LoadError {
	pub fn kind(&self) -> LoadErrorKind {
		match self {
			Self::NotADirectory { .. } => LoadErrorKind::NotADirectory,
			Self::MissingDescriptor { .. } => LoadErrorKind::MissingDescriptor,
			Self::MalformedDescriptor { .. } => LoadErrorKind::MalformedDescriptor,
			Self::InvalidPlatformVersion { .. } => LoadErrorKind::InvalidPlatformVersion,
			Self::InvalidVersion { .. } => LoadErrorKind::InvalidVersion,
			Self::NoStylesheets { .. } => LoadErrorKind::NoStylesheets,
			Self::UnsupportedPlatformVersion { .. } => LoadErrorKind::UnsupportedPlatformVersion,
		}
	}
}

/// Failure that prevents a scan from assessing any theme at all.
#[derive(Debug, Error)]
pub enum ScanError {
	#[error("theme root {} does not exist or is not a folder", .path.display())]
	NotADirectory { path: PathBuf },

	#[error("failed to list theme root {}", .path.display())]
	Unlistable {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
}

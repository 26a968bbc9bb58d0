//! Platform and theme version numbers.
//!
//! Theme descriptors usually carry short versions such as `2.0`, so parsing
//! accepts one to three numeric components and pads the rest with zeros
//! before handing the value to [`semver`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors produced while parsing a version string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
	#[error("version string is empty")]
	Empty,

	#[error("version `{value}` has more than three components")]
	TooManyComponents { value: String },

	#[error("version component `{component}` in `{value}` is not a number")]
	InvalidComponent { value: String, component: String },

	#[error("version `{value}` is not valid semver: {reason}")]
	Semver { value: String, reason: String },
}

/// A version compared component-wise, `major.minor.patch`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlatformVersion(semver::Version);

impl PlatformVersion {
	pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
		Self(semver::Version::new(major, minor, patch))
	}

	/// Parse `input`, tolerating missing minor and patch components.
	pub fn parse(input: &str) -> Result<Self, VersionError> {
		let value = input.trim();
		if value.is_empty() {
			return Err(VersionError::Empty);
		}

		// Pre-release and build suffixes only make sense on a full version.
		if value.contains(['-', '+']) {
			return semver::Version::parse(value)
				.map(Self)
				.map_err(|err| VersionError::Semver {
					value: value.to_string(),
					reason: err.to_string(),
				});
		}

		let parts: Vec<&str> = value.split('.').collect();
		if parts.len() > 3 {
			return Err(VersionError::TooManyComponents {
				value: value.to_string(),
			});
		}

		let mut numbers = [0u64; 3];
		for (slot, part) in numbers.iter_mut().zip(&parts) {
			*slot = parse_component(value, part)?;
		}

		let [major, minor, patch] = numbers;
		Ok(Self::new(major, minor, patch))
	}

	/// Whether `self` is strictly newer than `other`.
	pub fn is_bigger_than(&self, other: &Self) -> bool {
		self > other
	}

	pub fn major(&self) -> u64 {
		self.0.major
	}

	pub fn minor(&self) -> u64 {
		self.0.minor
	}

	pub fn patch(&self) -> u64 {
		self.0.patch
	}
}

fn parse_component(value: &str, component: &str) -> Result<u64, VersionError> {
	let invalid = || VersionError::InvalidComponent {
		value: value.to_string(),
		component: component.to_string(),
	};

	if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
		return Err(invalid());
	}

	component.parse().map_err(|_| invalid())
}

impl FromStr for PlatformVersion {
	type Err = VersionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for PlatformVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}

use thiserror::Error;

/// A configuration value that was read successfully but cannot be used.
#[derive(Debug, Error)]
#[error("invalid value for {key}: {reason} (value: {value:?})")]
pub struct SettingsError {
	pub key: &'static str,
	pub value: String,
	pub reason: String,
}

impl SettingsError {
	pub(crate) fn invalid<V, R>(key: &'static str, value: V, reason: R) -> Self
	where
		V: Into<String>,
		R: Into<String>,
	{
		Self {
			key,
			value: value.into(),
			reason: reason.into(),
		}
	}
}

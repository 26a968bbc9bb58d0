//! Log output for theme scans.
//!
//! Scans report through `tracing`. Embedders that already install a
//! subscriber can skip [`initialize`].

use std::sync::Once;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install a formatting subscriber filtered by `RUST_LOG`, defaulting to
/// `info`. Later calls, or an existing global subscriber, leave things as
/// they are.
pub fn initialize() {
	static INIT: Once = Once::new();
	INIT.call_once(|| {
		let filter =
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
		let _ = tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_target(false)
			.try_init();
	});
}

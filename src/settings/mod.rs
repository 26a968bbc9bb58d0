//! Configuration for theme scanning.
//!
//! Settings are layered from built-in defaults, configuration files and
//! environment variables. [`load`] is the entry point and returns the
//! validated [`ThemeSettings`] used by [`ThemeLoader`](crate::ThemeLoader).

mod errors;
mod loader;
mod raw;
mod resolved;
mod sources;

pub use errors::SettingsError;
pub use loader::{SettingsOptions, load};
pub use resolved::ThemeSettings;

use std::path::{Component, Path, PathBuf};

use url::Url;

/// Resolve `reference` against the theme directory `root` into a `file://` URL.
///
/// The reference is always joined under `root`, so a leading `/` does not
/// make it absolute. `.` and `..` are folded lexically and `..` may climb
/// above `root`. Returns `None` only when `root` is not absolute.
pub(super) fn resolve_asset(root: &Path, reference: &str) -> Option<Url> {
	let resolved = join_relative(root, Path::new(reference));
	Url::from_file_path(resolved).ok()
}

fn join_relative(root: &Path, reference: &Path) -> PathBuf {
	let mut resolved = root.to_path_buf();

	for component in reference.components() {
		match component {
			Component::Normal(part) => resolved.push(part),
			Component::ParentDir => {
				resolved.pop();
			}
			Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
		}
	}

	resolved
}

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use super::assets::resolve_asset;
use super::document::DescriptorDocument;
use super::error::LoadError;
use super::version::PlatformVersion;

/// File name every theme folder must contain.
pub const DESCRIPTOR_FILE: &str = "theme.xml";

/// Value used for descriptive fields a theme leaves out.
pub const UNKNOWN: &str = "Unknown";

const PLATFORM_VERSION: &[&str] = &["theme-platform-version"];
const SHORT_NAME: &[&str] = &["info", "short-name"];
const AUTHOR: &[&str] = &["info", "author"];
const WEBSITE: &[&str] = &["info", "website"];
const VERSION: &[&str] = &["info", "version"];

// Unified layout first, then the older server/client split.
const ASSET_SECTIONS: &[&[&str]] = &[&["theme"], &["theme", "server"], &["theme", "client"]];

/// A validated theme folder.
///
/// Construct with [`ThemeDescriptor::load`]. The value never changes after
/// loading; reload the folder to pick up edits.
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
	path: PathBuf,
	full_name: String,
	short_name: String,
	author: String,
	website: Option<String>,
	version: PlatformVersion,
	platform_version: PlatformVersion,
	stylesheets: Vec<Url>,
	fonts: Vec<Url>,
}

impl ThemeDescriptor {
	/// Load and validate the theme stored in `directory`.
	///
	/// Checks run in a fixed order and the first failing one decides the
	/// returned [`LoadError`].
	pub fn load(directory: impl AsRef<Path>) -> Result<Self, LoadError> {
		let directory = directory.as_ref();
		let folder_name = directory
			.file_name()
			.map(|name| name.to_string_lossy().into_owned());

		if !directory.is_dir() {
			return Err(LoadError::NotADirectory {
				path: directory.to_path_buf(),
			});
		}

		let path = fs::canonicalize(directory).map_err(|_| LoadError::NotADirectory {
			path: directory.to_path_buf(),
		})?;

		let descriptor_path = path.join(DESCRIPTOR_FILE);
		if !descriptor_path.is_file() {
			return Err(LoadError::MissingDescriptor { path });
		}

		let contents =
			fs::read_to_string(&descriptor_path).map_err(|err| LoadError::MalformedDescriptor {
				path: descriptor_path.clone(),
				message: err.to_string(),
			})?;
		let document =
			DescriptorDocument::parse(&contents).map_err(|err| LoadError::MalformedDescriptor {
				path: descriptor_path.clone(),
				message: err.to_string(),
			})?;

		// A symlinked folder keeps the name it was found under.
		let full_name = folder_name
			.or_else(|| path.file_name().map(|name| name.to_string_lossy().into_owned()))
			.unwrap_or_else(|| path.display().to_string());

		Self::from_document(path, full_name, &document)
	}

	fn from_document(
		path: PathBuf,
		full_name: String,
		document: &DescriptorDocument<'_>,
	) -> Result<Self, LoadError> {
		let platform_version =
			PlatformVersion::parse(&document.text(PLATFORM_VERSION).unwrap_or_default()).map_err(
				|source| LoadError::InvalidPlatformVersion {
					path: path.clone(),
					source,
				},
			)?;

		let short_name = document
			.text(SHORT_NAME)
			.unwrap_or_else(|| UNKNOWN.to_string());
		let author = document.text(AUTHOR).unwrap_or_else(|| UNKNOWN.to_string());
		let website = document.text(WEBSITE);

		let version = PlatformVersion::parse(&document.text(VERSION).unwrap_or_default())
			.map_err(|source| LoadError::InvalidVersion {
				path: path.clone(),
				source,
			})?;

		let stylesheet_refs = asset_references(document, "stylesheets", "stylesheet");
		if stylesheet_refs.is_empty() {
			return Err(LoadError::NoStylesheets { path });
		}
		let font_refs = asset_references(document, "fonts", "font");

		let stylesheets = resolve_all(&path, &stylesheet_refs);
		let fonts = resolve_all(&path, &font_refs);

		Ok(Self {
			path,
			full_name,
			short_name,
			author,
			website,
			version,
			platform_version,
			stylesheets,
			fonts,
		})
	}

	/// Absolute, canonical location of the theme folder.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Name of the folder the theme was loaded from, before symlinks are
	/// followed. Unique within a registry.
	pub fn full_name(&self) -> &str {
		&self.full_name
	}

	pub fn short_name(&self) -> &str {
		&self.short_name
	}

	pub fn author(&self) -> &str {
		&self.author
	}

	pub fn website(&self) -> Option<&str> {
		self.website.as_deref()
	}

	pub fn version(&self) -> &PlatformVersion {
		&self.version
	}

	/// Platform version the theme was written against.
	pub fn platform_version(&self) -> &PlatformVersion {
		&self.platform_version
	}

	/// Stylesheet URLs in declaration order. Never empty.
	pub fn stylesheets(&self) -> &[Url] {
		&self.stylesheets
	}

	pub fn fonts(&self) -> &[Url] {
		&self.fonts
	}
}

fn asset_references(document: &DescriptorDocument<'_>, list: &str, item: &str) -> Vec<String> {
	ASSET_SECTIONS
		.iter()
		.flat_map(|section| {
			let mut path: Vec<&str> = Vec::with_capacity(section.len() + 2);
			path.extend_from_slice(section);
			path.push(list);
			path.push(item);
			document.texts(&path)
		})
		.collect()
}

// `root` is canonical, hence absolute, so every reference converts.
fn resolve_all(root: &Path, references: &[String]) -> Vec<Url> {
	references
		.iter()
		.filter_map(|reference| resolve_asset(root, reference))
		.collect()
}

#[cfg(test)]
mod tests {
	use tempfile::{TempDir, tempdir};

	use super::*;
	use crate::theme::LoadErrorKind;

	fn theme_dir(xml: Option<&str>) -> TempDir {
		let dir = tempdir().unwrap();
		if let Some(xml) = xml {
			fs::write(dir.path().join(DESCRIPTOR_FILE), xml).unwrap();
		}
		dir
	}

	fn kind_of(xml: &str) -> LoadErrorKind {
		let dir = theme_dir(Some(xml));
		ThemeDescriptor::load(dir.path()).unwrap_err().kind()
	}

	#[test]
	fn loads_metadata_and_defaults() {
		let dir = theme_dir(Some(
			r#"<config>
				<theme-platform-version>1.0.0</theme-platform-version>
				<info>
					<version>2.1</version>
				</info>
				<theme>
					<stylesheets><stylesheet>style.css</stylesheet></stylesheets>
				</theme>
			</config>"#,
		));

		let theme = ThemeDescriptor::load(dir.path()).unwrap();

		assert_eq!(theme.short_name(), UNKNOWN);
		assert_eq!(theme.author(), UNKNOWN);
		assert_eq!(theme.website(), None);
		assert_eq!(theme.version(), &PlatformVersion::new(2, 1, 0));
		assert_eq!(theme.platform_version(), &PlatformVersion::new(1, 0, 0));
		assert!(theme.fonts().is_empty());
		assert_eq!(
			theme.stylesheets()[0].to_file_path().unwrap(),
			theme.path().join("style.css")
		);
		assert!(theme.path().is_absolute());
	}

	#[test]
	fn precondition_order_is_fixed() {
		let file = tempfile::NamedTempFile::new().unwrap();
		assert_eq!(
			ThemeDescriptor::load(file.path()).unwrap_err().kind(),
			LoadErrorKind::NotADirectory
		);

		let empty = theme_dir(None);
		assert_eq!(
			ThemeDescriptor::load(empty.path()).unwrap_err().kind(),
			LoadErrorKind::MissingDescriptor
		);

		assert_eq!(kind_of("<config>"), LoadErrorKind::MalformedDescriptor);

		// Every field is missing here; the platform version is checked first.
		assert_eq!(kind_of("<config/>"), LoadErrorKind::InvalidPlatformVersion);

		assert_eq!(
			kind_of(
				"<config><theme-platform-version>1</theme-platform-version>\
				 <info><version>one</version></info></config>"
			),
			LoadErrorKind::InvalidVersion
		);

		assert_eq!(
			kind_of(
				"<config><theme-platform-version>1</theme-platform-version>\
				 <info><version>1</version></info>\
				 <theme><fonts><font>a.ttf</font><font>b.ttf</font></fonts></theme></config>"
			),
			LoadErrorKind::NoStylesheets
		);
	}

	#[test]
	fn blank_stylesheet_entries_do_not_count() {
		assert_eq!(
			kind_of(
				"<config><theme-platform-version>1</theme-platform-version>\
				 <info><version>1</version></info>\
				 <theme><stylesheets><stylesheet>  </stylesheet></stylesheets></theme></config>"
			),
			LoadErrorKind::NoStylesheets
		);
	}

	#[test]
	fn rooted_and_parent_references_still_load() {
		let dir = theme_dir(Some(
			"<config><theme-platform-version>1</theme-platform-version>\
			 <info><version>1</version></info>\
			 <theme><stylesheets>\
			 <stylesheet>/style.css</stylesheet>\
			 <stylesheet>../common/base.css</stylesheet>\
			 </stylesheets></theme></config>",
		));

		let theme = ThemeDescriptor::load(dir.path()).unwrap();
		let paths: Vec<_> = theme
			.stylesheets()
			.iter()
			.map(|url| url.to_file_path().unwrap())
			.collect();

		let parent = theme.path().parent().unwrap();
		assert_eq!(
			paths,
			vec![
				theme.path().join("style.css"),
				parent.join("common").join("base.css")
			]
		);
	}

	#[test]
	fn comments_inside_fields_are_skipped() {
		let dir = theme_dir(Some(
			"<config><theme-platform-version>1</theme-platform-version>\
			 <info><version><!-- x -->1.0</version></info>\
			 <theme><stylesheets><stylesheet><!-- main -->style.css</stylesheet></stylesheets></theme></config>",
		));

		let theme = ThemeDescriptor::load(dir.path()).unwrap();

		assert_eq!(theme.version(), &PlatformVersion::new(1, 0, 0));
		assert_eq!(theme.stylesheets().len(), 1);
	}

	#[cfg(unix)]
	#[test]
	fn symlinked_folder_keeps_its_own_name() {
		let root = tempdir().unwrap();
		let target = root.path().join("classic-1.2");
		fs::create_dir(&target).unwrap();
		fs::write(
			target.join(DESCRIPTOR_FILE),
			"<config><theme-platform-version>1</theme-platform-version>\
			 <info><version>1</version></info>\
			 <theme><stylesheets><stylesheet>style.css</stylesheet></stylesheets></theme></config>",
		)
		.unwrap();
		let link = root.path().join("classic");
		std::os::unix::fs::symlink(&target, &link).unwrap();

		let theme = ThemeDescriptor::load(&link).unwrap();

		assert_eq!(theme.full_name(), "classic");
		assert_eq!(theme.path(), fs::canonicalize(&target).unwrap());
	}

	#[test]
	fn legacy_split_layout_is_merged() {
		let dir = theme_dir(Some(
			r#"<config>
				<theme-platform-version>1.0.0</theme-platform-version>
				<info><version>1.0.0</version></info>
				<theme>
					<server>
						<stylesheets><stylesheet>server.css</stylesheet></stylesheets>
						<fonts><font>server.ttf</font></fonts>
					</server>
					<client>
						<stylesheets><stylesheet>client.css</stylesheet></stylesheets>
					</client>
				</theme>
			</config>"#,
		));

		let theme = ThemeDescriptor::load(dir.path()).unwrap();

		let names: Vec<_> = theme
			.stylesheets()
			.iter()
			.map(|url| url.path_segments().unwrap().last().unwrap().to_string())
			.collect();
		assert_eq!(names, vec!["server.css", "client.css"]);
		assert_eq!(theme.fonts().len(), 1);
	}
}

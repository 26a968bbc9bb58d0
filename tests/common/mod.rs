#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use macropad_themes::DESCRIPTOR_FILE;

/// Builder for a `theme.xml` plus the folder that holds it.
pub struct ThemeFixture {
	platform_version: Option<String>,
	version: Option<String>,
	short_name: Option<String>,
	author: Option<String>,
	stylesheets: Vec<String>,
	fonts: Vec<String>,
}

impl ThemeFixture {
	pub fn new() -> Self {
		Self {
			platform_version: Some("1.0.0".into()),
			version: Some("1.0.0".into()),
			short_name: None,
			author: None,
			stylesheets: vec!["style.css".into()],
			fonts: Vec::new(),
		}
	}

	pub fn platform_version(mut self, value: Option<&str>) -> Self {
		self.platform_version = value.map(str::to_string);
		self
	}

	pub fn version(mut self, value: Option<&str>) -> Self {
		self.version = value.map(str::to_string);
		self
	}

	pub fn short_name(mut self, value: &str) -> Self {
		self.short_name = Some(value.into());
		self
	}

	pub fn author(mut self, value: &str) -> Self {
		self.author = Some(value.into());
		self
	}

	pub fn stylesheets(mut self, values: &[&str]) -> Self {
		self.stylesheets = values.iter().map(|value| value.to_string()).collect();
		self
	}

	pub fn fonts(mut self, values: &[&str]) -> Self {
		self.fonts = values.iter().map(|value| value.to_string()).collect();
		self
	}

	pub fn xml(&self) -> String {
		let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<config>\n");
		if let Some(value) = &self.platform_version {
			xml.push_str(&format!("\t<theme-platform-version>{value}</theme-platform-version>\n"));
		}

		xml.push_str("\t<info>\n");
		for (tag, value) in [
			("short-name", &self.short_name),
			("author", &self.author),
			("version", &self.version),
		] {
			if let Some(value) = value {
				xml.push_str(&format!("\t\t<{tag}>{value}</{tag}>\n"));
			}
		}
		xml.push_str("\t</info>\n\t<theme>\n");

		push_list(&mut xml, "stylesheets", "stylesheet", &self.stylesheets);
		push_list(&mut xml, "fonts", "font", &self.fonts);

		xml.push_str("\t</theme>\n</config>\n");
		xml
	}

	/// Write the theme into `root/name` and return the folder.
	pub fn write(&self, root: &Path, name: &str) -> PathBuf {
		let dir = root.join(name);
		fs::create_dir_all(&dir).expect("create theme folder");
		fs::write(dir.join(DESCRIPTOR_FILE), self.xml()).expect("write theme.xml");
		dir
	}
}

fn push_list(xml: &mut String, list: &str, item: &str, values: &[String]) {
	if values.is_empty() {
		return;
	}
	xml.push_str(&format!("\t\t<{list}>\n"));
	for value in values {
		xml.push_str(&format!("\t\t\t<{item}>{value}</{item}>\n"));
	}
	xml.push_str(&format!("\t\t</{list}>\n"));
}

/// Write a descriptor that is not well-formed XML.
pub fn write_malformed(root: &Path, name: &str) -> PathBuf {
	let dir = root.join(name);
	fs::create_dir_all(&dir).expect("create theme folder");
	fs::write(dir.join(DESCRIPTOR_FILE), "<config><info></config>").expect("write theme.xml");
	dir
}

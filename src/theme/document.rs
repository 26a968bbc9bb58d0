//! Read-only queries over a parsed `theme.xml`.
//!
//! Paths are element names relative to the document's root element, so
//! `["info", "version"]` addresses `<root><info><version>`. The root element's
//! own name is not checked.

use roxmltree::{Document, Node, ParsingOptions};

pub(super) struct DescriptorDocument<'input> {
	document: Document<'input>,
}

impl<'input> DescriptorDocument<'input> {
	pub(super) fn parse(text: &'input str) -> Result<Self, roxmltree::Error> {
		let options = ParsingOptions {
			allow_dtd: true,
			..ParsingOptions::default()
		};
		let document = Document::parse_with_options(text, options)?;
		Ok(Self { document })
	}

	/// Trimmed text of the first element at `path`, if it is non-blank.
	pub(super) fn text(&self, path: &[&str]) -> Option<String> {
		self.elements(path).into_iter().find_map(element_text)
	}

	/// Trimmed, non-blank texts of every element at `path`, in document order.
	pub(super) fn texts(&self, path: &[&str]) -> Vec<String> {
		self.elements(path)
			.into_iter()
			.filter_map(element_text)
			.collect()
	}

	fn elements(&self, path: &[&str]) -> Vec<Node<'_, 'input>> {
		let mut current = vec![self.document.root_element()];

		for name in path {
			current = current
				.iter()
				.flat_map(|node| node.children())
				.filter(|child| child.is_element() && child.has_tag_name(*name))
				.collect();

			if current.is_empty() {
				break;
			}
		}

		current
	}
}

/// All text below `node`, comments and processing instructions skipped.
fn element_text(node: Node<'_, '_>) -> Option<String> {
	let text: String = node
		.descendants()
		.filter(Node::is_text)
		.filter_map(|child| child.text())
		.collect();

	let trimmed = text.trim();
	(!trimmed.is_empty()).then(|| trimmed.to_string())
}

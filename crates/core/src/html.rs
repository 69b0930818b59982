use std::io;

use select::{
	document::Document,
	node::Node,
	predicate::{Attr, Class, Name, Predicate},
};

use crate::extract::{Card, CardSource, ROOM_LABELS};

const DAY_STYLE: &str = "font-weight: 600; font-size: 10px;";
const TIME_STYLE: &str = "font-weight: 500; font-size: 18px;";
const CODE_STYLE: &str = "font-weight: 600; font-size: 12px;";
const SECTION_STYLE: &str = "color: rgb(10, 187, 135);";
const BADGE_CLASSES: [&str; 2] = ["badge-blue", "badge-orange"];

/// A registration page parsed with `select`.
pub struct HtmlDocument(Document);

impl HtmlDocument {
	#[must_use]
	pub fn parse(html: &str) -> Self {
		Self(Document::from(html))
	}

	/// # Errors
	///
	/// Any error from reading `reader`.
	pub fn from_read<R: io::Read>(reader: R) -> io::Result<Self> {
		Document::from_read(reader).map(Self)
	}
}

impl From<Document> for HtmlDocument {
	fn from(document: Document) -> Self {
		Self(document)
	}
}

impl CardSource for HtmlDocument {
	type Card<'a> = HtmlCard<'a>;

	fn cards(&self) -> Vec<HtmlCard<'_>> {
		self.0.find(Class("card")).map(HtmlCard).collect()
	}
}

/// Matches elements with a class attribute containing any of the given
/// fragments, like `[class*=...]`.
struct ClassContains(&'static [&'static str]);

impl Predicate for ClassContains {
	fn matches(&self, node: &Node) -> bool {
		node.attr("class")
			.is_some_and(|class| self.0.iter().any(|fragment| class.contains(*fragment)))
	}
}

/// One `.card` element.
#[derive(Clone, Copy)]
pub struct HtmlCard<'a>(Node<'a>);

impl<'a> HtmlCard<'a> {
	fn first<P: Predicate>(&self, predicate: P) -> Option<String> {
		self.0.find(predicate).next().map(|node| node.text())
	}

	fn styled(&self, tag: &'static str, style: &'static str) -> Option<String> {
		self.first(Name(tag).and(Attr("style", style)))
	}

	fn closest(node: Node<'a>, tag: &str) -> Option<Node<'a>> {
		std::iter::successors(Some(node), Node::parent).find(|n| n.name() == Some(tag))
	}
}

impl Card for HtmlCard<'_> {
	fn day(&self) -> Option<String> {
		self.styled("div", DAY_STYLE)
	}

	fn time_range(&self) -> Option<String> {
		self.styled("div", TIME_STYLE)
	}

	fn code(&self) -> Option<String> {
		self.styled("div", CODE_STYLE)
	}

	fn title(&self) -> Option<String> {
		self.first(Name("div").and(Class("cut-word")))
	}

	fn room(&self) -> Option<String> {
		let label = self
			.0
			.find(Name("span"))
			.find(|span| ROOM_LABELS.iter().any(|room| span.text().contains(*room)))?;

		Self::closest(label, "div").map(|div| div.text())
	}

	fn type_badge(&self) -> Option<String> {
		self.first(Name("span").and(ClassContains(&BADGE_CLASSES)))
	}

	fn section(&self) -> Option<String> {
		self.styled("span", SECTION_STYLE)
	}
}

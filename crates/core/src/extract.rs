//! Turns course cards into [`CourseRecord`]s.
//!
//! The walk over the page lives behind [`CardSource`] and [`Card`], so the
//! field rules here work the same on a parsed HTML page
//! ([`crate::html::HtmlDocument`]) as on any hand-built fixture.

use tracing::{debug, instrument};

use crate::{
	record::{CourseRecord, UNKNOWN},
	time::ClockTime,
};

/// Words marking the room label, in English and Thai.
pub const ROOM_LABELS: [&str; 2] = ["Room", "ห้อง"];

/// Badge texts for each class type.
pub const TYPE_LABELS: [(&str, [&str; 2]); 2] = [
	("Lecture", ["Lec", "บรรยาย"]),
	("Laboratory", ["Lab", "ปฏิบัติ"]),
];

/// Labelled lookups on a single course card.
///
/// Each method returns the raw text of its label, or `None` when the card
/// has no such element.
pub trait Card {
	fn day(&self) -> Option<String>;
	/// Text such as `09:00 - 12:00`.
	fn time_range(&self) -> Option<String>;
	fn code(&self) -> Option<String>;
	fn title(&self) -> Option<String>;
	/// The whole block holding the room, including one of [`ROOM_LABELS`].
	fn room(&self) -> Option<String>;
	fn type_badge(&self) -> Option<String>;
	fn section(&self) -> Option<String>;
}

/// Something that holds course cards in document order.
pub trait CardSource {
	type Card<'a>: Card
	where
		Self: 'a;

	fn cards(&self) -> Vec<Self::Card<'_>>;
}

/// Extracts one record per card, in order. Never fails and never drops a
/// card: missing labels turn into [`UNKNOWN`].
#[must_use]
#[instrument(level = "debug", skip_all)]
pub fn extract<S: CardSource>(source: &S) -> Vec<CourseRecord> {
	let records = source
		.cards()
		.iter()
		.map(record_from_card)
		.collect::<Vec<_>>();

	debug!(count = records.len(), "extracted course cards");

	records
}

#[must_use]
pub fn record_from_card<C: Card + ?Sized>(card: &C) -> CourseRecord {
	let (start, end) = card
		.time_range()
		.and_then(|range| split_time_range(&range))
		.map_or_else(
			|| (UNKNOWN.to_string(), UNKNOWN.to_string()),
			|(start, end)| (start.to_string(), end.to_string()),
		);

	CourseRecord {
		day: label(card.day()),
		start,
		end,
		code: label(card.code()),
		title: label(card.title()),
		room: label(card.room().as_deref().and_then(room_number)),
		kind: label(card.type_badge().as_deref().map(course_type)),
		section: label(card.section()),
	}
}

/// Collapses whitespace runs; blank text counts as missing.
fn clean(text: &str) -> Option<String> {
	let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

	(!text.is_empty()).then_some(text)
}

fn label(text: Option<String>) -> String {
	text.as_deref()
		.and_then(clean)
		.unwrap_or_else(|| UNKNOWN.to_string())
}

/// `09:00 - 12:00` into its two times. Both sides must be valid; anything
/// after a second separator is ignored.
fn split_time_range(range: &str) -> Option<(ClockTime, ClockTime)> {
	let mut parts = range.split(" - ");
	let start = parts.next()?.parse().ok()?;
	let end = parts.next()?.parse().ok()?;

	Some((start, end))
}

/// Strips the first room label found, keeping what follows it.
fn room_number(text: &str) -> Option<String> {
	let label = ROOM_LABELS.iter().find(|label| text.contains(**label))?;

	clean(&text.replacen(*label, "", 1))
}

/// Maps a badge to its class type, passing unknown badges through.
fn course_type(badge: &str) -> String {
	let badge = badge.trim();

	TYPE_LABELS
		.iter()
		.find(|(_, labels)| labels.contains(&badge))
		.map_or_else(|| badge.to_string(), |(kind, _)| (*kind).to_string())
}

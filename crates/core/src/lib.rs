#![warn(clippy::pedantic)]

//! Scraped course cards in, weekly timetable out.
//!
//! [`parse_html`] reads the cards of a registration page into
//! [`CourseRecord`]s, [`render`] lays them out on a Monday to Sunday,
//! 08:00 to 20:00 grid of half-hour slots and writes it as an HTML page, and
//! [`create_calendar`] turns the same records into a repeating iCalendar.

use tracing::instrument;

pub mod calendar;
pub mod error;
pub mod extract;
pub mod html;
pub mod layout;
pub mod record;
pub mod render;
pub mod slot;
pub mod time;

pub use calendar::{create_calendar, Term};
pub use error::{Error, Result};
pub use extract::{extract, Card, CardSource};
pub use html::HtmlDocument;
pub use record::{records_from_json, records_to_json, CourseRecord, Weekday, UNKNOWN};
pub use render::{render, RenderOptions};
pub use time::{compute_end, span, ClockTime};

/// Extracts the course records of a registration page.
#[must_use]
#[instrument(level = "debug", skip_all, fields(bytes = html.len()))]
pub fn parse_html(html: &str) -> Vec<CourseRecord> {
	extract(&HtmlDocument::parse(html))
}

/// Registration page straight to timetable page.
///
/// # Errors
///
/// See [`render`].
pub fn schedule_from_html(html: &str, options: &RenderOptions) -> Result<String> {
	render(&parse_html(html), options)
}

use chrono::{Datelike, Duration, NaiveDate, TimeZone};
use chrono_tz::Tz;
use icalendar::{Calendar, CalendarDateTime, Component, Event, EventLike};
use tracing::{instrument, warn};

use crate::{
	error::{Error, Result},
	record::{CourseRecord, Weekday},
	time::{span_between, ClockTime},
};

/// The dates a weekly schedule repeats between.
#[derive(Debug, Clone)]
pub struct Term {
	pub first_day: NaiveDate,
	pub last_day: NaiveDate,
	pub timezone: Tz,
	pub name: String,
}

impl Term {
	/// # Errors
	///
	/// [`Error::InvalidTimezone`] when `timezone` is not an IANA zone name.
	pub fn new(
		first_day: NaiveDate,
		last_day: NaiveDate,
		timezone: &str,
		name: impl Into<String>,
	) -> Result<Self> {
		let timezone = timezone
			.parse::<Tz>()
			.map_err(|_| Error::InvalidTimezone(timezone.to_string()))?;

		Ok(Self {
			first_day,
			last_day,
			timezone,
			name: name.into(),
		})
	}

	/// First date on or after `first_day` that falls on `day`.
	#[must_use]
	pub fn first(&self, day: Weekday) -> NaiveDate {
		let today = self.first_day.weekday().num_days_from_monday();
		let days_to_add = (day.index() + 7 - today) % 7;

		self.first_day + Duration::days(i64::from(days_to_add))
	}
}

/// Builds a calendar with one weekly event per placeable class.
///
/// Classes without a known weekday or a readable time range are skipped, as
/// are classes whose first meeting would fall after the term ends.
///
/// # Errors
///
/// [`Error::InvalidTimeRange`] when a class ends before it starts.
#[instrument(level = "debug", skip_all, fields(term = %term.name))]
pub fn create_calendar(records: &[CourseRecord], term: &Term) -> Result<Calendar> {
	let tzid = term.timezone.name();
	let mut calendar = Calendar::new();

	calendar.name(&term.name);
	calendar.timezone(tzid);

	for record in records {
		let (Some(day), Ok(start), Ok(end)) = (
			record.weekday(),
			record.start.parse::<ClockTime>(),
			record.end.parse::<ClockTime>(),
		) else {
			warn!(code = %record.code, day = %record.day, "class cannot be placed on the calendar");
			continue;
		};

		span_between(start, end)?;

		let date = term.first(day);

		if date > term.last_day {
			warn!(code = %record.code, %day, "class never meets during the term");
			continue;
		}

		let until = term.last_day.and_time(end.time());
		let until = term
			.timezone
			.from_local_datetime(&until)
			.earliest()
			.unwrap_or_else(|| term.timezone.from_utc_datetime(&until));

		let mut event = Event::new();

		event.summary(&format!(
			"{} ({}) {}",
			record.code, record.kind, record.title
		));

		event
			.starts(CalendarDateTime::WithTimezone {
				date_time: date.and_time(start.time()),
				tzid: tzid.to_string(),
			})
			.ends(CalendarDateTime::WithTimezone {
				date_time: date.and_time(end.time()),
				tzid: tzid.to_string(),
			})
			.location(&record.room)
			.description(&format!("Section: {} | Room: {}", record.section, record.room))
			// repeat weekly
			.add_property(
				"RRULE",
				rrule::RRule::new(rrule::Frequency::Weekly)
					.until(until.with_timezone(&rrule::Tz::Tz(term.timezone)))
					.to_string(),
			)
			// add a reminder 30 minutes before
			.add_property("VALARM", "TRIGGER:-PT30M;ACTION=DISPLAY;DESCRIPTION=Reminder");

		calendar.push(event);
	}

	Ok(calendar)
}

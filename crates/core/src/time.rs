use std::{fmt, str::FromStr};

use chrono::{Duration, NaiveTime, Timelike};

use crate::error::{Error, Result};

/// Width of one grid slot, in minutes.
pub const SLOT_MINUTES: u32 = 30;

/// A wall-clock time of day written as `HH:MM`.
///
/// One-digit hours are accepted when parsing, but the time is always
/// displayed zero padded, so `"9:05".parse()` displays as `09:05`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
	#[must_use]
	pub fn new(hour: u32, minute: u32) -> Option<Self> {
		NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
	}

	#[must_use]
	pub fn hour(self) -> u32 {
		self.0.hour()
	}

	#[must_use]
	pub fn minute(self) -> u32 {
		self.0.minute()
	}

	/// Minutes elapsed since midnight.
	#[must_use]
	pub fn minutes(self) -> u32 {
		self.0.num_seconds_from_midnight() / 60
	}

	/// Rounds down to the closest `:00` or `:30` boundary.
	#[must_use]
	pub fn floor_to_slot(self) -> Self {
		let minute = self.minute() - self.minute() % SLOT_MINUTES;

		Self(self.0.with_minute(minute).unwrap_or(self.0))
	}

	#[must_use]
	pub fn time(self) -> NaiveTime {
		self.0
	}
}

impl fmt::Display for ClockTime {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{:02}:{:02}", self.hour(), self.minute())
	}
}

/// Splits `H:MM` / `HH:MM` into its two numeric parts.
fn split_clock(s: &str, max_hour_digits: usize) -> Option<(u32, u32)> {
	let (hour, minute) = s.split_once(':')?;
	let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

	if !digits(hour) || !digits(minute) || hour.len() > max_hour_digits || minute.len() != 2 {
		return None;
	}

	Some((hour.parse().ok()?, minute.parse().ok()?))
}

impl FromStr for ClockTime {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		let trimmed = s.trim();

		split_clock(trimmed, 2)
			.and_then(|(hour, minute)| Self::new(hour, minute))
			.ok_or_else(|| Error::MalformedTime(s.to_string()))
	}
}

/// Number of grid columns taken by a class running from `start` to `end`.
///
/// Partial slots count as whole ones and every class takes at least one
/// column, even when it has no duration.
///
/// # Errors
///
/// [`Error::InvalidTimeRange`] when `end` comes before `start`.
pub fn span_between(start: ClockTime, end: ClockTime) -> Result<usize> {
	let minutes = i64::from(end.minutes()) - i64::from(start.minutes());

	if minutes < 0 {
		return Err(Error::InvalidTimeRange {
			start: start.to_string(),
			end: end.to_string(),
		});
	}

	let slots = minutes.unsigned_abs().div_ceil(u64::from(SLOT_MINUTES)).max(1);

	Ok(usize::try_from(slots).unwrap_or(usize::MAX))
}

/// String form of [`span_between`].
///
/// # Errors
///
/// [`Error::MalformedTime`] when either side is not `HH:MM`, and
/// [`Error::InvalidTimeRange`] when `end` comes before `start`.
pub fn span(start: &str, end: &str) -> Result<usize> {
	span_between(start.parse()?, end.parse()?)
}

/// Adds a `HH:MM` duration to a `HH:MM` start time, wrapping past midnight.
///
/// The duration may exceed a day; only the resulting wall-clock time is kept.
///
/// # Errors
///
/// [`Error::MalformedTime`] when either argument is not `HH:MM`.
pub fn compute_end(start: &str, duration: &str) -> Result<String> {
	let start: ClockTime = start.parse()?;
	let (hours, minutes) = split_clock(duration.trim(), 4)
		.ok_or_else(|| Error::MalformedTime(duration.to_string()))?;
	let end = start.time() + Duration::minutes(i64::from(hours) * 60 + i64::from(minutes));

	Ok(ClockTime(end).to_string())
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::{compute_end, span, span_between, ClockTime};
	use crate::error::Error;

	#[test]
	fn parses_and_pads() {
		let time: ClockTime = "9:05".parse().unwrap();

		assert_eq!(time.hour(), 9);
		assert_eq!(time.minute(), 5);
		assert_eq!(time.to_string(), "09:05");
		assert_eq!(" 14:30 ".parse::<ClockTime>().unwrap().to_string(), "14:30");
	}

	#[test]
	fn rejects_malformed() {
		for input in ["", "N/A", "9", "24:00", "12:60", "12:5", "123:00", "ab:cd", "-1:30"] {
			assert!(
				matches!(input.parse::<ClockTime>(), Err(Error::MalformedTime(_))),
				"{input:?} should not parse"
			);
		}
	}

	#[test]
	fn floors_to_slot() {
		let floor = |s: &str| s.parse::<ClockTime>().unwrap().floor_to_slot().to_string();

		assert_eq!(floor("09:10"), "09:00");
		assert_eq!(floor("09:45"), "09:30");
		assert_eq!(floor("09:30"), "09:30");
	}

	#[test]
	fn span_rounds_up() {
		assert_eq!(span("09:00", "10:15").unwrap(), 3);
		assert_eq!(span("09:00", "12:00").unwrap(), 6);
		assert_eq!(span("13:00", "13:10").unwrap(), 1);
	}

	#[test]
	fn zero_length_class_takes_one_column() {
		assert_eq!(span("10:00", "10:00").unwrap(), 1);
	}

	#[test]
	fn end_before_start_is_an_error() {
		let err = span("10:00", "09:30").unwrap_err();

		assert!(matches!(
			err,
			Error::InvalidTimeRange { ref start, ref end } if start == "10:00" && end == "09:30"
		));
	}

	#[test]
	fn span_reports_malformed_input() {
		assert!(matches!(span("N/A", "10:00"), Err(Error::MalformedTime(_))));
	}

	#[test]
	fn compute_end_adds_duration() {
		assert_eq!(compute_end("09:00", "01:30").unwrap(), "10:30");
		assert_eq!(compute_end("8:45", "0:30").unwrap(), "09:15");
	}

	#[test]
	fn compute_end_wraps_midnight() {
		assert_eq!(compute_end("23:00", "02:15").unwrap(), "01:15");
		assert_eq!(compute_end("10:00", "24:00").unwrap(), "10:00");
	}

	#[test]
	fn compute_end_rejects_bad_duration() {
		assert!(matches!(compute_end("10:00", "soon"), Err(Error::MalformedTime(_))));
	}

	proptest! {
		#[test]
		fn span_matches_rounded_minutes(
			(start, length) in (0u32..1440).prop_flat_map(|start| (Just(start), 0..1440 - start))
		) {
			let from = ClockTime::new(start / 60, start % 60).unwrap();
			let to = ClockTime::new((start + length) / 60, (start + length) % 60).unwrap();
			let expected = std::cmp::max(1, length.div_ceil(30)) as usize;

			prop_assert_eq!(span(&from.to_string(), &to.to_string()).unwrap(), expected);
		}

		#[test]
		fn span_rejects_every_inverted_range(
			(end, gap) in (0u32..1439).prop_flat_map(|end| (Just(end), 1..1440 - end))
		) {
			let from = ClockTime::new((end + gap) / 60, (end + gap) % 60).unwrap();
			let to = ClockTime::new(end / 60, end % 60).unwrap();

			let is_invalid_range = matches!(span_between(from, to), Err(Error::InvalidTimeRange { .. }));
			prop_assert!(is_invalid_range);
		}
	}
}

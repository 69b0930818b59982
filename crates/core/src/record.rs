use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Written in place of any field that could not be scraped.
pub const UNKNOWN: &str = "N/A";

/// One scheduled meeting of a course, as scraped from a registration card.
///
/// Every field is always present; anything the card did not provide holds
/// [`UNKNOWN`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseRecord {
	pub day: String,
	pub start: String,
	pub end: String,
	pub code: String,
	pub title: String,
	pub room: String,
	#[serde(rename = "type")]
	pub kind: String,
	pub section: String,
}

impl Default for CourseRecord {
	fn default() -> Self {
		Self {
			day: UNKNOWN.to_string(),
			start: UNKNOWN.to_string(),
			end: UNKNOWN.to_string(),
			code: UNKNOWN.to_string(),
			title: UNKNOWN.to_string(),
			room: UNKNOWN.to_string(),
			kind: UNKNOWN.to_string(),
			section: UNKNOWN.to_string(),
		}
	}
}

impl CourseRecord {
	/// The weekday this record falls on, if its day code is recognized.
	#[must_use]
	pub fn weekday(&self) -> Option<Weekday> {
		self.day.parse().ok()
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
	Monday,
	Tuesday,
	Wednesday,
	Thursday,
	Friday,
	Saturday,
	Sunday,
}

/// Used for any day code outside the week.
pub const FALLBACK_COLOR: &str = "bg-gray-700";

impl Weekday {
	/// Monday first, the order rows are drawn in.
	pub const ALL: [Self; 7] = [
		Self::Monday,
		Self::Tuesday,
		Self::Wednesday,
		Self::Thursday,
		Self::Friday,
		Self::Saturday,
		Self::Sunday,
	];

	#[must_use]
	pub const fn code(self) -> &'static str {
		match self {
			Self::Monday => "MON",
			Self::Tuesday => "TUE",
			Self::Wednesday => "WED",
			Self::Thursday => "THU",
			Self::Friday => "FRI",
			Self::Saturday => "SAT",
			Self::Sunday => "SUN",
		}
	}

	#[must_use]
	pub const fn color(self) -> &'static str {
		match self {
			Self::Monday => "bg-yellow-400",
			Self::Tuesday => "bg-pink-400",
			Self::Wednesday => "bg-green-400",
			Self::Thursday => "bg-orange-400",
			Self::Friday => "bg-blue-400",
			Self::Saturday => "bg-purple-400",
			Self::Sunday => "bg-red-400",
		}
	}

	/// Days since Monday.
	#[must_use]
	pub const fn index(self) -> u32 {
		self as u32
	}
}

/// Palette color for a raw day code.
#[must_use]
pub fn color_for(day: &str) -> &'static str {
	day.parse().map_or(FALLBACK_COLOR, Weekday::color)
}

impl fmt::Display for Weekday {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.code())
	}
}

impl FromStr for Weekday {
	type Err = ();

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|day| day.code() == s.trim())
			.ok_or(())
	}
}

/// Serializes records as pretty-printed JSON.
///
/// # Errors
///
/// Only if serialization itself fails, which plain strings never do.
pub fn records_to_json(records: &[CourseRecord]) -> Result<String> {
	Ok(serde_json::to_string_pretty(records)?)
}

/// Reads records back from JSON. Missing keys become [`UNKNOWN`].
///
/// # Errors
///
/// [`crate::Error::Json`] when the input is not an array of record objects.
pub fn records_from_json(json: &str) -> Result<Vec<CourseRecord>> {
	Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn weekday_codes() {
		assert_eq!("WED".parse::<Weekday>(), Ok(Weekday::Wednesday));
		assert_eq!(" SUN ".parse::<Weekday>(), Ok(Weekday::Sunday));
		assert_eq!("Monday".parse::<Weekday>(), Err(()));
		assert_eq!(Weekday::Friday.to_string(), "FRI");
		assert_eq!(Weekday::Sunday.index(), 6);
	}

	#[test]
	fn palette_falls_back() {
		assert_eq!(color_for("MON"), "bg-yellow-400");
		assert_eq!(color_for(UNKNOWN), FALLBACK_COLOR);
	}

	#[test]
	fn json_uses_type_key() {
		let record = CourseRecord {
			kind: "Lecture".into(),
			..CourseRecord::default()
		};
		let json = records_to_json(&[record]).unwrap();

		assert!(json.contains("\"type\": \"Lecture\""));
		assert!(!json.contains("kind"));
	}

	#[test]
	fn missing_json_keys_become_unknown() {
		let records = records_from_json(r#"[{"day": "TUE", "code": "CS101"}]"#).unwrap();

		assert_eq!(records.len(), 1);
		assert_eq!(records[0].day, "TUE");
		assert_eq!(records[0].code, "CS101");
		assert_eq!(records[0].room, UNKNOWN);
		assert_eq!(records[0].kind, UNKNOWN);
	}

	#[test]
	fn rejects_non_array_json() {
		assert!(matches!(
			records_from_json(r#"{"day": "TUE"}"#),
			Err(crate::Error::Json(_))
		));
	}
}

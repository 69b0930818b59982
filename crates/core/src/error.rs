use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	/// The end of a class comes strictly before its start.
	#[error("end time {end} is before start time {start}")]
	InvalidTimeRange { start: String, end: String },

	#[error("malformed time of day {0:?}, expected HH:MM")]
	MalformedTime(String),

	#[error("unknown time zone {0:?}")]
	InvalidTimezone(String),

	#[error("invalid course record JSON: {0}")]
	Json(#[from] serde_json::Error),
}

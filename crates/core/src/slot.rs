use once_cell::sync::Lazy;

use crate::time::ClockTime;

pub const FIRST_HOUR: u32 = 8;
pub const LAST_HOUR: u32 = 20;

/// Columns in a day row: every half hour from 08:00 through 20:00.
pub const SLOT_COUNT: usize = 25;

/// Hour labels across the top of the grid, each over two slots.
pub const HOURS_FOR_HEADER: [u32; 13] = [8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20];

/// `08:00`, `08:30`, ..., `19:30`, `20:00`.
pub static TIME_SLOTS: Lazy<Vec<String>> = Lazy::new(|| {
	(FIRST_HOUR..=LAST_HOUR)
		.flat_map(|hour| {
			let half = (hour < LAST_HOUR).then(|| format!("{hour:02}:30"));

			std::iter::once(format!("{hour:02}:00")).chain(half)
		})
		.collect()
});

/// Exact lookup in [`TIME_SLOTS`].
#[must_use]
pub fn position(slot: &str) -> Option<usize> {
	TIME_SLOTS.iter().position(|s| s == slot)
}

/// Column for a parsed start time.
///
/// Times between boundaries round down. Times before the first slot land in
/// column 0 and times after the last land in the final column.
#[must_use]
pub fn slot_of(time: ClockTime) -> usize {
	if let Some(index) = position(&time.floor_to_slot().to_string()) {
		return index;
	}

	if time.hour() < FIRST_HOUR {
		0
	} else {
		SLOT_COUNT - 1
	}
}

/// Column for a start time string. Anything that is not a time maps to 0.
#[must_use]
pub fn slot_index(time: &str) -> usize {
	let time = time.trim();

	position(time).unwrap_or_else(|| time.parse().map_or(0, slot_of))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn table_covers_the_day() {
		assert_eq!(TIME_SLOTS.len(), SLOT_COUNT);
		assert_eq!(TIME_SLOTS.first().map(String::as_str), Some("08:00"));
		assert_eq!(TIME_SLOTS.last().map(String::as_str), Some("20:00"));
		assert_eq!(HOURS_FOR_HEADER.len() * 2 - 1, SLOT_COUNT);
	}

	#[test]
	fn aligned_times_use_the_table() {
		assert_eq!(slot_index("14:30"), 13);
		assert_eq!(slot_index("14:30"), position("14:30").unwrap());
		assert_eq!(slot_index("08:00"), 0);
		assert_eq!(slot_index("20:00"), 24);
	}

	#[test]
	fn misaligned_times_round_down() {
		assert_eq!(slot_index("09:45"), slot_index("09:30"));
		assert_eq!(slot_index("09:10"), slot_index("09:00"));
		assert_eq!(slot_index("9:00"), 2);
	}

	#[test]
	fn out_of_table_times_clamp() {
		assert_eq!(slot_index("07:30"), 0);
		assert_eq!(slot_index("20:15"), 24);
		assert_eq!(slot_index("23:00"), 24);
	}

	#[test]
	fn unreadable_times_fall_back_to_zero() {
		assert_eq!(slot_index("N/A"), 0);
		assert_eq!(slot_index(""), 0);
	}
}

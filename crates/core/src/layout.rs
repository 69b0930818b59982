use std::iter;

use tracing::warn;

use crate::{
	error::Result,
	record::{CourseRecord, Weekday},
	slot::{slot_of, SLOT_COUNT},
	time::{span_between, ClockTime},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell<'a> {
	Empty,
	Class { record: &'a CourseRecord, span: usize },
}

impl Cell<'_> {
	/// Number of grid columns the cell covers.
	#[must_use]
	pub fn width(&self) -> usize {
		match self {
			Self::Empty => 1,
			Self::Class { span, .. } => *span,
		}
	}
}

/// A weekday's cells, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
	pub day: Weekday,
	pub cells: Vec<Cell<'a>>,
}

impl Row<'_> {
	/// Total columns covered, always [`SLOT_COUNT`].
	#[must_use]
	pub fn width(&self) -> usize {
		self.cells.iter().map(Cell::width).sum()
	}
}

/// Lays out the classes of one weekday from left to right.
///
/// Classes are placed in start order. Overlaps are not resolved: a class that
/// starts under an earlier one begins where that one ends, and one that is
/// entirely covered is left out. Cells never run past the end of the grid.
///
/// # Errors
///
/// [`crate::Error::InvalidTimeRange`] when a class on this day ends before it
/// starts.
pub fn fill_row(day: Weekday, records: &[CourseRecord]) -> Result<Row<'_>> {
	let mut classes = records
		.iter()
		.filter(|record| record.weekday() == Some(day))
		.filter_map(|record| {
			match (
				record.start.parse::<ClockTime>(),
				record.end.parse::<ClockTime>(),
			) {
				(Ok(start), Ok(end)) => Some((start, end, record)),
				_ => {
					warn!(
						%day,
						code = %record.code,
						start = %record.start,
						end = %record.end,
						"class has no usable time range, leaving it off the grid"
					);
					None
				}
			}
		})
		.collect::<Vec<(ClockTime, ClockTime, &CourseRecord)>>();

	classes.sort_by_key(|(start, ..)| *start);

	let mut cells = Vec::with_capacity(SLOT_COUNT);
	let mut cursor = 0;

	for (start, end, record) in classes {
		let span = span_between(start, end)?;
		let index = slot_of(start);
		let from = index.max(cursor);
		let to = (index + span).min(SLOT_COUNT);

		if to <= from {
			warn!(
				%day,
				code = %record.code,
				start = %record.start,
				end = %record.end,
				"class is entirely covered by an earlier one, leaving it off the grid"
			);
			continue;
		}

		cells.extend(iter::repeat(Cell::Empty).take(from - cursor));
		cells.push(Cell::Class {
			record,
			span: to - from,
		});
		cursor = to;
	}

	cells.extend(iter::repeat(Cell::Empty).take(SLOT_COUNT - cursor));

	Ok(Row { day, cells })
}

/// One row per weekday, Monday first.
///
/// # Errors
///
/// See [`fill_row`].
pub fn layout(records: &[CourseRecord]) -> Result<Vec<Row<'_>>> {
	Weekday::ALL
		.into_iter()
		.map(|day| fill_row(day, records))
		.collect()
}

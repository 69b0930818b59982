use std::fmt::{self, Display, Formatter};

use tracing::instrument;

use crate::{
	error::Result,
	layout::{layout, Cell, Row},
	record::{color_for, CourseRecord},
	slot::HOURS_FOR_HEADER,
};

pub const DEFAULT_TITLE: &str = "Weekly Schedule";
pub const DEFAULT_FOOTER: &str = "created by Sirapob P.";

const ROW_BORDER: &str = " border-b border-gray-800";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
	/// Text of the page `<title>`.
	pub title: String,
	/// Line under the table, omitted when `None`.
	pub footer: Option<String>,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			title: DEFAULT_TITLE.to_string(),
			footer: Some(DEFAULT_FOOTER.to_string()),
		}
	}
}

/// Renders the weekly grid as a standalone HTML page.
///
/// # Errors
///
/// [`crate::Error::InvalidTimeRange`] when any class ends before it starts.
#[instrument(level = "debug", skip_all, fields(records = records.len()))]
pub fn render(records: &[CourseRecord], options: &RenderOptions) -> Result<String> {
	let rows = layout(records)?;

	Ok(Page {
		rows: &rows,
		options,
	}
	.to_string())
}

/// Text with HTML special characters escaped.
struct Escaped<'a>(&'a str);

impl Display for Escaped<'_> {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		for c in self.0.chars() {
			match c {
				'&' => f.write_str("&amp;")?,
				'<' => f.write_str("&lt;")?,
				'>' => f.write_str("&gt;")?,
				'"' => f.write_str("&quot;")?,
				'\'' => f.write_str("&#39;")?,
				c => write!(f, "{c}")?,
			}
		}

		Ok(())
	}
}

struct Page<'a> {
	rows: &'a [Row<'a>],
	options: &'a RenderOptions,
}

impl Display for Page<'_> {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(
			f,
			r#"<!doctype html>
<html lang="en" class="scroll-smooth">
<head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{}</title>
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap" rel="stylesheet">
    <script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4"></script>
</head>
<body class="bg-[#0b0f1a] text-white min-h-screen flex flex-col items-center justify-center py-8 font-sans">
    <div class="overflow-x-auto w-[95vw] h-[96vh] rounded-xl shadow-2xl bg-[#111622] border border-gray-800">
        <table class="border-separate border-spacing-0 size-full text-sm">
            <thead>
                <tr class="bg-[#111622] sticky top-0 z-20 border-b border-gray-800">
                    <th class="w-48 sticky left-0 z-[100] bg-[#111622] px-4 py-3 text-left font-semibold text-white rounded-tl-lg border-r border-gray-800">Day/Time</th>"#,
			Escaped(&self.options.title)
		)?;

		for hour in HOURS_FOR_HEADER {
			write!(
				f,
				r#"<th colspan="2" class="px-4 py-3 w-24 text-center text-gray-300 font-medium whitespace-nowrap border-r border-b border-gray-800">{hour}:00</th>"#
			)?;
		}

		f.write_str("</tr></thead><tbody>")?;

		for (i, row) in self.rows.iter().enumerate() {
			let border = if i + 1 < self.rows.len() { ROW_BORDER } else { "" };

			write_row(f, row, border)?;
		}

		f.write_str("</tbody></table>\n    </div>\n")?;

		if let Some(footer) = &self.options.footer {
			writeln!(
				f,
				r#"    <div class="text-right text-xs text-gray-400 p-4 mt-4 select-none">{}</div>"#,
				Escaped(footer)
			)?;
		}

		f.write_str("</body>\n</html>")
	}
}

fn write_row(f: &mut Formatter, row: &Row, border: &str) -> fmt::Result {
	write!(
		f,
		r#"<tr class="h-25"><td class="w-48 sticky left-0 z-20 px-4 py-3 font-bold text-center text-neutral-900 border-r border-gray-800 {} whitespace-nowrap{border}"> {} </td>"#,
		row.day.color(),
		row.day
	)?;

	for cell in &row.cells {
		match cell {
			Cell::Empty => write!(f, r#"<td class="w-12{border}"></td>"#)?,
			Cell::Class { record, span } => write_class(f, record, *span)?,
		}
	}

	f.write_str("</tr>")
}

fn write_class(f: &mut Formatter, record: &CourseRecord, span: usize) -> fmt::Result {
	write!(
		f,
		r#"
        <td colspan="{span}" class="p-3 align-top {color} text-neutral-900 rounded-lg overflow-hidden">
            <div class="text-sm leading-tight">
                <div class="mb-1 font-semibold">[{start}-{end}]</div>
                <div class="font-bold">{code}</div>
                <div class="mb-1">{title}</div>
                <div class="text-xs opacity-90">{room} | {kind} {section}</div>
            </div>
        </td>"#,
		color = color_for(&record.day),
		start = Escaped(&record.start),
		end = Escaped(&record.end),
		code = Escaped(&record.code),
		title = Escaped(&record.title),
		room = Escaped(&record.room),
		kind = Escaped(&record.kind),
		section = Escaped(&record.section),
	)
}

//! Command-line arguments for `weekwizard`.
//!
//! Every subcommand reads from a file or stdin and writes to a file or
//! stdout. Presentation and calendar settings can also come from the
//! environment.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use weekwizard_core::{
	render::{DEFAULT_FOOTER, DEFAULT_TITLE},
	RenderOptions,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Turn a course registration page into a weekly timetable")]
pub struct Cli {
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Extract course records from a registration page as JSON
	Extract(Io),
	/// Render a JSON list of course records as a timetable page
	Render {
		#[command(flatten)]
		io: Io,
		#[command(flatten)]
		page: Page,
	},
	/// Turn a registration page directly into a timetable page
	Build {
		#[command(flatten)]
		io: Io,
		#[command(flatten)]
		page: Page,
	},
	/// Export a registration page as a weekly repeating iCalendar file
	Ics {
		#[command(flatten)]
		io: Io,
		#[command(flatten)]
		term: TermArgs,
	},
}

#[derive(Args, Debug)]
pub struct Io {
	/// Input file, stdin when omitted
	#[arg(value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
	pub path: Option<PathBuf>,
	/// Output file, stdout when omitted
	#[arg(short, long, value_hint = clap::ValueHint::FilePath)]
	pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct Page {
	/// Title of the generated page
	#[arg(long, env = "WEEKWIZARD_TITLE", default_value = DEFAULT_TITLE)]
	pub title: String,
	/// Footer line under the table
	#[arg(long, env = "WEEKWIZARD_FOOTER", default_value = DEFAULT_FOOTER)]
	pub footer: String,
	/// Leave the footer out, whatever `--footer` says
	#[arg(long)]
	pub no_footer: bool,
}

impl From<Page> for RenderOptions {
	fn from(page: Page) -> Self {
		Self {
			title: page.title,
			footer: (!page.no_footer).then_some(page.footer),
		}
	}
}

#[derive(Args, Debug)]
pub struct TermArgs {
	/// First day of classes (YYYY-MM-DD)
	#[arg(long)]
	pub first_day: NaiveDate,
	/// Last day of classes (YYYY-MM-DD)
	#[arg(long)]
	pub last_day: NaiveDate,
	/// IANA time zone of the classes
	#[arg(long, env = "WEEKWIZARD_TIMEZONE", default_value = "Asia/Bangkok")]
	pub timezone: String,
	/// Calendar name
	#[arg(long, default_value = "Class Schedule")]
	pub name: String,
}

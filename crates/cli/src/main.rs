#![warn(clippy::pedantic)]

mod cli;

use std::{
	fs::{self, File},
	io::{self, Read, Write},
	path::Path,
};

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command, Io};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use weekwizard_core::{
	create_calendar, parse_html, records_from_json, records_to_json, render, RenderOptions, Term,
};

fn main() -> anyhow::Result<()> {
	// stdout carries the output, logs go to stderr
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_target(false)
		.init();

	let args = Cli::parse();
	debug!(?args, "parsed arguments");

	match args.command {
		Command::Extract(files) => {
			let records = parse_html(&read_input(&files)?);

			info!(count = records.len(), "extracted course records");
			write_output(&files, &records_to_json(&records)?)
		}
		Command::Render { io: files, page } => {
			let records = records_from_json(&read_input(&files)?)?;

			write_output(&files, &render(&records, &RenderOptions::from(page))?)
		}
		Command::Build { io: files, page } => {
			let records = parse_html(&read_input(&files)?);

			info!(count = records.len(), "extracted course records");
			write_output(&files, &render(&records, &RenderOptions::from(page))?)
		}
		Command::Ics { io: files, term } => {
			let records = parse_html(&read_input(&files)?);
			let term = Term::new(term.first_day, term.last_day, &term.timezone, term.name)?;
			let calendar = create_calendar(&records, &term)?;

			write_output(&files, &calendar.to_string())
		}
	}
}

fn read_input(args: &Io) -> anyhow::Result<String> {
	if let Some(path) = &args.path {
		return fs::read_to_string(path).with_context(|| format!("reading {}", path.display()));
	}

	let mut input = String::new();
	io::stdin()
		.read_to_string(&mut input)
		.context("reading stdin")?;

	Ok(input)
}

fn write_output(args: &Io, content: &str) -> anyhow::Result<()> {
	if let Some(output) = &args.output {
		write_file(output, content)?;
		info!(path = %output.display(), "wrote output");
	} else {
		let mut stdout = io::stdout().lock();
		writeln!(stdout, "{content}").context("writing stdout")?;
	}

	Ok(())
}

fn write_file(path: &Path, content: &str) -> anyhow::Result<()> {
	let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
	write!(&mut file, "{content}").with_context(|| format!("writing {}", path.display()))
}

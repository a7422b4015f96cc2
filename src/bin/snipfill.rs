//! `snipfill`: fill in the placeholders of a snippet and print the result.
//!
//! Prompts and previews are written to standard error,
//! so only the filled-in snippet ends up on standard output.
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use snipfill::form::{self, Form};
use snipfill::style::StyleSheet;
use snipfill::Session;

#[derive(Parser)]
#[command(name = "snipfill", version)]
#[command(about = "Fill in the %placeholders% of a snippet")]
#[command(after_help = "Enter one value per placeholder. An empty line keeps the current value, a single '-' clears it.")]
struct Cli {
	/// Pre-fill a placeholder (can be repeated)
	#[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
	set: Vec<(String, String)>,

	/// Don't show the preview before every field
	#[arg(long)]
	no_preview: bool,

	/// Maximum number of characters per value
	#[arg(long, default_value_t = form::CHAR_LIMIT)]
	char_limit: usize,

	/// The snippet, multiple arguments are joined with a space
	#[arg(trailing_var_arg = true, allow_hyphen_values = true)]
	snippet: Vec<String>,
}

fn parse_assignment(arg: &str) -> Result<(String, String), String> {
	match arg.split_once('=') {
		Some((name, value)) => Ok((name.to_owned(), value.to_owned())),
		None => Err(format!("expected NAME=VALUE, got {arg:?}")),
	}
}

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
	let cli = Cli::parse();

	match run(cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("err: {e}");
			ExitCode::FAILURE
		},
	}
}

fn run(cli: Cli) -> Result<(), snipfill::Error> {
	let mut session = Session::new(cli.snippet.join(" ")).with_styles(StyleSheet::for_stderr());
	for (name, value) in cli.set {
		session.set(&name, value);
	}
	log::debug!("Filling {} placeholders", session.identities().len());

	Form::new(&mut session)
		.char_limit(cli.char_limit)
		.preview(!cli.no_preview)
		.run(io::stdin().lock(), io::stderr().lock())?;

	let mut stdout = io::stdout().lock();
	write!(stdout, "{}", session.finish())?;
	stdout.flush()?;
	Ok(())
}

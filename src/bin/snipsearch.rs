//! `snipsearch`: pick a snippet from the snippet files and print it.
//!
//! The list and prompts are written to standard error,
//! so only the picked snippet ends up on standard output.
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use snipfill::form::Form;
use snipfill::select::Browser;
use snipfill::style::StyleSheet;
use snipfill::{yaml, Error, Session};

#[derive(Parser)]
#[command(name = "snipsearch", version)]
#[command(about = "Pick a snippet from your snippet files")]
struct Cli {
	/// The root snippet file
	#[arg(short, long, default_value = yaml::DEFAULT_CONFIG)]
	config: PathBuf,

	/// Fill in the placeholders of the picked snippet before printing it
	#[arg(short, long)]
	fill: bool,
}

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
	let cli = Cli::parse();

	match run(cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("err: {e}");
			if let Error::Yaml(e) = &e {
				if let Ok(source) = std::fs::read_to_string(&e.path) {
					eprint!("{}", e.source_highlighting(&source));
				}
			}
			ExitCode::FAILURE
		},
	}
}

fn run(cli: Cli) -> Result<(), Error> {
	let snippets = yaml::load(&cli.config)?;
	log::debug!("Loaded {} snippets", snippets.len());

	let styles = StyleSheet::for_stderr();
	let browser = Browser::new(&snippets).with_styles(styles.clone());
	let Some(choice) = browser.run(io::stdin().lock(), io::stderr().lock())? else {
		return Ok(());
	};

	let output = if cli.fill {
		let mut session = Session::new(choice.template()).with_styles(styles);
		Form::new(&mut session).run(io::stdin().lock(), io::stderr().lock())?;
		session.finish()
	} else {
		choice.snippet.clone()
	};

	let mut stdout = io::stdout().lock();
	write!(stdout, "{output}")?;
	stdout.flush()?;
	Ok(())
}

use std::process::ExitCode;

use clap::Parser;
use cycler::{cli::*, logger};

fn main() -> ExitCode {
	let cli = Cli::parse();
	if let Err(e) = logger::init(cli.log_level()) {
		eprintln!("Failed install logger: {e}");
	}

	let cycler = cycler::Cycler;
	let result = match &cli.mode {
		Mode::File { path } => cycler.run_file(path),
		Mode::Check { path } => cycler.check_file(path),
		Mode::Tokens { path } => cycler.tokens_file(path),
	};

	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("{e}");
			ExitCode::FAILURE
		}
	}
}

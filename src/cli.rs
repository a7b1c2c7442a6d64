use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "cycler", version, about = "Compile and run cycle script programs.")]
pub struct Cli {
	/// Log compile phases and cycle entry/exit to stderr
	#[arg(short, long)]
	pub verbose: bool,
	/// Also log every executed line and assignment
	#[arg(long)]
	pub trace:   bool,
	#[command(subcommand)]
	pub mode:    Mode,
}

impl Cli {
	pub fn log_level(&self) -> LevelFilter {
		if self.trace {
			LevelFilter::Trace
		} else if self.verbose {
			LevelFilter::Debug
		} else {
			LevelFilter::Warn
		}
	}
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Compile and run a program, reading `read` input from stdin
	File { path: PathBuf },
	/// Compile a program without running it
	Check { path: PathBuf },
	/// Print the symbol every word of a program is classified as
	Tokens { path: PathBuf },
}

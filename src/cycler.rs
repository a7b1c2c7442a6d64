use std::{fs::read_to_string, io::{BufRead, Write}, path::Path};

use anyhow::Context;
use log::debug;

use crate::{CyclerError, checker::Checker, environment::Environment, interpreter::Interpreter, scanner::{Program, Scanner}};

/// Printed once every line has been classified.
pub const PARSED_NOTICE: &str = "--- parsed successfully ---";
/// Printed once the program passed every compile check.
pub const COMPILED_NOTICE: &str = "--- compiled successfully ---";

/// Cycler is the entry point of the cycle script toolchain.
pub struct Cycler;

impl Cycler {
	/// Compile and run a source file against stdin and stdout.
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CyclerError> {
		let source = read_source(path.as_ref())?;
		self.run(&source, std::io::stdin().lock(), std::io::stdout().lock())
	}

	/// Compile a source file without running it.
	pub fn check_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CyclerError> {
		let source = read_source(path.as_ref())?;
		self.compile(&source, &mut std::io::stdout().lock())?;
		Ok(())
	}

	/// Print every line of a source file with the symbol of each word.
	pub fn tokens_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CyclerError> {
		let source = read_source(path.as_ref())?;
		self.tokens(&source, &mut std::io::stdout().lock())
	}

	/// Compile `source` and, if that succeeds, execute it.
	///
	/// Notices and `write` output go to `output`, `read` takes lines from
	/// `input`. Nothing runs unless the whole program compiles.
	pub fn run<R: BufRead, W: Write>(&self, source: &str, input: R, mut output: W) -> Result<(), CyclerError> {
		let (program, environment) = self.compile(source, &mut output)?;
		let mut interpreter = Interpreter::new(&program, environment, input, output);
		interpreter.interpret()?;
		debug!("finished with {} variables", interpreter.environment().len());
		Ok(())
	}

	/// Tokenize and check `source`, returning the program and its allocated
	/// variables.
	pub fn compile<'a, W: Write>(
		&self,
		source: &'a str,
		output: &mut W,
	) -> Result<(Program<'a>, Environment<'a>), CyclerError> {
		let program = Scanner::new(source).scan_lines()?;
		writeln!(output, "{PARSED_NOTICE}").context("Failed write notice")?;

		let environment = Checker::new().check_program(&program)?;
		writeln!(output, "{COMPILED_NOTICE}").context("Failed write notice")?;
		Ok((program, environment))
	}

	/// Write the classified words of `source`, one line per statement.
	pub fn tokens<W: Write>(&self, source: &str, output: &mut W) -> Result<(), CyclerError> {
		let program = Scanner::new(source).scan_lines()?;
		for line in program.lines() {
			writeln!(output, "{line}").context("Failed write tokens")?;
		}
		Ok(())
	}
}

fn read_source(path: &Path) -> Result<String, CyclerError> {
	let source = read_to_string(path).with_context(|| format!("Failed open source file {}", path.display()))?;
	debug!("loaded {} bytes from {}", source.len(), path.display());
	Ok(source)
}

//! Whole-program checks that run after tokenizing.
//!
//! Lines are checked in order. Each line first has to fit its grammar rule,
//! then every variable it mentions has to be declared on this line or an
//! earlier one. Declarations allocate their variable in the [`Environment`]
//! that the interpreter later starts from, so every declared name already
//! holds `0` before the first statement runs.
//!
//! Once every line passes, `cycle` and `end` are paired across the whole
//! program like brackets.

use log::debug;

use crate::{CompileError, CycleSchemeError, VariableError, environment::Environment, grammar, scanner::{Line, Program, Symbol}};

/// Compile-time checker, owning the variables allocated so far.
#[derive(Default)]
pub struct Checker<'a> {
	environment: Environment<'a>,
}

impl<'a> Checker<'a> {
	pub fn new() -> Self { Self { environment: Environment::new() } }

	/// Check every line and the cycle scheme, returning the allocated variables.
	pub fn check_program(mut self, program: &Program<'a>) -> Result<Environment<'a>, CompileError> {
		for line in program.lines() {
			grammar::check_syntax(&line.symbols()).map_err(|e| CompileError::line(line.number, e))?;
			self.check_variables(line).map_err(|e| CompileError::line(line.number, e))?;
		}
		check_cycle_scheme(program)?;
		debug!("checked {} lines, {} variables allocated", program.len(), self.environment.len());
		Ok(self.environment)
	}

	/// Allocate a declared variable and require every mentioned one to exist.
	fn check_variables(&mut self, line: &Line<'a>) -> Result<(), VariableError> {
		if let [declaration, name] = line.words.as_slice() {
			if declaration.symbol == Symbol::Declaration && !self.environment.allocate(name.lexeme) {
				return Err(VariableError::AlreadyInitialized(name.lexeme.to_string()));
			}
		}

		match line.words.iter().find(|w| w.symbol == Symbol::Variable && !self.environment.is_allocated(w.lexeme)) {
			Some(word) => Err(VariableError::NotInitialized(word.lexeme.to_string())),
			None => Ok(()),
		}
	}
}

/// Pair `cycle` with `end` like brackets, remembering where each open cycle is.
pub fn check_cycle_scheme(program: &Program) -> Result<(), CycleSchemeError> {
	let mut open_cycles = Vec::new();
	for line in program.lines() {
		match line.leading() {
			Some(Symbol::CycleStart) => open_cycles.push(line.number),
			Some(Symbol::CycleEnd) => {
				open_cycles.pop().ok_or(CycleSchemeError::MissingStart { line: line.number })?;
			}
			_ => {}
		}
	}
	match open_cycles.pop() {
		Some(line) => Err(CycleSchemeError::MissingEnd { line }),
		None => Ok(()),
	}
}

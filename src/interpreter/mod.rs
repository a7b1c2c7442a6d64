//! Cycle script execution engine.
//!
//! The interpreter walks the checked [`Program`] line by line with a cursor
//! instead of building a tree. Cycles are driven by a stack of return
//! addresses, the 0-based index of every `cycle` line whose condition was true
//! when it was entered:
//!
//! - `cycle` with a true condition pushes its index and falls through, with a
//!   false one it jumps past its matching `end`.
//! - `end` re-evaluates the condition of the innermost entered `cycle`. While
//!   it holds, execution resumes at the first line of the body, otherwise the
//!   address is popped and execution falls through.
//!
//! Declarations were already allocated by the checker and do nothing here.

pub mod expression;

use std::io::{BufRead, Write};

use log::{debug, trace};

use crate::{InterpreterError, environment::Environment, scanner::{Line, Program, Symbol}};

/// Interpreter that runs a checked program against an input and an output.
pub struct Interpreter<'a, R, W> {
	program:          &'a Program<'a>,
	environment:      Environment<'a>,
	/// Indices of the `cycle` lines currently being repeated, innermost last.
	return_addresses: Vec<usize>,
	input:            R,
	output:           W,
}

impl<'a, R: BufRead, W: Write> Interpreter<'a, R, W> {
	/// Start from the variables the checker allocated.
	pub fn new(program: &'a Program<'a>, environment: Environment<'a>, input: R, output: W) -> Self {
		Self { program, environment, return_addresses: Vec::new(), input, output }
	}

	/// Run until the cursor passes the last line.
	///
	/// Variables written before a fault keep their values.
	pub fn interpret(&mut self) -> Result<(), InterpreterError> {
		let program = self.program;
		let mut cursor = 0;
		while let Some(line) = program.line(cursor) {
			trace!("{line}");
			cursor = self.interpret_line(cursor, line)?;
		}
		self.output.flush()?;
		Ok(())
	}

	/// The variable store, as left by the last run.
	pub fn environment(&self) -> &Environment<'a> { &self.environment }

	/// Execute one line and return the index of the next one.
	fn interpret_line(&mut self, cursor: usize, line: &'a Line<'a>) -> Result<usize, InterpreterError> {
		match line.leading() {
			Some(Symbol::Io) => {
				let [keyword, name] = line.words.as_slice() else {
					return Err(InterpreterError::EquationFormat { line: line.number });
				};
				if keyword.lexeme == "read" {
					let value = self.read_value(name.lexeme)?;
					self.assign(line, name.lexeme, value)?;
				} else {
					let value = self.environment.get(name.lexeme).ok_or_else(|| {
						InterpreterError::UndefinedVariable { line: line.number, name: name.lexeme.to_string() }
					})?;
					writeln!(self.output, "{} = {value}", name.lexeme)?;
				}
			}
			Some(Symbol::Variable) => {
				let value = expression::evaluate_assignment(line, &self.environment)?;
				self.assign(line, line.words[0].lexeme, value)?;
			}
			Some(Symbol::CycleStart) => {
				if expression::evaluate_condition(line, &self.environment)? {
					debug!("line {}: entering cycle", line.number);
					self.return_addresses.push(cursor);
				} else {
					return Ok(self.matching_end(cursor)? + 1);
				}
			}
			Some(Symbol::CycleEnd) => {
				let &start =
					self.return_addresses.last().ok_or(InterpreterError::EmptyReturnStack { line: line.number })?;
				let header = self.program.line(start).ok_or(InterpreterError::UnmatchedCycle { line: line.number })?;
				if expression::evaluate_condition(header, &self.environment)? {
					return Ok(start + 1);
				}
				debug!("line {}: leaving cycle started on line {}", line.number, header.number);
				self.return_addresses.pop();
			}
			_ => {}
		}
		Ok(cursor + 1)
	}

	/// Index of the `end` closing the `cycle` at `start`, skipping nested pairs.
	fn matching_end(&self, start: usize) -> Result<usize, InterpreterError> {
		let mut depth = 0usize;
		for (index, line) in self.program.lines().iter().enumerate().skip(start + 1) {
			match line.leading() {
				Some(Symbol::CycleStart) => depth += 1,
				Some(Symbol::CycleEnd) if depth == 0 => return Ok(index),
				Some(Symbol::CycleEnd) => depth -= 1,
				_ => {}
			}
		}
		let number = self.program.line(start).map_or(start + 1, |line| line.number);
		Err(InterpreterError::UnmatchedCycle { line: number })
	}

	fn assign(&mut self, line: &Line, name: &str, value: i32) -> Result<(), InterpreterError> {
		trace!("{name} <- {value}");
		if self.environment.assign(name, value) {
			Ok(())
		} else {
			Err(InterpreterError::UndefinedVariable { line: line.number, name: name.to_string() })
		}
	}

	/// Prompt for and read one integer from the input.
	fn read_value(&mut self, name: &str) -> Result<i32, InterpreterError> {
		write!(self.output, "Enter a value for variable {name}: ")?;
		self.output.flush()?;

		let mut input = String::new();
		if self.input.read_line(&mut input)? == 0 {
			return Err(InterpreterError::InputClosed);
		}
		let input = input.trim();
		input.parse().map_err(|_| InterpreterError::InputMismatch(input.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use super::*;
	use crate::{checker::Checker, scanner::Scanner};

	fn run(source: &str, input: &str) -> (Result<(), InterpreterError>, String, Vec<(String, i32)>) {
		let program = Scanner::new(source).scan_lines().unwrap();
		let environment = Checker::new().check_program(&program).unwrap();
		let mut output = Vec::new();
		let mut interpreter = Interpreter::new(&program, environment, Cursor::new(input), &mut output);
		let result = interpreter.interpret();
		let variables =
			interpreter.environment().sorted().into_iter().map(|(name, value)| (name.to_string(), value)).collect();
		drop(interpreter);
		(result, String::from_utf8(output).unwrap(), variables)
	}

	fn output(source: &str) -> String {
		let (result, output, _) = run(source, "");
		result.unwrap();
		output
	}

	#[test]
	fn test_variable_assignment() {
		assert_eq!(output("variable x\nx = 5\nwrite x"), "x = 5\n");
		assert_eq!(output("variable x\nwrite x"), "x = 0\n");
		assert_eq!(output("variable a\na = 2 + 3 * 2\nwrite a"), "a = 8\n");
	}

	#[test]
	fn test_cycle() {
		let source = "variable i\ni = 0\ncycle i < 3\nwrite i\ni = i + 1\nend";
		assert_eq!(output(source), "i = 0\ni = 1\ni = 2\n");
	}

	#[test]
	fn test_cycle_never_entered() {
		let source = "variable i\ncycle i > 0\nwrite i\ncycle 1 == 1\nend\nend\ni = 7\nwrite i";
		assert_eq!(output(source), "i = 7\n");
	}

	#[test]
	fn test_nested_cycles() {
		let source = "\
variable i
variable j
variable total
cycle i < 3
j = 0
cycle j < i
total = total + 1
j = j + 1
end
i = i + 1
end
write total
write j";
		assert_eq!(output(source), "total = 3\nj = 2\n");
	}

	#[test]
	fn test_declaration_in_cycle_keeps_value() {
		let source = "variable i\ncycle i < 2\nvariable k\nk = k + 10\ni = i + 1\nend\nwrite k";
		assert_eq!(output(source), "k = 20\n");
	}

	#[test]
	fn test_read() {
		let (result, output, variables) = run("variable x\nread x\nx = x * 2\nwrite x", " 21 \n");
		result.unwrap();
		assert_eq!(output, "Enter a value for variable x: x = 42\n");
		assert_eq!(variables, vec![("x".to_string(), 42)]);
	}

	#[test]
	fn test_read_mismatch_keeps_earlier_writes() {
		let (result, output, variables) = run("variable x\nvariable y\nx = 3\nread y\nwrite x", "seven\n");
		assert!(matches!(result, Err(InterpreterError::InputMismatch(ref text)) if text == "seven"));
		assert_eq!(output, "Enter a value for variable y: ");
		assert_eq!(variables, vec![("x".to_string(), 3), ("y".to_string(), 0)]);
	}

	#[test]
	fn test_read_closed_input() {
		let (result, ..) = run("variable x\nread x", "");
		assert!(matches!(result, Err(InterpreterError::InputClosed)));
	}

	#[test]
	fn test_return_stack_is_balanced() {
		let program = Scanner::new("variable i\ncycle i < 4\ni = i + 1\nend").scan_lines().unwrap();
		let environment = Checker::new().check_program(&program).unwrap();
		let mut interpreter = Interpreter::new(&program, environment, Cursor::new(""), Vec::new());
		interpreter.interpret().unwrap();
		assert!(interpreter.return_addresses.is_empty());
		assert_eq!(interpreter.environment().get("i"), Some(4));
	}

	#[test]
	fn test_unchecked_program_faults() {
		let program = Scanner::new("cycle 1 > 2").scan_lines().unwrap();
		let mut interpreter = Interpreter::new(&program, Environment::new(), Cursor::new(""), Vec::new());
		assert!(matches!(interpreter.interpret(), Err(InterpreterError::UnmatchedCycle { line: 1 })));

		let program = Scanner::new("end").scan_lines().unwrap();
		let mut interpreter = Interpreter::new(&program, Environment::new(), Cursor::new(""), Vec::new());
		assert!(matches!(interpreter.interpret(), Err(InterpreterError::EmptyReturnStack { line: 1 })));

		let program = Scanner::new("write ghost").scan_lines().unwrap();
		let mut interpreter = Interpreter::new(&program, Environment::new(), Cursor::new(""), Vec::new());
		assert!(matches!(interpreter.interpret(), Err(InterpreterError::UndefinedVariable { line: 1, .. })));
	}
}

use crate::scanner::Symbol;

/// Errors raised while compiling a program, after it has been tokenized.
#[derive(thiserror::Error, Debug)]
pub enum CompileError {
	/// A single line failed its grammar or variable check.
	#[error("Compilation error on the line {line}. {cause}")]
	Line { line: usize, cause: LineError },
	/// `cycle` and `end` statements do not pair up across the program.
	#[error(transparent)]
	CycleScheme(#[from] CycleSchemeError),
}

impl CompileError {
	pub fn line(line: usize, cause: impl Into<LineError>) -> Self { Self::Line { line, cause: cause.into() } }
}

#[derive(thiserror::Error, Debug)]
pub enum LineError {
	#[error(transparent)]
	Syntax(#[from] SyntaxError),
	#[error(transparent)]
	Variable(#[from] VariableError),
}

/// A line whose symbol sequence does not fit the grammar for its first symbol.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SyntaxError {
	#[error("Broken syntax - a line cannot start with {0}!")]
	UnknownStatement(Symbol),
	#[error("Broken syntax - expected `{expected}`!")]
	UnexpectedShape { expected: &'static str },
	#[error("Broken syntax - line starting with variable is too short!")]
	TooShort,
	#[error("Broken syntax - line must end with variable or value!")]
	BadTerminator,
	#[error("Broken syntax - assignment `=` followed by variable or value expected!")]
	AssignmentExpected,
	#[error("Broken syntax - operator expected!")]
	OperatorExpected,
	#[error("Broken syntax - variable or value expected!")]
	OperandExpected,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum VariableError {
	#[error("Variable '{0}' has already been initialized!")]
	AlreadyInitialized(String),
	#[error("Variable '{0}' has not been initialized!")]
	NotInitialized(String),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CycleSchemeError {
	/// An `end` with no open `cycle`, reported with the line of the `end`.
	#[error("Cycle scheme violation - Missing start statement. (line {line})")]
	MissingStart { line: usize },
	/// A `cycle` never closed, reported with the line of the innermost one.
	#[error("Cycle scheme violation - Missing end statement. (line {line})")]
	MissingEnd { line: usize },
}

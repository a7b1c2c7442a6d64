/// Errors that can occur while a compiled program runs.
///
/// Everything except the input errors should be unreachable for a program that
/// compiled successfully.
#[derive(thiserror::Error, Debug)]
pub enum InterpreterError {
	/// `read` got something that is not an integer
	#[error("Cannot convert your input to integer: '{0}'.")]
	InputMismatch(String),
	/// `read` hit the end of input
	#[error("Input closed before a value was read.")]
	InputClosed,
	#[error("I/O failure: {0}")]
	Io(#[from] std::io::Error),
	#[error("line {line}: cycle has no matching end (should never happen)")]
	UnmatchedCycle { line: usize },
	#[error("line {line}: end without an active cycle (should never happen)")]
	EmptyReturnStack { line: usize },
	#[error("line {line}: non-specific equation format exception (should never happen)")]
	EquationFormat { line: usize },
	#[error("line {line}: non-specific condition exception (should never happen)")]
	ConditionFormat { line: usize },
	#[error("line {line}: undefined variable '{name}'")]
	UndefinedVariable { line: usize, name: String },
	#[error("line {line}: invalid literal '{lexeme}'")]
	InvalidLiteral { line: usize, lexeme: String },
}

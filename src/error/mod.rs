pub mod compiler;
pub mod interpreter;
pub mod scanner;

use crate::{CompileError, InterpreterError, ScanError};

/// CyclerError is the top-level error type for the cycle script toolchain.
#[derive(thiserror::Error, Debug)]
pub enum CyclerError {
	/// Internal error, should never happen
	#[error("CompilerInternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// The source text could not be tokenized
	#[error(transparent)]
	ScanError(#[from] ScanError),
	/// Tokens were fine but a line or the cycle scheme is broken
	#[error(transparent)]
	CompileError(#[from] CompileError),
	/// The program aborted while running
	#[error("Runtime error: {0}")]
	RuntimeError(#[from] InterpreterError),
}

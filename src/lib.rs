//! # Cycle script
//!
//! A toy language with one statement per line and one space between words:
//!
//! ``` text
//! variable i
//! read limit
//! cycle i < limit
//! write i
//! i = i + 1
//! end
//! ```
//!
//! The only type is a 32-bit signed integer and every variable lives in one
//! flat global namespace.

//! ## Scanning
//!
//! Each line is split on spaces and every word is classified into a symbol:
//! keyword, variable name, literal value, assignment, arithmetic operator or
//! comparator. The first word that fits none of them aborts the scan with the
//! line number, so a program either tokenizes completely or not at all.

//! ## Checking
//!
//! There is no syntax tree. The first symbol of a line picks its grammar rule
//! and the line's symbol sequence is checked against it. In the same pass the
//! checker allocates declared variables and rejects any variable used before
//! its declaration or declared twice. Finally `cycle` and `end` must pair up
//! like brackets over the whole program.
//!
//! Compilation is all or nothing: the first failing check is reported and the
//! program never starts.

//! ## Running
//!
//! The interpreter moves a cursor over the checked lines. `cycle` lines push
//! their index on a stack of return addresses when their condition holds, and
//! the matching `end` re-checks that condition to decide between jumping back
//! into the body and popping the address.
//!
//! Assignments are evaluated right-recursively with a multiplication rule that
//! consumes the rest of the line once it starts, see
//! [`interpreter::expression`] for the exact behaviour.

pub mod checker;
pub mod cli;
mod cycler;
pub mod environment;
mod error;
pub mod grammar;
pub mod interpreter;
pub mod logger;
pub mod scanner;

pub use cycler::{COMPILED_NOTICE, Cycler, PARSED_NOTICE};
pub use error::{
	CyclerError,
	compiler::{CompileError, CycleSchemeError, LineError, SyntaxError, VariableError},
	interpreter::InterpreterError,
	scanner::{ScanError, ScanErrorType},
};

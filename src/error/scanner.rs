/// A lexical error with the line number it occurred on.
///
/// Tokenization stops at the first one of these, so no partial program is ever
/// handed to the checker.
#[derive(thiserror::Error, Debug)]
#[error("Parser error on the line {line}. {type}")]
pub struct ScanError {
	/// The 1-based line number where the error occurred.
	line:   usize,
	/// The type of scanning error.
	r#type: ScanErrorType,
}

impl ScanError {
	pub fn new(line: usize, r#type: ScanErrorType) -> Self { Self { line, r#type } }

	pub fn line(&self) -> usize { self.line }

	pub fn r#type(&self) -> &ScanErrorType { &self.r#type }
}

/// Types of scanning errors.
#[derive(Debug, PartialEq)]
pub enum ScanErrorType {
	/// The word is not a keyword, operator, identifier or integer literal.
	UnresolvedSymbol(String),
	/// A blank line, or a leading or doubled space.
	EmptyWord,
}

impl std::fmt::Display for ScanErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ScanErrorType::*;
		match self {
			UnresolvedSymbol(word) => {
				write!(f, "Cannot resolve symbol {word}.")
			}
			EmptyWord => {
				write!(f, "Empty word, words must be separated by exactly one space.")
			}
		}
	}
}

//! Splits program text into lines and lines into classified words.
//!
//! Cycle script has no lexical grammar beyond "one statement per line, one
//! space between words", so the scanner never looks at individual characters
//! across word boundaries. Each word is handed to [`Symbol::classify`] and the
//! first word that cannot be classified aborts the whole scan.
//!
//! The resulting [`Program`] keeps the original lexemes next to their symbols.
//! It is built once and shared read-only by the checker and the interpreter.
mod symbol;

use log::debug;
pub use symbol::*;

use crate::{ScanError, ScanErrorType};

/// A classified word, borrowing its lexeme from the source text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Word<'a> {
	pub lexeme: &'a str,
	pub symbol: Symbol,
}

impl<'a> Word<'a> {
	pub fn new(lexeme: &'a str, symbol: Symbol) -> Self { Self { lexeme, symbol } }
}

/// One statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<'a> {
	/// 1-based line number in the source text
	pub number: usize,
	pub words:  Vec<Word<'a>>,
}

impl<'a> Line<'a> {
	/// The symbol that decides which grammar rule applies.
	pub fn leading(&self) -> Option<Symbol> { self.words.first().map(|w| w.symbol) }

	pub fn symbols(&self) -> Vec<Symbol> { self.words.iter().map(|w| w.symbol).collect() }
}

impl std::fmt::Display for Line<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}:", self.number)?;
		for word in &self.words {
			write!(f, " {}:{}", word.lexeme, word.symbol)?;
		}
		Ok(())
	}
}

/// A tokenized program, one [`Line`] per source line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program<'a> {
	lines: Vec<Line<'a>>,
}

impl<'a> Program<'a> {
	pub fn lines(&self) -> &[Line<'a>] { &self.lines }

	/// The line at a 0-based index, as used by the interpreter's cursor.
	pub fn line(&self, index: usize) -> Option<&Line<'a>> { self.lines.get(index) }

	pub fn len(&self) -> usize { self.lines.len() }

	pub fn is_empty(&self) -> bool { self.lines.is_empty() }
}

/// A scanner for cycle script source code
pub struct Scanner<'a> {
	/// User input source code
	source: &'a str,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self { Self { source } }

	/// Scan every line of the source, stopping at the first unresolved word.
	pub fn scan_lines(&self) -> Result<Program<'a>, ScanError> {
		let mut raw_lines: Vec<&'a str> =
			self.source.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line)).collect();
		while raw_lines.last().is_some_and(|line| line.is_empty()) {
			raw_lines.pop();
		}

		let mut lines = Vec::with_capacity(raw_lines.len());
		for (index, raw) in raw_lines.into_iter().enumerate() {
			lines.push(Self::scan_line(index + 1, raw)?);
		}
		debug!("scanned {} lines", lines.len());
		Ok(Program { lines })
	}

	/// Classify the words of a single line.
	fn scan_line(number: usize, raw: &'a str) -> Result<Line<'a>, ScanError> {
		let mut lexemes: Vec<&'a str> = raw.split(' ').collect();
		// Trailing spaces are tolerated, a blank line still yields one empty word.
		while lexemes.len() > 1 && lexemes.last().is_some_and(|w| w.is_empty()) {
			lexemes.pop();
		}

		let words = lexemes
			.into_iter()
			.map(|lexeme| {
				Symbol::classify(lexeme).map(|symbol| Word::new(lexeme, symbol)).map_err(|e| ScanError::new(number, e))
			})
			.collect::<Result<Vec<_>, _>>()?;
		Ok(Line { number, words })
	}
}

//! The grammatical category of a single word.
//!
//! Words are classified in a fixed priority order: exact keywords and
//! operators first, then identifiers, then integer literals. A word like
//! `end` is therefore never a variable name, and `-` is always an operator
//! even though it would also fit the literal syntax with no digits.

use crate::ScanErrorType;

/// The closed set of symbols a word can be classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
	/// `variable`
	Declaration,
	/// `read` or `write`
	Io,
	/// `cycle`
	CycleStart,
	/// `end`
	CycleEnd,
	/// A name matching `[a-zA-Z_$][a-zA-Z_$0-9]*`.
	Variable,
	/// A signed 32-bit integer literal.
	Value,
	/// `=`
	Assign,
	/// One of `<`, `>`, `>=`, `<=`, `!=`, `==`.
	Compare,
	/// One of `+`, `-`, `*`.
	Operator,
}

impl Symbol {
	/// Classify one word, or fail with the reason it cannot be resolved.
	pub fn classify(word: &str) -> Result<Self, ScanErrorType> {
		use Symbol::*;

		#[rustfmt::skip]
		let symbol = match word {
			"" => return Err(ScanErrorType::EmptyWord),
			"variable" => Declaration,
			"read" | "write" => Io,
			"cycle" => CycleStart,
			"end" => CycleEnd,
			"=" => Assign,
			"+" | "-" | "*" => Operator,
			"<" | ">" | ">=" | "<=" | "!=" | "==" => Compare,
			w if is_identifier(w) => Variable,
			w if is_literal(w) => Value,
			_ => return Err(ScanErrorType::UnresolvedSymbol(word.to_string())),
		};
		Ok(symbol)
	}

	/// Variables and values are the two kinds of operand.
	pub fn is_operand(&self) -> bool { matches!(self, Symbol::Variable | Symbol::Value) }
}

impl std::fmt::Display for Symbol {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Symbol::Declaration => "declaration",
			Symbol::Io => "io",
			Symbol::CycleStart => "cycle-start",
			Symbol::CycleEnd => "cycle-end",
			Symbol::Variable => "variable",
			Symbol::Value => "value",
			Symbol::Assign => "assign",
			Symbol::Compare => "compare",
			Symbol::Operator => "operator",
		};
		write!(f, "{name}")
	}
}

fn is_identifier(word: &str) -> bool {
	let mut chars = word.chars();
	chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// `[-+]?[0-9]+` that also fits in an `i32`.
fn is_literal(word: &str) -> bool {
	let digits = word.strip_prefix(['-', '+']).unwrap_or(word);
	!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) && word.parse::<i32>().is_ok()
}

#[cfg(test)]
mod tests {
	use super::{Symbol::*, *};

	fn classify(word: &str, expected: Symbol) {
		assert_eq!(Symbol::classify(word), Ok(expected), "word {word:?}");
	}

	fn unresolved(word: &str) {
		assert_eq!(Symbol::classify(word), Err(ScanErrorType::UnresolvedSymbol(word.to_string())));
	}

	#[test]
	fn classify_keywords() {
		classify("variable", Declaration);
		classify("read", Io);
		classify("write", Io);
		classify("cycle", CycleStart);
		classify("end", CycleEnd);
	}

	#[test]
	fn classify_operators() {
		classify("=", Assign);
		classify("+", Operator);
		classify("-", Operator);
		classify("*", Operator);
		for comparator in ["<", ">", ">=", "<=", "!=", "=="] {
			classify(comparator, Compare);
		}
	}

	#[test]
	fn classify_identifiers() {
		classify("x", Variable);
		classify("_name", Variable);
		classify("$cash", Variable);
		classify("counter2", Variable);
		classify("Variable", Variable);
		classify("ends", Variable);
	}

	#[test]
	fn classify_literals() {
		classify("0", Value);
		classify("42", Value);
		classify("-7", Value);
		classify("+7", Value);
		classify("007", Value);
		classify("2147483647", Value);
		classify("-2147483648", Value);
	}

	#[test]
	fn reject_unresolved() {
		unresolved("2x");
		unresolved("a-b");
		unresolved("/");
		unresolved("=>");
		unresolved("--1");
		unresolved("2147483648");
		unresolved("1.5");
		unresolved("héllo");
		assert_eq!(Symbol::classify(""), Err(ScanErrorType::EmptyWord));
	}
}

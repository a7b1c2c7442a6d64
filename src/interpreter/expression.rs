//! Evaluation of assignment right-hand sides and cycle conditions.
//!
//! Assignments are evaluated straight from the line's words, starting at the
//! first operand after `name =`:
//!
//! ``` BNF
//! sum     → operand ( ( "+" | "-" ) sum )? | product ;
//! product → operand ( "*" product )? ;
//! ```
//!
//! `+` and `-` recurse to the right, so `10 - 2 - 3` is `10 - (2 - 3)`. Once a
//! `*` is met the rest of the line is read as a product and anything after the
//! last factor is ignored: `2 * 3 + 4` is `6`, while `2 + 3 * 2` is `8`.
//! Arithmetic wraps on overflow.

use crate::{InterpreterError, environment::Environment, scanner::{Line, Symbol, Word}};

/// Index of the first operand in `name = operand ...`.
const FIRST_OPERAND: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOperator {
	Plus,
	Minus,
	Star,
}

impl ArithmeticOperator {
	pub fn from_lexeme(lexeme: &str) -> Option<Self> {
		Some(match lexeme {
			"+" => Self::Plus,
			"-" => Self::Minus,
			"*" => Self::Star,
			_ => return None,
		})
	}

	pub fn apply(self, left: i32, right: i32) -> i32 {
		match self {
			Self::Plus => left.wrapping_add(right),
			Self::Minus => left.wrapping_sub(right),
			Self::Star => left.wrapping_mul(right),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
	Equal,
	NotEqual,
	GreaterEqual,
	LessEqual,
	Greater,
	Less,
}

impl Comparator {
	pub fn from_lexeme(lexeme: &str) -> Option<Self> {
		Some(match lexeme {
			"==" => Self::Equal,
			"!=" => Self::NotEqual,
			">=" => Self::GreaterEqual,
			"<=" => Self::LessEqual,
			">" => Self::Greater,
			"<" => Self::Less,
			_ => return None,
		})
	}

	pub fn apply(self, left: i32, right: i32) -> bool {
		match self {
			Self::Equal => left == right,
			Self::NotEqual => left != right,
			Self::GreaterEqual => left >= right,
			Self::LessEqual => left <= right,
			Self::Greater => left > right,
			Self::Less => left < right,
		}
	}
}

/// Evaluate the right-hand side of an assignment line.
pub fn evaluate_assignment(line: &Line, environment: &Environment) -> Result<i32, InterpreterError> {
	sum(&line.words, FIRST_OPERAND, environment, line.number)
}

/// Evaluate the `operand comparator operand` part of a `cycle` line.
pub fn evaluate_condition(line: &Line, environment: &Environment) -> Result<bool, InterpreterError> {
	let [_, left, comparator, right] = line.words.as_slice() else {
		return Err(InterpreterError::ConditionFormat { line: line.number });
	};
	let comparator =
		Comparator::from_lexeme(comparator.lexeme).ok_or(InterpreterError::ConditionFormat { line: line.number })?;
	Ok(comparator.apply(resolve(left, environment, line.number)?, resolve(right, environment, line.number)?))
}

fn sum(words: &[Word], position: usize, environment: &Environment, line: usize) -> Result<i32, InterpreterError> {
	let operand = words.get(position).ok_or(InterpreterError::EquationFormat { line })?;
	let Some(next) = words.get(position + 1) else {
		return resolve(operand, environment, line);
	};
	match ArithmeticOperator::from_lexeme(next.lexeme) {
		Some(ArithmeticOperator::Star) => product(words, position, environment, line),
		Some(operator) => {
			let left = resolve(operand, environment, line)?;
			Ok(operator.apply(left, sum(words, position + 2, environment, line)?))
		}
		None => Err(InterpreterError::EquationFormat { line }),
	}
}

fn product(words: &[Word], position: usize, environment: &Environment, line: usize) -> Result<i32, InterpreterError> {
	let operand = words.get(position).ok_or(InterpreterError::EquationFormat { line })?;
	let value = resolve(operand, environment, line)?;
	match words.get(position + 1).and_then(|w| ArithmeticOperator::from_lexeme(w.lexeme)) {
		Some(ArithmeticOperator::Star) => Ok(value.wrapping_mul(product(words, position + 2, environment, line)?)),
		_ => Ok(value),
	}
}

/// Resolve a literal or a variable to its current value.
fn resolve(word: &Word, environment: &Environment, line: usize) -> Result<i32, InterpreterError> {
	match word.symbol {
		Symbol::Value => {
			word.lexeme.parse().map_err(|_| InterpreterError::InvalidLiteral { line, lexeme: word.lexeme.to_string() })
		}
		Symbol::Variable => environment
			.get(word.lexeme)
			.ok_or_else(|| InterpreterError::UndefinedVariable { line, name: word.lexeme.to_string() }),
		_ => Err(InterpreterError::EquationFormat { line }),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::scanner::Scanner;

	fn environment() -> Environment<'static> {
		let mut environment = Environment::new();
		for (name, value) in [("a", 2), ("b", 3), ("c", -4)] {
			environment.allocate(name);
			environment.assign(name, value);
		}
		environment
	}

	fn assign(input: &str) -> Result<i32, InterpreterError> {
		let program = Scanner::new(input).scan_lines().unwrap();
		evaluate_assignment(&program.lines()[0], &environment())
	}

	fn condition(input: &str) -> bool {
		let program = Scanner::new(input).scan_lines().unwrap();
		evaluate_condition(&program.lines()[0], &environment()).unwrap()
	}

	#[test]
	fn evaluate_operands() {
		assert_eq!(assign("x = 5").unwrap(), 5);
		assert_eq!(assign("x = -5").unwrap(), -5);
		assert_eq!(assign("x = +5").unwrap(), 5);
		assert_eq!(assign("x = c").unwrap(), -4);
	}

	#[test]
	fn evaluate_sums() {
		assert_eq!(assign("x = 1 + 2").unwrap(), 3);
		assert_eq!(assign("x = a + b + c").unwrap(), 1);
		assert_eq!(assign("x = 10 - 2 - 3").unwrap(), 11);
		assert_eq!(assign("x = 10 - 2 + 3").unwrap(), 5);
	}

	#[test]
	fn evaluate_products() {
		assert_eq!(assign("x = 2 * 3").unwrap(), 6);
		assert_eq!(assign("x = a * b * c").unwrap(), -24);
		assert_eq!(assign("x = 2 + 3 * 2").unwrap(), 8);
		assert_eq!(assign("x = 1 - 3 * 2").unwrap(), -5);
	}

	#[test]
	fn product_swallows_the_rest_of_the_line() {
		assert_eq!(assign("x = 2 * 3 + 4").unwrap(), 6);
		assert_eq!(assign("x = 2 * 3 - 100 * 7").unwrap(), 6);
		assert_eq!(assign("x = 1 + 2 * 3 + 4").unwrap(), 7);
	}

	#[test]
	fn arithmetic_wraps() {
		assert_eq!(assign("x = 2147483647 + 1").unwrap(), i32::MIN);
		assert_eq!(assign("x = -2147483648 - 1").unwrap(), i32::MAX);
		assert_eq!(assign("x = 65536 * 65536").unwrap(), 0);
	}

	#[test]
	fn evaluate_malformed_lines() {
		assert!(matches!(assign("x = 1 2"), Err(InterpreterError::EquationFormat { line: 1 })));
		assert!(matches!(assign("x = 1 +"), Err(InterpreterError::EquationFormat { line: 1 })));
		assert!(matches!(assign("x ="), Err(InterpreterError::EquationFormat { line: 1 })));
		assert!(matches!(assign("x = ghost"), Err(InterpreterError::UndefinedVariable { line: 1, .. })));
	}

	#[test]
	fn evaluate_comparators() {
		for (input, expected) in [
			("cycle a == 2", true),
			("cycle 2 == a", true),
			("cycle a == b", false),
			("cycle a != b", true),
			("cycle 2 != 2", false),
			("cycle a >= 2", true),
			("cycle a >= b", false),
			("cycle 3 >= b", true),
			("cycle a <= b", true),
			("cycle b <= a", false),
			("cycle c <= -4", true),
			("cycle b > a", true),
			("cycle a > a", false),
			("cycle -5 > c", false),
			("cycle c < 0", true),
			("cycle 0 < c", false),
		] {
			assert_eq!(condition(input), expected, "{input}");
		}
	}

	#[test]
	fn evaluate_malformed_conditions() {
		let program = Scanner::new("cycle a = 2\ncycle a <").scan_lines().unwrap();
		for line in program.lines() {
			assert!(matches!(evaluate_condition(line, &environment()), Err(InterpreterError::ConditionFormat { .. })));
		}
	}
}

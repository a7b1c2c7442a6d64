//! Line-level grammar of cycle script.
//!
//! Every statement fits on one line and the first symbol decides which rule
//! applies. Declarations, input/output and cycle delimiters have a fixed shape
//! and are matched against a table of allowed symbol sequences. Assignments
//! have variable length and are checked by walking the sequence.
//!
//! ``` BNF
//! declaration → "variable" VARIABLE ;
//! io          → ( "read" | "write" ) VARIABLE ;
//! cycle       → "cycle" operand COMPARE operand ;
//! end         → "end" ;
//! assignment  → VARIABLE "=" operand ( OPERATOR operand )* ;
//! operand     → VARIABLE | VALUE ;
//! ```

use Symbol::*;

use crate::{SyntaxError, scanner::Symbol};

const DECLARATION_RULES: &[&[Symbol]] = &[&[Declaration, Variable]];

const IO_RULES: &[&[Symbol]] = &[&[Io, Variable]];

const CYCLE_START_RULES: &[&[Symbol]] = &[
	&[CycleStart, Variable, Compare, Variable],
	&[CycleStart, Variable, Compare, Value],
	&[CycleStart, Value, Compare, Variable],
	&[CycleStart, Value, Compare, Value],
];

const CYCLE_END_RULES: &[&[Symbol]] = &[&[CycleEnd]];

/// Check one line's symbol sequence against the rule for its first symbol.
pub fn check_syntax(line: &[Symbol]) -> Result<(), SyntaxError> {
	let Some(&leading) = line.first() else {
		return Err(SyntaxError::UnexpectedShape { expected: "<statement>" });
	};
	match leading {
		Declaration => check_static_rules(line, DECLARATION_RULES, "variable <name>"),
		Io => check_static_rules(line, IO_RULES, "read|write <name>"),
		CycleStart => check_static_rules(line, CYCLE_START_RULES, "cycle <operand> <comparator> <operand>"),
		CycleEnd => check_static_rules(line, CYCLE_END_RULES, "end"),
		Variable => check_assignment(line),
		other => Err(SyntaxError::UnknownStatement(other)),
	}
}

fn check_static_rules(line: &[Symbol], rules: &[&[Symbol]], expected: &'static str) -> Result<(), SyntaxError> {
	if rules.iter().any(|rule| *rule == line) { Ok(()) } else { Err(SyntaxError::UnexpectedShape { expected }) }
}

/// `name = operand (op operand)*`, checked pairwise from the first operand.
fn check_assignment(line: &[Symbol]) -> Result<(), SyntaxError> {
	if line.len() < 3 {
		return Err(SyntaxError::TooShort);
	}
	if !line[line.len() - 1].is_operand() {
		return Err(SyntaxError::BadTerminator);
	}
	if line[1] != Assign || !line[2].is_operand() {
		return Err(SyntaxError::AssignmentExpected);
	}

	for pair in line[2..].windows(2) {
		match (pair[0], pair[1]) {
			(current, next) if current.is_operand() => {
				if next != Operator {
					return Err(SyntaxError::OperatorExpected);
				}
			}
			(Operator, next) => {
				if !next.is_operand() {
					return Err(SyntaxError::OperandExpected);
				}
			}
			_ => return Err(SyntaxError::UnexpectedShape { expected: "<name> = <operand> (<op> <operand>)*" }),
		}
	}
	Ok(())
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::expression::{CaseExpression, Expression};
use strata_type::Datum;

pub fn constant(value: impl Into<Datum>) -> Expression {
	Expression::constant(value)
}

pub fn eq(left: Expression, right: Expression) -> Expression {
	Expression::equal(left, right)
}

/// A `count(*)` node; its result tells how many rows reached it.
pub fn probe() -> Expression {
	Expression::count_star()
}

/// A CASE node from `(condition, result)` pairs and an optional else.
pub fn case_of(whens: Vec<(Expression, Expression)>, else_result: Option<Expression>) -> Expression {
	let mut case = CaseExpression::new();
	for (condition, result) in whens {
		case.add_when(condition, result);
	}
	if let Some(else_result) = else_result {
		case.set_else(else_result);
	}
	case.into()
}

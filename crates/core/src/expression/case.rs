// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_type::Type;

use crate::expression::Expression;

/// One `WHEN <condition> THEN <result>` branch.
#[derive(Debug, Clone, PartialEq)]
pub struct WhenClause {
	pub condition: Expression,
	pub result: Expression,
}

/// Searched conditional expression with ordered, first-match-wins branches.
///
/// Branch and else types are not validated against each other; the planner
/// building the node is responsible for that.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseExpression {
	whens: Vec<WhenClause>,
	else_result: Option<Box<Expression>>,
}

impl CaseExpression {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a branch after all previously added ones.
	pub fn add_when(&mut self, condition: Expression, result: Expression) {
		self.whens.push(WhenClause {
			condition,
			result,
		});
	}

	pub fn with_when(mut self, condition: Expression, result: Expression) -> Self {
		self.add_when(condition, result);
		self
	}

	pub fn set_else(&mut self, else_result: Expression) {
		self.else_result = Some(Box::new(else_result));
	}

	pub fn with_else(mut self, else_result: Expression) -> Self {
		self.set_else(else_result);
		self
	}

	pub fn whens(&self) -> &[WhenClause] {
		&self.whens
	}

	pub fn else_result(&self) -> Option<&Expression> {
		self.else_result.as_deref()
	}

	/// Types of the first branch's result only.
	pub fn output_types(&self) -> Vec<Type> {
		match (self.whens.first(), self.else_result()) {
			(Some(when), _) => when.result.output_types(),
			(None, Some(else_result)) => else_result.output_types(),
			(None, None) => vec![Type::Null],
		}
	}
}

#[cfg(test)]
mod tests {
	use strata_type::Datum;

	use super::*;
	use crate::expression::BinaryOperator;

	fn cond(l: i32, r: i32) -> Expression {
		Expression::binary(BinaryOperator::Equal, Expression::constant(Datum::int(l)), Expression::constant(Datum::int(r)))
	}

	mod equality {
		use super::*;

		#[test]
		fn test_both_without_else() {
			let left = CaseExpression::new().with_when(cond(1, 2), Expression::constant(Datum::text("a")));
			let right = CaseExpression::new().with_when(cond(1, 2), Expression::constant(Datum::text("a")));
			assert_eq!(left, right);
		}

		#[test]
		fn test_else_against_no_else() {
			let left = CaseExpression::new().with_when(cond(1, 2), Expression::constant(Datum::text("a")));
			let right = left.clone().with_else(Expression::constant(Datum::text("c")));
			assert_ne!(left, right);
			assert_ne!(right, left);
		}

		#[test]
		fn test_same_else() {
			let left = CaseExpression::new()
				.with_when(cond(1, 2), Expression::constant(Datum::text("a")))
				.with_else(Expression::constant(Datum::text("c")));
			assert_eq!(left.clone(), left);
		}

		#[test]
		fn test_branch_order_matters() {
			let a = CaseExpression::new()
				.with_when(cond(1, 1), Expression::constant(Datum::int(1)))
				.with_when(cond(2, 2), Expression::constant(Datum::int(2)));
			let b = CaseExpression::new()
				.with_when(cond(2, 2), Expression::constant(Datum::int(2)))
				.with_when(cond(1, 1), Expression::constant(Datum::int(1)));
			assert_ne!(a, b);
		}

		#[test]
		fn test_prefix_is_not_equal() {
			let short = CaseExpression::new().with_when(cond(1, 1), Expression::constant(Datum::int(1)));
			let long = short.clone().with_when(cond(2, 2), Expression::constant(Datum::int(2)));
			assert_ne!(short, long);
			assert_ne!(long, short);
		}
	}

	mod output_types {
		use super::*;

		#[test]
		fn test_first_branch_decides() {
			let case = CaseExpression::new()
				.with_when(cond(1, 1), Expression::constant(Datum::text("a")))
				.with_when(cond(2, 2), Expression::constant(Datum::int(2)))
				.with_else(Expression::constant(Datum::double(1.0)));
			assert_eq!(case.output_types(), vec![Type::Text]);
		}

		#[test]
		fn test_without_branches() {
			assert_eq!(CaseExpression::new().output_types(), vec![Type::Null]);
			let case = CaseExpression::new().with_else(Expression::constant(Datum::long(1i64)));
			assert_eq!(case.output_types(), vec![Type::Long]);
		}
	}

	#[test]
	fn test_set_else_replaces() {
		let mut case = CaseExpression::new();
		case.set_else(Expression::constant(Datum::int(1)));
		case.set_else(Expression::constant(Datum::int(2)));
		assert_eq!(case.else_result(), Some(&Expression::constant(Datum::int(2))));
	}
}

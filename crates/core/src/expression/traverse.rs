// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::expression::Expression;

impl Expression {
	/// Calls `f` for each direct child in declaration order.
	///
	/// For a CASE node that is each branch's condition then its result, in
	/// branch order, followed by the else node.
	pub fn for_each_child<'a>(&'a self, mut f: impl FnMut(&'a Expression)) {
		match self {
			Expression::Constant(_) | Expression::Field(_) => {}
			Expression::Binary(binary) => {
				f(&binary.left);
				f(&binary.right);
			}
			Expression::Not(not) => f(&not.expression),
			Expression::IsNull(is_null) => f(&is_null.expression),
			Expression::Aggregate(aggregate) => {
				if let Some(argument) = &aggregate.argument {
					f(argument);
				}
			}
			Expression::Case(case) => {
				for when in case.whens() {
					f(&when.condition);
					f(&when.result);
				}
				if let Some(else_result) = case.else_result() {
					f(else_result);
				}
			}
		}
	}

	pub fn children(&self) -> Vec<&Expression> {
		let mut result = Vec::new();
		self.for_each_child(|child| result.push(child));
		result
	}

	/// Visits this node, then every child subtree in declaration order.
	pub fn pre_order<'a, F: FnMut(&'a Expression)>(&'a self, visit: &mut F) {
		visit(self);
		self.for_each_child(|child| child.pre_order(visit));
	}

	/// Visits every child subtree in declaration order, then this node.
	pub fn post_order<'a, F: FnMut(&'a Expression)>(&'a self, visit: &mut F) {
		self.for_each_child(|child| child.post_order(visit));
		visit(self);
	}

	/// Number of nodes in the tree rooted at this node.
	pub fn node_count(&self) -> usize {
		let mut count = 0;
		self.pre_order(&mut |_| count += 1);
		count
	}
}

#[cfg(test)]
mod tests {
	use strata_type::Datum;

	use crate::expression::{AggregateFunction, BinaryOperator, CaseExpression, Expression};

	fn constant(v: i32) -> Expression {
		Expression::constant(Datum::int(v))
	}

	fn case() -> Expression {
		CaseExpression::new()
			.with_when(Expression::equal(constant(1), constant(2)), Expression::constant(Datum::text("a")))
			.with_when(Expression::unresolved_field("flag"), Expression::constant(Datum::text("b")))
			.with_else(Expression::constant(Datum::text("c")))
			.into()
	}

	fn label(node: &Expression) -> String {
		match node {
			Expression::Case(_) => "CASE".to_string(),
			other => other.to_string(),
		}
	}

	#[test]
	fn test_pre_order() {
		let expr = case();
		let mut visited = Vec::new();
		expr.pre_order(&mut |node| visited.push(label(node)));
		assert_eq!(visited, vec!["CASE", "(1 = 2)", "1", "2", "'a'", "flag", "'b'", "'c'"]);
	}

	#[test]
	fn test_post_order() {
		let expr = case();
		let mut visited = Vec::new();
		expr.post_order(&mut |node| visited.push(label(node)));
		assert_eq!(visited, vec!["1", "2", "(1 = 2)", "'a'", "flag", "'b'", "'c'", "CASE"]);
	}

	#[test]
	fn test_case_without_else_skips_else() {
		let expr: Expression =
			CaseExpression::new().with_when(Expression::constant(Datum::bool(false)), constant(1)).into();
		let mut kinds = Vec::new();
		expr.pre_order(&mut |node| kinds.push(node.kind()));
		assert_eq!(kinds.len(), 3);
		assert_eq!(expr.node_count(), 3);
	}

	#[test]
	fn test_children() {
		let expr = Expression::binary(BinaryOperator::Add, constant(1), constant(2));
		assert_eq!(expr.children(), vec![&constant(1), &constant(2)]);
		assert!(Expression::count_star().children().is_empty());
		assert_eq!(
			Expression::aggregate(AggregateFunction::Min, constant(3)).children(),
			vec![&constant(3)]
		);
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use strata_type::Datum;

use crate::expression::{
	AggregateExpression, AggregateFunction, BinaryExpression, BinaryOperator, CaseExpression, ConstantExpression,
	Expression, FieldExpression, IsNullExpression, NotExpression, WhenClause,
};

impl Display for Expression {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Expression::Constant(constant) => Display::fmt(constant, f),
			Expression::Field(FieldExpression {
				name,
				..
			}) => f.write_str(name),
			Expression::Binary(BinaryExpression {
				operator,
				left,
				right,
			}) => write!(f, "({} {} {})", left, operator, right),
			Expression::Not(NotExpression {
				expression,
			}) => write!(f, "NOT {}", expression),
			Expression::IsNull(IsNullExpression {
				expression,
				negated: false,
			}) => write!(f, "{} IS NULL", expression),
			Expression::IsNull(IsNullExpression {
				expression,
				negated: true,
			}) => write!(f, "{} IS NOT NULL", expression),
			Expression::Aggregate(aggregate) => Display::fmt(aggregate, f),
			Expression::Case(case) => Display::fmt(case, f),
		}
	}
}

impl Display for ConstantExpression {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match &self.0 {
			Datum::Text(text) => write!(f, "'{}'", text.replace('\'', "''")),
			Datum::Char(c) => write!(f, "'{}'", *c as char),
			other => Display::fmt(other, f),
		}
	}
}

impl Display for BinaryOperator {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			BinaryOperator::Equal => f.write_str("="),
			BinaryOperator::NotEqual => f.write_str("!="),
			BinaryOperator::LessThan => f.write_str("<"),
			BinaryOperator::LessThanEqual => f.write_str("<="),
			BinaryOperator::GreaterThan => f.write_str(">"),
			BinaryOperator::GreaterThanEqual => f.write_str(">="),
			BinaryOperator::And => f.write_str("AND"),
			BinaryOperator::Or => f.write_str("OR"),
			BinaryOperator::Add => f.write_str("+"),
			BinaryOperator::Subtract => f.write_str("-"),
			BinaryOperator::Multiply => f.write_str("*"),
			BinaryOperator::Divide => f.write_str("/"),
			BinaryOperator::Modulo => f.write_str("%"),
		}
	}
}

impl Display for AggregateFunction {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			AggregateFunction::Count => f.write_str("count"),
			AggregateFunction::Sum => f.write_str("sum"),
			AggregateFunction::Min => f.write_str("min"),
			AggregateFunction::Max => f.write_str("max"),
			AggregateFunction::Avg => f.write_str("avg"),
		}
	}
}

impl Display for AggregateExpression {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match &self.argument {
			Some(argument) => write!(f, "{}({})", self.function, argument),
			None => write!(f, "{}(*)", self.function),
		}
	}
}

impl Display for WhenClause {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "WHEN {} THEN {}", self.condition, self.result)
	}
}

/// Diagnostic layout: `CASE`, one `WHEN .. THEN ..` line per branch, the
/// `ELSE` line when an else is set, then `END`.
impl Display for CaseExpression {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("CASE\n")?;
		for when in self.whens() {
			writeln!(f, "{}", when)?;
		}
		if let Some(else_result) = self.else_result() {
			writeln!(f, "ELSE {}", else_result)?;
		}
		f.write_str("END")
	}
}

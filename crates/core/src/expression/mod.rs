// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Immutable expression trees.
//!
//! An [`Expression`] is pure structure: it owns its children, declares its
//! output type and can be walked, but carries no per-evaluation state. The
//! mutable state lives in a separate context tree created per evaluation
//! stream, so one tree can be shared by any number of concurrent streams.

use std::fmt::{Display, Formatter};

pub use case::{CaseExpression, WhenClause};
use strata_type::{Datum, Result, Type};

use crate::{CatalogError, interface::ColumnCatalog};

mod case;
mod display;
mod traverse;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
	Constant(ConstantExpression),

	Field(FieldExpression),

	Binary(BinaryExpression),

	Not(NotExpression),

	IsNull(IsNullExpression),

	Aggregate(AggregateExpression),

	Case(CaseExpression),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
	Constant,
	Field,
	Binary,
	Not,
	IsNull,
	Aggregate,
	Case,
}

impl Display for ExpressionKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ExpressionKind::Constant => f.write_str("CONST"),
			ExpressionKind::Field => f.write_str("FIELD"),
			ExpressionKind::Binary => f.write_str("BINARY"),
			ExpressionKind::Not => f.write_str("NOT"),
			ExpressionKind::IsNull => f.write_str("IS_NULL"),
			ExpressionKind::Aggregate => f.write_str("AGGREGATE"),
			ExpressionKind::Case => f.write_str("CASE"),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstantExpression(pub Datum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedColumn {
	pub ordinal: usize,
	pub ty: Type,
}

/// Reference to a column of the input row.
///
/// A resolved field carries the ordinal and type it was bound to at
/// construction; an unresolved one is looked up in the catalog on every
/// evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldExpression {
	pub name: String,
	pub column: Option<ResolvedColumn>,
}

impl FieldExpression {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			column: None,
		}
	}

	pub fn resolve<C: ColumnCatalog + ?Sized>(catalog: &C, name: impl Into<String>) -> Result<Self> {
		let name = name.into();
		let Some(column) = catalog.column(&name) else {
			return Err(CatalogError::ColumnNotFound {
				name,
			}
			.into());
		};
		let column = ResolvedColumn {
			ordinal: column.ordinal,
			ty: column.ty,
		};
		Ok(Self {
			name,
			column: Some(column),
		})
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
	Equal,
	NotEqual,
	LessThan,
	LessThanEqual,
	GreaterThan,
	GreaterThanEqual,

	And,
	Or,

	Add,
	Subtract,
	Multiply,
	Divide,
	Modulo,
}

impl BinaryOperator {
	pub fn is_comparison(&self) -> bool {
		matches!(
			self,
			BinaryOperator::Equal
				| BinaryOperator::NotEqual
				| BinaryOperator::LessThan
				| BinaryOperator::LessThanEqual
				| BinaryOperator::GreaterThan
				| BinaryOperator::GreaterThanEqual
		)
	}

	pub fn is_logical(&self) -> bool {
		matches!(self, BinaryOperator::And | BinaryOperator::Or)
	}

	pub fn is_arithmetic(&self) -> bool {
		!self.is_comparison() && !self.is_logical()
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
	pub operator: BinaryOperator,
	pub left: Box<Expression>,
	pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotExpression {
	pub expression: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IsNullExpression {
	pub expression: Box<Expression>,
	pub negated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateFunction {
	Count,
	Sum,
	Min,
	Max,
	Avg,
}

/// An accumulating call; `argument` is `None` only for `count(*)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateExpression {
	pub function: AggregateFunction,
	pub argument: Option<Box<Expression>>,
}

impl Expression {
	pub fn constant(value: impl Into<Datum>) -> Self {
		Expression::Constant(ConstantExpression(value.into()))
	}

	pub fn null() -> Self {
		Expression::Constant(ConstantExpression(Datum::Null))
	}

	/// A field bound against `catalog` at construction time.
	pub fn field<C: ColumnCatalog + ?Sized>(catalog: &C, name: impl Into<String>) -> Result<Self> {
		FieldExpression::resolve(catalog, name).map(Expression::Field)
	}

	/// A field resolved through the catalog at evaluation time.
	pub fn unresolved_field(name: impl Into<String>) -> Self {
		Expression::Field(FieldExpression::new(name))
	}

	pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Self {
		Expression::Binary(BinaryExpression {
			operator,
			left: Box::new(left),
			right: Box::new(right),
		})
	}

	pub fn equal(left: Expression, right: Expression) -> Self {
		Self::binary(BinaryOperator::Equal, left, right)
	}

	pub fn and(left: Expression, right: Expression) -> Self {
		Self::binary(BinaryOperator::And, left, right)
	}

	pub fn or(left: Expression, right: Expression) -> Self {
		Self::binary(BinaryOperator::Or, left, right)
	}

	pub fn not(expression: Expression) -> Self {
		Expression::Not(NotExpression {
			expression: Box::new(expression),
		})
	}

	pub fn is_null(expression: Expression) -> Self {
		Expression::IsNull(IsNullExpression {
			expression: Box::new(expression),
			negated: false,
		})
	}

	pub fn is_not_null(expression: Expression) -> Self {
		Expression::IsNull(IsNullExpression {
			expression: Box::new(expression),
			negated: true,
		})
	}

	pub fn aggregate(function: AggregateFunction, argument: Expression) -> Self {
		Expression::Aggregate(AggregateExpression {
			function,
			argument: Some(Box::new(argument)),
		})
	}

	pub fn count_star() -> Self {
		Expression::Aggregate(AggregateExpression {
			function: AggregateFunction::Count,
			argument: None,
		})
	}

	pub fn kind(&self) -> ExpressionKind {
		match self {
			Expression::Constant(_) => ExpressionKind::Constant,
			Expression::Field(_) => ExpressionKind::Field,
			Expression::Binary(_) => ExpressionKind::Binary,
			Expression::Not(_) => ExpressionKind::Not,
			Expression::IsNull(_) => ExpressionKind::IsNull,
			Expression::Aggregate(_) => ExpressionKind::Aggregate,
			Expression::Case(_) => ExpressionKind::Case,
		}
	}

	/// Declared output types, derived from the node alone.
	pub fn output_types(&self) -> Vec<Type> {
		match self {
			Expression::Constant(ConstantExpression(value)) => vec![value.get_type()],
			Expression::Field(field) => vec![field.column.map(|c| c.ty).unwrap_or(Type::Null)],
			Expression::Binary(binary) if binary.operator.is_arithmetic() => {
				let left = binary.left.output_type();
				let right = binary.right.output_type();
				let ty = Type::promote(left, right).unwrap_or(if left == Type::Null {
					right
				} else {
					left
				});
				vec![ty]
			}
			Expression::Binary(_) | Expression::Not(_) | Expression::IsNull(_) => vec![Type::Boolean],
			Expression::Aggregate(aggregate) => {
				let argument = aggregate.argument.as_ref().map(|a| a.output_type()).unwrap_or(Type::Null);
				let ty = match aggregate.function {
					AggregateFunction::Count => Type::Long,
					AggregateFunction::Sum if argument.is_floating() => Type::Double,
					AggregateFunction::Sum => Type::Long,
					AggregateFunction::Min | AggregateFunction::Max => argument,
					AggregateFunction::Avg => Type::Double,
				};
				vec![ty]
			}
			Expression::Case(case) => case.output_types(),
		}
	}

	/// The first declared output type.
	pub fn output_type(&self) -> Type {
		self.output_types().first().copied().unwrap_or(Type::Null)
	}
}

impl From<Datum> for Expression {
	fn from(value: Datum) -> Self {
		Expression::Constant(ConstantExpression(value))
	}
}

impl From<CaseExpression> for Expression {
	fn from(case: CaseExpression) -> Self {
		Expression::Case(case)
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Two-phase evaluation of expression trees.
//!
//! [`Evaluate::eval`] accumulates one row into an [`EvalContext`],
//! [`Evaluate::terminate`] reads the accumulated result. The expression is
//! never mutated, so one tree may drive any number of contexts at once.

pub use aggregate::Accumulator;
pub use context::{EvalContext, WhenContext};
use strata_core::{
	CatalogError, ColumnCatalog, Row,
	expression::{
		AggregateExpression, BinaryExpression, ConstantExpression, Expression, FieldExpression,
		IsNullExpression, NotExpression,
	},
};
use strata_type::{Datum, Result, return_error};

use crate::EvaluateError;

mod aggregate;
mod binary;
mod case;
mod context;

/// The per-node evaluation protocol.
pub trait Evaluate {
	/// Allocates fresh state for this node and all of its children.
	fn new_context(&self) -> EvalContext;

	/// Accumulates the contribution of `row`; mutates only `ctx`.
	fn eval(&self, ctx: &mut EvalContext, catalog: &dyn ColumnCatalog, row: &dyn Row) -> Result<()>;

	/// Reads the result accumulated so far. Repeatable.
	fn terminate(&self, ctx: &EvalContext) -> Result<Datum>;
}

impl Evaluate for Expression {
	fn new_context(&self) -> EvalContext {
		match self {
			Expression::Constant(_) => EvalContext::Constant,
			Expression::Field(_) => EvalContext::Field {
				value: Datum::Null,
			},
			Expression::Binary(BinaryExpression {
				left,
				right,
				..
			}) => EvalContext::Binary {
				left: Box::new(left.new_context()),
				right: Box::new(right.new_context()),
			},
			Expression::Not(NotExpression {
				expression,
			}) => EvalContext::Not {
				inner: Box::new(expression.new_context()),
			},
			Expression::IsNull(IsNullExpression {
				expression,
				..
			}) => EvalContext::IsNull {
				inner: Box::new(expression.new_context()),
			},
			Expression::Aggregate(AggregateExpression {
				function,
				argument,
			}) => EvalContext::Aggregate {
				argument: argument.as_ref().map(|argument| Box::new(argument.new_context())),
				accumulator: Accumulator::new(*function),
			},
			Expression::Case(case) => case::new_context(case),
		}
	}

	fn eval(&self, ctx: &mut EvalContext, catalog: &dyn ColumnCatalog, row: &dyn Row) -> Result<()> {
		match (self, ctx) {
			(Expression::Constant(_), EvalContext::Constant) => Ok(()),

			(Expression::Field(field), EvalContext::Field {
				value,
			}) => {
				*value = read_field(field, catalog, row)?;
				Ok(())
			}

			(
				Expression::Binary(BinaryExpression {
					left,
					right,
					..
				}),
				EvalContext::Binary {
					left: left_ctx,
					right: right_ctx,
				},
			) => {
				left.eval(left_ctx, catalog, row)?;
				right.eval(right_ctx, catalog, row)
			}

			(
				Expression::Not(NotExpression {
					expression,
				}),
				EvalContext::Not {
					inner,
				},
			)
			| (
				Expression::IsNull(IsNullExpression {
					expression,
					..
				}),
				EvalContext::IsNull {
					inner,
				},
			) => expression.eval(inner, catalog, row),

			(
				Expression::Aggregate(AggregateExpression {
					argument,
					..
				}),
				EvalContext::Aggregate {
					argument: argument_ctx,
					accumulator,
				},
			) => match (argument, argument_ctx) {
				(Some(argument), Some(argument_ctx)) => {
					argument.eval(argument_ctx, catalog, row)?;
					accumulator.fold(argument.terminate(argument_ctx)?)
				}
				(None, None) => {
					accumulator.count_row();
					Ok(())
				}
				_ => Err(EvaluateError::ContextShape {
					kind: self.kind(),
				}
				.into()),
			},

			(
				Expression::Case(case),
				EvalContext::Case {
					whens,
					else_context,
				},
			) => case::eval(case, whens, else_context, catalog, row),

			(_, ctx) => Err(mismatch(self, ctx)),
		}
	}

	fn terminate(&self, ctx: &EvalContext) -> Result<Datum> {
		match (self, ctx) {
			(Expression::Constant(ConstantExpression(value)), EvalContext::Constant) => Ok(value.clone()),

			(Expression::Field(_), EvalContext::Field {
				value,
			}) => Ok(value.clone()),

			(
				Expression::Binary(BinaryExpression {
					operator,
					left,
					right,
				}),
				EvalContext::Binary {
					left: left_ctx,
					right: right_ctx,
				},
			) => binary::apply(*operator, left.terminate(left_ctx)?, right.terminate(right_ctx)?),

			(
				Expression::Not(NotExpression {
					expression,
				}),
				EvalContext::Not {
					inner,
				},
			) => match binary::truth(&expression.terminate(inner)?)? {
				Some(value) => Ok(Datum::Boolean(!value)),
				None => Ok(Datum::Null),
			},

			(
				Expression::IsNull(IsNullExpression {
					expression,
					negated,
				}),
				EvalContext::IsNull {
					inner,
				},
			) => Ok(Datum::Boolean(expression.terminate(inner)?.is_null() != *negated)),

			(
				Expression::Aggregate(_),
				EvalContext::Aggregate {
					accumulator,
					..
				},
			) => Ok(accumulator.result()),

			(
				Expression::Case(case),
				EvalContext::Case {
					whens,
					else_context,
				},
			) => case::terminate(case, whens, else_context.as_deref()),

			(_, ctx) => Err(mismatch(self, ctx)),
		}
	}
}

fn mismatch(expression: &Expression, ctx: &EvalContext) -> strata_type::Error {
	EvaluateError::ContextMismatch {
		expected: expression.kind(),
		actual: ctx.kind(),
	}
	.into()
}

fn read_field(field: &FieldExpression, catalog: &dyn ColumnCatalog, row: &dyn Row) -> Result<Datum> {
	let ordinal = match field.column {
		Some(column) => column.ordinal,
		None => match catalog.column(&field.name) {
			Some(column) => column.ordinal,
			None => return_error!(CatalogError::ColumnNotFound {
				name: field.name.clone(),
			}),
		},
	};
	match row.get(ordinal) {
		Some(value) => Ok(value.clone()),
		None => Err(CatalogError::ColumnOutOfBounds {
			ordinal,
			len: row.len(),
		}
		.into()),
	}
}

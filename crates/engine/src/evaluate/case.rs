// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::{
	ColumnCatalog, Row,
	expression::{CaseExpression, ExpressionKind},
};
use strata_type::{Datum, Result, Type, TypeError, return_error};
use tracing::trace;

use crate::{
	EvaluateError,
	evaluate::{EvalContext, Evaluate, WhenContext},
};

pub(crate) fn new_context(case: &CaseExpression) -> EvalContext {
	EvalContext::Case {
		whens: case
			.whens()
			.iter()
			.map(|when| WhenContext {
				condition: when.condition.new_context(),
				result: when.result.new_context(),
			})
			.collect(),
		else_context: case.else_result().map(|else_result| Box::new(else_result.new_context())),
	}
}

/// Feeds the row to every branch condition and result, then to the else.
///
/// Every branch sees every row, whichever branch `terminate` selects later.
pub(crate) fn eval(
	case: &CaseExpression,
	whens: &mut [WhenContext],
	else_context: &mut Option<Box<EvalContext>>,
	catalog: &dyn ColumnCatalog,
	row: &dyn Row,
) -> Result<()> {
	check_shape(case, whens, else_context.as_deref())?;

	for (when, ctx) in case.whens().iter().zip(whens.iter_mut()) {
		when.condition.eval(&mut ctx.condition, catalog, row)?;
		when.result.eval(&mut ctx.result, catalog, row)?;
	}
	if let (Some(else_result), Some(ctx)) = (case.else_result(), else_context.as_deref_mut()) {
		else_result.eval(ctx, catalog, row)?;
	}
	Ok(())
}

/// Result of the first branch whose condition is true, else the else value,
/// else `NULL`.
pub(crate) fn terminate(
	case: &CaseExpression,
	whens: &[WhenContext],
	else_context: Option<&EvalContext>,
) -> Result<Datum> {
	check_shape(case, whens, else_context)?;

	for (idx, (when, ctx)) in case.whens().iter().zip(whens).enumerate() {
		match when.condition.terminate(&ctx.condition)? {
			Datum::Boolean(true) => {
				trace!(branch = idx, "case branch selected");
				return when.result.terminate(&ctx.result);
			}
			Datum::Boolean(false) | Datum::Null => {}
			other => return_error!(TypeError::InvalidCast {
				from: other.get_type(),
				to: Type::Boolean,
			}),
		}
	}

	match (case.else_result(), else_context) {
		(Some(else_result), Some(ctx)) => else_result.terminate(ctx),
		_ => Ok(Datum::Null),
	}
}

fn check_shape(case: &CaseExpression, whens: &[WhenContext], else_context: Option<&EvalContext>) -> Result<()> {
	if case.whens().len() != whens.len() || case.else_result().is_some() != else_context.is_some() {
		return_error!(EvaluateError::ContextShape {
			kind: ExpressionKind::Case,
		});
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use strata_core::{Schema, Tuple, expression::Expression};

	use super::*;

	fn constant(value: Datum) -> Expression {
		Expression::constant(value)
	}

	fn single_row(expression: &Expression) -> Result<Datum> {
		let mut ctx = expression.new_context();
		expression.eval(&mut ctx, &Schema::new(), &Tuple::default())?;
		expression.terminate(&ctx)
	}

	mod terminate {
		use super::*;

		#[test]
		fn test_first_true_branch_wins() {
			let case: Expression = CaseExpression::new()
				.with_when(constant(Datum::bool(false)), constant(Datum::int(1)))
				.with_when(constant(Datum::bool(true)), constant(Datum::int(2)))
				.with_when(constant(Datum::bool(true)), constant(Datum::int(3)))
				.with_else(constant(Datum::int(4)))
				.into();
			assert_eq!(single_row(&case).unwrap(), Datum::int(2));
		}

		#[test]
		fn test_else_when_nothing_matches() {
			let case: Expression = CaseExpression::new()
				.with_when(constant(Datum::bool(false)), constant(Datum::int(1)))
				.with_else(constant(Datum::int(4)))
				.into();
			assert_eq!(single_row(&case).unwrap(), Datum::int(4));
		}

		#[test]
		fn test_null_without_else() {
			let case: Expression =
				CaseExpression::new().with_when(constant(Datum::bool(false)), constant(Datum::int(1))).into();
			assert_eq!(single_row(&case).unwrap(), Datum::Null);
			assert_eq!(single_row(&CaseExpression::new().into()).unwrap(), Datum::Null);
		}

		#[test]
		fn test_null_condition_does_not_match() {
			let case: Expression = CaseExpression::new()
				.with_when(Expression::null(), constant(Datum::int(1)))
				.with_else(constant(Datum::int(2)))
				.into();
			assert_eq!(single_row(&case).unwrap(), Datum::int(2));
		}

		#[test]
		fn test_non_boolean_condition() {
			let case: Expression =
				CaseExpression::new().with_when(constant(Datum::int(1)), constant(Datum::int(1))).into();
			let err = single_row(&case).unwrap_err();
			assert_eq!(err.code(), "CAST_001");
		}

		#[test]
		fn test_later_conditions_are_not_consulted() {
			let case: Expression = CaseExpression::new()
				.with_when(constant(Datum::bool(true)), constant(Datum::int(1)))
				.with_when(constant(Datum::text("not a boolean")), constant(Datum::int(2)))
				.into();
			assert_eq!(single_row(&case).unwrap(), Datum::int(1));
		}
	}

	mod context {
		use super::*;

		#[test]
		fn test_one_when_context_per_branch() {
			let case: Expression = CaseExpression::new()
				.with_when(constant(Datum::bool(false)), Expression::count_star())
				.with_when(constant(Datum::bool(true)), Expression::count_star())
				.with_else(Expression::count_star())
				.into();
			let EvalContext::Case {
				whens,
				else_context,
			} = case.new_context()
			else {
				panic!("expected a case context");
			};
			assert_eq!(whens.len(), 2);
			assert!(else_context.is_some());
		}

		#[test]
		fn test_shape_mismatch() {
			let with_else: Expression = CaseExpression::new()
				.with_when(constant(Datum::bool(true)), constant(Datum::int(1)))
				.with_else(constant(Datum::int(2)))
				.into();
			let without_else: Expression =
				CaseExpression::new().with_when(constant(Datum::bool(true)), constant(Datum::int(1))).into();

			let ctx = without_else.new_context();
			let err = with_else.terminate(&ctx).unwrap_err();
			assert_eq!(err.code(), "EVAL_002");
		}
	}
}

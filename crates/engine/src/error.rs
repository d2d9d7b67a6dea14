// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::expression::{BinaryOperator, ExpressionKind};
use strata_type::{Diagnostic, Error, IntoDiagnostic, Type};

/// Failures raised while driving the evaluation protocol.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluateError {
	#[error("evaluation context of a {actual} node was passed to a {expected} node")]
	ContextMismatch {
		expected: ExpressionKind,
		actual: ExpressionKind,
	},

	#[error("evaluation context does not match the shape of the {kind} node")]
	ContextShape {
		kind: ExpressionKind,
	},

	#[error("division by zero in {ty} {operator}")]
	DivisionByZero {
		operator: BinaryOperator,
		ty: Type,
	},

	#[error("{ty} {operator} overflowed")]
	ArithmeticOverflow {
		operator: BinaryOperator,
		ty: Type,
	},
}

impl IntoDiagnostic for EvaluateError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			EvaluateError::ContextMismatch {
				..
			} => Diagnostic::new("EVAL_001", message)
				.with_help("create the context with new_context on the same expression that evaluates it"),

			EvaluateError::ContextShape {
				..
			} => Diagnostic::new("EVAL_002", message)
				.with_help("create the context with new_context on the same expression that evaluates it"),

			EvaluateError::DivisionByZero {
				..
			} => Diagnostic::new("ARITH_001", message).with_label("right operand is zero"),

			EvaluateError::ArithmeticOverflow {
				ty,
				..
			} => Diagnostic::new("ARITH_002", message)
				.with_label(format!("result does not fit into {ty}"))
				.with_note("integer arithmetic is checked and never wraps"),
		}
	}
}

impl From<EvaluateError> for Error {
	fn from(err: EvaluateError) -> Self {
		Error(err.into_diagnostic())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_codes() {
		let err: Error = EvaluateError::ContextMismatch {
			expected: ExpressionKind::Case,
			actual: ExpressionKind::Constant,
		}
		.into();
		assert_eq!(err.code(), "EVAL_001");
		assert_eq!(err.message, "evaluation context of a CONST node was passed to a CASE node");

		let err: Error = EvaluateError::DivisionByZero {
			operator: BinaryOperator::Divide,
			ty: Type::Int,
		}
		.into();
		assert_eq!(err.code(), "ARITH_001");
		assert_eq!(err.message, "division by zero in INT /");

		let err: Error = EvaluateError::ArithmeticOverflow {
			operator: BinaryOperator::Add,
			ty: Type::Byte,
		}
		.into();
		assert_eq!(err.code(), "ARITH_002");
	}
}

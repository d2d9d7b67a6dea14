// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::expression::ExpressionKind;
use strata_type::Datum;

use crate::evaluate::aggregate::Accumulator;

/// Mutable evaluation state of one expression node.
///
/// Mirrors the expression tree one to one and is owned by the stream driving
/// the evaluation; it is never stored inside a node.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalContext {
	Constant,

	Field {
		value: Datum,
	},

	Binary {
		left: Box<EvalContext>,
		right: Box<EvalContext>,
	},

	Not {
		inner: Box<EvalContext>,
	},

	IsNull {
		inner: Box<EvalContext>,
	},

	Aggregate {
		argument: Option<Box<EvalContext>>,
		accumulator: Accumulator,
	},

	Case {
		whens: Vec<WhenContext>,
		else_context: Option<Box<EvalContext>>,
	},
}

/// State of one CASE branch; condition and result accumulate independently.
#[derive(Debug, Clone, PartialEq)]
pub struct WhenContext {
	pub condition: EvalContext,
	pub result: EvalContext,
}

impl EvalContext {
	pub fn kind(&self) -> ExpressionKind {
		match self {
			EvalContext::Constant => ExpressionKind::Constant,
			EvalContext::Field {
				..
			} => ExpressionKind::Field,
			EvalContext::Binary {
				..
			} => ExpressionKind::Binary,
			EvalContext::Not {
				..
			} => ExpressionKind::Not,
			EvalContext::IsNull {
				..
			} => ExpressionKind::IsNull,
			EvalContext::Aggregate {
				..
			} => ExpressionKind::Aggregate,
			EvalContext::Case {
				..
			} => ExpressionKind::Case,
		}
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use strata_core::expression::{AggregateFunction, BinaryOperator};
use strata_type::{Datum, Result, Type, TypeError, return_error};

use crate::{
	EvaluateError,
	evaluate::binary::{compare, finite_double},
};

/// Running state of one aggregate call.
///
/// Nulls are skipped by every function except `count(*)`, which counts rows
/// rather than values.
#[derive(Debug, Clone, PartialEq)]
pub enum Accumulator {
	Count(i64),
	Sum(Option<Datum>),
	Min(Option<Datum>),
	Max(Option<Datum>),
	Avg {
		sum: f64,
		count: i64,
	},
}

impl Accumulator {
	pub fn new(function: AggregateFunction) -> Self {
		match function {
			AggregateFunction::Count => Accumulator::Count(0),
			AggregateFunction::Sum => Accumulator::Sum(None),
			AggregateFunction::Min => Accumulator::Min(None),
			AggregateFunction::Max => Accumulator::Max(None),
			AggregateFunction::Avg => Accumulator::Avg {
				sum: 0.0,
				count: 0,
			},
		}
	}

	/// Counts one row for `count(*)`.
	pub fn count_row(&mut self) {
		if let Accumulator::Count(count) = self {
			*count += 1;
		}
	}

	pub fn fold(&mut self, value: Datum) -> Result<()> {
		if value.is_null() {
			return Ok(());
		}
		match self {
			Accumulator::Count(count) => *count += 1,
			Accumulator::Sum(sum) => {
				let next = match sum {
					None => widen_sum(&value)?,
					Some(current) => add(current, &value)?,
				};
				*sum = Some(next);
			}
			Accumulator::Min(min) => replace_if(min, value, Ordering::Less)?,
			Accumulator::Max(max) => replace_if(max, value, Ordering::Greater)?,
			Accumulator::Avg {
				sum,
				count,
			} => {
				require_numeric(&value, "avg")?;
				let next = *sum + value.as_double()?;
				if !next.is_finite() {
					return_error!(EvaluateError::ArithmeticOverflow {
						operator: BinaryOperator::Add,
						ty: Type::Double,
					});
				}
				*sum = next;
				*count += 1;
			}
		}
		Ok(())
	}

	pub fn result(&self) -> Datum {
		match self {
			Accumulator::Count(count) => Datum::Long(*count),
			Accumulator::Sum(sum) | Accumulator::Min(sum) | Accumulator::Max(sum) => {
				sum.clone().unwrap_or(Datum::Null)
			}
			Accumulator::Avg {
				count: 0,
				..
			} => Datum::Null,
			Accumulator::Avg {
				sum,
				count,
			} => Datum::double(*sum / *count as f64),
		}
	}
}

fn replace_if(slot: &mut Option<Datum>, value: Datum, wanted: Ordering) -> Result<()> {
	let replace = match slot {
		None => true,
		Some(current) => compare(&value, current)? == wanted,
	};
	if replace {
		*slot = Some(value);
	}
	Ok(())
}

fn require_numeric(value: &Datum, function: &str) -> Result<()> {
	if !value.get_type().is_numeric() {
		return_error!(TypeError::UnsupportedType {
			ty: value.get_type(),
			operation: function.to_string(),
		});
	}
	Ok(())
}

/// First value of a sum, widened to `LONG` or `DOUBLE`.
fn widen_sum(value: &Datum) -> Result<Datum> {
	require_numeric(value, "sum")?;
	if value.get_type().is_floating() {
		finite_double(BinaryOperator::Add, value.as_double()?)
	} else {
		Ok(Datum::Long(value.as_long()?))
	}
}

fn add(current: &Datum, value: &Datum) -> Result<Datum> {
	let value = widen_sum(value)?;
	match (current, &value) {
		(Datum::Long(l), Datum::Long(r)) => match l.checked_add(*r) {
			Some(sum) => Ok(Datum::Long(sum)),
			None => Err(EvaluateError::ArithmeticOverflow {
				operator: BinaryOperator::Add,
				ty: Type::Long,
			}
			.into()),
		},
		_ => finite_double(BinaryOperator::Add, current.as_double()? + value.as_double()?),
	}
}

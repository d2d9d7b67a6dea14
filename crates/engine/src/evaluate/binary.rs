// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use strata_core::expression::BinaryOperator;
use strata_type::{Datum, OrderedF32, OrderedF64, Result, Type, TypeError, return_error};

use crate::EvaluateError;

/// Combines the finalized values of both operands.
pub(crate) fn apply(operator: BinaryOperator, left: Datum, right: Datum) -> Result<Datum> {
	if operator.is_logical() {
		return logical(operator, &left, &right);
	}
	if left.is_null() || right.is_null() {
		return Ok(Datum::Null);
	}
	if operator.is_comparison() {
		let ordering = compare(&left, &right)?;
		let result = match operator {
			BinaryOperator::Equal => ordering == Ordering::Equal,
			BinaryOperator::NotEqual => ordering != Ordering::Equal,
			BinaryOperator::LessThan => ordering == Ordering::Less,
			BinaryOperator::LessThanEqual => ordering != Ordering::Greater,
			BinaryOperator::GreaterThan => ordering == Ordering::Greater,
			BinaryOperator::GreaterThanEqual => ordering != Ordering::Less,
			_ => unreachable!(),
		};
		return Ok(Datum::Boolean(result));
	}
	arithmetic(operator, &left, &right)
}

/// Three-valued truth of an operand: `None` for null.
pub(crate) fn truth(value: &Datum) -> Result<Option<bool>> {
	match value {
		Datum::Null => Ok(None),
		Datum::Boolean(value) => Ok(Some(*value)),
		other => Err(TypeError::InvalidCast {
			from: other.get_type(),
			to: Type::Boolean,
		}
		.into()),
	}
}

fn logical(operator: BinaryOperator, left: &Datum, right: &Datum) -> Result<Datum> {
	let left = truth(left)?;
	let right = truth(right)?;
	let result = match operator {
		BinaryOperator::And => match (left, right) {
			(Some(false), _) | (_, Some(false)) => Some(false),
			(Some(true), Some(true)) => Some(true),
			_ => None,
		},
		BinaryOperator::Or => match (left, right) {
			(Some(true), _) | (_, Some(true)) => Some(true),
			(Some(false), Some(false)) => Some(false),
			_ => None,
		},
		_ => unreachable!(),
	};
	Ok(result.map(Datum::Boolean).unwrap_or(Datum::Null))
}

/// Orders two non-null values.
///
/// Numeric kinds compare after promotion, `CHAR` and `TEXT` compare as text,
/// `BOOLEAN` and `BYTES` only compare with their own kind.
pub(crate) fn compare(left: &Datum, right: &Datum) -> Result<Ordering> {
	let (lt, rt) = (left.get_type(), right.get_type());

	if let Some(ty) = Type::promote(lt, rt) {
		if ty.is_integer() {
			return Ok(left.as_long()?.cmp(&right.as_long()?));
		}
		let (l, r) = (left.as_double()?, right.as_double()?);
		return Ok(l.partial_cmp(&r).unwrap_or(Ordering::Equal));
	}

	if lt.is_textual() && rt.is_textual() {
		return Ok(left.as_text()?.cmp(&right.as_text()?));
	}

	match (left, right) {
		(Datum::Boolean(l), Datum::Boolean(r)) => Ok(l.cmp(r)),
		(Datum::Bytes(l), Datum::Bytes(r)) => Ok(l.cmp(r)),
		_ => Err(TypeError::UnsupportedType {
			ty: lt,
			operation: format!("comparison with {rt}"),
		}
		.into()),
	}
}

fn arithmetic(operator: BinaryOperator, left: &Datum, right: &Datum) -> Result<Datum> {
	let (lt, rt) = (left.get_type(), right.get_type());
	let Some(ty) = Type::promote(lt, rt) else {
		let ty = if lt.is_numeric() {
			rt
		} else {
			lt
		};
		return_error!(TypeError::UnsupportedType {
			ty,
			operation: format!("arithmetic '{operator}'"),
		});
	};

	match ty {
		Type::Float => {
			let value = floating(operator, ty, left.as_float()? as f64, right.as_float()? as f64)?;
			if value.abs() > f32::MAX as f64 {
				return_error!(EvaluateError::ArithmeticOverflow {
					operator,
					ty
				});
			}
			OrderedF32::try_from(value as f32).map(Datum::Float).map_err(|_| overflow(operator, ty))
		}
		Type::Double => finite_double(operator, floating(operator, ty, left.as_double()?, right.as_double()?)?),
		_ => {
			let value = integer(operator, ty, left.as_long()?, right.as_long()?)?;
			narrow(operator, ty, value)
		}
	}
}

fn integer(operator: BinaryOperator, ty: Type, l: i64, r: i64) -> Result<i64> {
	if matches!(operator, BinaryOperator::Divide | BinaryOperator::Modulo) && r == 0 {
		return_error!(EvaluateError::DivisionByZero {
			operator,
			ty
		});
	}
	let result = match operator {
		BinaryOperator::Add => l.checked_add(r),
		BinaryOperator::Subtract => l.checked_sub(r),
		BinaryOperator::Multiply => l.checked_mul(r),
		BinaryOperator::Divide => l.checked_div(r),
		BinaryOperator::Modulo => l.checked_rem(r),
		_ => unreachable!(),
	};
	match result {
		Some(value) => Ok(value),
		None => Err(EvaluateError::ArithmeticOverflow {
			operator,
			ty,
		}
		.into()),
	}
}

fn floating(operator: BinaryOperator, ty: Type, l: f64, r: f64) -> Result<f64> {
	if matches!(operator, BinaryOperator::Divide | BinaryOperator::Modulo) && r == 0.0 {
		return_error!(EvaluateError::DivisionByZero {
			operator,
			ty
		});
	}
	let result = match operator {
		BinaryOperator::Add => l + r,
		BinaryOperator::Subtract => l - r,
		BinaryOperator::Multiply => l * r,
		BinaryOperator::Divide => l / r,
		BinaryOperator::Modulo => l % r,
		_ => unreachable!(),
	};
	if !result.is_finite() {
		return_error!(EvaluateError::ArithmeticOverflow {
			operator,
			ty
		});
	}
	Ok(result)
}

/// Wraps a `DOUBLE` result; infinities and NaN are overflows.
pub(crate) fn finite_double(operator: BinaryOperator, value: f64) -> Result<Datum> {
	if !value.is_finite() {
		return Err(overflow(operator, Type::Double));
	}
	OrderedF64::try_from(value).map(Datum::Double).map_err(|_| overflow(operator, Type::Double))
}

fn overflow(operator: BinaryOperator, ty: Type) -> strata_type::Error {
	EvaluateError::ArithmeticOverflow {
		operator,
		ty,
	}
	.into()
}

/// Fits an `i64` result back into the promoted integer kind.
fn narrow(operator: BinaryOperator, ty: Type, value: i64) -> Result<Datum> {
	match ty {
		Type::Byte => i8::try_from(value).map(Datum::Byte).map_err(|_| overflow(operator, ty)),
		Type::Short => i16::try_from(value).map(Datum::Short).map_err(|_| overflow(operator, ty)),
		Type::Int => i32::try_from(value).map(Datum::Int).map_err(|_| overflow(operator, ty)),
		_ => Ok(Datum::Long(value)),
	}
}

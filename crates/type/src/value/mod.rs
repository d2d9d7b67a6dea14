// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

pub use r#type::Type;

use crate::{
	TypeError,
	value::ordered_float::{OrderedF32, OrderedF64},
};

pub mod coerce;
mod encoding;
mod hash;
pub mod ordered_float;
mod r#type;

/// A scalar runtime value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Datum {
	/// Value is absent (think null in common programming languages)
	Null,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 1-byte signed integer
	Byte(i8),
	/// A 2-byte signed integer
	Short(i16),
	/// A 4-byte signed integer
	Int(i32),
	/// An 8-byte signed integer
	Long(i64),
	/// A 4-byte floating point
	Float(OrderedF32),
	/// An 8-byte floating point
	Double(OrderedF64),
	/// A single-byte character
	Char(u8),
	/// A UTF-8 encoded text
	Text(String),
	/// A byte sequence
	Bytes(Vec<u8>),
}

impl Datum {
	pub fn null() -> Self {
		Datum::Null
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Datum::Boolean(v.into())
	}

	pub fn byte(v: impl Into<i8>) -> Self {
		Datum::Byte(v.into())
	}

	pub fn short(v: impl Into<i16>) -> Self {
		Datum::Short(v.into())
	}

	pub fn int(v: impl Into<i32>) -> Self {
		Datum::Int(v.into())
	}

	pub fn long(v: impl Into<i64>) -> Self {
		Datum::Long(v.into())
	}

	pub fn float(v: impl Into<f32>) -> Self {
		OrderedF32::try_from(v.into()).map(Datum::Float).unwrap_or(Datum::Null)
	}

	pub fn double(v: impl Into<f64>) -> Self {
		OrderedF64::try_from(v.into()).map(Datum::Double).unwrap_or(Datum::Null)
	}

	pub fn char(v: u8) -> Self {
		Datum::Char(v)
	}

	pub fn text(v: impl Into<String>) -> Self {
		Datum::Text(v.into())
	}

	pub fn bytes(v: impl Into<Vec<u8>>) -> Self {
		Datum::Bytes(v.into())
	}

	pub fn get_type(&self) -> Type {
		match self {
			Datum::Null => Type::Null,
			Datum::Boolean(_) => Type::Boolean,
			Datum::Byte(_) => Type::Byte,
			Datum::Short(_) => Type::Short,
			Datum::Int(_) => Type::Int,
			Datum::Long(_) => Type::Long,
			Datum::Float(_) => Type::Float,
			Datum::Double(_) => Type::Double,
			Datum::Char(_) => Type::Char,
			Datum::Text(_) => Type::Text,
			Datum::Bytes(_) => Type::Bytes,
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Datum::Null)
	}

	/// Truth test used by predicates: `Null` is not true, a boolean is
	/// itself, anything else cannot be read as a boolean.
	pub fn is_true(&self) -> crate::Result<bool> {
		match self {
			Datum::Null => Ok(false),
			Datum::Boolean(value) => Ok(*value),
			other => Err(TypeError::InvalidCast {
				from: other.get_type(),
				to: Type::Boolean,
			}
			.into()),
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Datum::Text(value) => Some(value.as_str()),
			_ => None,
		}
	}
}

impl PartialOrd for Datum {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match (self, other) {
			(Datum::Boolean(l), Datum::Boolean(r)) => l.partial_cmp(r),
			(Datum::Byte(l), Datum::Byte(r)) => l.partial_cmp(r),
			(Datum::Short(l), Datum::Short(r)) => l.partial_cmp(r),
			(Datum::Int(l), Datum::Int(r)) => l.partial_cmp(r),
			(Datum::Long(l), Datum::Long(r)) => l.partial_cmp(r),
			(Datum::Float(l), Datum::Float(r)) => l.partial_cmp(r),
			(Datum::Double(l), Datum::Double(r)) => l.partial_cmp(r),
			(Datum::Char(l), Datum::Char(r)) => l.partial_cmp(r),
			(Datum::Text(l), Datum::Text(r)) => l.partial_cmp(r),
			(Datum::Bytes(l), Datum::Bytes(r)) => l.partial_cmp(r),
			(Datum::Null, Datum::Null) => Some(Ordering::Equal),
			_ => None,
		}
	}
}

impl Display for Datum {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Datum::Boolean(true) => f.write_str("true"),
			Datum::Boolean(false) => f.write_str("false"),
			Datum::Byte(value) => Display::fmt(value, f),
			Datum::Short(value) => Display::fmt(value, f),
			Datum::Int(value) => Display::fmt(value, f),
			Datum::Long(value) => Display::fmt(value, f),
			Datum::Float(value) => Display::fmt(value, f),
			Datum::Double(value) => Display::fmt(value, f),
			Datum::Char(value) => Display::fmt(&(*value as char), f),
			Datum::Text(value) => Display::fmt(value, f),
			Datum::Bytes(value) => {
				f.write_str("0x")?;
				for byte in value {
					write!(f, "{byte:02x}")?;
				}
				Ok(())
			}
			Datum::Null => f.write_str("NULL"),
		}
	}
}

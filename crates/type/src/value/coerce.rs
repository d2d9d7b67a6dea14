// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The coercion matrix of the scalar value model.
//!
//! [`can_coerce`] is the single table of allowed `(source, target)` pairs;
//! [`coerce`] performs the conversion and rejects every pair the table does
//! not list. Numeric kinds only widen, every non-null kind renders to `TEXT`
//! and encodes to `BYTES`, and `NULL` coerces to nothing.

use crate::{
	Datum, Result, Type, TypeError,
	value::ordered_float::{OrderedF32, OrderedF64},
};

pub fn can_coerce(from: Type, to: Type) -> bool {
	use Type::*;

	match (from, to) {
		(Null, _) => false,
		(_, Null) => false,
		(_, Text) | (_, Bytes) => true,

		(Boolean, Boolean) => true,

		(Byte, Byte | Short | Int | Long | Float | Double) => true,
		(Short, Short | Int | Long | Float | Double) => true,
		(Int, Int | Long | Float | Double) => true,
		(Long, Long | Float | Double) => true,
		(Float, Float | Double) => true,
		(Double, Double) => true,

		(Char, Char) => true,

		_ => false,
	}
}

pub fn coerce(datum: &Datum, to: Type) -> Result<Datum> {
	let from = datum.get_type();
	if !can_coerce(from, to) {
		return Err(invalid_cast(from, to));
	}

	if from == to {
		return Ok(datum.clone());
	}

	match to {
		Type::Text => to_text(datum),
		Type::Bytes => Ok(Datum::Bytes(datum.as_byte_array())),
		Type::Short => match datum {
			Datum::Byte(v) => Ok(Datum::Short(*v as i16)),
			_ => Err(invalid_cast(from, to)),
		},
		Type::Int => match datum {
			Datum::Byte(v) => Ok(Datum::Int(*v as i32)),
			Datum::Short(v) => Ok(Datum::Int(*v as i32)),
			_ => Err(invalid_cast(from, to)),
		},
		Type::Long => match datum {
			Datum::Byte(v) => Ok(Datum::Long(*v as i64)),
			Datum::Short(v) => Ok(Datum::Long(*v as i64)),
			Datum::Int(v) => Ok(Datum::Long(*v as i64)),
			_ => Err(invalid_cast(from, to)),
		},
		Type::Float => {
			let value = match datum {
				Datum::Byte(v) => *v as f32,
				Datum::Short(v) => *v as f32,
				Datum::Int(v) => *v as f32,
				Datum::Long(v) => *v as f32,
				_ => return Err(invalid_cast(from, to)),
			};
			// integers never produce NaN
			OrderedF32::try_from(value).map(Datum::Float).map_err(|_| invalid_cast(from, to))
		}
		Type::Double => {
			let value = match datum {
				Datum::Byte(v) => *v as f64,
				Datum::Short(v) => *v as f64,
				Datum::Int(v) => *v as f64,
				Datum::Long(v) => *v as f64,
				Datum::Float(v) => v.value() as f64,
				_ => return Err(invalid_cast(from, to)),
			};
			OrderedF64::try_from(value).map(Datum::Double).map_err(|_| invalid_cast(from, to))
		}
		Type::Boolean | Type::Byte | Type::Char | Type::Null => Err(invalid_cast(from, to)),
	}
}

fn to_text(datum: &Datum) -> Result<Datum> {
	match datum {
		Datum::Bytes(bytes) => String::from_utf8(bytes.clone()).map(Datum::Text).map_err(|_| {
			TypeError::InvalidUtf8 {
				from: Type::Bytes,
			}
			.into()
		}),
		other => Ok(Datum::Text(other.to_string())),
	}
}

fn invalid_cast(from: Type, to: Type) -> crate::Error {
	TypeError::InvalidCast {
		from,
		to,
	}
	.into()
}

impl Datum {
	pub fn coerce(&self, to: Type) -> Result<Datum> {
		coerce(self, to)
	}

	pub fn as_bool(&self) -> Result<bool> {
		match coerce(self, Type::Boolean)? {
			Datum::Boolean(v) => Ok(v),
			other => Err(invalid_cast(other.get_type(), Type::Boolean)),
		}
	}

	pub fn as_byte(&self) -> Result<i8> {
		match coerce(self, Type::Byte)? {
			Datum::Byte(v) => Ok(v),
			other => Err(invalid_cast(other.get_type(), Type::Byte)),
		}
	}

	pub fn as_short(&self) -> Result<i16> {
		match coerce(self, Type::Short)? {
			Datum::Short(v) => Ok(v),
			other => Err(invalid_cast(other.get_type(), Type::Short)),
		}
	}

	pub fn as_int(&self) -> Result<i32> {
		match coerce(self, Type::Int)? {
			Datum::Int(v) => Ok(v),
			other => Err(invalid_cast(other.get_type(), Type::Int)),
		}
	}

	pub fn as_long(&self) -> Result<i64> {
		match coerce(self, Type::Long)? {
			Datum::Long(v) => Ok(v),
			other => Err(invalid_cast(other.get_type(), Type::Long)),
		}
	}

	pub fn as_float(&self) -> Result<f32> {
		match coerce(self, Type::Float)? {
			Datum::Float(v) => Ok(v.value()),
			other => Err(invalid_cast(other.get_type(), Type::Float)),
		}
	}

	pub fn as_double(&self) -> Result<f64> {
		match coerce(self, Type::Double)? {
			Datum::Double(v) => Ok(v.value()),
			other => Err(invalid_cast(other.get_type(), Type::Double)),
		}
	}

	pub fn as_char(&self) -> Result<u8> {
		match coerce(self, Type::Char)? {
			Datum::Char(v) => Ok(v),
			other => Err(invalid_cast(other.get_type(), Type::Char)),
		}
	}

	pub fn as_text(&self) -> Result<String> {
		match coerce(self, Type::Text)? {
			Datum::Text(v) => Ok(v),
			other => Err(invalid_cast(other.get_type(), Type::Text)),
		}
	}

	pub fn as_bytes(&self) -> Result<Vec<u8>> {
		match coerce(self, Type::Bytes)? {
			Datum::Bytes(v) => Ok(v),
			other => Err(invalid_cast(other.get_type(), Type::Bytes)),
		}
	}
}

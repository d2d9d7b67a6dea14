// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// All scalar kinds a [`Datum`](crate::Datum) can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Boolean,
	/// A 1-byte signed integer
	Byte,
	/// A 2-byte signed integer
	Short,
	/// A 4-byte signed integer
	Int,
	/// An 8-byte signed integer
	Long,
	/// A 4-byte floating point
	Float,
	/// An 8-byte floating point
	Double,
	/// A fixed single-byte character
	Char,
	/// A variable length UTF-8 encoded text
	Text,
	/// A variable length byte sequence
	Bytes,
	/// The absent value (think null in common programming languages)
	Null,
}

impl Type {
	pub const ALL: [Type; 11] = [
		Type::Boolean,
		Type::Byte,
		Type::Short,
		Type::Int,
		Type::Long,
		Type::Float,
		Type::Double,
		Type::Char,
		Type::Text,
		Type::Bytes,
		Type::Null,
	];

	/// Declared wire width in bytes, `None` for variable length kinds.
	pub fn fixed_width(&self) -> Option<usize> {
		match self {
			Type::Boolean => Some(1),
			Type::Byte => Some(1),
			Type::Short => Some(2),
			Type::Int => Some(4),
			Type::Long => Some(8),
			Type::Float => Some(4),
			Type::Double => Some(8),
			Type::Char => Some(1),
			Type::Null => Some(0),
			Type::Text | Type::Bytes => None,
		}
	}

	pub fn is_integer(&self) -> bool {
		matches!(self, Type::Byte | Type::Short | Type::Int | Type::Long)
	}

	pub fn is_floating(&self) -> bool {
		matches!(self, Type::Float | Type::Double)
	}

	pub fn is_numeric(&self) -> bool {
		self.is_integer() || self.is_floating()
	}

	pub fn is_textual(&self) -> bool {
		matches!(self, Type::Char | Type::Text)
	}

	/// Narrowest numeric type both operands widen to without loss of kind.
	///
	/// Returns `None` if either side is not numeric.
	pub fn promote(left: Type, right: Type) -> Option<Type> {
		if !left.is_numeric() || !right.is_numeric() {
			return None;
		}
		let rank = |ty: Type| match ty {
			Type::Byte => 0,
			Type::Short => 1,
			Type::Int => 2,
			Type::Long => 3,
			Type::Float => 4,
			Type::Double => 5,
			_ => unreachable!(),
		};
		Some(if rank(left) >= rank(right) {
			left
		} else {
			right
		})
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Boolean => f.write_str("BOOLEAN"),
			Type::Byte => f.write_str("BYTE"),
			Type::Short => f.write_str("SHORT"),
			Type::Int => f.write_str("INT"),
			Type::Long => f.write_str("LONG"),
			Type::Float => f.write_str("FLOAT"),
			Type::Double => f.write_str("DOUBLE"),
			Type::Char => f.write_str("CHAR"),
			Type::Text => f.write_str("TEXT"),
			Type::Bytes => f.write_str("BYTES"),
			Type::Null => f.write_str("NULL"),
		}
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{
	Datum, Result, Type, TypeError, return_error,
	value::ordered_float::{OrderedF32, OrderedF64},
};

impl Datum {
	/// Wire width of this value in bytes.
	pub fn size(&self) -> usize {
		match self {
			Datum::Text(value) => value.len(),
			Datum::Bytes(value) => value.len(),
			other => other.get_type().fixed_width().unwrap_or(0),
		}
	}

	/// Big-endian encoding of exactly [`Datum::size`] bytes.
	pub fn as_byte_array(&self) -> Vec<u8> {
		match self {
			Datum::Null => vec![],
			Datum::Boolean(value) => vec![u8::from(*value)],
			Datum::Byte(value) => value.to_be_bytes().to_vec(),
			Datum::Short(value) => value.to_be_bytes().to_vec(),
			Datum::Int(value) => value.to_be_bytes().to_vec(),
			Datum::Long(value) => value.to_be_bytes().to_vec(),
			Datum::Float(value) => value.value().to_be_bytes().to_vec(),
			Datum::Double(value) => value.value().to_be_bytes().to_vec(),
			Datum::Char(value) => vec![*value],
			Datum::Text(value) => value.as_bytes().to_vec(),
			Datum::Bytes(value) => value.clone(),
		}
	}

	/// Reverses [`Datum::as_byte_array`] for a value of the given type.
	pub fn decode(ty: Type, bytes: &[u8]) -> Result<Datum> {
		if let Some(expected) = ty.fixed_width() {
			if bytes.len() != expected {
				return Err(TypeError::InvalidEncoding {
					ty,
					expected,
					actual: bytes.len(),
				}
				.into());
			}
		}

		Ok(match ty {
			Type::Null => Datum::Null,
			Type::Boolean => match bytes[0] {
				0 => Datum::Boolean(false),
				1 => Datum::Boolean(true),
				byte => {
					return Err(TypeError::InvalidBoolean {
						byte,
					}
					.into());
				}
			},
			Type::Byte => Datum::Byte(i8::from_be_bytes([bytes[0]])),
			Type::Short => Datum::Short(i16::from_be_bytes(fixed(bytes))),
			Type::Int => Datum::Int(i32::from_be_bytes(fixed(bytes))),
			Type::Long => Datum::Long(i64::from_be_bytes(fixed(bytes))),
			Type::Float => match OrderedF32::try_from(f32::from_be_bytes(fixed(bytes))) {
				Ok(value) => Datum::Float(value),
				Err(_) => return_error!(TypeError::InvalidFloat {
					ty
				}),
			},
			Type::Double => match OrderedF64::try_from(f64::from_be_bytes(fixed(bytes))) {
				Ok(value) => Datum::Double(value),
				Err(_) => return_error!(TypeError::InvalidFloat {
					ty
				}),
			},
			Type::Char => Datum::Char(bytes[0]),
			Type::Text => match std::str::from_utf8(bytes) {
				Ok(text) => Datum::Text(text.to_string()),
				Err(_) => {
					return Err(TypeError::InvalidUtf8 {
						from: Type::Text,
					}
					.into());
				}
			},
			Type::Bytes => Datum::Bytes(bytes.to_vec()),
		})
	}
}

fn fixed<const N: usize>(bytes: &[u8]) -> [u8; N] {
	let mut result = [0u8; N];
	result.copy_from_slice(&bytes[..N]);
	result
}

#[cfg(test)]
mod tests {
	use super::*;

	fn every_kind() -> Vec<Datum> {
		vec![
			Datum::null(),
			Datum::bool(false),
			Datum::byte(-1i8),
			Datum::short(i16::MIN),
			Datum::int(123_456),
			Datum::long(-9_876_543_210i64),
			Datum::float(-0.75f32),
			Datum::double(1e300),
			Datum::char(b'A'),
			Datum::text("héllo"),
			Datum::bytes(vec![1, 2, 3, 4, 5]),
		]
	}

	#[test]
	fn test_size_matches_encoded_length() {
		for datum in every_kind() {
			assert_eq!(datum.size(), datum.as_byte_array().len(), "size mismatch for {:?}", datum.get_type());
		}
	}

	#[test]
	fn test_fixed_kinds_encode_declared_width() {
		for datum in every_kind() {
			if let Some(width) = datum.get_type().fixed_width() {
				assert_eq!(datum.as_byte_array().len(), width, "{:?}", datum.get_type());
			}
		}
	}

	#[test]
	fn test_short_is_two_bytes() {
		assert_eq!(Datum::short(0x0102i16).as_byte_array(), vec![0x01, 0x02]);
	}

	#[test]
	fn test_decode_restores_value() {
		for datum in every_kind() {
			let decoded = Datum::decode(datum.get_type(), &datum.as_byte_array()).unwrap();
			assert_eq!(decoded, datum);
		}
	}

	#[test]
	fn test_decode_rejects_wrong_width() {
		let err = Datum::decode(Type::Short, &[0, 0, 0, 1]).unwrap_err();
		assert_eq!(err.code(), "ENCODING_001");
	}

	#[test]
	fn test_decode_rejects_invalid_boolean() {
		let err = Datum::decode(Type::Boolean, &[7]).unwrap_err();
		assert_eq!(err.code(), "ENCODING_002");
	}

	#[test]
	fn test_decode_rejects_nan() {
		let err = Datum::decode(Type::Double, &f64::NAN.to_be_bytes()).unwrap_err();
		assert_eq!(err.code(), "ENCODING_003");

		let err = Datum::decode(Type::Float, &f32::NAN.to_be_bytes()).unwrap_err();
		assert_eq!(err.code(), "ENCODING_003");
	}
}

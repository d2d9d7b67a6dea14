// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_type::{Datum, Type, can_coerce};

fn representatives(ty: Type) -> Vec<Datum> {
	match ty {
		Type::Boolean => vec![Datum::bool(true), Datum::bool(false)],
		Type::Byte => vec![Datum::byte(i8::MIN), Datum::byte(0i8), Datum::byte(i8::MAX)],
		Type::Short => vec![Datum::short(i16::MIN), Datum::short(7i16), Datum::short(i16::MAX)],
		Type::Int => vec![Datum::int(i32::MIN), Datum::int(0), Datum::int(i32::MAX)],
		Type::Long => vec![Datum::long(i64::MIN), Datum::long(42i64), Datum::long(i64::MAX)],
		Type::Float => vec![Datum::float(f32::MIN), Datum::float(0.1f32), Datum::float(f32::INFINITY)],
		Type::Double => vec![Datum::double(f64::MIN_POSITIVE), Datum::double(-3.5)],
		Type::Char => vec![Datum::char(b'a'), Datum::char(0)],
		Type::Text => vec![Datum::text(""), Datum::text("multi byte ✓")],
		Type::Bytes => vec![Datum::bytes(vec![]), Datum::bytes(vec![0xde, 0xad, 0xbe, 0xef])],
		Type::Null => vec![Datum::null()],
	}
}

#[test]
fn test_every_kind_declares_its_encoded_width() {
	for ty in Type::ALL {
		for datum in representatives(ty) {
			let encoded = datum.as_byte_array();
			assert_eq!(datum.size(), encoded.len(), "{ty}: size() disagrees with as_byte_array()");
			if let Some(width) = ty.fixed_width() {
				assert_eq!(encoded.len(), width, "{ty}: encoded width differs from declared width");
			}
		}
	}
}

#[test]
fn test_accessors_outside_the_table_never_default() {
	for ty in Type::ALL {
		for datum in representatives(ty) {
			let checks: [(Type, bool); 10] = [
				(Type::Boolean, datum.as_bool().is_ok()),
				(Type::Byte, datum.as_byte().is_ok()),
				(Type::Short, datum.as_short().is_ok()),
				(Type::Int, datum.as_int().is_ok()),
				(Type::Long, datum.as_long().is_ok()),
				(Type::Float, datum.as_float().is_ok()),
				(Type::Double, datum.as_double().is_ok()),
				(Type::Char, datum.as_char().is_ok()),
				(Type::Text, datum.as_text().is_ok()),
				(Type::Bytes, datum.as_bytes().is_ok()),
			];
			for (target, ok) in checks {
				assert_eq!(ok, can_coerce(ty, target), "{ty} -> {target} for {datum:?}");
			}
		}
	}
}

#[test]
fn test_failed_accessor_reports_invalid_cast() {
	let err = Datum::double(1.0).as_int().unwrap_err();
	assert_eq!(err.code(), "CAST_001");
	assert_eq!(err.message, "cannot cast DOUBLE to INT");
}

#[test]
fn test_datum_serializes_with_kind_tag() {
	let json = serde_json::to_string(&Datum::short(5i16)).unwrap();
	assert_eq!(json, r#"{"Short":5}"#);

	let back: Datum = serde_json::from_str(r#"{"Double":2.5}"#).unwrap();
	assert_eq!(back, Datum::double(2.5));
}

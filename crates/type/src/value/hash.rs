// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use xxhash_rust::xxh3::xxh3_64;

use crate::{Datum, Type};

impl Datum {
	/// Process independent hash over the type tag and the encoded bytes.
	///
	/// Equal datums always hash equal; collaborators use it to partition
	/// rows by value.
	pub fn stable_hash(&self) -> u64 {
		let mut buffer = Vec::with_capacity(self.size() + 1);
		buffer.push(tag(self.get_type()));
		buffer.extend_from_slice(&self.as_byte_array());
		xxh3_64(&buffer)
	}
}

fn tag(ty: Type) -> u8 {
	match ty {
		Type::Null => 0,
		Type::Boolean => 1,
		Type::Byte => 2,
		Type::Short => 3,
		Type::Int => 4,
		Type::Long => 5,
		Type::Float => 6,
		Type::Double => 7,
		Type::Char => 8,
		Type::Text => 9,
		Type::Bytes => 10,
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::Tuple;
use strata_type::Datum;

/// Builds a [`Tuple`] value by value, in ordinal order.
#[derive(Debug, Default)]
pub struct RowBuilder {
	values: Vec<Datum>,
}

impl RowBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn value(mut self, value: Datum) -> Self {
		self.values.push(value);
		self
	}

	pub fn null(self) -> Self {
		self.value(Datum::Null)
	}

	pub fn bool(self, value: bool) -> Self {
		self.value(Datum::bool(value))
	}

	pub fn int(self, value: i32) -> Self {
		self.value(Datum::int(value))
	}

	pub fn long(self, value: i64) -> Self {
		self.value(Datum::long(value))
	}

	pub fn double(self, value: f64) -> Self {
		self.value(Datum::double(value))
	}

	pub fn text(self, value: &str) -> Self {
		self.value(Datum::text(value))
	}

	pub fn build(self) -> Tuple {
		Tuple::from(self.values)
	}
}

/// Splits `rows` into `count` contiguous fragments of near equal size.
pub fn fragments(rows: Vec<Tuple>, count: usize) -> Vec<Vec<Tuple>> {
	let count = count.max(1);
	let size = rows.len().div_ceil(count).max(1);
	let mut result: Vec<Vec<Tuple>> = rows.chunks(size).map(<[Tuple]>::to_vec).collect();
	result.resize(count, Vec::new());
	result
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use strata_type::Datum;

use crate::interface::Row;

/// A row owned by its producer; values are replaced in place by ordinal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Tuple {
	values: Vec<Datum>,
}

impl Tuple {
	/// A tuple of `len` null values.
	pub fn new(len: usize) -> Self {
		Self {
			values: vec![Datum::Null; len],
		}
	}

	pub fn put(&mut self, ordinal: usize, value: Datum) {
		if ordinal >= self.values.len() {
			self.values.resize(ordinal + 1, Datum::Null);
		}
		self.values[ordinal] = value;
	}

	pub fn values(&self) -> &[Datum] {
		&self.values
	}
}

impl From<Vec<Datum>> for Tuple {
	fn from(values: Vec<Datum>) -> Self {
		Self {
			values,
		}
	}
}

impl FromIterator<Datum> for Tuple {
	fn from_iter<T: IntoIterator<Item = Datum>>(iter: T) -> Self {
		Self {
			values: iter.into_iter().collect(),
		}
	}
}

impl Row for Tuple {
	fn get(&self, ordinal: usize) -> Option<&Datum> {
		self.values.get(ordinal)
	}

	fn len(&self) -> usize {
		self.values.len()
	}
}

impl Display for Tuple {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("(")?;
		for (idx, value) in self.values.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			Display::fmt(value, f)?;
		}
		f.write_str(")")
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_type::Datum;

/// Ordered, already decoded values of one row, indexed by column ordinal.
pub trait Row {
	fn get(&self, ordinal: usize) -> Option<&Datum>;

	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Row for [Datum] {
	fn get(&self, ordinal: usize) -> Option<&Datum> {
		<[Datum]>::get(self, ordinal)
	}

	fn len(&self) -> usize {
		<[Datum]>::len(self)
	}
}

impl Row for Vec<Datum> {
	fn get(&self, ordinal: usize) -> Option<&Datum> {
		self.as_slice().get(ordinal)
	}

	fn len(&self) -> usize {
		self.as_slice().len()
	}
}

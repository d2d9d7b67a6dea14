// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	cmp::Ordering,
	fmt,
	hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

use super::OrderedFloatError;

#[repr(transparent)]
#[derive(Copy, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct OrderedF64(f64);

impl OrderedF64 {
	pub fn value(&self) -> f64 {
		self.0
	}
}

impl PartialEq for OrderedF64 {
	fn eq(&self, other: &Self) -> bool {
		self.0.to_bits() == other.0.to_bits()
	}
}

impl Eq for OrderedF64 {}

impl PartialOrd for OrderedF64 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OrderedF64 {
	fn cmp(&self, other: &Self) -> Ordering {
		let a = self.0.to_bits() ^ (((self.0.to_bits() >> 63) * 0x7fffffffffffffff) | (1 << 63));
		let b = other.0.to_bits() ^ (((other.0.to_bits() >> 63) * 0x7fffffffffffffff) | (1 << 63));
		a.cmp(&b)
	}
}

impl Hash for OrderedF64 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.to_bits().hash(state);
	}
}

impl fmt::Debug for OrderedF64 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

impl fmt::Display for OrderedF64 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}

impl From<OrderedF64> for f64 {
	fn from(v: OrderedF64) -> Self {
		v.0
	}
}

impl TryFrom<f64> for OrderedF64 {
	type Error = OrderedFloatError;

	fn try_from(f: f64) -> Result<Self, Self::Error> {
		let normalized = if f == 0.0 {
			0.0
		} else {
			f
		};
		if f.is_nan() {
			Err(OrderedFloatError)
		} else {
			Ok(OrderedF64(normalized))
		}
	}
}

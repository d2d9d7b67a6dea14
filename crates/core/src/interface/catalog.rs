// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_type::Type;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
	pub name: String,
	pub ordinal: usize,
	pub ty: Type,
}

/// Ordered mapping from column name to ordinal and declared type.
///
/// Ordinals are stable once assigned. The evaluator only reads a catalog.
pub trait ColumnCatalog {
	fn column(&self, name: &str) -> Option<&Column>;

	fn column_at(&self, ordinal: usize) -> Option<&Column>;

	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn contains(&self, name: &str) -> bool {
		self.column(name).is_some()
	}
}

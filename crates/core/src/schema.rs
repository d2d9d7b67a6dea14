// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use strata_type::{Result, Type};
use tracing::trace;

use crate::{
	CatalogError,
	interface::{Column, ColumnCatalog},
};

/// In-memory column catalog. Ordinals follow insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
	columns: Vec<Column>,
	by_name: HashMap<String, usize>,
}

impl Schema {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a column and returns its ordinal.
	pub fn add_column(&mut self, name: impl Into<String>, ty: Type) -> Result<usize> {
		let name = name.into();
		if self.by_name.contains_key(&name) {
			return Err(CatalogError::ColumnAlreadyExists {
				name,
			}
			.into());
		}

		let ordinal = self.columns.len();
		trace!(column = %name, ordinal, ty = %ty, "schema: add column");
		self.by_name.insert(name.clone(), ordinal);
		self.columns.push(Column {
			name,
			ordinal,
			ty,
		});
		Ok(ordinal)
	}

	/// Builder form of [`Schema::add_column`].
	pub fn with_column(mut self, name: impl Into<String>, ty: Type) -> Result<Self> {
		self.add_column(name, ty)?;
		Ok(self)
	}

	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	pub fn iter(&self) -> impl Iterator<Item = &Column> {
		self.columns.iter()
	}

	/// Looks up a column, failing with `ColumnNotFound` when it is missing.
	pub fn get(&self, name: &str) -> Result<&Column> {
		self.column(name).ok_or_else(|| {
			CatalogError::ColumnNotFound {
				name: name.to_string(),
			}
			.into()
		})
	}
}

impl ColumnCatalog for Schema {
	fn column(&self, name: &str) -> Option<&Column> {
		self.by_name.get(name).map(|&ordinal| &self.columns[ordinal])
	}

	fn column_at(&self, ordinal: usize) -> Option<&Column> {
		self.columns.get(ordinal)
	}

	fn len(&self) -> usize {
		self.columns.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	mod add_column {
		use super::*;

		#[test]
		fn test_ok() {
			let mut schema = Schema::new();
			assert_eq!(schema.add_column("f1", Type::Byte).unwrap(), 0);
			assert_eq!(schema.add_column("f2", Type::Int).unwrap(), 1);
			assert_eq!(schema.add_column("f3", Type::Long).unwrap(), 2);

			assert_eq!(schema.len(), 3);
			let names: Vec<_> = schema.iter().map(|c| c.name.as_str()).collect();
			assert_eq!(names, vec!["f1", "f2", "f3"]);
		}

		#[test]
		fn test_duplicate() {
			let mut schema = Schema::new();
			schema.add_column("f1", Type::Int).unwrap();

			let err = schema.add_column("f1", Type::Text).unwrap_err();
			assert_eq!(err.code(), "CATALOG_002");
			assert_eq!(schema.len(), 1);
			assert_eq!(schema.column("f1").unwrap().ty, Type::Int);
		}
	}

	mod lookup {
		use super::*;

		fn schema() -> Schema {
			Schema::new()
				.with_column("id", Type::Long)
				.unwrap()
				.with_column("name", Type::Text)
				.unwrap()
		}

		#[test]
		fn test_by_name() {
			let schema = schema();
			let column = schema.column("name").unwrap();
			assert_eq!(column.ordinal, 1);
			assert_eq!(column.ty, Type::Text);
			assert!(schema.contains("id"));
		}

		#[test]
		fn test_by_ordinal() {
			let schema = schema();
			assert_eq!(schema.column_at(0).unwrap().name, "id");
			assert!(schema.column_at(2).is_none());
		}

		#[test]
		fn test_not_found() {
			let schema = schema();
			assert!(schema.column("missing").is_none());
			assert!(!schema.contains("missing"));
			assert_eq!(schema.get("missing").unwrap_err().code(), "CATALOG_001");
		}

		#[test]
		fn test_empty() {
			let schema = Schema::new();
			assert!(schema.is_empty());
			assert!(schema.column_at(0).is_none());
		}
	}
}

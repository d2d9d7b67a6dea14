// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_type::{Diagnostic, Error, IntoDiagnostic};

/// Failures raised while looking up columns in a catalog or a row.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
	#[error("column '{name}' does not exist")]
	ColumnNotFound {
		name: String,
	},

	#[error("column '{name}' already exists")]
	ColumnAlreadyExists {
		name: String,
	},

	#[error("row has no value at ordinal {ordinal} (row length {len})")]
	ColumnOutOfBounds {
		ordinal: usize,
		len: usize,
	},
}

impl IntoDiagnostic for CatalogError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			CatalogError::ColumnNotFound {
				name,
			} => Diagnostic::new("CATALOG_001", message)
				.with_label(format!("unknown column '{name}'"))
				.with_help("check the column name against the catalog of the input rows"),

			CatalogError::ColumnAlreadyExists {
				..
			} => Diagnostic::new("CATALOG_002", message)
				.with_help("column names must be unique within a catalog"),

			CatalogError::ColumnOutOfBounds {
				..
			} => Diagnostic::new("ROW_001", message)
				.with_note("the row is shorter than the catalog it was resolved against"),
		}
	}
}

impl From<CatalogError> for Error {
	fn from(err: CatalogError) -> Self {
		Error(err.into_diagnostic())
	}
}

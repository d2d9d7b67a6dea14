// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Contracts of the collaborators the evaluator reads from but does not own.

pub use catalog::{Column, ColumnCatalog};
pub use row::Row;

mod catalog;
mod row;

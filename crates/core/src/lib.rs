// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use error::CatalogError;
pub use interface::{Column, ColumnCatalog, Row};
pub use schema::Schema;
pub use strata_type::{Datum, Error, Result, Type};
pub use tuple::Tuple;

mod error;
pub mod expression;
pub mod interface;
mod schema;
mod tuple;

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::{Schema, Tuple};
use strata_type::Type;

use crate::RowBuilder;

/// Columns of the `orders` fixture, in ordinal order.
pub const ORDERS_COLUMNS: [(&str, Type); 5] = [
	("id", Type::Int),
	("customer", Type::Text),
	("amount", Type::Long),
	("discount", Type::Double),
	("express", Type::Boolean),
];

/// Catalog with the columns of [`ORDERS_COLUMNS`].
pub fn orders() -> Schema {
	let mut schema = Schema::new();
	for (name, ty) in ORDERS_COLUMNS {
		schema.add_column(name, ty).expect("fixture columns are unique");
	}
	schema
}

/// Six orders; customer `carol` has no discount and order 5 has no amount.
pub fn orders_rows() -> Vec<Tuple> {
	vec![
		RowBuilder::new().int(1).text("alice").long(120).double(0.1).bool(true).build(),
		RowBuilder::new().int(2).text("bob").long(40).double(0.0).bool(false).build(),
		RowBuilder::new().int(3).text("carol").long(75).null().bool(false).build(),
		RowBuilder::new().int(4).text("alice").long(310).double(0.25).bool(true).build(),
		RowBuilder::new().int(5).text("dave").null().double(0.05).bool(false).build(),
		RowBuilder::new().int(6).text("bob").long(15).double(0.0).bool(true).build(),
	]
}

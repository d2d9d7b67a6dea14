// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Shared fixtures for the tests of the Strata crates.

pub use fixture::{
	expression::{case_of, constant, eq, probe},
	row::{RowBuilder, fragments},
	schema::{ORDERS_COLUMNS, orders, orders_rows},
};

pub mod fixture;

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use error::{Diagnostic, Error, IntoDiagnostic, TypeError};
pub use value::{
	Datum, Type,
	coerce::{can_coerce, coerce},
	ordered_float::{OrderedF32, OrderedF64, OrderedFloatError},
};

pub mod error;
pub mod value;

pub type Result<T> = std::result::Result<T, Error>;

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use error::EvaluateError;
pub use evaluate::{Accumulator, EvalContext, Evaluate, WhenContext};
pub use stream::{EvaluationStream, StreamConfig, evaluate_fragments};
pub use strata_type::{Error, Result};

mod error;
pub mod evaluate;
mod stream;

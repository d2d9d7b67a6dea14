// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use builder::{TracingBuilder, TracingConfig, TracingFormat};
pub use error::TracingError;
pub use factory::{TracingConfigurator, TracingFactory};

mod builder;
mod error;
mod factory;

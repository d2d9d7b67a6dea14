// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_type::Result;

use crate::TracingBuilder;

/// Configuration function for the tracing subscriber
pub type TracingConfigurator = Box<dyn FnOnce(TracingBuilder) -> TracingBuilder + Send>;

/// Deferred tracing setup, applied by the embedder at start-up
pub struct TracingFactory {
	configurator: Option<TracingConfigurator>,
}

impl TracingFactory {
	/// Create a new factory with default configuration
	pub fn new() -> Self {
		Self {
			configurator: None,
		}
	}

	/// Create a factory with a custom configurator
	pub fn with_configurator<F>(configurator: F) -> Self
	where
		F: FnOnce(TracingBuilder) -> TracingBuilder + Send + 'static,
	{
		Self {
			configurator: Some(Box::new(configurator)),
		}
	}

	/// Applies the configurator to a default builder.
	pub fn builder(self) -> TracingBuilder {
		match self.configurator {
			Some(configurator) => configurator(TracingBuilder::new()),
			None => TracingBuilder::default(),
		}
	}

	pub fn install(self) -> Result<()> {
		self.builder().init()
	}
}

impl Default for TracingFactory {
	fn default() -> Self {
		Self::new()
	}
}

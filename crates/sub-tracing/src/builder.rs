// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Builder for the global tracing subscriber

use serde::{Deserialize, Serialize};
use strata_type::Result;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::TracingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TracingFormat {
	#[default]
	Compact,
	Json,
}

/// Serializable form of the subscriber settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracingConfig {
	/// Default level when no filter directive is given.
	pub level: String,
	/// Full `RUST_LOG` style directive; overrides `level`.
	pub filter: Option<String>,
	/// Prefer the `RUST_LOG` environment variable when it is set.
	pub from_env: bool,
	pub format: TracingFormat,
	pub with_target: bool,
}

impl Default for TracingConfig {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			filter: None,
			from_env: true,
			format: TracingFormat::Compact,
			with_target: true,
		}
	}
}

/// Builder for configuring the tracing subscriber
#[derive(Debug, Clone, Default)]
pub struct TracingBuilder {
	config: TracingConfig,
}

impl TracingBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_config(config: TracingConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn level(mut self, level: impl Into<String>) -> Self {
		self.config.level = level.into();
		self
	}

	pub fn filter(mut self, directive: impl Into<String>) -> Self {
		self.config.filter = Some(directive.into());
		self
	}

	pub fn from_env(mut self, from_env: bool) -> Self {
		self.config.from_env = from_env;
		self
	}

	pub fn json(mut self) -> Self {
		self.config.format = TracingFormat::Json;
		self
	}

	pub fn compact(mut self) -> Self {
		self.config.format = TracingFormat::Compact;
		self
	}

	pub fn with_target(mut self, with_target: bool) -> Self {
		self.config.with_target = with_target;
		self
	}

	pub fn config(&self) -> &TracingConfig {
		&self.config
	}

	/// The directive used when the environment does not provide one.
	pub fn directive(&self) -> &str {
		self.config.filter.as_deref().unwrap_or(self.config.level.as_str())
	}

	pub fn env_filter(&self) -> Result<EnvFilter> {
		if self.config.from_env
			&& let Ok(filter) = EnvFilter::try_from_default_env()
		{
			return Ok(filter);
		}
		let directive = self.directive();
		EnvFilter::try_new(directive).map_err(|err| {
			TracingError::InvalidFilter {
				directive: directive.to_string(),
				reason: err.to_string(),
			}
			.into()
		})
	}

	/// Installs the subscriber globally.
	///
	/// Fails if another global subscriber was installed before.
	pub fn init(self) -> Result<()> {
		let filter = self.env_filter()?;
		let registry = tracing_subscriber::registry().with(filter);
		let with_target = self.config.with_target;

		let installed = match self.config.format {
			TracingFormat::Compact => registry.with(fmt::layer().compact().with_target(with_target)).try_init(),
			TracingFormat::Json => registry.with(fmt::layer().json().with_target(with_target)).try_init(),
		};
		installed.map_err(|err| {
			TracingError::AlreadyInstalled {
				reason: err.to_string(),
			}
		})?;

		debug!(directive = self.directive(), format = ?self.config.format, "tracing installed");
		Ok(())
	}
}

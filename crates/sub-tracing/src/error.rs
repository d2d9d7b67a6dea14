// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_type::{Diagnostic, Error, IntoDiagnostic};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TracingError {
	#[error("invalid filter directive '{directive}': {reason}")]
	InvalidFilter {
		directive: String,
		reason: String,
	},

	#[error("a global tracing subscriber is already installed")]
	AlreadyInstalled {
		reason: String,
	},
}

impl IntoDiagnostic for TracingError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			TracingError::InvalidFilter {
				..
			} => Diagnostic::new("TRACING_001", message)
				.with_help("use the RUST_LOG syntax, for example `info,engine=trace`"),

			TracingError::AlreadyInstalled {
				reason,
			} => Diagnostic::new("TRACING_002", message).with_note(reason),
		}
	}
}

impl From<TracingError> for Error {
	fn from(err: TracingError) -> Self {
		Error(err.into_diagnostic())
	}
}

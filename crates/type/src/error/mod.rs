// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::{Deref, DerefMut},
};

pub use diagnostic::{DefaultRenderer, Diagnostic};

use crate::value::Type;

mod diagnostic;

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn code(&self) -> &str {
		self.0.code.as_str()
	}
}

impl std::error::Error for Error {}

/// Builds an [`Error`] from anything that converts into a diagnostic.
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error($crate::IntoDiagnostic::into_diagnostic($diagnostic))
	};
}

/// Returns early with an [`Error`] built from a diagnostic.
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error!($diagnostic).into())
	};
}

/// Failures raised by the scalar value model.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("cannot cast {from} to {to}")]
	InvalidCast {
		from: Type,
		to: Type,
	},

	#[error("{from} value is not valid UTF-8")]
	InvalidUtf8 {
		from: Type,
	},

	#[error("type {ty} is not supported by {operation}")]
	UnsupportedType {
		ty: Type,
		operation: String,
	},

	#[error("{ty} encoding must be {expected} bytes, got {actual}")]
	InvalidEncoding {
		ty: Type,
		expected: usize,
		actual: usize,
	},

	#[error("byte {byte:#04x} is not a valid BOOLEAN encoding")]
	InvalidBoolean {
		byte: u8,
	},

	#[error("{ty} encoding holds NaN")]
	InvalidFloat {
		ty: Type,
	},
}

impl IntoDiagnostic for TypeError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			TypeError::InvalidCast {
				from,
				to,
			} => Diagnostic::new("CAST_001", message)
				.with_label(format!("{from} does not coerce to {to}"))
				.with_help("only widening numeric coercions and coercions to TEXT or BYTES are allowed")
				.with_note("narrowing coercions never truncate silently, they fail"),

			TypeError::InvalidUtf8 {
				..
			} => Diagnostic::new("CAST_002", message)
				.with_help("the byte sequence must be valid UTF-8 to be read as TEXT"),

			TypeError::UnsupportedType {
				..
			} => Diagnostic::new("TYPE_001", message),

			TypeError::InvalidEncoding {
				ty,
				..
			} => Diagnostic::new("ENCODING_001", message)
				.with_label(format!("malformed {ty} encoding"))
				.with_note("fixed-width kinds are encoded big-endian with exactly their declared width"),

			TypeError::InvalidBoolean {
				..
			} => Diagnostic::new("ENCODING_002", message).with_help("BOOLEAN is encoded as 0x00 or 0x01"),

			TypeError::InvalidFloat {
				..
			} => Diagnostic::new("ENCODING_003", message).with_note("floating-point values are never NaN"),
		}
	}
}

impl From<TypeError> for Error {
	fn from(err: TypeError) -> Self {
		Error(err.into_diagnostic())
	}
}

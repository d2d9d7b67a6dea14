// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			code: code.into(),
			message: message.into(),
			label: None,
			help: None,
			notes: vec![],
			cause: None,
		}
	}

	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	pub fn with_help(mut self, help: impl Into<String>) -> Self {
		self.help = Some(help.into());
		self
	}

	pub fn with_note(mut self, note: impl Into<String>) -> Self {
		self.notes.push(note.into());
		self
	}

	pub fn with_cause(mut self, cause: Diagnostic) -> Self {
		self.cause = Some(Box::new(cause));
		self
	}
}

pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		let mut output = String::new();
		Self::render_into(&mut output, diagnostic, 0);
		output
	}

	fn render_into(output: &mut String, d: &Diagnostic, depth: usize) {
		let indent = "  ".repeat(depth);

		let _ = writeln!(output, "{indent}error[{}]: {}", d.code, d.message);

		if let Some(label) = &d.label {
			let _ = writeln!(output, "{indent}  = {label}");
		}

		if let Some(help) = &d.help {
			let _ = writeln!(output, "{indent}  help: {help}");
		}

		for note in &d.notes {
			let _ = writeln!(output, "{indent}  note: {note}");
		}

		if let Some(cause) = &d.cause {
			let _ = writeln!(output, "{indent}  caused by:");
			Self::render_into(output, cause, depth + 1);
		}
	}
}

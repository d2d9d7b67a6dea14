// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rayon::prelude::*;
use strata_core::{ColumnCatalog, Row, expression::Expression};
use strata_type::{Datum, Result};
use tracing::{debug, instrument, trace};

use crate::evaluate::{EvalContext, Evaluate};

#[derive(Debug, Clone)]
pub struct StreamConfig {
	/// Recorded on the stream's spans and events.
	pub name: String,
	/// Emit a progress event every `log_every` rows; `0` disables it.
	pub log_every: u64,
}

impl Default for StreamConfig {
	fn default() -> Self {
		Self {
			name: "stream".to_string(),
			log_every: 10_000,
		}
	}
}

impl StreamConfig {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	pub fn log_every(mut self, rows: u64) -> Self {
		self.log_every = rows;
		self
	}
}

/// One evaluation stream over a shared expression.
///
/// Owns the stream's context; the expression is only borrowed, so any number
/// of streams may run over the same tree concurrently.
pub struct EvaluationStream<'a> {
	expression: &'a Expression,
	context: EvalContext,
	config: StreamConfig,
	rows: u64,
}

impl<'a> EvaluationStream<'a> {
	pub fn new(expression: &'a Expression) -> Self {
		Self::with_config(expression, StreamConfig::default())
	}

	pub fn with_config(expression: &'a Expression, config: StreamConfig) -> Self {
		Self {
			expression,
			context: expression.new_context(),
			config,
			rows: 0,
		}
	}

	pub fn push(&mut self, catalog: &dyn ColumnCatalog, row: &dyn Row) -> Result<()> {
		self.expression.eval(&mut self.context, catalog, row)?;
		self.rows += 1;
		if self.config.log_every > 0 && self.rows % self.config.log_every == 0 {
			trace!(stream = %self.config.name, rows = self.rows, "stream progress");
		}
		Ok(())
	}

	#[instrument(name = "engine::stream::push_all", level = "trace", skip(self, catalog, rows), fields(stream = %self.config.name))]
	pub fn push_all<'r, R: Row + 'r>(
		&mut self,
		catalog: &dyn ColumnCatalog,
		rows: impl IntoIterator<Item = &'r R>,
	) -> Result<()> {
		for row in rows {
			self.push(catalog, row)?;
		}
		Ok(())
	}

	pub fn rows(&self) -> u64 {
		self.rows
	}

	pub fn context(&self) -> &EvalContext {
		&self.context
	}

	/// The result accumulated so far; the stream stays usable.
	pub fn result(&self) -> Result<Datum> {
		self.expression.terminate(&self.context)
	}

	#[instrument(name = "engine::stream::finish", level = "debug", skip(self), fields(stream = %self.config.name, rows = self.rows))]
	pub fn finish(self) -> Result<Datum> {
		let result = self.result()?;
		debug!(result = %result, "stream finished");
		Ok(result)
	}
}

/// Evaluates every fragment in its own stream on the rayon pool.
///
/// Results are returned in fragment order. The first failing fragment fails
/// the whole call.
#[instrument(name = "engine::stream::evaluate_fragments", level = "debug", skip_all, fields(fragments = fragments.len()))]
pub fn evaluate_fragments<C, R>(expression: &Expression, catalog: &C, fragments: &[Vec<R>]) -> Result<Vec<Datum>>
where
	C: ColumnCatalog + Sync,
	R: Row + Sync,
{
	fragments
		.par_iter()
		.enumerate()
		.map(|(idx, fragment)| {
			let mut stream = EvaluationStream::with_config(expression, StreamConfig::new(format!("fragment-{idx}")));
			stream.push_all(catalog, fragment)?;
			stream.finish()
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use strata_core::{Schema, Tuple, expression::AggregateFunction};
	use strata_type::Type;

	use super::*;

	fn schema() -> Schema {
		Schema::new().with_column("amount", Type::Long).unwrap()
	}

	fn rows(values: &[i64]) -> Vec<Tuple> {
		values.iter().map(|v| Tuple::from(vec![Datum::long(*v)])).collect()
	}

	#[test]
	fn test_push_counts_rows() {
		let expr = Expression::count_star();
		let schema = schema();
		let mut stream = EvaluationStream::new(&expr);
		stream.push_all(&schema, &rows(&[1, 2, 3])).unwrap();
		assert_eq!(stream.rows(), 3);
		assert_eq!(stream.result().unwrap(), Datum::long(3i64));
		stream.push(&schema, &Tuple::from(vec![Datum::Null])).unwrap();
		assert_eq!(stream.finish().unwrap(), Datum::long(4i64));
	}

	#[test]
	fn test_failure_leaves_rows_untouched() {
		let expr = Expression::aggregate(AggregateFunction::Sum, Expression::field(&schema(), "amount").unwrap());
		let schema = schema();
		let mut stream = EvaluationStream::new(&expr);
		stream.push_all(&schema, &rows(&[i64::MAX])).unwrap();
		assert!(stream.push_all(&schema, &rows(&[1])).is_err());
		assert_eq!(stream.rows(), 1);
		assert_eq!(stream.result().unwrap(), Datum::long(i64::MAX));

		stream.push_all(&schema, &rows(&[-5])).unwrap();
		assert_eq!(stream.rows(), 2);
		assert_eq!(stream.result().unwrap(), Datum::long(i64::MAX - 5));
	}

	#[test]
	fn test_fragments_in_order() {
		let expr = Expression::aggregate(AggregateFunction::Sum, Expression::field(&schema(), "amount").unwrap());
		let fragments = vec![rows(&[1, 2]), rows(&[]), rows(&[10, 20, 30])];
		let result = evaluate_fragments(&expr, &schema(), &fragments).unwrap();
		assert_eq!(result, vec![Datum::long(3i64), Datum::Null, Datum::long(60i64)]);
	}

	#[test]
	fn test_config() {
		let config = StreamConfig::new("scan").log_every(0);
		assert_eq!(config.name, "scan");
		assert_eq!(config.log_every, 0);
		assert_eq!(StreamConfig::default().name, "stream");
	}
}

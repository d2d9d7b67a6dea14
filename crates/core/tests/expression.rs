// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use strata_core::{
	ColumnCatalog, Schema, Type,
	expression::{AggregateFunction, BinaryOperator, CaseExpression, Expression, ExpressionKind},
};
use strata_type::Datum;

fn schema() -> Schema {
	Schema::new()
		.with_column("id", Type::Int)
		.unwrap()
		.with_column("region", Type::Text)
		.unwrap()
		.with_column("total", Type::Double)
		.unwrap()
}

fn tiered(schema: &Schema) -> Expression {
	let total = Expression::field(schema, "total").unwrap();
	CaseExpression::new()
		.with_when(
			Expression::binary(BinaryOperator::GreaterThan, total.clone(), Expression::constant(Datum::double(100.0))),
			Expression::constant(Datum::text("large")),
		)
		.with_when(Expression::is_null(total), Expression::constant(Datum::text("unknown")))
		.with_else(Expression::constant(Datum::text("small")))
		.into()
}

#[test]
fn test_catalog_lookups() {
	let schema = schema();
	assert_eq!(schema.len(), 3);
	assert_eq!(schema.column("region").map(|c| c.ordinal), Some(1));
	assert_eq!(schema.column_at(2).map(|c| c.ty), Some(Type::Double));
	assert!(!schema.contains("missing"));

	let err = schema.clone().with_column("id", Type::Long).unwrap_err();
	assert_eq!(err.code(), "CATALOG_002");
}

#[test]
fn test_pre_order_kinds() {
	let expr = tiered(&schema());
	let mut kinds = Vec::new();
	expr.pre_order(&mut |node| kinds.push(node.kind()));
	assert_eq!(
		kinds,
		vec![
			ExpressionKind::Case,
			ExpressionKind::Binary,
			ExpressionKind::Field,
			ExpressionKind::Constant,
			ExpressionKind::Constant,
			ExpressionKind::IsNull,
			ExpressionKind::Field,
			ExpressionKind::Constant,
			ExpressionKind::Constant,
		]
	);
}

#[test]
fn test_post_order_ends_with_root() {
	let expr = tiered(&schema());
	let mut kinds = Vec::new();
	expr.post_order(&mut |node| kinds.push(node.kind()));
	assert_eq!(kinds.first(), Some(&ExpressionKind::Field));
	assert_eq!(kinds.last(), Some(&ExpressionKind::Case));
	assert_eq!(kinds.len(), expr.node_count());
}

#[test]
fn test_collect_fields() {
	let schema = schema();
	let expr = Expression::and(
		Expression::is_not_null(tiered(&schema)),
		Expression::aggregate(AggregateFunction::Count, Expression::field(&schema, "id").unwrap()),
	);
	let mut fields = Vec::new();
	expr.pre_order(&mut |node| {
		if let Expression::Field(field) = node {
			fields.push(field.name.clone());
		}
	});
	assert_eq!(fields, vec!["total", "total", "id"]);
}

#[test]
fn test_structural_equality() {
	let schema = schema();
	assert_eq!(tiered(&schema), tiered(&schema));

	let Expression::Case(mut case) = tiered(&schema) else {
		panic!("expected a case expression");
	};
	case.add_when(Expression::constant(Datum::bool(true)), Expression::null());
	assert_ne!(Expression::Case(case), tiered(&schema));
}

#[test]
fn test_rendering() {
	assert_eq!(
		tiered(&schema()).to_string(),
		"CASE\nWHEN (total > 100) THEN 'large'\nWHEN total IS NULL THEN 'unknown'\nELSE 'small'\nEND"
	);
}

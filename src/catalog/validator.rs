//! Query parameter validation.
//!
//! # Rules
//! - `type` is required and must name a known category
//! - `name` is free text; empty means no filter
//! - `order_by` may be empty (no ordering) or a known sort key
//! - `order` may be empty (ascending) or `asc` / `desc`
//!
//! Validation is pure and runs before any upstream call. All violations are
//! reported together.

use std::str::FromStr;

use crate::catalog::error::{FieldViolation, ValidationError};
use crate::catalog::types::{BeerQuery, Category, SortKey, SortOrder, ValidatedRequest};

/// Validate raw query parameters into a [`ValidatedRequest`].
pub fn validate(query: &BeerQuery) -> Result<ValidatedRequest, ValidationError> {
    let mut violations = Vec::new();

    let category = if query.category.is_empty() {
        violations.push(FieldViolation {
            field: "type",
            message: "is required".to_string(),
        });
        None
    } else {
        parse_member(&query.category, "type", &Category::ALL, &mut violations)
    };

    let order_by = if query.order_by.is_empty() {
        None
    } else {
        parse_member(&query.order_by, "order_by", &SortKey::ALL, &mut violations)
    };

    let order = if query.order.is_empty() {
        Some(SortOrder::default())
    } else {
        parse_member(&query.order, "order", &SortOrder::ALL, &mut violations)
    };

    match (category, order) {
        (Some(category), Some(order)) if violations.is_empty() => Ok(ValidatedRequest {
            category,
            name: Some(query.name.clone()).filter(|n| !n.is_empty()),
            order_by,
            order,
        }),
        _ => Err(ValidationError { violations }),
    }
}

fn parse_member<T>(
    value: &str,
    field: &'static str,
    allowed: &[T],
    violations: &mut Vec<FieldViolation>,
) -> Option<T>
where
    T: FromStr + std::fmt::Display,
{
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            let allowed = allowed
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            violations.push(FieldViolation {
                field,
                message: format!("{value:?} is not one of {allowed}"),
            });
            None
        }
    }
}

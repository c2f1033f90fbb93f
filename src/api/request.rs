//! # Request Validation
//!
//! Statically-typed request schemas, validated before any store or
//! query-engine access. Invalid input short-circuits with a validation
//! error; nothing is read or written first.

use std::collections::HashMap;

use serde_json::Value;

use crate::query::SortField;

use super::errors::{ApiError, ApiResult};

/// Validated create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTicket {
    pub name: String,
    pub review: String,
    pub author: String,
}

impl CreateTicket {
    /// Validates a create body. Each required field must be a non-empty
    /// JSON string; the first violation, in declaration order, is
    /// reported with the field's name.
    pub fn from_value(body: &Value) -> ApiResult<Self> {
        Ok(Self {
            name: nonempty_string(body, "name")?,
            review: nonempty_string(body, "review")?,
            author: nonempty_string(body, "author")?,
        })
    }
}

/// Coerces `body[field]` per the create contract: present, a string,
/// and non-empty. Anything else is rejected with the field's name.
fn nonempty_string(body: &Value, field: &str) -> ApiResult<String> {
    match body.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(ApiError::required(field)),
    }
}

/// Validated list query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Case-insensitive substring filter; empty matches everything.
    pub query: String,

    /// Sort key, always applied descending.
    pub sort_by: SortField,
}

impl ListQuery {
    /// Parses raw query parameters. Missing parameters fall back to
    /// their defaults and unknown parameters are ignored; a `sort_by`
    /// outside the allow-list is a validation failure.
    pub fn parse(params: &HashMap<String, String>) -> ApiResult<Self> {
        let mut parsed = ListQuery::default();

        if let Some(query) = params.get("query") {
            parsed.query = query.clone();
        }

        if let Some(sort_by) = params.get("sort_by") {
            parsed.sort_by = SortField::parse(sort_by).ok_or_else(|| ApiError::Validation {
                field: "sort_by".to_string(),
                message: format!(
                    "'sort_by' must be one of {}: got '{}'",
                    SortField::ALLOWED.join(", "),
                    sort_by
                ),
            })?;
        }

        Ok(parsed)
    }
}

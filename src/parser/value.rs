use chrono::NaiveDateTime;
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::TomlError;
use crate::ast::Value;
use crate::lexer::split_array_items;

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());

static FLOAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+\.[0-9]+$").unwrap());

static DATETIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}Z$").unwrap());

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Turn the raw right-hand side of an assignment into a typed value.
///
/// First match wins: array, boolean, integer, float, UTC datetime, string.
/// Numeric literals that fit the pattern but not the type fall back to zero.
pub fn convert_value(literal: &str) -> Result<Value, TomlError> {
    let literal = literal.trim();

    if literal.starts_with('[') {
        return parse_array_value(literal);
    }

    match literal {
        "true" => return Ok(Value::Boolean(true)),
        "false" => return Ok(Value::Boolean(false)),
        _ => {}
    }

    if INTEGER.is_match(literal) {
        return Ok(parse_integer_value(literal));
    }

    if FLOAT.is_match(literal) {
        return Ok(parse_float_value(literal));
    }

    if DATETIME.is_match(literal) {
        return Ok(parse_datetime_value(literal));
    }

    Ok(Value::String(unquote(literal).to_string()))
}

fn parse_array_value(literal: &str) -> Result<Value, TomlError> {
    let items = split_array_items(literal)?
        .iter()
        .map(|item| convert_value(item))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::Array(items))
}

fn parse_integer_value(literal: &str) -> Value {
    match literal.parse::<i64>() {
        Ok(n) => Value::Integer(n),
        Err(e) => {
            warn!("Integer '{}' could not be read ({}), using 0", literal, e);
            Value::Integer(0)
        }
    }
}

fn parse_float_value(literal: &str) -> Value {
    match literal.parse::<f64>() {
        Ok(n) if n.is_finite() => Value::Float(n),
        Ok(_) => {
            warn!("Float '{}' is out of range, using 0.0", literal);
            Value::Float(0.0)
        }
        Err(e) => {
            warn!("Float '{}' could not be read ({}), using 0.0", literal, e);
            Value::Float(0.0)
        }
    }
}

fn parse_datetime_value(literal: &str) -> Value {
    match NaiveDateTime::parse_from_str(literal, DATETIME_FORMAT) {
        Ok(naive) => Value::DateTime(naive.and_utc()),
        Err(e) => {
            warn!("Datetime '{}' is out of range ({}), keeping it as a string", literal, e);
            Value::String(literal.to_string())
        }
    }
}

/// Strip one surrounding pair of double quotes, nothing more.
fn unquote(literal: &str) -> &str {
    if literal.len() >= 2 && literal.starts_with('"') && literal.ends_with('"') {
        &literal[1..literal.len() - 1]
    } else {
        literal
    }
}

// Author: Dustin Pilgrim
// License: MIT

use chrono::{DateTime, Utc};

use crate::ast::Table;
use crate::{TomlError, Value};

fn expected(what: &str, value: &Value, hint: &str, code: u32) -> TomlError {
    TomlError::type_error(format!("Expected {}, got {} {}", what, value.type_name(), value), hint, code)
}

fn expect_integer(value: &Value) -> Result<i64, TomlError> {
    match value {
        Value::Integer(n) => Ok(*n),
        _ => Err(expected("integer", value, "Use a whole number in your config", 402)),
    }
}

/// Range-checked conversion from the stored `i64` into a smaller integer type.
fn narrow<T: TryFrom<i64>>(value: &Value, type_name: &str, code: u32) -> Result<T, TomlError> {
    let n = expect_integer(value)?;
    T::try_from(n).map_err(|_| {
        TomlError::type_error(
            format!("Number {} out of range for {}", n, type_name),
            &format!("Use a number that fits in {}", type_name),
            code,
        )
    })
}

impl TryFrom<&Value> for String {
    type Error = TomlError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s.clone()),
            _ => Err(expected("string", value, "Wrap the value in double quotes", 401)),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = TomlError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        expect_integer(value)
    }
}

impl TryFrom<&Value> for i32 {
    type Error = TomlError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        narrow(value, "i32", 403)
    }
}

impl TryFrom<&Value> for u16 {
    type Error = TomlError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        narrow(value, "u16", 403)
    }
}

impl TryFrom<&Value> for u32 {
    type Error = TomlError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        narrow(value, "u32", 408)
    }
}

impl TryFrom<&Value> for u64 {
    type Error = TomlError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        narrow(value, "u64", 406)
    }
}

impl TryFrom<&Value> for usize {
    type Error = TomlError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        narrow(value, "usize", 409)
    }
}

/// Floats, and integers widened to floats.
impl TryFrom<&Value> for f64 {
    type Error = TomlError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value
            .as_float()
            .ok_or_else(|| expected("number", value, "Use a number value in your config", 402))
    }
}

impl TryFrom<&Value> for bool {
    type Error = TomlError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Boolean(b) => Ok(*b),
            Value::String(s) if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false") => {
                Err(TomlError::type_error(
                    format!("Invalid boolean value \"{}\". Did you mean {}?", s, s.to_lowercase()),
                    "Booleans are bare lowercase true or false",
                    404,
                ))
            }
            _ => Err(expected("boolean", value, "Use true or false", 404)),
        }
    }
}

impl TryFrom<&Value> for DateTime<Utc> {
    type Error = TomlError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::DateTime(dt) => Ok(*dt),
            _ => Err(expected("datetime", value, "Use the form 1979-05-27T07:32:00Z", 407)),
        }
    }
}

impl<T> TryFrom<&Value> for Vec<T>
where
    T: for<'v> TryFrom<&'v Value, Error = TomlError>,
{
    type Error = TomlError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => items.iter().map(|item| <T as TryFrom<&Value>>::try_from(item)).collect(),
            _ => Err(expected("array", value, "Use an array [...] in your config", 405)),
        }
    }
}

impl TryFrom<&Value> for Table {
    type Error = TomlError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Table(table) => Ok(table.clone()),
            _ => Err(expected("table", value, "Use a [group] header or dotted keys", 410)),
        }
    }
}

//! The scalar cell model for frames.
mod from_value;

pub use from_value::FromValue;

use crate::Type;

use serde::{Deserialize, Serialize};

use std::fmt;

/// A single cell scalar.
///
/// `Nothing` is the hole left where a row has no value for a column; it is
/// what sparse row-oriented construction back-fills with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Nothing,
}

impl Value {
    pub fn bool(val: bool) -> Value {
        Value::Bool(val)
    }

    pub fn int(val: i64) -> Value {
        Value::Int(val)
    }

    pub fn float(val: f64) -> Value {
        Value::Float(val)
    }

    pub fn string(val: impl Into<String>) -> Value {
        Value::String(val.into())
    }

    pub fn nothing() -> Value {
        Value::Nothing
    }

    pub fn get_type(&self) -> Type {
        match self {
            Value::Bool(_) => Type::Bool,
            Value::Int(_) => Type::Int,
            Value::Float(_) => Type::Float,
            Value::String(_) => Type::String,
            Value::Nothing => Type::Nothing,
        }
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Value::Nothing)
    }
}

impl fmt::Display for Value {
    /// Cell text as a drawn table shows it; `Nothing` renders as the empty
    /// cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(val) => write!(f, "{}", val),
            Value::Int(val) => write!(f, "{}", val),
            Value::Float(val) => write!(f, "{}", val),
            Value::String(val) => write!(f, "{}", val),
            Value::Nothing => Ok(()),
        }
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Value::Bool(val)
    }
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        Value::Int(val)
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        Value::Float(val)
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Value::String(val.into())
    }
}

impl From<String> for Value {
    fn from(val: String) -> Self {
        Value::String(val)
    }
}

use crate::{FrameError, Type, Value};

/// A trait for loading a [`Value`] into a plain Rust type.
///
/// ```
/// use framelet_protocol::{FromValue, Value};
///
/// let age = i64::from_value(Value::int(20)).unwrap();
/// assert_eq!(age, 20);
///
/// assert!(i64::from_value(Value::string("Alice")).is_err());
/// ```
pub trait FromValue: Sized {
    /// Loads a value, or reports a [`FrameError::TypeMismatch`] naming the
    /// type this implementation expected.
    fn from_value(value: Value) -> Result<Self, FrameError>;

    /// The type that [`FromValue::from_value`] expects, used in error
    /// reporting.
    fn expected_type() -> Type;
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, FrameError> {
        Ok(value)
    }

    fn expected_type() -> Type {
        Type::Any
    }
}

impl FromValue for i64 {
    fn from_value(value: Value) -> Result<Self, FrameError> {
        match value {
            Value::Int(val) => Ok(val),
            value => Err(type_mismatch::<Self>(&value)),
        }
    }

    fn expected_type() -> Type {
        Type::Int
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, FrameError> {
        match value {
            Value::Float(val) => Ok(val),
            // int cells widen on a float ask
            Value::Int(val) => Ok(val as f64),
            value => Err(type_mismatch::<Self>(&value)),
        }
    }

    fn expected_type() -> Type {
        Type::Float
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, FrameError> {
        match value {
            Value::Bool(val) => Ok(val),
            value => Err(type_mismatch::<Self>(&value)),
        }
    }

    fn expected_type() -> Type {
        Type::Bool
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, FrameError> {
        match value {
            Value::String(val) => Ok(val),
            value => Err(type_mismatch::<Self>(&value)),
        }
    }

    fn expected_type() -> Type {
        Type::String
    }
}

fn type_mismatch<T: FromValue>(actual: &Value) -> FrameError {
    FrameError::TypeMismatch {
        expected: T::expected_type(),
        actual: actual.get_type(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_matching_scalars() {
        assert_eq!(i64::from_value(Value::int(101)).unwrap(), 101);
        assert_eq!(f64::from_value(Value::float(19.5)).unwrap(), 19.5);
        assert!(bool::from_value(Value::bool(true)).unwrap());
        assert_eq!(
            String::from_value(Value::string("Alice")).unwrap(),
            "Alice".to_string()
        );
    }

    #[test]
    fn int_widens_to_float() {
        assert_eq!(f64::from_value(Value::int(20)).unwrap(), 20.0);
    }

    #[test]
    fn mismatch_names_both_types() {
        let err = i64::from_value(Value::string("Alice")).unwrap_err();
        assert_eq!(
            err,
            FrameError::TypeMismatch {
                expected: Type::Int,
                actual: Type::String,
            }
        );
    }

    #[test]
    fn value_passes_through() {
        let val = Value::string("Carol");
        assert_eq!(Value::from_value(val.clone()).unwrap(), val);
    }
}

use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// The type of a scalar [`Value`](crate::Value).
///
/// `Any` doubles as the type of a column whose cells do not share a single
/// scalar type (or that has no cells at all).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum Type {
    Any,
    Bool,
    Float,
    Int,
    Nothing,
    String,
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Any => write!(f, "any"),
            Type::Bool => write!(f, "bool"),
            Type::Float => write!(f, "float"),
            Type::Int => write!(f, "int"),
            Type::Nothing => write!(f, "nothing"),
            Type::String => write!(f, "string"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Type::Int.to_string(), "int");
        assert_eq!(Type::String.to_string(), "string");
        assert_eq!(Type::Nothing.to_string(), "nothing");
        assert_eq!(Type::Any.to_string(), "any");
    }
}

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::{Type, Value};

/// A named column of cell values inside a [`DataFrame`](crate::DataFrame).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn new_empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The type shared by the cells of this column.
    ///
    /// `Nothing` cells are skipped, so a column of ints with gaps is still
    /// `Type::Int`. Mixed and empty columns report `Type::Any`; columns of
    /// only `Nothing` cells report `Type::Nothing`.
    pub fn column_type(&self) -> Type {
        if self.values.is_empty() {
            return Type::Any;
        }

        let mut types = self
            .values
            .iter()
            .filter(|value| !value.is_nothing())
            .map(Value::get_type);

        match types.next() {
            Some(first) => {
                if types.all(|ty| ty == first) {
                    first
                } else {
                    Type::Any
                }
            }
            None => Type::Nothing,
        }
    }
}

impl IntoIterator for Column {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl Deref for Column {
    type Target = Vec<Value>;

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl DerefMut for Column {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.values
    }
}

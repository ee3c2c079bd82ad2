//! The in-memory table: named columns of equal length, addressed by row or
//! by column.
use std::iter::FusedIterator;

use indexmap::{map::Entry, IndexMap, IndexSet};
use itertools::Itertools;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::{Column, FrameError, Record, Value};

/// A column-major table of [`Value`]s.
///
/// Every column holds the same number of cells and no two columns share a
/// name; both invariants are enforced on construction. A frame may have
/// columns but no rows (a known header awaiting data) or, after an empty
/// projection, rows but no columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFrame {
    columns: Vec<Column>,
    height: usize,
}

impl DataFrame {
    /// An empty frame: no rows, no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a frame from prebuilt columns.
    ///
    /// Fails if two columns share a name or their lengths disagree.
    ///
    /// ```
    /// use framelet_protocol::{Column, DataFrame, Value};
    ///
    /// let frame = DataFrame::try_from_columns(vec![
    ///     Column::new("student_id", vec![Value::int(101), Value::int(102)]),
    ///     Column::new("age", vec![Value::int(20), Value::int(21)]),
    /// ])?;
    /// assert_eq!(frame.shape(), (2, 2));
    /// # Ok::<(), framelet_protocol::FrameError>(())
    /// ```
    pub fn try_from_columns(columns: Vec<Column>) -> Result<Self, FrameError> {
        let mut names = IndexSet::with_capacity(columns.len());
        for col in &columns {
            if !names.insert(col.name()) {
                return Err(FrameError::DuplicateColumn {
                    col_name: col.name().into(),
                });
            }
        }

        let height = columns.first().map(|col| col.len()).unwrap_or(0);
        for col in &columns {
            if col.len() != height {
                return Err(FrameError::UnevenColumns {
                    col_name: col.name().into(),
                    expected: height,
                    found: col.len(),
                });
            }
        }

        trace!("frame built: {} rows, {} columns", height, columns.len());
        Ok(Self { columns, height })
    }

    /// Assemble a frame row by row.
    ///
    /// Columns appear in first-appearance order. A row missing a column
    /// leaves a `Value::Nothing` cell behind, so ragged records still line
    /// up. A name used twice inside one record is rejected.
    pub fn from_records(records: Vec<Record>) -> Result<Self, FrameError> {
        let height = records.len();
        let mut column_values: IndexMap<String, Vec<Value>> = IndexMap::new();

        for (row, record) in records.into_iter().enumerate() {
            for (col, value) in record {
                match column_values.entry(col) {
                    Entry::Vacant(entry) => {
                        let mut values = vec![Value::nothing(); row];
                        values.push(value);
                        entry.insert(values);
                    }
                    Entry::Occupied(mut entry) => {
                        // already filled for this row: the record reused the name
                        if entry.get().len() > row {
                            return Err(FrameError::DuplicateColumn {
                                col_name: entry.key().clone(),
                            });
                        }
                        let values = entry.get_mut();
                        values.resize(row, Value::nothing());
                        values.push(value);
                    }
                }
            }
        }

        let columns = column_values
            .into_iter()
            .map(|(name, mut values)| {
                values.resize(height, Value::nothing());
                Column::new(name, values)
            })
            .collect();

        Ok(Self { columns, height })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.columns.len())
    }

    /// Whether the frame holds any rows.
    pub fn is_empty(&self) -> bool {
        self.height == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Look a column up by name.
    pub fn column(&self, name: &str) -> Result<&Column, FrameError> {
        self.columns
            .iter()
            .find(|col| col.name() == name)
            .ok_or_else(|| FrameError::CantFindColumn {
                col_name: name.into(),
                available: self.columns.iter().map(Column::name).join(", "),
            })
    }

    /// The first `min(rows, height)` rows, all columns, in order.
    pub fn head(&self, rows: usize) -> DataFrame {
        let rows = rows.min(self.height);
        trace!("head: keeping {} of {} rows", rows, self.height);
        let columns = self
            .columns
            .iter()
            .map(|col| Column::new(col.name(), col.iter().take(rows).cloned().collect()))
            .collect();
        Self {
            columns,
            height: rows,
        }
    }

    /// Keep the rows whose cell in `column` satisfies `predicate`.
    ///
    /// All columns survive, row order is preserved, and cell values pass
    /// through untouched.
    pub fn filter(
        &self,
        column: &str,
        predicate: impl Fn(&Value) -> bool,
    ) -> Result<DataFrame, FrameError> {
        let keep: Vec<usize> = self
            .column(column)?
            .iter()
            .enumerate()
            .filter(|(_, value)| predicate(value))
            .map(|(row, _)| row)
            .collect();
        trace!("filter on '{}': keeping {} of {} rows", column, keep.len(), self.height);

        let columns = self
            .columns
            .iter()
            .map(|col| {
                Column::new(col.name(), keep.iter().map(|&row| col[row].clone()).collect())
            })
            .collect();
        Ok(Self {
            columns,
            height: keep.len(),
        })
    }

    /// Project onto the named columns, in the requested order.
    ///
    /// All rows survive. Asking for an unknown column fails, as does asking
    /// for the same column twice.
    pub fn select(&self, columns: &[&str]) -> Result<DataFrame, FrameError> {
        let mut names = IndexSet::with_capacity(columns.len());
        for name in columns {
            if !names.insert(*name) {
                return Err(FrameError::DuplicateColumn {
                    col_name: (*name).into(),
                });
            }
        }

        trace!("select: projecting onto {} of {} columns", columns.len(), self.columns.len());
        let selected = columns
            .iter()
            .map(|name| self.column(name).cloned())
            .collect::<Result<Vec<Column>, FrameError>>()?;
        Ok(Self {
            columns: selected,
            height: self.height,
        })
    }

    /// Materialize the row at `index` as a [`Record`], or `None` past the
    /// end.
    pub fn row(&self, index: usize) -> Option<Record> {
        if index >= self.height {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|col| (col.name().to_owned(), col[index].clone()))
                .collect(),
        )
    }

    /// Iterate over the rows, materializing each as a [`Record`].
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            frame: self,
            index: 0,
        }
    }
}

impl Serialize for DataFrame {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.columns.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DataFrame {
    /// Reads back the column representation, re-checking the frame
    /// invariants.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let columns = Vec::<Column>::deserialize(deserializer)?;
        DataFrame::try_from_columns(columns).map_err(serde::de::Error::custom)
    }
}

pub struct Rows<'a> {
    frame: &'a DataFrame,
    index: usize,
}

impl Iterator for Rows<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.frame.row(self.index)?;
        self.index += 1;
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.frame.height.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

impl FusedIterator for Rows<'_> {}

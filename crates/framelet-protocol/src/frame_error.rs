use miette::Diagnostic;
use thiserror::Error;

use crate::Type;

/// The fundamental error type for frame operations. These cases represent the
/// different ways building or reshaping a table can go wrong. An error
/// renderer will take this error value and pass it into an error viewer to
/// display to the user.
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum FrameError {
    /// The requested column does not exist.
    ///
    /// ## Resolution
    ///
    /// Check the spelling of your column name. Did you forget to rename a column somewhere?
    #[error("Cannot find column '{col_name}'")]
    #[diagnostic(
        code(framelet::frame::column_not_found),
        help("available columns: {available}")
    )]
    CantFindColumn { col_name: String, available: String },

    /// Columns can only be defined once per frame.
    ///
    /// ## Resolution
    ///
    /// Check the frame to ensure you aren't reusing the same column name.
    #[error("Table column used twice: {col_name}")]
    #[diagnostic(code(framelet::frame::column_defined_twice))]
    DuplicateColumn { col_name: String },

    /// Every column of a frame must hold the same number of rows.
    ///
    /// ## Resolution
    ///
    /// Pad the short columns (or trim the long ones) so all lengths agree.
    #[error("Expected {expected} rows in column '{col_name}', found {found}")]
    #[diagnostic(code(framelet::frame::uneven_columns))]
    UnevenColumns {
        col_name: String,
        expected: usize,
        found: usize,
    },

    /// Attempted to create a record from different number of columns and values
    ///
    /// ## Resolution
    ///
    /// Check the record has the same number of columns as values
    #[error("Attempted to create a record from {cols} columns and {vals} values")]
    #[diagnostic(code(framelet::frame::record_cols_vals_mismatch))]
    RecordColsValsMismatch { cols: usize, vals: usize },

    /// A value had a different type than the operation required.
    ///
    /// ## Resolution
    ///
    /// Check the input type to this operation. Convert the value first if the types are close.
    #[error("Type mismatch: expected {expected}, found {actual}")]
    #[diagnostic(code(framelet::frame::type_mismatch))]
    TypeMismatch { expected: Type, actual: Type },
}

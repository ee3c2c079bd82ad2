//! Small in-memory data frames.
//!
//! The model lives in `framelet-protocol` (values, records, columns, and the
//! [`DataFrame`] they compose into) and text rendering in `framelet-table`;
//! this crate ties the two together and ships the worked [`exercises`] built
//! on top of the frame operations.
pub mod exercises;

pub use framelet_protocol::{record, Column, DataFrame, FrameError, FromValue, Record, Type, Value};
pub use framelet_table::{FrameView, FrameViewConfig, TableTheme};

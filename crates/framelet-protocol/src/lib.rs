//! The core frame model: values, records, columns, and the [`DataFrame`]
//! table they compose into.
mod column;
mod frame;
mod frame_error;
pub mod record;
mod ty;
pub mod value;

pub use column::Column;
pub use frame::{DataFrame, Rows};
pub use frame_error::FrameError;
pub use record::Record;
pub use ty::Type;
pub use value::{FromValue, Value};

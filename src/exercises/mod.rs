//! The worked exercises, one operation per file.
mod create_dataframe;
mod dataframe_size;
mod first_rows;
mod select_data;

pub use create_dataframe::create_dataframe;
pub use dataframe_size::dataframe_size;
pub use first_rows::{select_first_rows, FIRST_ROWS};
pub use select_data::{select_data, TARGET_STUDENT_ID};

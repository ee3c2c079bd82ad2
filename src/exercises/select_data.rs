use framelet_protocol::{DataFrame, FrameError, Value};

/// The student singled out by [`select_data`].
pub const TARGET_STUDENT_ID: i64 = 101;

/// The name and age of the student whose id is [`TARGET_STUDENT_ID`].
///
/// Row order survives the filtering; when no row matches, the result is an
/// empty frame that still carries the `name` and `age` columns.
pub fn select_data(frame: &DataFrame) -> Result<DataFrame, FrameError> {
    let matched = frame.filter("student_id", |id| {
        matches!(id, Value::Int(n) if *n == TARGET_STUDENT_ID)
    })?;
    matched.select(&["name", "age"])
}

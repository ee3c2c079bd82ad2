use framelet_protocol::{Column, DataFrame, FrameError, Value};
use log::trace;

/// Builds the two-column student frame from raw `(student_id, age)` pairs.
///
/// Column order is `student_id` then `age`; rows keep the input order.
pub fn create_dataframe(student_data: Vec<(i64, i64)>) -> Result<DataFrame, FrameError> {
    trace!("create_dataframe: {} pairs in", student_data.len());
    let (ids, ages): (Vec<Value>, Vec<Value>) = student_data
        .into_iter()
        .map(|(id, age)| (Value::int(id), Value::int(age)))
        .unzip();

    DataFrame::try_from_columns(vec![
        Column::new("student_id", ids),
        Column::new("age", ages),
    ])
}

#[cfg(test)]
mod test {
    use super::*;
    use framelet_test_support::age_pairs;
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_the_two_named_columns() {
        let frame = create_dataframe(age_pairs()).unwrap();
        assert_eq!(frame.column_names(), vec!["student_id", "age"]);
        assert_eq!(frame.shape(), (4, 2));
    }

    #[test]
    fn rows_keep_the_input_order() {
        let frame = create_dataframe(age_pairs()).unwrap();
        assert_eq!(
            frame.column("student_id").unwrap().as_slice(),
            &[Value::int(1), Value::int(2), Value::int(3), Value::int(4)]
        );
        assert_eq!(
            frame.column("age").unwrap().as_slice(),
            &[Value::int(15), Value::int(11), Value::int(11), Value::int(20)]
        );
    }

    #[test]
    fn no_pairs_build_an_empty_frame_with_the_header() {
        let frame = create_dataframe(Vec::new()).unwrap();
        assert_eq!(frame.column_names(), vec!["student_id", "age"]);
        assert!(frame.is_empty());
    }
}

//! Canned frames shared by the framelet test suites.
use framelet_protocol::{record, Column, DataFrame, Value};

/// The three-student table most tests start from.
///
/// | student_id | name  | age |
/// |------------|-------|-----|
/// | 101        | Alice | 20  |
/// | 102        | Bob   | 21  |
/// | 103        | Carol | 19  |
pub fn students() -> DataFrame {
    DataFrame::try_from_columns(vec![
        Column::new(
            "student_id",
            vec![Value::int(101), Value::int(102), Value::int(103)],
        ),
        Column::new(
            "name",
            vec![
                Value::string("Alice"),
                Value::string("Bob"),
                Value::string("Carol"),
            ],
        ),
        Column::new("age", vec![Value::int(20), Value::int(21), Value::int(19)]),
    ])
    .expect("student fixture columns are well formed")
}

/// A wider table with more rows than a three-row head keeps.
pub fn employees() -> DataFrame {
    let rows = vec![
        record!(
            "employee_id" => Value::int(3),
            "name" => Value::string("Bob"),
            "department" => Value::string("Operations"),
            "salary" => Value::int(48675),
        ),
        record!(
            "employee_id" => Value::int(90),
            "name" => Value::string("Alice"),
            "department" => Value::string("Sales"),
            "salary" => Value::int(11096),
        ),
        record!(
            "employee_id" => Value::int(9),
            "name" => Value::string("Tatiana"),
            "department" => Value::string("Engineering"),
            "salary" => Value::int(33805),
        ),
        record!(
            "employee_id" => Value::int(60),
            "name" => Value::string("Annabelle"),
            "department" => Value::string("InformationTechnology"),
            "salary" => Value::int(37678),
        ),
        record!(
            "employee_id" => Value::int(49),
            "name" => Value::string("Jonathan"),
            "department" => Value::string("HumanResources"),
            "salary" => Value::int(23793),
        ),
    ];
    DataFrame::from_records(rows).expect("employee fixture rows are well formed")
}

/// Raw `(student_id, age)` pairs in submission order.
pub fn age_pairs() -> Vec<(i64, i64)> {
    vec![(1, 15), (2, 11), (3, 11), (4, 20)]
}

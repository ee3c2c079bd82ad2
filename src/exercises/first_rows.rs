use framelet_protocol::DataFrame;

/// How many leading rows [`select_first_rows`] keeps.
pub const FIRST_ROWS: usize = 3;

/// The first [`FIRST_ROWS`] rows of `frame`, all columns, in order.
///
/// A shorter frame comes back whole.
pub fn select_first_rows(frame: &DataFrame) -> DataFrame {
    frame.head(FIRST_ROWS)
}

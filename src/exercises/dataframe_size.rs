use framelet_protocol::DataFrame;
use log::trace;

/// Reports `[rows, columns]` for `frame`.
pub fn dataframe_size(frame: &DataFrame) -> [usize; 2] {
    let (rows, cols) = frame.shape();
    trace!("dataframe_size: {rows} rows, {cols} columns");
    [rows, cols]
}

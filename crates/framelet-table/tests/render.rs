use framelet_protocol::{record, DataFrame, Value};
use framelet_table::{FrameView, FrameViewConfig, TableTheme};
use framelet_test_support::students;
use pretty_assertions::assert_eq;

fn draw_with_theme(frame: &DataFrame, theme: TableTheme) -> String {
    FrameView::with_config(
        frame,
        FrameViewConfig {
            theme,
            ..Default::default()
        },
    )
    .draw()
}

#[test]
fn basic_theme_draws_ascii_borders() {
    let table = FrameView::new(&students()).draw();

    assert_eq!(
        table,
        "+------------+-------+-----+\n\
         | student_id | name  | age |\n\
         +------------+-------+-----+\n\
         | 101        | Alice | 20  |\n\
         +------------+-------+-----+\n\
         | 102        | Bob   | 21  |\n\
         +------------+-------+-----+\n\
         | 103        | Carol | 19  |\n\
         +------------+-------+-----+"
    );
}

#[test]
fn rounded_theme_separates_header_only() {
    let table = draw_with_theme(&students(), TableTheme::rounded());

    assert_eq!(
        table,
        "╭────────────┬───────┬─────╮\n\
         │ student_id │ name  │ age │\n\
         ├────────────┼───────┼─────┤\n\
         │ 101        │ Alice │ 20  │\n\
         │ 102        │ Bob   │ 21  │\n\
         │ 103        │ Carol │ 19  │\n\
         ╰────────────┴───────┴─────╯"
    );
}

#[test]
fn markdown_theme_is_pipe_delimited() {
    let table = draw_with_theme(&students(), TableTheme::markdown());

    assert_eq!(
        table,
        "| student_id | name  | age |\n\
         |------------|-------|-----|\n\
         | 101        | Alice | 20  |\n\
         | 102        | Bob   | 21  |\n\
         | 103        | Carol | 19  |"
    );
}

#[test]
fn psql_theme_underlines_the_header() {
    let table = draw_with_theme(&students(), TableTheme::psql());

    let mut lines = table.lines();
    assert_eq!(
        lines.next().map(str::trim_end),
        Some(" student_id | name  | age")
    );
    assert_eq!(lines.next(), Some("------------+-------+-----"));
    assert_eq!(lines.next().map(str::trim_end), Some(" 101        | Alice | 20"));
}

#[test]
fn none_theme_draws_no_borders() {
    let table = draw_with_theme(&students(), TableTheme::none());

    assert!(!table.contains('|'), "unexpected border in: {table}");
    assert!(!table.contains('+'), "unexpected border in: {table}");
    assert!(table.contains("Alice"));
}

#[test]
fn rowless_frame_draws_its_header_only() {
    let table = draw_with_theme(&students().head(0), TableTheme::basic());

    assert_eq!(
        table,
        "+------------+------+-----+\n\
         | student_id | name | age |\n\
         +------------+------+-----+"
    );
}

#[test]
fn header_can_be_turned_off() {
    let table = FrameView::with_config(
        &students(),
        FrameViewConfig {
            with_header: false,
            ..Default::default()
        },
    )
    .draw();

    assert_eq!(
        table,
        "+-----+-------+----+\n\
         | 101 | Alice | 20 |\n\
         +-----+-------+----+\n\
         | 102 | Bob   | 21 |\n\
         +-----+-------+----+\n\
         | 103 | Carol | 19 |\n\
         +-----+-------+----+"
    );
}

#[test]
fn columnless_frame_draws_nothing() {
    let frame = students().select(&[]).unwrap();
    assert_eq!(FrameView::new(&frame).draw(), "");
}

#[test]
fn nothing_cells_draw_as_empty() {
    let frame = DataFrame::from_records(vec![
        record!("a" => Value::int(1)),
        record!("b" => Value::int(2)),
    ])
    .unwrap();
    let table = draw_with_theme(&frame, TableTheme::markdown());

    assert_eq!(
        table,
        "| a | b |\n\
         |---|---|\n\
         | 1 |   |\n\
         |   | 2 |"
    );
}

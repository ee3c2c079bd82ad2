use framelet_protocol::DataFrame;
use tabled::{builder::Builder, settings::Alignment};

use crate::TableTheme;

/// How a frame should be drawn.
#[derive(Debug, Clone)]
pub struct FrameViewConfig {
    pub theme: TableTheme,
    pub with_header: bool,
}

impl Default for FrameViewConfig {
    fn default() -> Self {
        Self {
            theme: TableTheme::basic(),
            with_header: true,
        }
    }
}

/// Renders a [`DataFrame`] as text.
///
/// The header row carries the column names; every cell is the display form
/// of its value, `Nothing` cells drawing as empty. A frame with rows but no
/// columns draws as the empty string.
pub struct FrameView<'a> {
    frame: &'a DataFrame,
    config: FrameViewConfig,
}

impl<'a> FrameView<'a> {
    pub fn new(frame: &'a DataFrame) -> Self {
        Self {
            frame,
            config: FrameViewConfig::default(),
        }
    }

    pub fn with_config(frame: &'a DataFrame, config: FrameViewConfig) -> Self {
        Self { frame, config }
    }

    pub fn draw(&self) -> String {
        if self.frame.width() == 0 {
            return String::new();
        }

        let mut builder = Builder::default();
        if self.config.with_header {
            builder.push_record(self.frame.column_names());
        }
        for record in self.frame.rows() {
            builder.push_record(record.into_values().map(|value| value.to_string()));
        }

        let mut table = builder.build();
        self.config.theme.apply(&mut table);
        table.with(Alignment::left());
        table.to_string()
    }
}

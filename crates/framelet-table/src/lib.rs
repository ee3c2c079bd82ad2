mod table;
mod table_theme;

pub use table::{FrameView, FrameViewConfig};
pub use table_theme::TableTheme;

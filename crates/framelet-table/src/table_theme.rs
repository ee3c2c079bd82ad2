use tabled::{settings::Style, Table};

/// Named border styles a drawn frame can wear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableTheme {
    style: ThemeStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum ThemeStyle {
    #[default]
    Basic,
    Rounded,
    Psql,
    Markdown,
    Blank,
}

impl TableTheme {
    pub fn basic() -> TableTheme {
        Self {
            style: ThemeStyle::Basic,
        }
    }

    pub fn rounded() -> TableTheme {
        Self {
            style: ThemeStyle::Rounded,
        }
    }

    pub fn psql() -> TableTheme {
        Self {
            style: ThemeStyle::Psql,
        }
    }

    pub fn markdown() -> TableTheme {
        Self {
            style: ThemeStyle::Markdown,
        }
    }

    pub fn none() -> TableTheme {
        Self {
            style: ThemeStyle::Blank,
        }
    }

    pub(crate) fn apply(&self, table: &mut Table) {
        match self.style {
            ThemeStyle::Basic => table.with(Style::ascii()),
            ThemeStyle::Rounded => table.with(Style::rounded()),
            ThemeStyle::Psql => table.with(Style::psql()),
            ThemeStyle::Markdown => table.with(Style::markdown()),
            ThemeStyle::Blank => table.with(Style::blank()),
        };
    }
}

use crate::layout::DisplayTable;
use tabled::builder::Builder;
use tabled::settings::object::Cell as GridCell;
use tabled::settings::{Modify, Span, Style};
use tabled::Table;

impl DisplayTable {
    /// Draws the grid with its span overrides applied.
    pub fn render(&self) -> String {
        self.to_table().to_string()
    }

    pub fn to_table(&self) -> Table {
        let mut builder = Builder::default();
        for row in self.rows() {
            builder.push_record(
                row.iter()
                    .map(|cell| cell.as_ref().map(ToString::to_string).unwrap_or_default()),
            );
        }

        let mut table = builder.build();
        table.with(Style::modern());
        for (&(row, col), &span) in self.col_spans() {
            table.with(Modify::new(GridCell::new(row, col)).with(Span::column(span as _)));
        }
        for (&(row, col), &span) in self.row_spans() {
            table.with(Modify::new(GridCell::new(row, col)).with(Span::row(span as _)));
        }
        table
    }
}

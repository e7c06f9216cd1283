//! # Presentation
//!
//! [`TableWidget`] lays a [`Table`] out with `ratatui`'s table widget. The
//! structure itself carries no styling; column widths, alignment and the header
//! style are decided here and drawn by `ratatui`.
//!
//! Widths are measured in terminal cells, not `char`s, so wide glyphs such as
//! `山田太郎` keep every later column aligned.
//!
//! The widget can be drawn into any `ratatui` frame, or off-screen with
//! [`TableWidget::lines`] / [`TableWidget::write_io`] for plain stdout output.

use crate::error::TableError;
use crate::table::Table;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Cell as TuiCell, Row as TuiRow, Table as TuiTable, Widget};
use std::io;
use unicode_width::UnicodeWidthStr;

/// `ratatui` presentation of a [`Table`].
///
/// Numeric cells are right-aligned and text cells left-aligned. A column whose
/// data cells are all numeric also right-aligns its header label. The header
/// row is bold.
///
/// ```text
/// ID  Customer     Date        Amount  Status
///  1  John Doe     2023-10-26     100  Shipped
/// ```
#[derive(Debug, Clone)]
pub struct TableWidget<'a> {
    table: &'a Table,
    column_spacing: u16,
    header_style: Style,
}

impl<'a> TableWidget<'a> {
    pub fn new(table: &'a Table) -> Self {
        Self {
            table,
            column_spacing: 2,
            header_style: Style::new().add_modifier(Modifier::BOLD),
        }
    }

    /// Blank cells between adjacent columns. Defaults to 2.
    pub fn column_spacing(mut self, spacing: u16) -> Self {
        self.column_spacing = spacing;
        self
    }

    /// Content width of each column in terminal cells: the widest of the label
    /// and every cell below it.
    pub fn widths(&self) -> Vec<u16> {
        let mut widths: Vec<usize> = self
            .table
            .header()
            .labels()
            .iter()
            .map(|label| Line::from(label.as_str()).width())
            .collect();
        for row in self.table.rows() {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(Line::from(cell.text()).width());
            }
        }
        widths.into_iter().map(saturate).collect()
    }

    /// Smallest area that shows every column and row without truncation.
    pub fn area(&self) -> Rect {
        let widths = self.widths();
        let gaps = widths.len().saturating_sub(1) as u16;
        let width = widths
            .iter()
            .fold(gaps.saturating_mul(self.column_spacing), |acc, w| acc.saturating_add(*w));
        Rect::new(0, 0, width, saturate(self.table.row_count()))
    }

    /// Draws off-screen and returns one string per terminal row, trailing blanks trimmed.
    pub fn lines(&self) -> Vec<String> {
        let area = self.area();
        let mut buf = Buffer::empty(area);
        self.render(area, &mut buf);
        buffer_lines(&buf)
    }

    /// Writes [`TableWidget::lines`] to an I/O sink such as stdout.
    pub fn write_io<W: io::Write>(&self, mut out: W) -> Result<(), TableError> {
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }

    fn numeric_columns(&self) -> Vec<bool> {
        let table = self.table;
        (0..table.column_count())
            .map(|col| {
                !table.is_empty()
                    && table
                        .rows()
                        .iter()
                        .all(|row| row.cells().get(col).is_some_and(|c| c.is_numeric()))
            })
            .collect()
    }

    fn to_tui(&self) -> TuiTable<'static> {
        let header = TuiRow::new(
            self.table
                .header()
                .labels()
                .iter()
                .zip(self.numeric_columns())
                .map(|(label, numeric)| aligned(label.clone(), numeric)),
        )
        .style(self.header_style);

        let rows = self.table.rows().iter().map(|row| {
            TuiRow::new(
                row.cells()
                    .iter()
                    .map(|cell| aligned(cell.text(), cell.is_numeric())),
            )
        });

        TuiTable::new(rows, self.widths().into_iter().map(Constraint::Length))
            .header(header)
            .column_spacing(self.column_spacing)
    }
}

impl Widget for &TableWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(self.to_tui(), area, buf);
    }
}

impl Widget for TableWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        (&self).render(area, buf);
    }
}

/// Text of every row in `buf`, trailing blanks trimmed.
///
/// Cells hidden behind a wide glyph are skipped, so the result reads as the
/// terminal would show it.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let mut line = String::new();
            let mut skip = 0usize;
            for x in area.left()..area.right() {
                let symbol = buf[(x, y)].symbol();
                if skip == 0 {
                    line.push_str(symbol);
                }
                skip = skip.max(symbol.width()).saturating_sub(1);
            }
            line.trim_end().to_string()
        })
        .collect()
}

fn aligned(text: String, numeric: bool) -> TuiCell<'static> {
    let alignment = if numeric {
        Alignment::Right
    } else {
        Alignment::Left
    };
    TuiCell::from(Line::from(text).alignment(alignment))
}

fn saturate(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

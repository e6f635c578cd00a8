//! Console formatting module - Pure rendering concerns
//!
//! This module handles all console output formatting including:
//! - Table layout and borders
//! - Color terminal output
//! - Padding by display width
//!
//! It accepts pre-formatted rows from the report module and renders them.
//!
//! ## Output Flexibility
//!
//! `TableWriter` writes to any `std::io::Write` destination: a locked
//! stdout in the CLI, a `Vec<u8>` in tests.

use crate::report::{FormattedRow, PercentCell, TableRow};
use log::debug;
use std::io::{self, Write};
use term::color::Color;
use terminal_size::{Width, terminal_size};
use unicode_width::UnicodeWidthStr;

/// Column headers, in display order
pub const HEADERS: [&str; 5] = ["File", "% Stmts", "% Branch", "% Lines", "Uncovered Line #s"];

/// Borders and padding: 6 × "│" plus one space each side of 5 cells
pub const FIXED_OVERHEAD: usize = 16;

/// Width of the three percentage columns ("% Stmts", "% Branch", "% Lines")
pub const PERCENT_COLUMNS_WIDTH: usize = 7 + 8 + 7;

/// Writer for table output - configurable for color/plain text
pub struct TableWriter<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> TableWriter<W> {
    /// Create a new table writer
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Write text in a foreground color, or plain when colors are off
    fn write_colored(&mut self, text: &str, color: Color) -> io::Result<()> {
        if self.use_colors {
            write!(self.writer, "\x1b[{}m{}\x1b[0m", ansi_foreground(color), text)
        } else {
            write!(self.writer, "{}", text)
        }
    }

    /// Write a horizontal border line
    fn write_border(&mut self, w: &TableWidths, left: char, middle: char, right: char) -> io::Result<()> {
        let segments: Vec<String> = w.columns().iter().map(|width| "─".repeat(width + 2)).collect();
        writeln!(self.writer, "{}{}{}", left, segments.join(&middle.to_string()), right)
    }

    /// Write the header block: top border, column titles, separator
    pub fn write_table_header(&mut self, w: &TableWidths) -> io::Result<()> {
        self.write_border(w, '┌', '┬', '┐')?;
        let cells: Vec<String> =
            HEADERS.iter().zip(w.columns().iter()).map(|(title, width)| pad_right(title, *width)).collect();
        writeln!(self.writer, "│ {} │", cells.join(" │ "))?;
        self.write_border(w, '├', '┼', '┤')
    }

    /// Write the separator that follows the summary row
    pub fn write_separator_line(&mut self, w: &TableWidths) -> io::Result<()> {
        self.write_border(w, '├', '┼', '┤')
    }

    /// Write the bottom border
    pub fn write_table_footer(&mut self, w: &TableWidths) -> io::Result<()> {
        self.write_border(w, '└', '┴', '┘')
    }

    /// Write one data row; percentage cells are right-aligned and colored by band
    pub fn write_main_row(&mut self, row: &FormattedRow, w: &TableWidths) -> io::Result<()> {
        write!(self.writer, "│ {} │ ", pad_right(&row.label, w.file))?;
        self.write_percent_cell(&row.statements, w.statements)?;
        write!(self.writer, " │ ")?;
        self.write_percent_cell(&row.branches, w.branches)?;
        write!(self.writer, " │ ")?;
        self.write_percent_cell(&row.lines, w.lines)?;
        writeln!(self.writer, " │ {} │", pad_right(&row.uncovered, w.uncovered))
    }

    fn write_percent_cell(&mut self, cell: &PercentCell, width: usize) -> io::Result<()> {
        let padding = width.saturating_sub(display_width(&cell.text));
        write!(self.writer, "{}", " ".repeat(padding))?;
        match cell.band {
            Some(band) => self.write_colored(&cell.text, band.color()),
            None => write!(self.writer, "{}", cell.text),
        }
    }

    /// Write a complete table: header, body rows, footer
    pub fn write_table(&mut self, rows: &[TableRow]) -> io::Result<()> {
        let widths = TableWidths::from_rows(rows);
        debug!("Table is {} columns wide", widths.total());
        self.write_table_header(&widths)?;
        for row in rows {
            match row {
                TableRow::Data(data) => self.write_main_row(data, &widths)?,
                TableRow::Separator => self.write_separator_line(&widths)?,
            }
        }
        self.write_table_footer(&widths)?;
        self.writer.flush()
    }
}

//
// Table Layout and Widths
//

/// Column content widths for the 5-column table (borders and padding excluded)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableWidths {
    pub file: usize,
    pub statements: usize,
    pub branches: usize,
    pub lines: usize,
    pub uncovered: usize,
}

impl TableWidths {
    /// Size every column to its widest cell, header included
    pub fn from_rows(rows: &[TableRow]) -> Self {
        let mut w = TableWidths {
            file: display_width(HEADERS[0]),
            statements: display_width(HEADERS[1]),
            branches: display_width(HEADERS[2]),
            lines: display_width(HEADERS[3]),
            uncovered: display_width(HEADERS[4]),
        };

        for row in rows {
            if let TableRow::Data(r) = row {
                w.file = w.file.max(display_width(&r.label));
                w.statements = w.statements.max(display_width(&r.statements.text));
                w.branches = w.branches.max(display_width(&r.branches.text));
                w.lines = w.lines.max(display_width(&r.lines.text));
                w.uncovered = w.uncovered.max(display_width(&r.uncovered));
            }
        }
        w
    }

    fn columns(&self) -> [usize; 5] {
        [self.file, self.statements, self.branches, self.lines, self.uncovered]
    }

    /// Total rendered width including borders and padding
    pub fn total(&self) -> usize {
        self.columns().iter().sum::<usize>() + FIXED_OVERHEAD
    }
}

/// Detected terminal width, None when stdout is not a terminal
pub fn detect_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

//
// Text Formatting Utilities
//

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad with trailing spaces to `width` display columns
pub fn pad_right(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(padding))
}

/// SGR foreground code for a term color (0-7 normal, 8-15 bright)
fn ansi_foreground(color: Color) -> u32 {
    if color < 8 { 30 + color } else { 90 + (color - 8) % 8 }
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;

//! Fixed-width table rendering for paginated listings.
//!
//! Every listing uses the same layout: a 1-based row number column
//! followed by 15-character columns separated by " | ", values
//! truncated to fit.

/// Width of every data column.
pub const COL_WIDTH: usize = 15;

/// Width of the leading row-number column.
pub const NO_WIDTH: usize = 4;

/// A column heading.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
}

impl Column {
    #[must_use]
    pub const fn new(header: &'static str) -> Self {
        Self { header }
    }
}

/// Truncate to `width` characters (not bytes, so multibyte titles
/// don't split mid-character) and pad to exactly `width`.
#[must_use]
pub fn cell(value: &str, width: usize) -> String {
    let truncated: String = value.chars().take(width).collect();
    format!("{truncated:<width$}")
}

/// The heading line: `No.  Header1         | Header2        ...`
#[must_use]
pub fn header_line(columns: &[Column]) -> String {
    let headers: Vec<String> = columns
        .iter()
        .map(|col| cell(col.header, COL_WIDTH))
        .collect();
    format!("{:<NO_WIDTH$} {}", "No.", headers.join(" | "))
}

/// A data line with its 1-based row number.
#[must_use]
pub fn row_line(no: usize, values: &[String]) -> String {
    let cells: Vec<String> = values.iter().map(|v| cell(v, COL_WIDTH)).collect();
    format!("{no:<NO_WIDTH$} {}", cells.join(" | "))
}

/// A dashed rule as wide as the table.
#[must_use]
pub fn rule(columns: &[Column]) -> String {
    let width = NO_WIDTH + 1 + columns.len() * COL_WIDTH + columns.len().saturating_sub(1) * 3;
    "-".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: &[Column] = &[Column::new("Title"), Column::new("Author")];

    #[test]
    fn test_cell_truncates_and_pads() {
        assert_eq!(cell("short", 15), "short          ");
        assert_eq!(cell("a very long value indeed", 15), "a very long val");
        assert_eq!(cell("", 4), "    ");
    }

    #[test]
    fn test_cell_is_char_safe() {
        // 3 characters, 7 bytes
        assert_eq!(cell("日本語", 3), "日本語");
    }

    #[test]
    fn test_header_and_rows_align() {
        let header = header_line(COLUMNS);
        let row = row_line(1, &["Dune".to_string(), "Frank Herbert".to_string()]);
        assert!(header.starts_with("No.  Title"));
        assert!(row.starts_with("1    Dune"));
        assert_eq!(header.len(), row.len());
        assert_eq!(rule(COLUMNS).len(), header.len());
    }
}

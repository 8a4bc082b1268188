//! CSV building for table exports.
//!
//! The text is assembled here so it can be unit-tested on the host; the
//! frontend only wraps the result in a Blob and triggers the download.

/// Types that can be exported as a CSV table.
pub trait CsvExportable {
    /// Column headers, in output order.
    fn headers() -> Vec<&'static str>;

    /// One row of cell values matching `headers()`.
    fn to_csv_row(&self) -> Vec<String>;
}

const SEPARATOR: char = ',';

/// Build the full CSV document for a list of records.
///
/// Starts with a UTF-8 BOM so Excel opens the file with the right
/// encoding, then a header row, then one line per record.
pub fn build_csv<T: CsvExportable>(items: &[T]) -> String {
    let mut out = String::new();
    out.push('\u{FEFF}');

    out.push_str(&join_row(
        &T::headers().iter().map(|h| h.to_string()).collect::<Vec<_>>(),
    ));
    out.push('\n');

    for item in items {
        out.push_str(&join_row(&item.to_csv_row()));
        out.push('\n');
    }

    out
}

fn join_row(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| escape_cell(cell))
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
}

/// Quote a cell when it contains the separator, quotes or line breaks.
pub fn escape_cell(cell: &str) -> String {
    if cell.contains(SEPARATOR) || cell.contains('"') || cell.contains('\n') || cell.contains('\r')
    {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, f64);

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Amount"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn plain_cells_pass_through() {
        assert_eq!(escape_cell("Meta"), "Meta");
    }

    #[test]
    fn cells_with_separator_are_quoted() {
        assert_eq!(escape_cell("a,b"), "\"a,b\"");
    }

    #[test]
    fn quotes_are_doubled() {
        assert_eq!(escape_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn newlines_force_quoting() {
        assert_eq!(escape_cell("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn document_has_bom_header_and_rows() {
        let csv = build_csv(&[Row("Winter Sale, phase 2", 1500.0)]);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("\u{FEFF}Name,Amount"));
        assert_eq!(lines.next(), Some("\"Winter Sale, phase 2\",1500"));
        assert_eq!(lines.next(), None);
    }
}

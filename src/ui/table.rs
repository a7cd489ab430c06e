//! Table rendering for formatted output.

use console::measure_text_width;

/// A simple box-drawing table with an optional title.
#[derive(Debug)]
pub struct Table {
    title: Option<String>,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    column_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers.
    pub fn new(headers: Vec<&str>) -> Self {
        let headers: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        let column_widths = headers.iter().map(|h| measure_text_width(h)).collect();

        Self {
            title: None,
            headers,
            rows: Vec::new(),
            column_widths,
        }
    }

    /// Set a title rendered above the table.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<String>) {
        // Widths are measured ignoring ANSI styling so colored cells align.
        for (i, cell) in row.iter().enumerate() {
            if i < self.column_widths.len() {
                self.column_widths[i] = self.column_widths[i].max(measure_text_width(cell));
            }
        }

        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let mut output = String::new();

        if let Some(title) = &self.title {
            output.push_str(title);
            output.push('\n');
        }

        output.push_str(&self.render_border('┌', '┬', '┐'));
        output.push('\n');

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');

        output.push_str(&self.render_border('├', '┼', '┤'));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output.push_str(&self.render_border('└', '┴', '┘'));

        output
    }

    fn render_border(&self, left: char, mid: char, right: char) -> String {
        let mut s = String::new();
        s.push(left);

        for (i, width) in self.column_widths.iter().enumerate() {
            s.push_str(&"─".repeat(width + 2));
            if i < self.column_widths.len() - 1 {
                s.push(mid);
            }
        }

        s.push(right);
        s
    }

    fn render_row(&self, row: &[String]) -> String {
        let mut s = String::from("│");

        for (i, width) in self.column_widths.iter().enumerate() {
            let cell = row.get(i).map(|s| s.as_str()).unwrap_or("");
            let pad = width.saturating_sub(measure_text_width(cell));
            s.push(' ');
            s.push_str(cell);
            s.push_str(&" ".repeat(pad));
            s.push_str(" │");
        }

        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn table_empty() {
        let table = Table::new(vec!["A", "B"]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);

        let output = table.render();
        assert!(output.contains("A"));
        assert!(output.contains("B"));
    }

    #[test]
    fn table_with_rows() {
        let mut table = Table::new(vec!["Step", "Status"]);
        table.add_row(row(&["compile", "completed"]));
        table.add_row(row(&["test", "failed"]));

        assert_eq!(table.row_count(), 2);

        let output = table.render();
        assert!(output.contains("compile"));
        assert!(output.contains("completed"));
        assert!(output.contains("test"));
        assert!(output.contains("failed"));
    }

    #[test]
    fn table_renders_title_above_box() {
        let table = Table::new(vec!["A"]).with_title("Available Workflows");
        let output = table.render();
        assert!(output.starts_with("Available Workflows\n┌"));
    }

    #[test]
    fn table_adjusts_column_width() {
        let mut table = Table::new(vec!["A"]);
        table.add_row(row(&["longer_value"]));

        let output = table.render();
        assert!(output.contains("longer_value"));
    }

    #[test]
    fn table_ignores_ansi_codes_for_width() {
        let mut table = Table::new(vec!["Status"]);
        let styled = console::Style::new().green().force_styling(true);
        table.add_row(vec![styled.apply_to("completed").to_string()]);
        table.add_row(row(&["pending"]));

        let output = table.render();
        // Both rows should end in a column border at the same visual width.
        let lines: Vec<_> = output.lines().collect();
        assert!(lines.iter().all(|l| l.ends_with('│')
            || l.ends_with('┐')
            || l.ends_with('┤')
            || l.ends_with('┘')));
    }

    #[test]
    fn table_uses_box_drawing() {
        let table = Table::new(vec!["Test"]);
        let output = table.render();

        assert!(output.contains("┌"));
        assert!(output.contains("┐"));
        assert!(output.contains("└"));
        assert!(output.contains("┘"));
        assert!(output.contains("│"));
        assert!(output.contains("─"));
    }

    #[test]
    fn table_handles_missing_cells() {
        let mut table = Table::new(vec!["A", "B", "C"]);
        table.add_row(row(&["only", "two"]));

        let output = table.render();
        assert!(output.contains("only"));
        assert!(output.contains("two"));
    }

    #[test]
    fn table_render_consistency() {
        let mut table = Table::new(vec!["Step", "Duration", "Status"]);
        table.add_row(row(&["plan", "1.2s", "✓"]));
        table.add_row(row(&["apply", "45.3s", "✓"]));
        table.add_row(row(&["verify", "5.0s", "✗"]));

        let output = table.render();
        let lines: Vec<_> = output.lines().collect();

        // Top border, header, separator, 3 data rows, bottom border.
        assert_eq!(lines.len(), 7);
    }
}

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

/// Configuration for a single column of a rendered table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            min_width: 1,
            max_width: None,
            alignment: Alignment::Left,
        }
    }

    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Column metadata plus rows of cells, rendered as aligned text.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub show_headers: bool,
    pub padding: usize,
    pub plain: bool,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>, rows: Vec<Vec<String>>) -> Self {
        Self {
            columns,
            rows,
            show_headers: true,
            padding: 1,
            plain: false,
        }
    }

    /// Content width of each column from headers, rows, and constraints.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = visible_width(&column.header).max(column.min_width);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(visible_width(cell));
                    }
                }
                if let Some(max_width) = column.max_width {
                    width = width.min(max_width);
                }
                width
            })
            .collect()
    }

    /// Renders a single row using the provided column widths.
    pub fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let rendered_cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cell_text = row.get(idx).map(|s| s.as_str()).unwrap_or("");
                render_cell(cell_text, widths[idx], &column.alignment, self.padding)
            })
            .collect();

        rendered_cells.join(" ").trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let rule = horizontal_rule(&widths, self.padding, self.plain);
        let mut lines = Vec::with_capacity(self.rows.len() + 4);

        if self.show_headers {
            let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
            lines.push(rule.clone());
            lines.push(self.render_row(&header, &widths));
            lines.push(rule.clone());
        }
        for row in &self.rows {
            lines.push(self.render_row(row, &widths));
        }
        if self.show_headers {
            lines.push(rule);
        }

        lines.join("\n")
    }
}

/// Character count, ignoring ANSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut idx = 0;
    let mut width = 0;

    while idx < bytes.len() {
        if bytes[idx] == 0x1b {
            idx += 1;
            if idx < bytes.len() && bytes[idx] == b'[' {
                idx += 1;
                while idx < bytes.len() {
                    let byte = bytes[idx];
                    idx += 1;
                    if (0x40..=0x7E).contains(&byte) {
                        break;
                    }
                }
                continue;
            }
        }

        if let Some(ch) = text[idx..].chars().next() {
            width += 1;
            idx += ch.len_utf8();
        } else {
            break;
        }
    }

    width
}

fn truncate_text(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if visible_width(text) <= width {
        return text.to_string();
    }
    if width == 1 {
        return "…".to_string();
    }

    let mut result: String = text.chars().take(width - 1).collect();
    result.push('…');
    result
}

/// Renders a single cell with padding and alignment applied.
pub fn render_cell(text: &str, width: usize, alignment: &Alignment, padding: usize) -> String {
    let fitted = truncate_text(text, width);
    let remaining = width.saturating_sub(visible_width(&fitted));

    let (left_spaces, right_spaces) = match alignment {
        Alignment::Left => (0, remaining),
        Alignment::Right => (remaining, 0),
        Alignment::Center => (remaining / 2, remaining - (remaining / 2)),
    };

    let mut cell = String::new();
    cell.push_str(&" ".repeat(padding + left_spaces));
    cell.push_str(&fitted);
    cell.push_str(&" ".repeat(right_spaces + padding));
    cell
}

/// Horizontal rule spanning the width of the table.
pub fn horizontal_rule(widths: &[usize], padding: usize, plain: bool) -> String {
    if widths.is_empty() {
        return String::new();
    }

    let total_width: usize =
        widths.iter().map(|w| w + (padding * 2)).sum::<usize>() + widths.len().saturating_sub(1);
    let ch = if plain { '-' } else { '─' };
    ch.to_string().repeat(total_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_calculation_respects_constraints() {
        let table = Table::new(
            vec![
                TableColumn::new("Name").with_max_width(8),
                TableColumn::new("City"),
            ],
            vec![
                vec!["Bartholomew".into(), "Austin".into()],
                vec!["Ann".into(), "San Francisco".into()],
            ],
        );
        assert_eq!(table.compute_widths(), vec![8, 13]);
    }

    #[test]
    fn render_cell_respects_alignment() {
        assert_eq!(render_cell("AB", 4, &Alignment::Left, 1), " AB   ");
        assert_eq!(render_cell("AB", 4, &Alignment::Right, 1), "   AB ");
        assert_eq!(render_cell("X", 5, &Alignment::Center, 1), "   X   ");
    }

    #[test]
    fn long_cells_are_truncated_with_ellipsis() {
        assert_eq!(render_cell("Bartholomew", 5, &Alignment::Left, 0), "Bart…");
        assert_eq!(render_cell("Bartholomew", 1, &Alignment::Left, 0), "…");
    }

    #[test]
    fn ansi_sequences_have_no_width() {
        assert_eq!(visible_width("\u{1b}[31mred\u{1b}[0m"), 3);
    }

    #[test]
    fn renders_full_table_example() {
        let mut table = Table::new(
            vec![
                TableColumn::new("firstName"),
                TableColumn::new("age").with_alignment(Alignment::Right),
            ],
            vec![
                vec!["Ann".into(), "41".into()],
                vec!["Bo".into(), "7".into()],
            ],
        );
        table.plain = true;

        let expected = concat!(
            "-----------------\n",
            " firstName   age\n",
            "-----------------\n",
            " Ann          41\n",
            " Bo            7\n",
            "-----------------"
        );
        assert_eq!(table.render(), expected);
    }
}

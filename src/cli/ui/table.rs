/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn left(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            alignment: Alignment::Left,
        }
    }

    pub fn right(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            alignment: Alignment::Right,
        }
    }
}

/// Plain-text table with padded columns and a header rule.
#[derive(Clone, Debug, Default)]
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub padding: usize,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            padding: 1,
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>) {
        self.rows
            .push(cells.into_iter().map(|cell| cell.into()).collect());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest cell per column, headers included.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| cell.chars().count())
                    .fold(column.header.chars().count(), usize::max)
            })
            .collect()
    }

    pub fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                render_cell(text, widths[idx], column.alignment, self.padding)
            })
            .collect();
        cells.join(" ").trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        let mut lines = vec![
            self.render_row(&header, &widths),
            horizontal_rule(&widths, self.padding),
        ];
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        lines.join("\n")
    }
}

pub fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let remaining = width.saturating_sub(text.chars().count());
    let pad = " ".repeat(padding);
    match alignment {
        Alignment::Left => format!("{pad}{text}{}{pad}", " ".repeat(remaining)),
        Alignment::Right => format!("{pad}{}{text}{pad}", " ".repeat(remaining)),
    }
}

pub fn horizontal_rule(widths: &[usize], padding: usize) -> String {
    let total: usize = widths.iter().map(|w| w + padding * 2).sum::<usize>()
        + widths.len().saturating_sub(1);
    "-".repeat(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_size_to_widest_cell() {
        let mut table = Table::new(vec![TableColumn::right("Qty"), TableColumn::left("Item #")]);
        table.add_row(vec!["12", "BKR-150-100"]);
        table.add_row(vec!["3", "STP-150"]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], " Qty   Item #");
        assert_eq!(lines[1], "-".repeat(5 + 13 + 1));
        assert_eq!(lines[2], "  12   BKR-150-100");
        assert_eq!(lines[3], "   3   STP-150");
    }
}

/// One fixed-width, left-justified column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub width: usize,
}

impl Column {
    pub const fn new(label: &'static str, width: usize) -> Self {
        Self { label, width }
    }
}

/// Fixed-width text table layout shared by a header and its data rows
///
/// `gaps[i]` is the number of spaces between column `i` and column `i + 1`.
/// Values longer than their column are written in full and push the rest of
/// the line to the right; nothing is truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    columns: Vec<Column>,
    gaps: Vec<usize>,
}

impl TableLayout {
    pub fn new(columns: Vec<Column>, gaps: Vec<usize>) -> Self {
        debug_assert_eq!(gaps.len() + 1, columns.len());
        Self { columns, gaps }
    }

    /// Character offset at which column `index` starts
    pub fn offset(&self, index: usize) -> usize {
        self.columns[..index].iter().map(|c| c.width).sum::<usize>()
            + self.gaps[..index].iter().sum::<usize>()
    }

    /// Column labels rendered with the same widths as the data
    pub fn header_line(&self) -> String {
        let labels: Vec<&str> = self.columns.iter().map(|c| c.label).collect();
        self.render_row(&labels)
    }

    /// Labels placed at the start offset of the given columns, used for
    /// spanning titles such as "Start" over a time/altitude/azimuth group.
    pub fn group_line(&self, groups: &[(&str, usize)]) -> String {
        let mut line = String::new();
        for (label, column) in groups {
            let offset = self.offset(*column);
            let current = line.chars().count();
            if current < offset {
                line.push_str(&" ".repeat(offset - current));
            } else if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(label);
        }
        line.push('\n');
        line
    }

    /// Renders one line, padding each cell to its column width
    pub fn render_row(&self, cells: &[&str]) -> String {
        let mut line = String::new();
        for (i, (column, cell)) in self.columns.iter().zip(cells).enumerate() {
            line.push_str(&format!("{:<width$}", cell, width = column.width));
            if let Some(gap) = self.gaps.get(i) {
                line.push_str(&" ".repeat(*gap));
            }
        }
        line.push('\n');
        line
    }
}

use crate::shared::Result;
use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page
///
/// Parsing goes through html5ever, which recovers from malformed markup the
/// same way a browser does, so building a `Document` never fails.
#[derive(Debug)]
pub struct Document {
    html: Html,
}

/// Text content of the `td` cells of one table row, in column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    cells: Vec<String>,
}

impl TableRow {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Document {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// Selects every `tr` whose class attribute contains `marker`, in
    /// document order, and reads the text of each of its `td` children.
    ///
    /// Matching is a substring match, so `class="clickableRow lightrow"`
    /// matches the marker `clickableRow`.
    pub fn rows_with_class(&self, marker: &str) -> Result<Vec<TableRow>> {
        let selector = Selector::parse(&format!("tr[class*=\"{}\"]", marker))
            .map_err(|e| anyhow::anyhow!("Invalid row selector for marker '{}': {:?}", marker, e))?;

        Ok(self
            .html
            .select(&selector)
            .map(|row| TableRow::new(Self::cell_texts(row)))
            .collect())
    }

    /// Text of the direct `td` children only; cells of nested tables are
    /// part of their enclosing cell's text.
    fn cell_texts(row: ElementRef<'_>) -> Vec<String> {
        row.children()
            .filter_map(ElementRef::wrap)
            .filter(|child| child.value().name() == "td")
            .map(|cell| cell.text().collect::<String>())
            .collect()
    }
}

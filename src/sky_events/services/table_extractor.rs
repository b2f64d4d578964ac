use crate::shared::error::DigestError;
use crate::shared::Result;
use crate::sky_events::domain::{Document, FlareRecord, PassRecord, TableRow, TimeSet};

/// Class marker the service puts on data rows (as opposed to headers and spacers)
pub const CLICKABLE_ROW_MARKER: &str = "clickableRow";

const PASS_ROW_CELLS: usize = 11;
const FLARE_ROW_CELLS: usize = 8;

const DEGREE_SIGN: char = '\u{b0}';

/// Removes every degree sign from an angle value, leaving the rest untouched
pub fn strip_degree_sign(value: &str) -> String {
    value.replace(DEGREE_SIGN, "")
}

/// TableExtractor - converts prediction tables into typed records
///
/// Rows are located by the clickable-row marker and cells are read by fixed
/// position. A row with too few cells fails the whole extraction instead of
/// yielding a partial report.
pub struct TableExtractor;

impl TableExtractor {
    /// Extracts every pass row of a pass-summary page, in document order
    pub fn extract_passes(document: &Document) -> Result<Vec<PassRecord>> {
        document
            .rows_with_class(CLICKABLE_ROW_MARKER)?
            .iter()
            .map(Self::parse_pass_row)
            .collect()
    }

    /// Extracts every flare row of an Iridium-flare page, in document order
    pub fn extract_flares(document: &Document) -> Result<Vec<FlareRecord>> {
        document
            .rows_with_class(CLICKABLE_ROW_MARKER)?
            .iter()
            .map(Self::parse_flare_row)
            .collect()
    }

    /// Cell layout: date, magnitude, then time/altitude/azimuth for start,
    /// peak and end.
    pub fn parse_pass_row(row: &TableRow) -> Result<PassRecord> {
        let cells = Self::require_cells(row, PASS_ROW_CELLS, "pass")?;

        Ok(PassRecord::new(
            cells[0].as_str(),
            cells[1].as_str(),
            Self::time_set(&cells[2..5]),
            Self::time_set(&cells[5..8]),
            Self::time_set(&cells[8..11]),
        ))
    }

    /// Cell layout: time, magnitude, altitude, azimuth, satellite, centre
    /// distance, centre magnitude, sun altitude.
    pub fn parse_flare_row(row: &TableRow) -> Result<FlareRecord> {
        let cells = Self::require_cells(row, FLARE_ROW_CELLS, "flare")?;

        Ok(FlareRecord::new(
            cells[0].as_str(),
            cells[1].as_str(),
            strip_degree_sign(&cells[2]),
            strip_degree_sign(&cells[3]),
            cells[4].as_str(),
            cells[5].as_str(),
            cells[6].as_str(),
            strip_degree_sign(&cells[7]),
        ))
    }

    fn time_set(cells: &[String]) -> TimeSet {
        TimeSet::new(
            cells[0].as_str(),
            strip_degree_sign(&cells[1]),
            strip_degree_sign(&cells[2]),
        )
    }

    /// Returns the trimmed cells, or a typed error when the row is short.
    /// Cells past `expected` are ignored.
    fn require_cells(row: &TableRow, expected: usize, row_kind: &'static str) -> Result<Vec<String>> {
        if row.len() < expected {
            return Err(DigestError::RowParseError {
                row_kind,
                expected,
                actual: row.len(),
            }
            .into());
        }

        Ok(row
            .cells()
            .iter()
            .map(|cell| cell.trim().to_string())
            .collect())
    }
}

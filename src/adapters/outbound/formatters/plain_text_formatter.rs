use super::table_layout::{Column, TableLayout};
use crate::ports::outbound::ReportFormatter;
use crate::sky_events::domain::{FlareRecord, PassRecord, Report, ReportKind, SatelliteQuery};

/// Columns of a pass line: date, magnitude, then time/alt/az for start, peak and end
const PASS_COLUMNS: [Column; 11] = [
    Column::new("Date", 7),
    Column::new("Mag", 4),
    Column::new("Time", 8),
    Column::new("Al", 2),
    Column::new("Az", 3),
    Column::new("Time", 8),
    Column::new("Al", 2),
    Column::new("Az", 3),
    Column::new("Time", 8),
    Column::new("Al", 2),
    Column::new("Az", 3),
];
const PASS_GAPS: [usize; 10] = [2, 2, 1, 1, 2, 1, 1, 2, 1, 1];
const PASS_GROUPS: [(&str, usize); 3] = [("Start", 2), ("Peak", 5), ("End", 8)];

const FLARE_COLUMNS: [Column; 8] = [
    Column::new("Time", 15),
    Column::new("Mag", 4),
    Column::new("Al", 2),
    Column::new("Az", 9),
    Column::new("Satellite", 10),
    Column::new("Dst. Cntr.", 10),
    Column::new("CMag", 4),
    Column::new("SAl", 3),
];
const FLARE_GAPS: [usize; 7] = [2, 2, 1, 2, 2, 1, 1];

/// PlainTextFormatter adapter for fixed-width text reports
///
/// This adapter implements the ReportFormatter port. Header labels and data
/// rows are rendered through the same `TableLayout`, so columns line up for
/// any content that fits its width.
pub struct PlainTextFormatter {
    pass_layout: TableLayout,
    flare_layout: TableLayout,
}

impl PlainTextFormatter {
    pub fn new() -> Self {
        Self {
            pass_layout: TableLayout::new(PASS_COLUMNS.to_vec(), PASS_GAPS.to_vec()),
            flare_layout: TableLayout::new(FLARE_COLUMNS.to_vec(), FLARE_GAPS.to_vec()),
        }
    }
}

impl Default for PlainTextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl PlainTextFormatter {
    fn render_pass_report(&self, output: &mut String, satellite: &SatelliteQuery, passes: &[PassRecord]) {
        output.push_str(&format!("{}\n", satellite));
        output.push_str(&self.pass_layout.group_line(&PASS_GROUPS));
        output.push_str(&self.pass_layout.header_line());

        for pass in passes {
            output.push_str(&self.render_pass(pass));
        }
    }

    fn render_pass(&self, pass: &PassRecord) -> String {
        let (start, peak, end) = (pass.start(), pass.peak(), pass.end());
        self.pass_layout.render_row(&[
            pass.date(),
            pass.magnitude(),
            start.time(),
            start.altitude(),
            start.azimuth(),
            peak.time(),
            peak.altitude(),
            peak.azimuth(),
            end.time(),
            end.altitude(),
            end.azimuth(),
        ])
    }

    fn render_flare_report(&self, output: &mut String, flares: &[FlareRecord]) {
        output.push_str(&format!("{}\n", ReportKind::IridiumFlares.label()));
        output.push_str(&self.flare_layout.header_line());

        for flare in flares {
            output.push_str(&self.render_flare(flare));
        }
    }

    fn render_flare(&self, flare: &FlareRecord) -> String {
        self.flare_layout.render_row(&[
            flare.time(),
            flare.magnitude(),
            flare.altitude(),
            flare.azimuth(),
            flare.satellite(),
            flare.center_distance(),
            flare.center_magnitude(),
            flare.sun_altitude(),
        ])
    }
}

impl ReportFormatter for PlainTextFormatter {
    fn format(&self, report: &Report) -> String {
        let mut output = String::new();
        match report {
            Report::Passes { satellite, passes } => {
                self.render_pass_report(&mut output, satellite, passes)
            }
            Report::Flares { flares } => self.render_flare_report(&mut output, flares),
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sky_events::domain::TimeSet;

    fn iss() -> SatelliteQuery {
        SatelliteQuery::new("International Space Station", 25544).unwrap()
    }

    fn sample_pass() -> PassRecord {
        PassRecord::new(
            "12 Jan",
            "-1.5",
            TimeSet::new("21:14:00", "10", "N"),
            TimeSet::new("21:17:30", "85", "NE"),
            TimeSet::new("21:21:00", "10", "E"),
        )
    }

    fn sample_flare() -> FlareRecord {
        FlareRecord::new("04:32:11", "-3", "45", "270", "Iridium 33", "12 km", "2.1", "-10")
    }

    #[test]
    fn test_pass_report_header() {
        let output = PlainTextFormatter::new().format(&Report::passes(iss(), vec![]));
        assert_eq!(
            output,
            "International Space Station (25544)\n\
             \x20              Start            Peak             End\n\
             Date     Mag   Time     Al Az   Time     Al Az   Time     Al Az \n"
        );
    }

    #[test]
    fn test_pass_row_rendering() {
        let output = PlainTextFormatter::new().format(&Report::passes(iss(), vec![sample_pass()]));
        let line = output.lines().nth(3).unwrap();

        assert!(line.starts_with("12 Jan   -1.5  21:14:00 10 N  "));
        assert_eq!(
            line,
            "12 Jan   -1.5  21:14:00 10 N    21:17:30 85 NE   21:21:00 10 E  "
        );
        assert!(!output.contains('°'));
    }

    #[test]
    fn test_pass_columns_align_with_header() {
        let output = PlainTextFormatter::new().format(&Report::passes(iss(), vec![sample_pass()]));
        let lines: Vec<&str> = output.lines().collect();
        let header = lines[2];
        let row = lines[3];

        for (label, value) in [("Mag", "-1.5"), ("Time", "21:14:00")] {
            assert_eq!(header.find(label), row.find(value));
        }
        assert_eq!(header.rfind("Time"), row.find("21:21:00"));
        assert_eq!(lines[1].find("Peak"), row.find("21:17:30"));
    }

    #[test]
    fn test_flare_report_rendering() {
        let output = PlainTextFormatter::new().format(&Report::flares(vec![sample_flare()]));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Iridium Flares");
        assert_eq!(
            lines[1],
            "Time             Mag   Al Az         Satellite   Dst. Cntr. CMag SAl"
        );
        assert_eq!(
            lines[2],
            "04:32:11         -3    45 270        Iridium 33  12 km      2.1  -10"
        );
        for (label, value) in [("Mag", "-3"), ("Az", "270"), ("Satellite", "Iridium 33"), ("CMag", "2.1"), ("SAl", "-10")] {
            assert_eq!(lines[1].find(label), lines[2].find(value), "column {}", label);
        }
    }

    #[test]
    fn test_empty_flare_report_still_has_header() {
        let output = PlainTextFormatter::new().format(&Report::flares(vec![]));
        assert_eq!(output.lines().count(), 2);
        assert!(output.starts_with("Iridium Flares\nTime"));
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let formatter = PlainTextFormatter::new();
        let report = Report::passes(iss(), vec![sample_pass(), sample_pass()]);
        assert_eq!(formatter.format(&report), formatter.format(&report));
    }

    #[test]
    fn test_overlong_value_shifts_following_columns() {
        let flare = FlareRecord::new(
            "04:32:11", "-3", "45", "270", "Iridium 33 (tumbling)", "12 km", "2.1", "-10",
        );
        let output = PlainTextFormatter::new().format(&Report::flares(vec![flare]));
        assert!(output.contains("Iridium 33 (tumbling)  12 km"));
    }
}

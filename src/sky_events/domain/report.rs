use super::{FlareRecord, PassRecord, SatelliteQuery};

/// Which table a report was extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    SatellitePasses,
    IridiumFlares,
}

impl ReportKind {
    /// Section label used when several kinds of report share one message
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::SatellitePasses => "Satellite Passes",
            ReportKind::IridiumFlares => "Iridium Flares",
        }
    }
}

/// Ordered records extracted from one page, together with what they describe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Passes {
        satellite: SatelliteQuery,
        passes: Vec<PassRecord>,
    },
    Flares {
        flares: Vec<FlareRecord>,
    },
}

impl Report {
    pub fn passes(satellite: SatelliteQuery, passes: Vec<PassRecord>) -> Self {
        Report::Passes { satellite, passes }
    }

    pub fn flares(flares: Vec<FlareRecord>) -> Self {
        Report::Flares { flares }
    }

    pub fn kind(&self) -> ReportKind {
        match self {
            Report::Passes { .. } => ReportKind::SatellitePasses,
            Report::Flares { .. } => ReportKind::IridiumFlares,
        }
    }

    /// Title line identifying what the report is about
    pub fn title(&self) -> String {
        match self {
            Report::Passes { satellite, .. } => satellite.to_string(),
            Report::Flares { .. } => ReportKind::IridiumFlares.label().to_string(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Report::Passes { passes, .. } => passes.len(),
            Report::Flares { flares } => flares.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

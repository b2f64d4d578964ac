use crate::shared::Result;
use std::fmt;

/// A satellite to request pass predictions for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SatelliteQuery {
    name: String,
    catalog_number: u32,
}

impl SatelliteQuery {
    /// Creates a query for a satellite by display name and NORAD catalog number
    ///
    /// # Errors
    /// Returns an error if the catalog number is zero
    pub fn new(name: impl Into<String>, catalog_number: u32) -> Result<Self> {
        if catalog_number == 0 {
            anyhow::bail!("Satellite catalog number must be a positive integer");
        }

        Ok(Self {
            name: name.into(),
            catalog_number,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn catalog_number(&self) -> u32 {
        self.catalog_number
    }
}

impl fmt::Display for SatelliteQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.catalog_number)
    }
}

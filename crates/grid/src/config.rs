//! Configuration for loading a hazard dataset.

/// Default aliases for the latitude axis.
const LAT_ALIASES: &[&str] = &["lat", "latitude"];
/// Default aliases for the longitude axis.
const LON_ALIASES: &[&str] = &["lon", "longitude"];
/// Default aliases for the time axis.
const TIME_ALIASES: &[&str] = &["time"];

/// Configuration for a [`GridDataset::load`](crate::GridDataset::load) call.
///
/// The hazard variable is an explicit declaration; the loader never guesses
/// which data variable carries the hazard. Coordinate axes resolve through
/// alias lists so files using `latitude`/`longitude` load unchanged.
///
/// # Example
///
/// ```
/// use boreas_grid::LoadConfig;
///
/// let config = LoadConfig::new("data").with_year_range(2025, 2035);
/// assert_eq!(config.variable(), "data");
/// ```
#[derive(Debug, Clone)]
pub struct LoadConfig {
    variable: String,
    year_range: Option<(i32, i32)>,
}

impl LoadConfig {
    /// Creates a configuration for the named hazard variable.
    ///
    /// Defaults: no year window (every timestep in the file is kept).
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            year_range: None,
        }
    }

    /// Restricts loading to years in `[start, end]` inclusive.
    pub fn with_year_range(mut self, start: i32, end: i32) -> Self {
        self.year_range = Some((start, end));
        self
    }

    /// Returns the declared hazard variable name.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Returns the inclusive year window, if any.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        self.year_range
    }

    /// Returns true when `year` falls inside the configured window.
    pub(crate) fn keeps_year(&self, year: i32) -> bool {
        match self.year_range {
            Some((start, end)) => year >= start && year <= end,
            None => true,
        }
    }

    /// Aliases tried, in order, for the latitude axis.
    pub(crate) fn lat_aliases(&self) -> &'static [&'static str] {
        LAT_ALIASES
    }

    /// Aliases tried, in order, for the longitude axis.
    pub(crate) fn lon_aliases(&self) -> &'static [&'static str] {
        LON_ALIASES
    }

    /// Aliases tried, in order, for the time axis.
    pub(crate) fn time_aliases(&self) -> &'static [&'static str] {
        TIME_ALIASES
    }
}

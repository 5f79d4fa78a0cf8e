//! The immutable hazard dataset.

use std::path::Path;

use tracing::{debug, info};

use crate::config::LoadConfig;
use crate::error::GridError;
use crate::netcdf_read;
use crate::point::GridPoint;

/// One hazard variable over (year, lat, lon), loaded once and read-only
/// thereafter.
///
/// Values are stored flattened in `[year][lat][lon]` order with `f64::NAN`
/// for missing cells. Coordinate axes are ascending; files with descending
/// axes are normalised at load so every dataset presents the same layout.
#[derive(Debug, Clone)]
pub struct GridDataset {
    variable: String,
    years: Vec<i32>,
    lats: Vec<f64>,
    lons: Vec<f64>,
    values: Vec<f64>,
}

impl GridDataset {
    /// Assembles a dataset from already-extracted parts, enforcing the
    /// structural invariants every `GridDataset` carries.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyAxis`] if any axis has no entries
    /// - [`GridError::AxisNotFinite`] if a coordinate is NaN or infinite
    /// - [`GridError::AxisNotSorted`] if an axis is not strictly ascending
    /// - [`GridError::DuplicateYear`] if a year appears twice
    /// - [`GridError::DimensionMismatch`] if `values` has the wrong length
    pub fn from_parts(
        variable: impl Into<String>,
        years: Vec<i32>,
        lats: Vec<f64>,
        lons: Vec<f64>,
        values: Vec<f64>,
    ) -> Result<Self, GridError> {
        validate_axis("lat", &lats)?;
        validate_axis("lon", &lons)?;
        validate_years(&years)?;

        let expected = years.len() * lats.len() * lons.len();
        if values.len() != expected {
            return Err(GridError::DimensionMismatch {
                name: "values".to_string(),
                expected,
                got: values.len(),
            });
        }

        Ok(Self {
            variable: variable.into(),
            years,
            lats,
            lons,
            values,
        })
    }

    /// Loads a dataset from a NetCDF file.
    ///
    /// The hazard variable named in `config` must be 3-D over
    /// (time, lat, lon). Declared fill values become NaN; timesteps outside
    /// the configured year window are dropped; descending coordinate axes
    /// are flipped into ascending order together with their data.
    ///
    /// # Errors
    ///
    /// Any [`GridError`] load-time variant; see the error type for the full
    /// taxonomy.
    pub fn load(path: impl AsRef<Path>, config: &LoadConfig) -> Result<Self, GridError> {
        let path = path.as_ref();
        let file = netcdf_read::open_file(path)?;

        let lats = netcdf_read::read_axis_f64(&file, config.lat_aliases(), path)?;
        let lons = netcdf_read::read_axis_f64(&file, config.lon_aliases(), path)?;
        let all_years = netcdf_read::read_time_years(&file, config.time_aliases(), path)?;

        let (mut data, [nt, ny, nx]) = netcdf_read::read_3d_f64(&file, config.variable(), path)?;
        check_dim("time", all_years.len(), nt)?;
        check_dim("lat", lats.len(), ny)?;
        check_dim("lon", lons.len(), nx)?;

        // Map the declared fill sentinel to NaN before anything else sees
        // the data; a fill value that leaks into percentile input would
        // silently skew every threshold.
        if let Some(fill) = netcdf_read::read_fill_value(&file, config.variable()) {
            let mut n_filled = 0usize;
            for v in &mut data {
                if *v == fill {
                    *v = f64::NAN;
                    n_filled += 1;
                }
            }
            debug!(fill, n_filled, "mapped fill values to NaN");
        }

        // Keep timesteps inside the year window, then order them by year.
        let mut kept: Vec<(i32, usize)> = all_years
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, year)| config.keeps_year(year))
            .map(|(t, year)| (year, t))
            .collect();
        kept.sort_unstable_by_key(|&(year, _)| year);
        for pair in kept.windows(2) {
            if pair[0].0 == pair[1].0 {
                return Err(GridError::DuplicateYear { year: pair[0].0 });
            }
        }

        let lat_descending = axis_is_descending("lat", &lats)?;
        let lon_descending = axis_is_descending("lon", &lons)?;

        let n_cells = ny * nx;
        let mut values = Vec::with_capacity(kept.len() * n_cells);
        for &(_, t) in &kept {
            let slab = &data[t * n_cells..(t + 1) * n_cells];
            for i in 0..ny {
                let src_i = if lat_descending { ny - 1 - i } else { i };
                for j in 0..nx {
                    let src_j = if lon_descending { nx - 1 - j } else { j };
                    values.push(slab[src_i * nx + src_j]);
                }
            }
        }

        let years: Vec<i32> = kept.iter().map(|&(year, _)| year).collect();
        let mut lats = lats;
        let mut lons = lons;
        if lat_descending {
            lats.reverse();
        }
        if lon_descending {
            lons.reverse();
        }

        let dataset = Self::from_parts(config.variable(), years, lats, lons, values)?;
        info!(
            path = %path.display(),
            variable = dataset.variable,
            n_years = dataset.years.len(),
            n_cells = dataset.n_cells(),
            "loaded hazard dataset"
        );
        Ok(dataset)
    }

    /// Returns the declared hazard variable name.
    pub fn variable_name(&self) -> &str {
        &self.variable
    }

    /// Returns the years present, sorted ascending.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Returns the latitude axis, ascending.
    pub fn lat_axis(&self) -> &[f64] {
        &self.lats
    }

    /// Returns the longitude axis, ascending.
    pub fn lon_axis(&self) -> &[f64] {
        &self.lons
    }

    /// Number of cells in one year slice.
    pub fn n_cells(&self) -> usize {
        self.lats.len() * self.lons.len()
    }

    /// Returns true when `year` is present in the dataset.
    pub fn contains_year(&self, year: i32) -> bool {
        self.years.binary_search(&year).is_ok()
    }

    /// Flattens one year of the cube into owned `(lat, lon, value)` triples
    /// in row-major (lat-major, then lon) order.
    ///
    /// The returned vector is an independent copy; callers can hold or
    /// mutate it without affecting the dataset.
    ///
    /// # Errors
    ///
    /// [`GridError::YearNotFound`] if the year is absent.
    pub fn slice(&self, year: i32) -> Result<Vec<GridPoint>, GridError> {
        let y = self
            .years
            .binary_search(&year)
            .map_err(|_| GridError::YearNotFound {
                year,
                variable: self.variable.clone(),
            })?;

        let nx = self.lons.len();
        let base = y * self.n_cells();
        let mut points = Vec::with_capacity(self.n_cells());
        for (i, &lat) in self.lats.iter().enumerate() {
            for (j, &lon) in self.lons.iter().enumerate() {
                points.push(GridPoint::new(lat, lon, self.values[base + i * nx + j]));
            }
        }
        Ok(points)
    }
}

fn check_dim(name: &str, expected: usize, got: usize) -> Result<(), GridError> {
    if expected != got {
        return Err(GridError::DimensionMismatch {
            name: name.to_string(),
            expected,
            got,
        });
    }
    Ok(())
}

fn validate_axis(name: &str, axis: &[f64]) -> Result<(), GridError> {
    if axis.is_empty() {
        return Err(GridError::EmptyAxis {
            axis: name.to_string(),
        });
    }
    if axis.iter().any(|v| !v.is_finite()) {
        return Err(GridError::AxisNotFinite {
            axis: name.to_string(),
        });
    }
    if axis.windows(2).any(|w| w[0] >= w[1]) {
        return Err(GridError::AxisNotSorted {
            axis: name.to_string(),
        });
    }
    Ok(())
}

fn validate_years(years: &[i32]) -> Result<(), GridError> {
    if years.is_empty() {
        return Err(GridError::EmptyAxis {
            axis: "time".to_string(),
        });
    }
    for pair in years.windows(2) {
        if pair[0] == pair[1] {
            return Err(GridError::DuplicateYear { year: pair[0] });
        }
        if pair[0] > pair[1] {
            return Err(GridError::AxisNotSorted {
                axis: "time".to_string(),
            });
        }
    }
    Ok(())
}

/// Classifies a raw file axis as ascending or descending.
///
/// Equal adjacent coordinates are rejected: a repeated coordinate would let
/// one (year, lat, lon) triple map to two values.
fn axis_is_descending(name: &str, axis: &[f64]) -> Result<bool, GridError> {
    if axis.is_empty() {
        return Err(GridError::EmptyAxis {
            axis: name.to_string(),
        });
    }
    if axis.iter().any(|v| !v.is_finite()) {
        return Err(GridError::AxisNotFinite {
            axis: name.to_string(),
        });
    }
    if axis.windows(2).all(|w| w[0] < w[1]) || axis.len() == 1 {
        return Ok(false);
    }
    if axis.windows(2).all(|w| w[0] > w[1]) {
        return Ok(true);
    }
    Err(GridError::AxisNotSorted {
        axis: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_dataset() -> GridDataset {
        // 2 years × 2 lats × 3 lons
        let values = vec![
            // 2025
            1.0, 2.0, 3.0, //
            4.0, 5.0, 6.0, //
            // 2026
            7.0, 8.0, f64::NAN, //
            10.0, 11.0, 12.0, //
        ];
        GridDataset::from_parts(
            "wind_days",
            vec![2025, 2026],
            vec![40.0, 41.0],
            vec![2.0, 3.0, 4.0],
            values,
        )
        .expect("valid parts")
    }

    #[test]
    fn accessors() {
        let ds = small_dataset();
        assert_eq!(ds.variable_name(), "wind_days");
        assert_eq!(ds.years(), &[2025, 2026]);
        assert_eq!(ds.lat_axis(), &[40.0, 41.0]);
        assert_eq!(ds.lon_axis(), &[2.0, 3.0, 4.0]);
        assert_eq!(ds.n_cells(), 6);
        assert!(ds.contains_year(2025));
        assert!(!ds.contains_year(2027));
    }

    #[test]
    fn slice_is_lat_major() {
        let ds = small_dataset();
        let points = ds.slice(2025).expect("year present");
        assert_eq!(points.len(), 6);
        assert_eq!(points[0], GridPoint::new(40.0, 2.0, 1.0));
        assert_eq!(points[1], GridPoint::new(40.0, 3.0, 2.0));
        assert_eq!(points[2], GridPoint::new(40.0, 4.0, 3.0));
        assert_eq!(points[3], GridPoint::new(41.0, 2.0, 4.0));
        assert_eq!(points[5], GridPoint::new(41.0, 4.0, 6.0));
    }

    #[test]
    fn slice_preserves_missing() {
        let ds = small_dataset();
        let points = ds.slice(2026).expect("year present");
        assert!(points[2].is_missing());
        assert!(!points[3].is_missing());
    }

    #[test]
    fn slice_is_independent_copy() {
        let ds = small_dataset();
        let mut points = ds.slice(2025).expect("year present");
        points[0].value = 999.0;
        let fresh = ds.slice(2025).expect("year present");
        assert_eq!(fresh[0].value, 1.0);
    }

    #[test]
    fn slice_unknown_year() {
        let ds = small_dataset();
        let err = ds.slice(2099).unwrap_err();
        assert!(matches!(
            err,
            GridError::YearNotFound {
                year: 2099,
                ref variable
            } if variable == "wind_days"
        ));
    }

    #[test]
    fn from_parts_rejects_wrong_value_count() {
        let err = GridDataset::from_parts(
            "v",
            vec![2025],
            vec![40.0],
            vec![2.0, 3.0],
            vec![1.0, 2.0, 3.0],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GridError::DimensionMismatch {
                expected: 2,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn from_parts_rejects_nonfinite_axis() {
        let err = GridDataset::from_parts(
            "v",
            vec![2025],
            vec![40.0, f64::NAN],
            vec![2.0],
            vec![1.0, 2.0],
        )
        .unwrap_err();
        assert!(matches!(err, GridError::AxisNotFinite { ref axis } if axis == "lat"));
    }

    #[test]
    fn from_parts_rejects_unsorted_axis() {
        let err = GridDataset::from_parts(
            "v",
            vec![2025],
            vec![41.0, 40.0],
            vec![2.0],
            vec![1.0, 2.0],
        )
        .unwrap_err();
        assert!(matches!(err, GridError::AxisNotSorted { ref axis } if axis == "lat"));
    }

    #[test]
    fn from_parts_rejects_duplicate_year() {
        let err = GridDataset::from_parts(
            "v",
            vec![2025, 2025],
            vec![40.0],
            vec![2.0],
            vec![1.0, 2.0],
        )
        .unwrap_err();
        assert!(matches!(err, GridError::DuplicateYear { year: 2025 }));
    }

    #[test]
    fn from_parts_rejects_empty_axes() {
        let err =
            GridDataset::from_parts("v", vec![2025], Vec::new(), vec![2.0], Vec::new()).unwrap_err();
        assert!(matches!(err, GridError::EmptyAxis { ref axis } if axis == "lat"));

        let err =
            GridDataset::from_parts("v", Vec::new(), vec![40.0], vec![2.0], Vec::new()).unwrap_err();
        assert!(matches!(err, GridError::EmptyAxis { ref axis } if axis == "time"));
    }

    #[test]
    fn axis_orientation_detection() {
        assert!(!axis_is_descending("lat", &[1.0, 2.0, 3.0]).unwrap());
        assert!(axis_is_descending("lat", &[3.0, 2.0, 1.0]).unwrap());
        assert!(!axis_is_descending("lat", &[5.0]).unwrap());
        assert!(matches!(
            axis_is_descending("lat", &[1.0, 3.0, 2.0]),
            Err(GridError::AxisNotSorted { .. })
        ));
        assert!(matches!(
            axis_is_descending("lat", &[1.0, 1.0]),
            Err(GridError::AxisNotSorted { .. })
        ));
    }
}

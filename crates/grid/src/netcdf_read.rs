//! Low-level NetCDF extraction helpers.

use std::path::Path;

use chrono::{Datelike, NaiveDate};
use netcdf::AttributeValue;

use crate::error::GridError;

/// Open a NetCDF file at `path`, returning [`GridError::FileNotFound`] if the
/// path does not exist on disk.
pub(crate) fn open_file(path: &Path) -> Result<netcdf::File, GridError> {
    if !path.exists() {
        return Err(GridError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(netcdf::open(path)?)
}

/// Read a 1-D coordinate axis, trying each alias in order.
///
/// Returns the data from the first alias that matches. If none match,
/// returns [`GridError::MissingAxis`] with the first alias as the name.
pub(crate) fn read_axis_f64(
    file: &netcdf::File,
    aliases: &[&str],
    path: &Path,
) -> Result<Vec<f64>, GridError> {
    for &alias in aliases {
        if let Some(var) = file.variable(alias) {
            return Ok(var.get_values::<f64, _>(..)?);
        }
    }

    let name = aliases.first().copied().unwrap_or("unknown");
    Err(GridError::MissingAxis {
        name: name.to_string(),
        path: path.to_path_buf(),
    })
}

/// Read the declared 3-D hazard variable and return the flattened data
/// together with the shape `[nt, ny, nx]` derived from the variable's
/// dimensions.
pub(crate) fn read_3d_f64(
    file: &netcdf::File,
    var_name: &str,
    path: &Path,
) -> Result<(Vec<f64>, [usize; 3]), GridError> {
    let var = file
        .variable(var_name)
        .ok_or_else(|| GridError::MissingVariable {
            name: var_name.to_string(),
            path: path.to_path_buf(),
        })?;

    let dims = var.dimensions();
    if dims.len() != 3 {
        return Err(GridError::DimensionMismatch {
            name: format!("{var_name} dimensions"),
            expected: 3,
            got: dims.len(),
        });
    }

    let nt = dims[0].len();
    let ny = dims[1].len();
    let nx = dims[2].len();

    let data = var.get_values::<f64, _>(..)?;
    Ok((data, [nt, ny, nx]))
}

/// Read the fill-value sentinel declared on a variable, if any.
///
/// Checks `_FillValue` first, then `missing_value`. Only scalar numeric
/// attributes are honoured; anything else is treated as no declared fill.
pub(crate) fn read_fill_value(file: &netcdf::File, var_name: &str) -> Option<f64> {
    let var = file.variable(var_name)?;
    for attr in ["_FillValue", "missing_value"] {
        let value = var
            .attribute_value(attr)
            .and_then(|res| res.ok())
            .and_then(|av| match av {
                AttributeValue::Double(v) => Some(v),
                AttributeValue::Float(v) => Some(v as f64),
                AttributeValue::Int(v) => Some(v as f64),
                _ => None,
            });
        if value.is_some() {
            return value;
        }
    }
    None
}

/// Read the time axis through its aliases and resolve each timestep to a
/// calendar year.
///
/// Parses CF-convention units of the form `"days since YYYY-MM-DD"` or
/// `"days since YYYY-MM-DD HH:MM:SS"`; each offset is truncated to whole
/// days and added to the base date with chrono arithmetic.
pub(crate) fn read_time_years(
    file: &netcdf::File,
    aliases: &[&str],
    path: &Path,
) -> Result<Vec<i32>, GridError> {
    let (name, offsets) = read_time_axis(file, aliases, path)?;
    let base_date = read_time_base(file, &name)?;
    years_from_offsets(base_date, &offsets)
}

fn read_time_axis(
    file: &netcdf::File,
    aliases: &[&str],
    path: &Path,
) -> Result<(String, Vec<f64>), GridError> {
    for &alias in aliases {
        if let Some(var) = file.variable(alias) {
            return Ok((alias.to_string(), var.get_values::<f64, _>(..)?));
        }
    }

    let name = aliases.first().copied().unwrap_or("unknown");
    Err(GridError::MissingAxis {
        name: name.to_string(),
        path: path.to_path_buf(),
    })
}

fn read_time_base(file: &netcdf::File, time_var: &str) -> Result<NaiveDate, GridError> {
    let var = file.variable(time_var).ok_or_else(|| GridError::InvalidTime {
        reason: format!("time variable '{time_var}' disappeared"),
    })?;

    let units_str: String = var
        .attribute_value("units")
        .ok_or_else(|| GridError::InvalidTime {
            reason: format!("time variable '{time_var}' has no 'units' attribute"),
        })?
        .map_err(|e| GridError::InvalidTime {
            reason: format!("failed to read 'units' attribute: {e}"),
        })?
        .try_into()
        .map_err(|e: netcdf::Error| GridError::InvalidTime {
            reason: format!("'units' attribute is not a string: {e}"),
        })?;

    // Expected format: "days since YYYY-MM-DD" or "days since YYYY-MM-DD HH:MM:SS"
    let parts: Vec<&str> = units_str.splitn(3, ' ').collect();
    if parts.len() < 3 || parts[0] != "days" || parts[1] != "since" {
        return Err(GridError::InvalidTime {
            reason: format!("unexpected time units format: '{units_str}'"),
        });
    }

    // Take only the date portion (first 10 characters of parts[2]).
    let date_str = if parts[2].len() >= 10 {
        &parts[2][..10]
    } else {
        parts[2]
    };

    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| GridError::InvalidTime {
        reason: format!("failed to parse base date '{date_str}': {e}"),
    })
}

/// Convert floating-point day offsets from a base date into calendar years.
fn years_from_offsets(base_date: NaiveDate, offsets: &[f64]) -> Result<Vec<i32>, GridError> {
    offsets
        .iter()
        .map(|&offset| {
            let days = offset as i64;
            let date = base_date
                .checked_add_signed(chrono::TimeDelta::days(days))
                .ok_or_else(|| GridError::InvalidTime {
                    reason: format!("date overflow adding {days} days to {base_date}"),
                })?;
            Ok(date.year())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_to_years_basic() {
        let base = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");
        let offsets = vec![0.0, 364.0, 366.0, 9131.0];

        let years = years_from_offsets(base, &offsets).expect("conversion succeeds");

        // Day 0 => 2000, day 364 => 2000-12-31, day 366 => 2001-01-01
        // (2000 is a gregorian leap year), day 9131 => 2024-12-31.
        assert_eq!(years, vec![2000, 2000, 2001, 2024]);
    }

    #[test]
    fn offsets_to_years_fractional_truncated() {
        let base = NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date");
        // 0.5 truncates to 0 days (still 2024); 1.9 truncates to 1 (2025).
        let years = years_from_offsets(base, &[0.5, 1.9]).expect("conversion succeeds");
        assert_eq!(years, vec![2024, 2025]);
    }

    #[test]
    fn offsets_to_years_empty() {
        let base = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");
        let years = years_from_offsets(base, &[]).expect("conversion succeeds");
        assert!(years.is_empty());
    }

    #[test]
    fn offsets_to_years_negative() {
        let base = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");
        let years = years_from_offsets(base, &[-1.0]).expect("conversion succeeds");
        assert_eq!(years, vec![1999]);
    }
}

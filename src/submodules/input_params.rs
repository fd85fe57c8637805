use ndarray::Array1;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{errors::{ConfigError, FixtureError}, profiles::ElectronFractionLaw, type_lib::NumericData};

pub const GRID_TYPE: &str = "1D_sphere";

/// Linear radial grid with `nx` zones between `r_min` and `r_max` (cm).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialGrid {
    pub r_min: NumericData,
    pub r_max: NumericData,
    pub nx: usize,
}

impl RadialGrid {
    pub fn new(r_min: NumericData, r_max: NumericData, nx: usize) -> Result<Self, ConfigError> {
        if nx == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if r_min < 0.0 {
            return Err(ConfigError::NegativeRadius(r_min));
        }
        if !(r_max > r_min) {
            return Err(ConfigError::InvertedGrid { r_min, r_max });
        }
        debug!(r_min, r_max, nx, "radial grid");
        Ok(RadialGrid { r_min, r_max, nx })
    }

    pub fn dx(&self) -> NumericData {
        (self.r_max - self.r_min) / self.nx as NumericData
    }

    /// Outer edge of zone `i`, counted from 1.
    pub fn radius(&self, i: usize) -> NumericData {
        self.r_min + i as NumericData * self.dx()
    }

    /// Outer zone edges for `i = 1..=nx`.
    pub fn radii(&self) -> Array1<NumericData> {
        Array1::from_shape_fn(self.nx, |i| self.radius(i + 1))
    }
}

/// First line of a model file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub grid_type: String,
    pub label: Option<String>,
    pub nx: usize,
    pub r_min: NumericData,
    pub t0: Option<i64>,
}

impl Header {
    pub fn new(grid: &RadialGrid) -> Self {
        Header {
            grid_type: GRID_TYPE.to_string(),
            label: None,
            nx: grid.nx,
            r_min: grid.r_min,
            t0: None,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_t0(mut self, t0: i64) -> Self {
        self.t0 = Some(t0);
        self
    }
}

/// Parameters of the one-zone uniform sphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereParams {
    pub label: String,
    pub nx: usize,
    pub t0: i64,
    pub r_min: NumericData,
    pub r_max: NumericData,
    pub density: NumericData,
    pub temperature: NumericData,
    pub electron_fraction: NumericData,
}

/// A label sits between the grid tag and `nx`, so it must be a single token
/// that cannot be mistaken for the zone count.
pub fn check_label(label: &str) -> Result<(), ConfigError> {
    if label.is_empty() || label.contains(char::is_whitespace) || label.parse::<usize>().is_ok() {
        return Err(ConfigError::InvalidLabel(label.to_string()));
    }
    Ok(())
}

impl SphereParams {
    pub fn grid(&self) -> Result<RadialGrid, ConfigError> {
        check_label(&self.label)?;
        RadialGrid::new(self.r_min, self.r_max, self.nx)
    }

    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let params: SphereParams = serde_json::from_str(json)?;
        params.grid()?;
        Ok(params)
    }
}

/// Parameters of the quadratic density shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellParams {
    pub nx: usize,
    pub r_min: NumericData,
    pub r_max: NumericData,
    pub rho_max: NumericData,
    pub temperature: NumericData,
    pub electron_fraction: ElectronFractionLaw,
}

impl ShellParams {
    pub fn grid(&self) -> Result<RadialGrid, ConfigError> {
        RadialGrid::new(self.r_min, self.r_max, self.nx)
    }

    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let params: ShellParams = serde_json::from_str(json)?;
        params.grid()?;
        Ok(params)
    }
}

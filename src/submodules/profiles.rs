use enum_dispatch::enum_dispatch;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::func_lib::{quadratic_falloff, zone_midpoint};
use super::input_params::{Header, RadialGrid, ShellParams, SphereParams};
use super::type_lib::{NumericData, Row};

/// One output row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub radius: NumericData,
    pub density: NumericData,
    pub temperature: NumericData,
    pub electron_fraction: NumericData,
}

impl Sample {
    pub fn to_row(&self) -> Row {
        [self.radius, self.density, self.temperature, self.electron_fraction]
    }

    pub fn from_row(row: Row) -> Self {
        Sample {
            radius: row[0],
            density: row[1],
            temperature: row[2],
            electron_fraction: row[3],
        }
    }
}

pub enum ProfileField {
    R,
    Rho,
    T,
    Ye,
}

impl ProfileField {
    pub fn to_str(&self) -> &'static str {
        match self {
            ProfileField::R => "R",
            ProfileField::Rho => "rho",
            ProfileField::T => "T",
            ProfileField::Ye => "Ye",
        }
    }
}

/// An evaluated model: header plus one sample per zone, innermost first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub header: Header,
    pub samples: Vec<Sample>,
}

impl Profile {
    pub fn column(&self, field: &ProfileField) -> Array1<NumericData> {
        self.samples.iter().map(|sample| match field {
            ProfileField::R => sample.radius,
            ProfileField::Rho => sample.density,
            ProfileField::T => sample.temperature,
            ProfileField::Ye => sample.electron_fraction,
        }).collect()
    }

    /// Zone centres, with the header's `r_min` as the inner edge of the first zone.
    pub fn zone_midpoints(&self) -> Array1<NumericData> {
        let mut inner = self.header.r_min;
        self.samples.iter().map(|sample| {
            let mid = zone_midpoint(inner, sample.radius);
            inner = sample.radius;
            mid
        }).collect()
    }
}

/// Electron fraction as a function of radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElectronFractionLaw {
    Constant { ye: NumericData },
    /// `ye_max * (1 - (r/r_max)^2) + offset`
    QuadraticFalloff { ye_max: NumericData, offset: NumericData },
}

impl ElectronFractionLaw {
    pub fn evaluate(&self, r: NumericData, r_max: NumericData) -> NumericData {
        match self {
            ElectronFractionLaw::Constant { ye } => *ye,
            ElectronFractionLaw::QuadraticFalloff { ye_max, offset } => ye_max * quadratic_falloff(r, r_max) + offset,
        }
    }
}

#[enum_dispatch]
pub trait ProfileTrait {
    fn grid(&self) -> &RadialGrid;
    fn header(&self) -> Header;
    fn density(&self, r: NumericData) -> NumericData;
    fn temperature(&self, r: NumericData) -> NumericData;
    fn electron_fraction(&self, r: NumericData) -> NumericData;

    fn sample(&self, r: NumericData) -> Sample {
        Sample {
            radius: r,
            density: self.density(r),
            temperature: self.temperature(r),
            electron_fraction: self.electron_fraction(r),
        }
    }

    fn evaluate(&self) -> Profile {
        let samples: Vec<Sample> = self.grid().radii().iter().map(|&r| self.sample(r)).collect();
        debug!(zones = samples.len(), "evaluated profile");
        Profile {
            header: self.header(),
            samples,
        }
    }
}

/// Constant density, temperature and electron fraction.
#[derive(Debug, Clone)]
pub struct UniformSphere {
    pub grid: RadialGrid,
    pub label: String,
    pub t0: i64,
    pub density: NumericData,
    pub temperature: NumericData,
    pub electron_fraction: NumericData,
}

impl UniformSphere {
    pub fn new(grid: RadialGrid, params: &SphereParams) -> Self {
        UniformSphere {
            grid,
            label: params.label.clone(),
            t0: params.t0,
            density: params.density,
            temperature: params.temperature,
            electron_fraction: params.electron_fraction,
        }
    }
}

impl ProfileTrait for UniformSphere {
    fn grid(&self) -> &RadialGrid {
        &self.grid
    }

    fn header(&self) -> Header {
        Header::new(&self.grid).with_label(&self.label).with_t0(self.t0)
    }

    fn density(&self, _r: NumericData) -> NumericData {
        self.density
    }

    fn temperature(&self, _r: NumericData) -> NumericData {
        self.temperature
    }

    fn electron_fraction(&self, _r: NumericData) -> NumericData {
        self.electron_fraction
    }
}

/// Density falling quadratically to zero at `r_max`, uniform temperature.
#[derive(Debug, Clone)]
pub struct QuadraticShell {
    pub grid: RadialGrid,
    pub rho_max: NumericData,
    pub temperature: NumericData,
    pub electron_fraction: ElectronFractionLaw,
}

impl QuadraticShell {
    pub fn new(grid: RadialGrid, params: &ShellParams) -> Self {
        QuadraticShell {
            grid,
            rho_max: params.rho_max,
            temperature: params.temperature,
            electron_fraction: params.electron_fraction.clone(),
        }
    }
}

impl ProfileTrait for QuadraticShell {
    fn grid(&self) -> &RadialGrid {
        &self.grid
    }

    fn header(&self) -> Header {
        Header::new(&self.grid)
    }

    fn density(&self, r: NumericData) -> NumericData {
        self.rho_max * quadratic_falloff(r, self.grid.r_max)
    }

    fn temperature(&self, _r: NumericData) -> NumericData {
        self.temperature
    }

    fn electron_fraction(&self, r: NumericData) -> NumericData {
        self.electron_fraction.evaluate(r, self.grid.r_max)
    }
}

#[enum_dispatch(ProfileTrait)]
#[derive(Debug, Clone)]
pub enum ProfileKinds {
    UniformSphere(UniformSphere),
    QuadraticShell(QuadraticShell),
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn shell(law: ElectronFractionLaw) -> ProfileKinds {
        let params = ShellParams {
            nx: 10,
            r_min: 9.0e5,
            r_max: 1.0e6,
            rho_max: 2.0e12,
            temperature: 5.8025e10,
            electron_fraction: law,
        };
        QuadraticShell::new(params.grid().unwrap(), &params).into()
    }

    #[test]
    fn shell_density_tapers_to_zero() {
        let profile = shell(ElectronFractionLaw::Constant { ye: 0.2 }).evaluate();
        let rho = profile.column(&ProfileField::Rho);
        assert_eq!(rho.len(), 10);
        assert_eq!(rho[9], 0.0);
        assert!(rho.iter().zip(rho.iter().skip(1)).all(|(inner, outer)| outer < inner));
        assert_relative_eq!(rho[0], 2.0e12 * (1.0 - 0.91f64.powi(2)), max_relative = 1.0e-12);
    }

    #[test]
    fn quadratic_ye_law_reaches_offset_at_boundary() {
        let law = ElectronFractionLaw::QuadraticFalloff { ye_max: 0.2, offset: 0.05 };
        let profile = shell(law).evaluate();
        let ye = profile.column(&ProfileField::Ye);
        assert_relative_eq!(ye[9], 0.05, max_relative = 1.0e-12);
        assert_relative_eq!(ye[0], 0.2 * (1.0 - 0.91f64.powi(2)) + 0.05, max_relative = 1.0e-12);
    }

    #[test]
    fn uniform_sphere_header_carries_label_and_time() {
        let params = SphereParams {
            label: "GRB".to_string(),
            nx: 3,
            t0: -1,
            r_min: 0.0,
            r_max: 3.0,
            density: 1.0e10,
            temperature: 1.0,
            electron_fraction: 0.3,
        };
        let sphere: ProfileKinds = UniformSphere::new(params.grid().unwrap(), &params).into();
        let profile = sphere.evaluate();
        assert_eq!(profile.header.label.as_deref(), Some("GRB"));
        assert_eq!(profile.header.t0, Some(-1));
        assert_eq!(profile.column(&ProfileField::R).to_vec(), vec![1.0, 2.0, 3.0]);
        assert!(profile.samples.iter().all(|s| s.density == 1.0e10 && s.electron_fraction == 0.3));
    }

    #[test]
    fn midpoints_use_inner_radius_for_first_zone() {
        let profile = shell(ElectronFractionLaw::Constant { ye: 0.2 }).evaluate();
        let mids = profile.zone_midpoints();
        assert_relative_eq!(mids[0], 9.05e5, max_relative = 1.0e-12);
        assert_relative_eq!(mids[9], 9.95e5, max_relative = 1.0e-12);
    }

    #[test]
    fn field_names() {
        assert_eq!(ProfileField::Rho.to_str(), "rho");
        assert_eq!(ProfileField::Ye.to_str(), "Ye");
    }
}

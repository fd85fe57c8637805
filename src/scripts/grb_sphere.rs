use crate::submodules::{errors::FixtureError, input_params::SphereParams, profiles::{Profile, ProfileKinds, ProfileTrait, UniformSphere}, units::{KM_TO_CM, MEV_TO_KELVIN}};

/// One-zone sphere of 1 km radius.
pub fn params() -> SphereParams {
    let nx = 1;
    let t0 = -1;

    let r_max = 1.0 * KM_TO_CM;
    let r_min = 0.0 * KM_TO_CM;

    let rho = 1e10;
    let temp = 5.0 * MEV_TO_KELVIN;
    let ye = 0.3;

    SphereParams {
        label: "GRB".to_string(),
        nx,
        t0,
        r_min,
        r_max,
        density: rho,
        temperature: temp,
        electron_fraction: ye,
    }
}

pub fn run() -> Result<Profile, FixtureError> {
    let params = params();
    let grid = params.grid()?;
    let sphere = ProfileKinds::from(UniformSphere::new(grid, &params));
    Ok(sphere.evaluate())
}

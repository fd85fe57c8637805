use crate::submodules::{errors::FixtureError, input_params::ShellParams, profiles::{ElectronFractionLaw, Profile, ProfileKinds, ProfileTrait, QuadraticShell}, units::{KM_TO_CM, MEV_TO_KELVIN}};

/// 100 zones between 9 and 10 km, density vanishing at the surface.
pub fn params() -> ShellParams {
    let nx = 100;

    let r_max = 10.0 * KM_TO_CM;
    let r_min = 9.0 * KM_TO_CM;
    let rho_max = 2e12;
    let ye_max = 0.2;

    let temp = 5.0 * MEV_TO_KELVIN;

    ShellParams {
        nx,
        r_min,
        r_max,
        rho_max,
        temperature: temp,
        electron_fraction: ElectronFractionLaw::Constant { ye: ye_max },
    }
}

pub fn run() -> Result<Profile, FixtureError> {
    let params = params();
    let grid = params.grid()?;
    let shell = ProfileKinds::from(QuadraticShell::new(grid, &params));
    Ok(shell.evaluate())
}

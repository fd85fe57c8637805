use std::io::{self, BufWriter};

use nsprofile::scripts::grb_sphere;
use nsprofile::submodules::{errors::FixtureError, logging::init_logging, model_file::write_model};
use tracing::info;

fn main() -> Result<(), FixtureError> {
    init_logging();

    let profile = grb_sphere::run()?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_model(&profile, &mut writer)?;

    info!(zones = profile.samples.len(), "wrote grb_sphere model");
    Ok(())
}

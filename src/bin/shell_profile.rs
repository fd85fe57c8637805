use std::io::{self, BufWriter};

use nsprofile::scripts::shell_profile;
use nsprofile::submodules::{errors::FixtureError, logging::init_logging, model_file::write_model};
use tracing::info;

fn main() -> Result<(), FixtureError> {
    init_logging();

    let profile = shell_profile::run()?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    write_model(&profile, &mut writer)?;

    info!(zones = profile.samples.len(), "wrote shell_profile model");
    Ok(())
}

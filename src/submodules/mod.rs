pub mod errors;
pub mod func_lib;
pub mod input_params;
pub mod logging;
pub mod model_file;
pub mod profiles;
pub mod type_lib;
pub mod units;

pub mod grb_sphere;
pub mod shell_profile;

use crate::submodules::type_lib::*;

/// `1 - (r/r_max)^2`, zero at the outer boundary.
pub fn quadratic_falloff(r: NumericData, r_max: NumericData) -> NumericData {
    1.0 - (r / r_max).powi(2)
}

pub fn zone_midpoint(inner: NumericData, outer: NumericData) -> NumericData {
    0.5 * (inner + outer)
}

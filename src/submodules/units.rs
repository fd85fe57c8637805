use super::type_lib::NumericData;

/// Kelvin per MeV.
pub const MEV_TO_KELVIN: NumericData = 1.1605e10;
/// Centimetres per kilometre.
pub const KM_TO_CM: NumericData = 1.0e5;

pub type NumericData = f64;

/// `(radius, density, temperature, electron_fraction)` in output column order.
pub type Row = [NumericData; 4];

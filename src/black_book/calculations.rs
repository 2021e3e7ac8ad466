//! Thread dimension calculations

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Minor diameter factor for a 60° thread: `minor ≈ major − 1.08253 × P`.
pub const MINOR_DIAMETER_FACTOR_60: f64 = 1.08253;

/// Round to 3 decimals, the precision every table value is stored with.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Convert threads per inch to a pitch in mm, rounded to 3 decimals.
pub fn pitch_from_tpi(tpi: f64) -> f64 {
    round3(MM_PER_INCH / tpi)
}

/// Approximate minor diameter of a 60° thread, used as the tap drill when a
/// table entry has none.
pub fn minor_diameter_60(major_diameter: f64, pitch: f64) -> f64 {
    round3(major_diameter - MINOR_DIAMETER_FACTOR_60 * pitch)
}

/// Nominal Unified size (inches) to major diameter in mm.
pub fn inch_to_mm(inches: f64) -> f64 {
    round3(inches * MM_PER_INCH)
}

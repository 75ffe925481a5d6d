//! Air density from the ideal gas law.
//!
//! # References
//!
//! - ICAO Doc 7488/3, Eq (3).

use crate::constants::IsaFloat;
use crate::core_types::units::{Kelvin, KilogramsPerCubicMetre, Pascals};
use crate::error::{ensure_positive_temperature, IsaError};

/// Calculate air density from static pressure and temperature.
///
/// ```text
/// ρ = p / (R·T)
/// ```
///
/// # Errors
///
/// [`IsaError::NonPositiveTemperature`] if `temperature <= 0`.
pub fn density<T: IsaFloat>(
    pressure: Pascals<T>,
    temperature: Kelvin<T>,
) -> Result<KilogramsPerCubicMetre<T>, IsaError> {
    ensure_positive_temperature(temperature)?;
    Ok(KilogramsPerCubicMetre::new(
        *pressure / (T::R * *temperature),
    ))
}

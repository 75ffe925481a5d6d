//! ISA temperature profile.
//!
//! # References
//!
//! - ICAO Doc 7488/3, Eq (11).

use crate::constants::IsaFloat;
use crate::core_types::units::{Kelvin, KelvinDelta, Metres};

/// Calculate the ISA temperature at the given altitude on a day that differs
/// from the standard sea-level temperature by `delta_temperature`.
///
/// ```text
/// T = max(T0 + ΔT + βT·h, T_trop)
/// ```
///
/// The lapse rate applies up to the tropopause; the result never falls below
/// `TROPOPAUSE_TEMPERATURE`.
///
/// # Arguments
///
/// * `altitude` - Pressure altitude
/// * `delta_temperature` - Offset from ISA sea-level temperature
///
/// # Returns
///
/// Air temperature in Kelvin
pub fn isa_temperature<T: IsaFloat>(
    altitude: Metres<T>,
    delta_temperature: KelvinDelta<T>,
) -> Kelvin<T> {
    let temperature = Kelvin::new(
        T::SEA_LEVEL_TEMPERATURE + *delta_temperature + T::TEMPERATURE_GRADIENT * *altitude,
    );
    temperature.max(Kelvin::<T>::TROPOPAUSE_TEMPERATURE)
}

/// ISA temperature on a standard day (no sea-level offset)
pub fn isa_temperature_standard<T: IsaFloat>(altitude: Metres<T>) -> Kelvin<T> {
    isa_temperature(altitude, KelvinDelta::ZERO)
}

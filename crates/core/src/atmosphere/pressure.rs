//! Pressure ↔ altitude conversions.
//!
//! The standard atmosphere has two regimes below 20 km: the troposphere, where
//! temperature falls linearly with altitude, and the tropopause layer above
//! 11 km, where temperature is constant and pressure decays exponentially.
//!
//! # References
//!
//! - BADA Rev 3.12 user manual, Eq 3.1-8, 3.1-18, 3.1-19, 3.1-20.

use crate::constants::IsaFloat;
use crate::core_types::units::{Metres, Pascals};
use crate::error::{
    altitude_above_tropopause, altitude_below_tropopause, ensure_positive_pressure,
    pressure_above_tropopause, pressure_below_tropopause, IsaError,
};
use tracing::trace;

// ============================================================================
// ALTITUDE → PRESSURE
// ============================================================================

/// Troposphere pressure without the domain check, BADA Eq 3.1-18
#[inline]
fn troposphere_pressure_unchecked<T: IsaFloat>(altitude: Metres<T>) -> Pascals<T> {
    Pascals::new(
        T::SEA_LEVEL_PRESSURE
            * (T::ONE + *altitude * T::TEMPERATURE_GRADIENT / T::SEA_LEVEL_TEMPERATURE)
                .powf(T::PRESSURE_POWER),
    )
}

/// Tropopause pressure without the domain check, BADA Eq 3.1-20
#[inline]
fn tropopause_pressure_unchecked<T: IsaFloat>(altitude: Metres<T>) -> Pascals<T> {
    Pascals::new(
        T::TROPOPAUSE_PRESSURE
            * (T::TROPOPAUSE_PRESSURE_FACTOR * (*altitude - T::TROPOPAUSE_ALTITUDE)).exp(),
    )
}

/// Calculate the ISA pressure below the tropopause for the given altitude.
///
/// ```text
/// p = p0 · (1 + h·βT/T0) ^ (-g/(βT·R))
/// ```
///
/// # Arguments
///
/// * `altitude` - Pressure altitude, at most `TROPOPAUSE_ALTITUDE`
///
/// # Errors
///
/// [`IsaError::AltitudeAboveTropopause`] if `altitude > TROPOPAUSE_ALTITUDE`.
pub fn troposphere_pressure<T: IsaFloat>(altitude: Metres<T>) -> Result<Pascals<T>, IsaError> {
    if altitude <= Metres::<T>::TROPOPAUSE_ALTITUDE {
        Ok(troposphere_pressure_unchecked(altitude))
    } else {
        Err(altitude_above_tropopause(altitude))
    }
}

/// Calculate the ISA pressure in the tropopause layer for the given altitude.
///
/// ```text
/// p = p_trop · exp(-g/(R·T_trop) · (h - h_trop))
/// ```
///
/// # Arguments
///
/// * `altitude` - Pressure altitude, at least `TROPOPAUSE_ALTITUDE`
///
/// # Errors
///
/// [`IsaError::AltitudeBelowTropopause`] if `altitude < TROPOPAUSE_ALTITUDE`.
pub fn tropopause_pressure<T: IsaFloat>(altitude: Metres<T>) -> Result<Pascals<T>, IsaError> {
    if altitude >= Metres::<T>::TROPOPAUSE_ALTITUDE {
        Ok(tropopause_pressure_unchecked(altitude))
    } else {
        Err(altitude_below_tropopause(altitude))
    }
}

/// Calculate the ISA pressure corresponding to the given altitude.
///
/// Uses the troposphere formula strictly below `TROPOPAUSE_ALTITUDE` and the
/// tropopause formula at and above it, so the boundary itself returns
/// `TROPOPAUSE_PRESSURE` exactly.
pub fn isa_pressure<T: IsaFloat>(altitude: Metres<T>) -> Pascals<T> {
    if altitude < Metres::<T>::TROPOPAUSE_ALTITUDE {
        trace!(altitude = ?*altitude, "isa_pressure: troposphere");
        troposphere_pressure_unchecked(altitude)
    } else {
        trace!(altitude = ?*altitude, "isa_pressure: tropopause");
        tropopause_pressure_unchecked(altitude)
    }
}

// ============================================================================
// PRESSURE → ALTITUDE
// ============================================================================

/// Troposphere altitude without the domain check, BADA Eq 3.1-8
#[inline]
fn troposphere_altitude_unchecked<T: IsaFloat>(pressure: Pascals<T>) -> Metres<T> {
    let pressure_ratio = *pressure / T::SEA_LEVEL_PRESSURE;
    let altitude_ratio = pressure_ratio.powf(T::TEMPERATURE_POWER) - T::ONE;
    Metres::new(altitude_ratio * T::SEA_LEVEL_TEMPERATURE / T::TEMPERATURE_GRADIENT)
}

/// Tropopause altitude without the domain check, inverse of BADA Eq 3.1-20
#[inline]
fn tropopause_altitude_unchecked<T: IsaFloat>(pressure: Pascals<T>) -> Metres<T> {
    let altitude_delta = (*pressure / T::TROPOPAUSE_PRESSURE).ln() / T::TROPOPAUSE_PRESSURE_FACTOR;
    Metres::new(T::TROPOPAUSE_ALTITUDE + altitude_delta)
}

/// Calculate the altitude corresponding to the given pressure below the
/// tropopause.
///
/// # Errors
///
/// - [`IsaError::NonPositivePressure`] if `pressure <= 0`
/// - [`IsaError::PressureBelowTropopause`] if `pressure < TROPOPAUSE_PRESSURE`
pub fn troposphere_altitude<T: IsaFloat>(pressure: Pascals<T>) -> Result<Metres<T>, IsaError> {
    ensure_positive_pressure(pressure)?;
    if pressure >= Pascals::<T>::TROPOPAUSE_PRESSURE {
        Ok(troposphere_altitude_unchecked(pressure))
    } else {
        Err(pressure_below_tropopause(pressure))
    }
}

/// Calculate the altitude corresponding to the given pressure in the
/// tropopause layer.
///
/// # Errors
///
/// - [`IsaError::NonPositivePressure`] if `pressure <= 0`
/// - [`IsaError::PressureAboveTropopause`] if `pressure > TROPOPAUSE_PRESSURE`
pub fn tropopause_altitude<T: IsaFloat>(pressure: Pascals<T>) -> Result<Metres<T>, IsaError> {
    ensure_positive_pressure(pressure)?;
    if pressure <= Pascals::<T>::TROPOPAUSE_PRESSURE {
        Ok(tropopause_altitude_unchecked(pressure))
    } else {
        Err(pressure_above_tropopause(pressure))
    }
}

/// Calculate the pressure altitude corresponding to the given pressure.
///
/// Uses the troposphere formula strictly above `TROPOPAUSE_PRESSURE` and the
/// tropopause formula at and below it.
///
/// # Errors
///
/// [`IsaError::NonPositivePressure`] if `pressure <= 0`.
pub fn isa_altitude<T: IsaFloat>(pressure: Pascals<T>) -> Result<Metres<T>, IsaError> {
    ensure_positive_pressure(pressure)?;
    if pressure > Pascals::<T>::TROPOPAUSE_PRESSURE {
        trace!(pressure = ?*pressure, "isa_altitude: troposphere");
        Ok(troposphere_altitude_unchecked(pressure))
    } else {
        trace!(pressure = ?*pressure, "isa_altitude: tropopause");
        Ok(tropopause_altitude_unchecked(pressure))
    }
}

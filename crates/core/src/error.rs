//! Domain-precondition errors
//!
//! Every formula documents its valid input range. Calling one outside that
//! range yields an [`IsaError`] instead of a silently wrong (or NaN) quantity.
//! Offending values are reported in double precision whichever precision the
//! computation ran in.

use crate::constants::IsaFloat;
use crate::core_types::units::{Kelvin, Metres, Pascals};
use tracing::debug;

/// Errors raised when a formula is called outside its domain of validity
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IsaError {
    /// Troposphere pressure formula called above the tropopause altitude
    AltitudeAboveTropopause {
        /// Requested altitude, m
        altitude: f64,
    },
    /// Tropopause pressure formula called below the tropopause altitude
    AltitudeBelowTropopause {
        /// Requested altitude, m
        altitude: f64,
    },
    /// Troposphere altitude formula called with a pressure lower than the
    /// tropopause pressure
    PressureBelowTropopause {
        /// Requested pressure, Pa
        pressure: f64,
    },
    /// Tropopause altitude formula called with a pressure higher than the
    /// tropopause pressure
    PressureAboveTropopause {
        /// Requested pressure, Pa
        pressure: f64,
    },
    /// Pressure must be strictly positive
    NonPositivePressure {
        /// Offending pressure, Pa
        pressure: f64,
    },
    /// Absolute temperature must be strictly positive
    NonPositiveTemperature {
        /// Offending temperature, K
        temperature: f64,
    },
    /// Mach number must be strictly positive
    NonPositiveMach {
        /// Offending Mach number
        mach: f64,
    },
}

impl std::fmt::Display for IsaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IsaError::AltitudeAboveTropopause { altitude } => {
                write!(f, "Altitude {altitude} m is above the tropopause")
            }
            IsaError::AltitudeBelowTropopause { altitude } => {
                write!(f, "Altitude {altitude} m is below the tropopause")
            }
            IsaError::PressureBelowTropopause { pressure } => {
                write!(f, "Pressure {pressure} Pa is below the tropopause pressure")
            }
            IsaError::PressureAboveTropopause { pressure } => {
                write!(f, "Pressure {pressure} Pa is above the tropopause pressure")
            }
            IsaError::NonPositivePressure { pressure } => {
                write!(f, "Pressure must be positive, got {pressure} Pa")
            }
            IsaError::NonPositiveTemperature { temperature } => {
                write!(f, "Temperature must be positive, got {temperature} K")
            }
            IsaError::NonPositiveMach { mach } => {
                write!(f, "Mach number must be positive, got {mach}")
            }
        }
    }
}

impl std::error::Error for IsaError {}

// ============================================================================
// PRECONDITION HELPERS
// ============================================================================

/// Widen a value for error reporting
#[inline]
fn reported<T: IsaFloat>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// NaN is not positive
#[inline]
fn is_positive<T: IsaFloat>(value: T) -> bool {
    value > T::ZERO
}

pub(crate) fn ensure_positive_temperature<T: IsaFloat>(
    temperature: Kelvin<T>,
) -> Result<(), IsaError> {
    if is_positive(*temperature) {
        Ok(())
    } else {
        let temperature = reported(*temperature);
        debug!(temperature, "rejected non-positive temperature");
        Err(IsaError::NonPositiveTemperature { temperature })
    }
}

pub(crate) fn ensure_positive_pressure<T: IsaFloat>(pressure: Pascals<T>) -> Result<(), IsaError> {
    if is_positive(*pressure) {
        Ok(())
    } else {
        let pressure = reported(*pressure);
        debug!(pressure, "rejected non-positive pressure");
        Err(IsaError::NonPositivePressure { pressure })
    }
}

pub(crate) fn ensure_positive_mach<T: IsaFloat>(mach: T) -> Result<(), IsaError> {
    if is_positive(mach) {
        Ok(())
    } else {
        let mach = reported(mach);
        debug!(mach, "rejected non-positive Mach number");
        Err(IsaError::NonPositiveMach { mach })
    }
}

pub(crate) fn altitude_above_tropopause<T: IsaFloat>(altitude: Metres<T>) -> IsaError {
    let altitude = reported(*altitude);
    debug!(altitude, "troposphere formula requested above the tropopause");
    IsaError::AltitudeAboveTropopause { altitude }
}

pub(crate) fn altitude_below_tropopause<T: IsaFloat>(altitude: Metres<T>) -> IsaError {
    let altitude = reported(*altitude);
    debug!(altitude, "tropopause formula requested below the tropopause");
    IsaError::AltitudeBelowTropopause { altitude }
}

pub(crate) fn pressure_below_tropopause<T: IsaFloat>(pressure: Pascals<T>) -> IsaError {
    let pressure = reported(*pressure);
    debug!(pressure, "troposphere formula requested below the tropopause pressure");
    IsaError::PressureBelowTropopause { pressure }
}

pub(crate) fn pressure_above_tropopause<T: IsaFloat>(pressure: Pascals<T>) -> IsaError {
    let pressure = reported(*pressure);
    debug!(pressure, "tropopause formula requested above the tropopause pressure");
    IsaError::PressureAboveTropopause { pressure }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_checks() {
        assert!(ensure_positive_temperature(Kelvin::new(216.65)).is_ok());
        assert_eq!(
            ensure_positive_temperature(Kelvin::new(0.0)),
            Err(IsaError::NonPositiveTemperature { temperature: 0.0 })
        );
        assert!(ensure_positive_pressure(Pascals::new(-1.0_f32)).is_err());
        assert!(ensure_positive_mach(0.79).is_ok());
        assert!(ensure_positive_mach(-0.1).is_err());
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(ensure_positive_temperature(Kelvin::new(f64::NAN)).is_err());
        assert!(ensure_positive_mach(f32::NAN).is_err());
    }

    #[test]
    fn test_single_precision_values_are_widened() {
        let err = altitude_above_tropopause(Metres::new(12_000.0_f32));
        assert_eq!(err, IsaError::AltitudeAboveTropopause { altitude: 12_000.0 });
    }

    #[test]
    fn test_display() {
        let err = IsaError::NonPositiveMach { mach: 0.0 };
        assert_eq!(err.to_string(), "Mach number must be positive, got 0");

        let err = IsaError::AltitudeAboveTropopause { altitude: 12_000.0 };
        assert_eq!(err.to_string(), "Altitude 12000 m is above the tropopause");
    }
}

//! Airspeed conversions: CAS ↔ TAS, Mach, speed of sound and crossover altitude.
//!
//! # Scientific Background
//!
//! Calibrated air speed (CAS) is what the pitot-static system reads; true air
//! speed (TAS) is the speed relative to the air mass. The two are related by
//! the compressible-flow (Saint-Venant) equations, which depend on the local
//! static pressure and temperature. A climb schedule flown at constant CAS and
//! then constant Mach switches over at the crossover altitude, where both give
//! the same TAS.
//!
//! # References
//!
//! - BADA Rev 3.12 user manual, Eq 3.1-22, 3.1-23, 3.1-24, 3.1-27, 3.1-29.
//! - ICAO Doc 7488/3, Eq (21).

use crate::constants::IsaFloat;
use crate::core_types::units::{Kelvin, Metres, MetresPerSecond, Pascals};
use crate::error::{
    ensure_positive_mach, ensure_positive_pressure, ensure_positive_temperature, IsaError,
};

/// Calculate the True Air Speed (TAS) from the Calibrated Air Speed (CAS) at
/// the given pressure and temperature. BADA Eq 3.1-23.
///
/// # Arguments
///
/// * `cas` - Calibrated air speed
/// * `pressure` - Static pressure
/// * `temperature` - Static air temperature
///
/// # Errors
///
/// - [`IsaError::NonPositivePressure`] if `pressure <= 0`
/// - [`IsaError::NonPositiveTemperature`] if `temperature <= 0`
pub fn true_air_speed<T: IsaFloat>(
    cas: MetresPerSecond<T>,
    pressure: Pascals<T>,
    temperature: Kelvin<T>,
) -> Result<MetresPerSecond<T>, IsaError> {
    ensure_positive_pressure(pressure)?;
    ensure_positive_temperature(temperature)?;

    let cas_factor = (T::ONE + T::CAS_INNER_FACTOR * *cas * *cas).powf(T::INV_U) - T::ONE;
    let cas_pressure_factor =
        (T::ONE + T::SEA_LEVEL_PRESSURE * cas_factor / *pressure).powf(T::U) - T::ONE;

    Ok(MetresPerSecond::new(
        (T::CAS_OUTER_FACTOR * *temperature * cas_pressure_factor).sqrt(),
    ))
}

/// Calculate the Calibrated Air Speed (CAS) from the True Air Speed (TAS) at
/// the given pressure and temperature. BADA Eq 3.1-24.
///
/// The exact inverse of [`true_air_speed`] for the same pressure and temperature.
///
/// # Errors
///
/// - [`IsaError::NonPositivePressure`] if `pressure <= 0`
/// - [`IsaError::NonPositiveTemperature`] if `temperature <= 0`
pub fn calibrated_air_speed<T: IsaFloat>(
    tas: MetresPerSecond<T>,
    pressure: Pascals<T>,
    temperature: Kelvin<T>,
) -> Result<MetresPerSecond<T>, IsaError> {
    ensure_positive_pressure(pressure)?;
    ensure_positive_temperature(temperature)?;

    let tas_factor =
        (T::ONE + T::TAS_INNER_FACTOR * *tas * *tas / *temperature).powf(T::INV_U) - T::ONE;
    let tas_pressure_factor =
        (T::ONE + *pressure * tas_factor / T::SEA_LEVEL_PRESSURE).powf(T::U) - T::ONE;

    Ok(MetresPerSecond::new(
        (T::TAS_OUTER_FACTOR * tas_pressure_factor).sqrt(),
    ))
}

/// Calculate the speed of sound at the given temperature.
///
/// ```text
/// a = sqrt(K·R·T)
/// ```
///
/// # Errors
///
/// [`IsaError::NonPositiveTemperature`] if `temperature <= 0`.
pub fn speed_of_sound<T: IsaFloat>(temperature: Kelvin<T>) -> Result<MetresPerSecond<T>, IsaError> {
    ensure_positive_temperature(temperature)?;
    Ok(MetresPerSecond::new((T::K * T::R * *temperature).sqrt()))
}

/// Calculate the True Air Speed (TAS) for a Mach number at the given
/// temperature. BADA Eq 3.1-22.
///
/// # Errors
///
/// - [`IsaError::NonPositiveMach`] if `mach <= 0`
/// - [`IsaError::NonPositiveTemperature`] if `temperature <= 0`
pub fn mach_true_air_speed<T: IsaFloat>(
    mach: T,
    temperature: Kelvin<T>,
) -> Result<MetresPerSecond<T>, IsaError> {
    ensure_positive_mach(mach)?;
    Ok(speed_of_sound(temperature)? * mach)
}

/// Mach number of a true air speed at the given temperature
///
/// # Errors
///
/// [`IsaError::NonPositiveTemperature`] if `temperature <= 0`.
pub fn mach_number<T: IsaFloat>(
    tas: MetresPerSecond<T>,
    temperature: Kelvin<T>,
) -> Result<T, IsaError> {
    Ok(tas / speed_of_sound(temperature)?)
}

/// Calculate the crossover pressure ratio `δ_trans` between a Calibrated Air
/// Speed and a Mach number. BADA Eq 3.1-29.
///
/// ```text
///          (1 + (K-1)/2 · (CAS/a0)²)^(K/(K-1)) - 1
/// δ_trans = ----------------------------------------
///          (1 + (K-1)/2 · M²)^(K/(K-1)) - 1
/// ```
///
/// # Errors
///
/// [`IsaError::NonPositiveMach`] if `mach <= 0`.
pub fn crossover_pressure_ratio<T: IsaFloat>(
    cas: MetresPerSecond<T>,
    mach: T,
) -> Result<T, IsaError> {
    ensure_positive_mach(mach)?;

    let cas_mach = *cas / T::SEA_LEVEL_SPEED_OF_SOUND;
    let numerator =
        (T::ONE + T::K_MINUS_1_OVER_2 * cas_mach * cas_mach).powf(T::INV_U) - T::ONE;
    let denominator = (T::ONE + T::K_MINUS_1_OVER_2 * mach * mach).powf(T::INV_U) - T::ONE;
    Ok(numerator / denominator)
}

/// Calculate the crossover altitude at which the True Air Speeds for the given
/// Calibrated Air Speed and Mach number coincide. BADA Eq 3.1-27.
///
/// ```text
/// h = T0 · (1 - δ_trans^(-βT·R/g)) / -βT
/// ```
///
/// # Errors
///
/// [`IsaError::NonPositiveMach`] if `mach <= 0`.
pub fn crossover_altitude<T: IsaFloat>(
    cas: MetresPerSecond<T>,
    mach: T,
) -> Result<Metres<T>, IsaError> {
    let temperature_ratio = crossover_pressure_ratio(cas, mach)?.powf(T::TEMPERATURE_POWER);
    Ok(Metres::new(
        T::SEA_LEVEL_TEMPERATURE * (T::ONE - temperature_ratio) / -T::TEMPERATURE_GRADIENT,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: f64 = 1e-8;

    fn two_thousand_metres() -> (Pascals, Kelvin) {
        (
            Pascals::new(79_495.202),
            Kelvin::new(*Kelvin::<f64>::SEA_LEVEL_TEMPERATURE - 13.0),
        )
    }

    #[test]
    fn test_true_air_speed() {
        let tas = true_air_speed(
            MetresPerSecond::new(150.0),
            Pascals::<f64>::SEA_LEVEL_PRESSURE,
            Kelvin::<f64>::SEA_LEVEL_TEMPERATURE,
        )
        .unwrap();
        assert_relative_eq!(*tas, 150.0, max_relative = TOLERANCE);

        let (pressure, temperature) = two_thousand_metres();
        let tas = true_air_speed(MetresPerSecond::new(150.0), pressure, temperature).unwrap();
        assert_relative_eq!(*tas, 164.457_894, max_relative = TOLERANCE);
    }

    #[test]
    fn test_calibrated_air_speed() {
        let cas = calibrated_air_speed(
            MetresPerSecond::new(150.0),
            Pascals::<f64>::SEA_LEVEL_PRESSURE,
            Kelvin::<f64>::SEA_LEVEL_TEMPERATURE,
        )
        .unwrap();
        assert_relative_eq!(*cas, 150.0, max_relative = TOLERANCE);

        let (pressure, temperature) = two_thousand_metres();
        let cas =
            calibrated_air_speed(MetresPerSecond::new(164.457_894), pressure, temperature).unwrap();
        assert_relative_eq!(*cas, 150.0, max_relative = TOLERANCE);
    }

    #[test]
    fn test_airspeed_domain() {
        let cas = MetresPerSecond::new(150.0);
        assert_eq!(
            true_air_speed(cas, Pascals::new(0.0), Kelvin::new(288.15)),
            Err(IsaError::NonPositivePressure { pressure: 0.0 })
        );
        assert_eq!(
            calibrated_air_speed(cas, Pascals::new(101_325.0), Kelvin::new(-1.0)),
            Err(IsaError::NonPositiveTemperature { temperature: -1.0 })
        );
    }

    #[test]
    fn test_speed_of_sound() {
        let a0 = speed_of_sound(Kelvin::<f64>::SEA_LEVEL_TEMPERATURE).unwrap();
        assert_relative_eq!(
            *a0,
            *MetresPerSecond::<f64>::SEA_LEVEL_SPEED_OF_SOUND,
            max_relative = 10.0 * TOLERANCE
        );

        let a = speed_of_sound(Kelvin::<f64>::TROPOPAUSE_TEMPERATURE).unwrap();
        assert_relative_eq!(*a, 295.069_493, max_relative = TOLERANCE);

        assert_eq!(
            speed_of_sound(Kelvin::new(0.0)),
            Err(IsaError::NonPositiveTemperature { temperature: 0.0 })
        );
    }

    #[test]
    fn test_mach_true_air_speed() {
        let tas = mach_true_air_speed(0.8, Kelvin::<f64>::SEA_LEVEL_TEMPERATURE).unwrap();
        assert_relative_eq!(
            *tas,
            0.8 * *MetresPerSecond::<f64>::SEA_LEVEL_SPEED_OF_SOUND,
            max_relative = 10.0 * TOLERANCE
        );

        let tas = mach_true_air_speed(0.85, Kelvin::<f64>::TROPOPAUSE_TEMPERATURE).unwrap();
        assert_relative_eq!(*tas, 0.85 * 295.069_493, max_relative = TOLERANCE);

        assert_eq!(
            mach_true_air_speed(0.0, Kelvin::<f64>::SEA_LEVEL_TEMPERATURE),
            Err(IsaError::NonPositiveMach { mach: 0.0 })
        );
    }

    #[test]
    fn test_crossover_altitude() {
        let h = crossover_altitude(MetresPerSecond::new(155.0), 0.79).unwrap();
        assert_relative_eq!(*h, 9070.813_566, max_relative = TOLERANCE);
    }

    #[test]
    fn test_crossover_pressure_ratio_is_below_one() {
        // CAS slower than the Mach speed at sea level: crossover lies above sea level
        let ratio = crossover_pressure_ratio(MetresPerSecond::new(155.0), 0.79).unwrap();
        assert!(ratio > 0.0);
        assert!(ratio < 1.0);
    }

    #[test]
    fn test_crossover_rejects_non_positive_mach() {
        let cas = MetresPerSecond::new(155.0);
        assert_eq!(
            crossover_pressure_ratio(cas, -0.5),
            Err(IsaError::NonPositiveMach { mach: -0.5 })
        );
        assert_eq!(
            crossover_altitude(cas, 0.0),
            Err(IsaError::NonPositiveMach { mach: 0.0 })
        );
    }

    #[test]
    fn test_single_precision_crossover() {
        let h = crossover_altitude(MetresPerSecond::new(155.0_f32), 0.79_f32).unwrap();
        assert_relative_eq!(*h, 9070.814_f32, max_relative = 1e-4);
    }
}

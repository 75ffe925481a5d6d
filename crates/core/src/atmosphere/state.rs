//! Snapshot of the standard atmosphere at one pressure altitude.

use serde::{Deserialize, Serialize};

use super::density::density;
use super::pressure::{isa_altitude, isa_pressure};
use super::temperature::isa_temperature;
use crate::airspeed::{calibrated_air_speed, mach_true_air_speed, speed_of_sound, true_air_speed};
use crate::constants::IsaFloat;
use crate::core_types::units::{
    Kelvin, KelvinDelta, KilogramsPerCubicMetre, Metres, MetresPerSecond, Pascals,
};
use crate::error::IsaError;

/// Atmospheric conditions at a pressure altitude on a given day.
///
/// All fields are derived together, so a snapshot is internally consistent:
/// the density and speed of sound belong to the stored pressure and
/// temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereState<T = f64> {
    altitude: Metres<T>,
    delta_temperature: KelvinDelta<T>,
    pressure: Pascals<T>,
    temperature: Kelvin<T>,
    density: KilogramsPerCubicMetre<T>,
    speed_of_sound: MetresPerSecond<T>,
}

impl<T: IsaFloat> AtmosphereState<T> {
    /// Build the snapshot for a pressure altitude on a day offset from ISA
    /// sea-level temperature by `delta_temperature`.
    ///
    /// # Errors
    ///
    /// [`IsaError::NonPositiveTemperature`] only for a NaN altitude or offset.
    /// Every other input yields at least `TROPOPAUSE_TEMPERATURE`, however
    /// cold the offset.
    pub fn at(altitude: Metres<T>, delta_temperature: KelvinDelta<T>) -> Result<Self, IsaError> {
        let pressure = isa_pressure(altitude);
        Self::from_parts(altitude, delta_temperature, pressure)
    }

    /// Snapshot for a standard day
    ///
    /// # Errors
    ///
    /// See [`AtmosphereState::at`].
    pub fn standard(altitude: Metres<T>) -> Result<Self, IsaError> {
        Self::at(altitude, KelvinDelta::ZERO)
    }

    /// Build the snapshot from a measured static pressure. The altitude is the
    /// ISA pressure altitude of `pressure`; the stored pressure is the one
    /// supplied.
    ///
    /// # Errors
    ///
    /// [`IsaError::NonPositivePressure`] if `pressure <= 0`.
    pub fn from_pressure(
        pressure: Pascals<T>,
        delta_temperature: KelvinDelta<T>,
    ) -> Result<Self, IsaError> {
        let altitude = isa_altitude(pressure)?;
        Self::from_parts(altitude, delta_temperature, pressure)
    }

    fn from_parts(
        altitude: Metres<T>,
        delta_temperature: KelvinDelta<T>,
        pressure: Pascals<T>,
    ) -> Result<Self, IsaError> {
        let temperature = isa_temperature(altitude, delta_temperature);
        Ok(Self {
            altitude,
            delta_temperature,
            pressure,
            temperature,
            density: density(pressure, temperature)?,
            speed_of_sound: speed_of_sound(temperature)?,
        })
    }

    /// Pressure altitude
    #[inline]
    pub fn altitude(&self) -> Metres<T> {
        self.altitude
    }

    /// Offset from ISA sea-level temperature
    #[inline]
    pub fn delta_temperature(&self) -> KelvinDelta<T> {
        self.delta_temperature
    }

    /// Static pressure
    #[inline]
    pub fn pressure(&self) -> Pascals<T> {
        self.pressure
    }

    /// Static air temperature
    #[inline]
    pub fn temperature(&self) -> Kelvin<T> {
        self.temperature
    }

    /// Air density
    #[inline]
    pub fn density(&self) -> KilogramsPerCubicMetre<T> {
        self.density
    }

    /// Local speed of sound
    #[inline]
    pub fn speed_of_sound(&self) -> MetresPerSecond<T> {
        self.speed_of_sound
    }

    /// TAS for a calibrated air speed flown at this altitude
    ///
    /// # Errors
    ///
    /// See [`true_air_speed`].
    pub fn true_air_speed(&self, cas: MetresPerSecond<T>) -> Result<MetresPerSecond<T>, IsaError> {
        true_air_speed(cas, self.pressure, self.temperature)
    }

    /// CAS for a true air speed flown at this altitude
    ///
    /// # Errors
    ///
    /// See [`calibrated_air_speed`].
    pub fn calibrated_air_speed(
        &self,
        tas: MetresPerSecond<T>,
    ) -> Result<MetresPerSecond<T>, IsaError> {
        calibrated_air_speed(tas, self.pressure, self.temperature)
    }

    /// TAS for a Mach number at this altitude
    ///
    /// # Errors
    ///
    /// See [`mach_true_air_speed`].
    pub fn mach_true_air_speed(&self, mach: T) -> Result<MetresPerSecond<T>, IsaError> {
        mach_true_air_speed(mach, self.temperature)
    }

    /// Mach number of a true air speed at this altitude
    pub fn mach_number(&self, tas: MetresPerSecond<T>) -> T {
        tas / self.speed_of_sound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_sea_level() {
        let state = AtmosphereState::standard(Metres::new(0.0)).unwrap();
        assert_eq!(state.pressure(), Pascals::<f64>::SEA_LEVEL_PRESSURE);
        assert_eq!(state.temperature(), Kelvin::<f64>::SEA_LEVEL_TEMPERATURE);
        assert_relative_eq!(*state.density(), 1.225, max_relative = 2e-8);
        assert_relative_eq!(*state.speed_of_sound(), 340.294, max_relative = 1e-6);
    }

    #[test]
    fn test_at_tropopause() {
        let state = AtmosphereState::standard(Metres::<f64>::TROPOPAUSE_ALTITUDE).unwrap();
        assert_eq!(state.pressure(), Pascals::<f64>::TROPOPAUSE_PRESSURE);
        assert_eq!(state.temperature(), Kelvin::<f64>::TROPOPAUSE_TEMPERATURE);
        assert_relative_eq!(*state.speed_of_sound(), 295.069_493, max_relative = 1e-8);
    }

    #[test]
    fn test_airspeeds_at_two_thousand_metres() {
        let state = AtmosphereState::standard(Metres::new(2000.0)).unwrap();
        let tas = state.true_air_speed(MetresPerSecond::new(150.0)).unwrap();
        assert_relative_eq!(*tas, 164.457_894, max_relative = 1e-7);

        let cas = state.calibrated_air_speed(tas).unwrap();
        assert_relative_eq!(*cas, 150.0, max_relative = 1e-8);
    }

    #[test]
    fn test_mach_round_trip() {
        let state = AtmosphereState::at(Metres::new(9000.0), KelvinDelta::new(10.0)).unwrap();
        let tas = state.mach_true_air_speed(0.78).unwrap();
        assert_relative_eq!(state.mach_number(tas), 0.78, max_relative = 1e-12);
        assert_eq!(
            state.mach_true_air_speed(0.0),
            Err(IsaError::NonPositiveMach { mach: 0.0 })
        );
    }

    #[test]
    fn test_from_pressure() {
        let state =
            AtmosphereState::from_pressure(Pascals::new(60_000.0), KelvinDelta::ZERO).unwrap();
        assert_relative_eq!(*state.altitude(), 4206.422_427_725_14, max_relative = 1e-8);
        assert_eq!(state.pressure(), Pascals::new(60_000.0));

        assert_eq!(
            AtmosphereState::<f64>::from_pressure(Pascals::new(0.0), KelvinDelta::ZERO),
            Err(IsaError::NonPositivePressure { pressure: 0.0 })
        );
    }

    #[test]
    fn test_hot_day_is_less_dense() {
        let standard = AtmosphereState::standard(Metres::new(1500.0)).unwrap();
        let hot = AtmosphereState::at(Metres::new(1500.0), KelvinDelta::new(20.0)).unwrap();
        assert_eq!(hot.pressure(), standard.pressure());
        assert!(hot.density() < standard.density());
        assert!(hot.speed_of_sound() > standard.speed_of_sound());
    }

    #[test]
    fn test_cold_offset_is_floored() {
        let offset = KelvinDelta::new(-400.0);
        let state = AtmosphereState::at(Metres::new(0.0), offset).unwrap();
        assert_eq!(state.temperature(), Kelvin::<f64>::TROPOPAUSE_TEMPERATURE);
        assert_eq!(state.delta_temperature(), offset);
        assert!(*state.density() > 0.0);
    }

    #[test]
    fn test_mach_number_free_function() {
        let m = crate::airspeed::mach_number(
            MetresPerSecond::new(295.069_493),
            Kelvin::<f64>::TROPOPAUSE_TEMPERATURE,
        )
        .unwrap();
        assert_relative_eq!(m, 1.0, max_relative = 1e-8);
    }
}

//! ICAO Standard Atmosphere primary constants and derived coefficients
//!
//! The values come from the Manual of the ICAO Standard Atmosphere
//! (ICAO Doc 7488/3, Tables A, C and D) and the BADA Rev 3.12 user manual.
//!
//! One table exists per supported float precision. Both tables are produced by
//! the same `impl_isa_float!` expansion, so every derived coefficient is
//! computed from the primary constants in the precision it will be used in.
//!
//! Typed constants are exposed as associated constants of the unit types
//! (e.g. `Pascals::<f32>::SEA_LEVEL_PRESSURE`) and, for double precision, as
//! module-level constants (e.g. [`SEA_LEVEL_PRESSURE`]).

use crate::core_types::units::{
    Kelvin, KilogramsPerCubicMetre, Metres, MetresPerSecond, MetresPerSecondSquared, Pascals,
};
use num_traits::{Float, FromPrimitive};
use std::cmp::Ordering;
use std::fmt;

/// A float precision the atmosphere model can be evaluated in.
///
/// Implemented for `f32` and `f64`.
pub trait IsaFloat:
    Float + FromPrimitive + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Additive identity, usable in constant expressions
    const ZERO: Self;
    /// Multiplicative identity, usable in constant expressions
    const ONE: Self;

    // Constants from ICAO Doc 7488/3, Table A.

    /// Acceleration due to gravity at latitude 45°32'33'' (Lambert's equation), m/s²
    const G: Self;
    /// Adiabatic index of air, dimensionless
    const K: Self;
    /// Real gas constant for air, m²/(K·s²)
    const R: Self;
    /// ISA sea level temperature, K
    const SEA_LEVEL_TEMPERATURE: Self;
    /// ISA sea level pressure, Pa
    const SEA_LEVEL_PRESSURE: Self;
    /// ISA sea level density, kg/m³
    const SEA_LEVEL_DENSITY: Self;
    /// ISA sea level speed of sound (a0), m/s. ICAO Doc 7488/3, Table C.
    const SEA_LEVEL_SPEED_OF_SOUND: Self;

    // Constants from ICAO Doc 7488/3, Table D.

    /// ISA tropopause temperature, K
    const TROPOPAUSE_TEMPERATURE: Self;
    /// Temperature gradient from sea level to the tropopause (lapse rate), K/m
    const TEMPERATURE_GRADIENT: Self;
    /// ISA tropopause altitude, m
    const TROPOPAUSE_ALTITUDE: Self;

    // Derived coefficients.

    /// CAS / TAS conversion coefficient `(K - 1) / K`. BADA Eq 3.2-14
    const U: Self;
    /// `1 / U`. BADA Eq 3.2-14
    const INV_U: Self;
    /// Power in the pressure equation below the tropopause. BADA Eq 3.1-18
    const PRESSURE_POWER: Self;
    /// Power in the altitude equation below the tropopause. BADA Eq 3.1-8
    const TEMPERATURE_POWER: Self;
    /// Pressure at `TROPOPAUSE_ALTITUDE`, Pa. BADA Eq 3.1-19
    const TROPOPAUSE_PRESSURE: Self;
    /// Decay factor of pressure and density above the tropopause. BADA Eq 3.2-16
    const TROPOPAUSE_PRESSURE_FACTOR: Self;

    /// `U / (2 R T0)`, inner factor of the CAS to TAS conversion
    const CAS_INNER_FACTOR: Self;
    /// `2 R / U`, outer factor of the CAS to TAS conversion
    const CAS_OUTER_FACTOR: Self;
    /// `U / (2 R)`, inner factor of the TAS to CAS conversion
    const TAS_INNER_FACTOR: Self;
    /// `2 R T0 / U`, outer factor of the TAS to CAS conversion
    const TAS_OUTER_FACTOR: Self;
    /// `(K - 1) / 2`, used by the crossover pressure ratio
    const K_MINUS_1_OVER_2: Self;

    /// Total ordering, NaN sorts above every other value
    fn total_order(self, other: Self) -> Ordering;
}

macro_rules! impl_isa_float {
    ($t:ty) => {
        #[allow(clippy::excessive_precision)]
        impl IsaFloat for $t {
            const ZERO: $t = 0.0;
            const ONE: $t = 1.0;

            const G: $t = 9.806_65;
            const K: $t = 1.4;
            const R: $t = 287.052_87;
            const SEA_LEVEL_TEMPERATURE: $t = 288.15;
            const SEA_LEVEL_PRESSURE: $t = 101_325.0;
            const SEA_LEVEL_DENSITY: $t = 1.225;
            const SEA_LEVEL_SPEED_OF_SOUND: $t = 340.294;

            const TROPOPAUSE_TEMPERATURE: $t = 216.65;
            const TEMPERATURE_GRADIENT: $t = -0.006_5;
            const TROPOPAUSE_ALTITUDE: $t = 11_000.0;

            const U: $t = (Self::K - 1.0) / Self::K;
            const INV_U: $t = 1.0 / Self::U;
            const PRESSURE_POWER: $t = -Self::G / (Self::TEMPERATURE_GRADIENT * Self::R);
            const TEMPERATURE_POWER: $t = 1.0 / Self::PRESSURE_POWER;
            // troposphere_pressure(TROPOPAUSE_ALTITUDE); powf is not const
            const TROPOPAUSE_PRESSURE: $t = 22_632.040_095_007_81;
            const TROPOPAUSE_PRESSURE_FACTOR: $t =
                -Self::G / (Self::R * Self::TROPOPAUSE_TEMPERATURE);

            const CAS_INNER_FACTOR: $t = Self::U / (2.0 * Self::R * Self::SEA_LEVEL_TEMPERATURE);
            const CAS_OUTER_FACTOR: $t = 2.0 * Self::R / Self::U;
            const TAS_INNER_FACTOR: $t = Self::U / (2.0 * Self::R);
            const TAS_OUTER_FACTOR: $t = 2.0 * Self::R * Self::SEA_LEVEL_TEMPERATURE / Self::U;
            const K_MINUS_1_OVER_2: $t = (Self::K - 1.0) / 2.0;

            #[inline]
            fn total_order(self, other: Self) -> Ordering {
                self.total_cmp(&other)
            }
        }
    };
}

impl_isa_float!(f32);
impl_isa_float!(f64);

// ============================================================================
// TYPED CONSTANTS (any precision)
// ============================================================================

impl<T: IsaFloat> MetresPerSecondSquared<T> {
    /// Acceleration due to gravity at latitude 45°32'33''
    pub const G: Self = Self::new(T::G);
}

impl<T: IsaFloat> Kelvin<T> {
    /// ISA sea level temperature
    pub const SEA_LEVEL_TEMPERATURE: Self = Self::new(T::SEA_LEVEL_TEMPERATURE);
    /// ISA tropopause temperature
    pub const TROPOPAUSE_TEMPERATURE: Self = Self::new(T::TROPOPAUSE_TEMPERATURE);
}

impl<T: IsaFloat> Pascals<T> {
    /// ISA sea level pressure
    pub const SEA_LEVEL_PRESSURE: Self = Self::new(T::SEA_LEVEL_PRESSURE);
    /// ISA pressure at the tropopause altitude
    pub const TROPOPAUSE_PRESSURE: Self = Self::new(T::TROPOPAUSE_PRESSURE);
}

impl<T: IsaFloat> KilogramsPerCubicMetre<T> {
    /// ISA sea level density
    pub const SEA_LEVEL_DENSITY: Self = Self::new(T::SEA_LEVEL_DENSITY);
}

impl<T: IsaFloat> MetresPerSecond<T> {
    /// ISA sea level speed of sound
    pub const SEA_LEVEL_SPEED_OF_SOUND: Self = Self::new(T::SEA_LEVEL_SPEED_OF_SOUND);
}

impl<T: IsaFloat> Metres<T> {
    /// ISA tropopause altitude
    pub const TROPOPAUSE_ALTITUDE: Self = Self::new(T::TROPOPAUSE_ALTITUDE);
}

// ============================================================================
// DOUBLE PRECISION CONSTANTS
// ============================================================================

/// Acceleration due to gravity at latitude 45°32'33''
pub const G: MetresPerSecondSquared = MetresPerSecondSquared::<f64>::G;
/// Adiabatic index of air
pub const K: f64 = <f64 as IsaFloat>::K;
/// Real gas constant for air, m²/(K·s²)
pub const R: f64 = <f64 as IsaFloat>::R;
/// ISA sea level temperature
pub const SEA_LEVEL_TEMPERATURE: Kelvin = Kelvin::<f64>::SEA_LEVEL_TEMPERATURE;
/// ISA sea level pressure
pub const SEA_LEVEL_PRESSURE: Pascals = Pascals::<f64>::SEA_LEVEL_PRESSURE;
/// ISA sea level density
pub const SEA_LEVEL_DENSITY: KilogramsPerCubicMetre = KilogramsPerCubicMetre::<f64>::SEA_LEVEL_DENSITY;
/// ISA sea level speed of sound
pub const SEA_LEVEL_SPEED_OF_SOUND: MetresPerSecond = MetresPerSecond::<f64>::SEA_LEVEL_SPEED_OF_SOUND;
/// ISA tropopause temperature
pub const TROPOPAUSE_TEMPERATURE: Kelvin = Kelvin::<f64>::TROPOPAUSE_TEMPERATURE;
/// ISA lapse rate, K/m
pub const TEMPERATURE_GRADIENT: f64 = <f64 as IsaFloat>::TEMPERATURE_GRADIENT;
/// ISA tropopause altitude
pub const TROPOPAUSE_ALTITUDE: Metres = Metres::<f64>::TROPOPAUSE_ALTITUDE;
/// ISA pressure at the tropopause altitude
pub const TROPOPAUSE_PRESSURE: Pascals = Pascals::<f64>::TROPOPAUSE_PRESSURE;

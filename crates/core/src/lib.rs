//! ISA Atmosphere Core Library
//!
//! The International Standard Atmosphere (ICAO Doc 7488/3) and the BADA
//! airspeed formulas, evaluated over typed SI quantities.
//! Implements pressure ↔ altitude conversion, the temperature profile with a
//! non-standard day offset, density, speed of sound, CAS ↔ TAS conversion,
//! Mach ↔ TAS conversion and the CAS/Mach crossover altitude.
//!
//! ## Precision
//!
//! Every formula is generic over [`IsaFloat`], implemented for `f32` and
//! `f64`. Quantity types default to `f64`.
//!
//! ## Example
//!
//! ```
//! use isa_core::{
//!     crossover_altitude, isa_pressure, isa_temperature_standard, mach_true_air_speed,
//!     true_air_speed, MetresPerSecond,
//! };
//!
//! # fn main() -> Result<(), isa_core::IsaError> {
//! let cas = MetresPerSecond::new(155.0_f64);
//! let mach = 0.79;
//!
//! let altitude = crossover_altitude(cas, mach)?;
//! let pressure = isa_pressure(altitude);
//! let temperature = isa_temperature_standard(altitude);
//!
//! let tas_from_cas = true_air_speed(cas, pressure, temperature)?;
//! let tas_from_mach = mach_true_air_speed(mach, temperature)?;
//! assert!((*tas_from_cas - *tas_from_mach).abs() < 1e-3);
//! # Ok(())
//! # }
//! ```

// Constants, units and errors
pub mod constants;
pub mod core_types;
pub mod error;

// Formulas
pub mod airspeed;
pub mod atmosphere;

// Re-export core types
pub use constants::IsaFloat;
pub use core_types::{
    Kelvin, KelvinDelta, KilogramsPerCubicMetre, Metres, MetresPerSecond, MetresPerSecondSquared,
    Pascals,
};
pub use error::IsaError;

// Re-export formulas
pub use airspeed::{
    calibrated_air_speed, crossover_altitude, crossover_pressure_ratio, mach_number,
    mach_true_air_speed, speed_of_sound, true_air_speed,
};
pub use atmosphere::{
    density, isa_altitude, isa_pressure, isa_temperature, isa_temperature_standard,
    tropopause_altitude, tropopause_pressure, troposphere_altitude, troposphere_pressure,
    AtmosphereState,
};

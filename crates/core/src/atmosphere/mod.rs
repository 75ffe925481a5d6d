//! The International Standard Atmosphere below 20 km.
//!
//! This module models the static state of the standard atmosphere:
//! - Pressure as a function of pressure altitude, and its inverse
//! - Temperature with an optional non-standard day offset
//! - Density from the ideal gas law
//! - A snapshot bundling all of the above for one altitude
//!
//! # Scientific Background
//!
//! The ISA assumes dry air obeying the ideal gas law in hydrostatic
//! equilibrium. From mean sea level up to the tropopause at 11 km the
//! temperature falls at a constant 6.5 K/km, so pressure follows a power law
//! in altitude. Between 11 km and 20 km the temperature is constant at
//! 216.65 K and pressure decays exponentially. A non-standard day shifts the
//! temperature profile but not the pressure profile: pressure altitude is
//! defined by the standard day alone.
//!
//! # References
//!
//! - ICAO (1993). "Manual of the ICAO Standard Atmosphere." Doc 7488/3.
//! - EUROCONTROL (2014). "User Manual for the Base of Aircraft Data (BADA)
//!   Revision 3.12." EEC Technical/Scientific Report No. 14/04/24-44.

mod density;
mod pressure;
mod state;
mod temperature;

pub use density::density;
pub use pressure::{
    isa_altitude, isa_pressure, tropopause_altitude, tropopause_pressure, troposphere_altitude,
    troposphere_pressure,
};
pub use state::AtmosphereState;
pub use temperature::{isa_temperature, isa_temperature_standard};

//! Semantic unit types for type-safe physical quantity handling
//!
//! This module provides newtype wrappers for the SI quantities the atmosphere
//! formulas consume and produce, so that a pressure can never be passed where
//! an altitude is expected.
//!
//! # Design Philosophy
//! - Every quantity is generic over its float precision (`f32` or `f64`),
//!   defaulting to `f64`
//! - Implements common traits (Add, Sub, Mul, Div, Ord, Display, etc.)
//! - Same-dimension arithmetic stays in the dimension; scaling by a bare float
//!   keeps the dimension; dividing two quantities of one dimension gives a ratio
//! - Total ordering via Ord trait (NaN handled as greater than all values)
//! - Serde support for serialization
//!
//! # Usage
//! ```
//! use isa_core::core_types::units::{Kelvin, KelvinDelta, Metres};
//!
//! let a = Metres::new(1000.0);
//! let b = Metres::new(250.0);
//! assert_eq!(a - b, Metres::new(750.0));
//! assert_eq!(a.max(b), a);
//!
//! let hot_day = Kelvin::new(288.15_f64) + KelvinDelta::new(15.0);
//! assert!((*hot_day - 303.15).abs() < 1e-9);
//! ```

use crate::constants::IsaFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Deref, Div, Mul, Neg, Sub, SubAssign};

// ============================================================================
// SHARED QUANTITY BEHAVIOUR
// ============================================================================

/// Declares a quantity newtype with construction, raw-value access, total
/// ordering, scalar scaling, precision conversion and `Display`.
macro_rules! quantity {
    ($(#[$meta:meta])* $name:ident, $symbol:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name<T = f64>(T);

        impl<T: IsaFloat> Eq for $name<T> {}

        impl<T: IsaFloat> PartialOrd for $name<T> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<T: IsaFloat> Ord for $name<T> {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_order(other.0)
            }
        }

        impl<T: IsaFloat> Deref for $name<T> {
            type Target = T;
            #[inline]
            fn deref(&self) -> &T {
                &self.0
            }
        }

        impl<T: IsaFloat> $name<T> {
            #[doc = concat!("Create a new value in ", $symbol, ".")]
            #[inline]
            #[must_use]
            pub const fn new(value: T) -> Self {
                $name(value)
            }

            /// Get the raw value
            #[inline]
            #[must_use]
            pub fn value(self) -> T {
                self.0
            }
        }

        impl $name<f64> {
            /// Narrow to single precision
            #[inline]
            #[must_use]
            pub fn as_f32(self) -> $name<f32> {
                $name(self.0 as f32)
            }
        }

        impl From<$name<f32>> for $name<f64> {
            fn from(v: $name<f32>) -> Self {
                $name(f64::from(v.0))
            }
        }

        impl<T: IsaFloat> From<T> for $name<T> {
            fn from(v: T) -> Self {
                $name(v)
            }
        }

        impl From<$name<f64>> for f64 {
            fn from(v: $name<f64>) -> f64 {
                v.0
            }
        }

        impl From<$name<f32>> for f32 {
            fn from(v: $name<f32>) -> f32 {
                v.0
            }
        }

        impl<T: IsaFloat> Mul<T> for $name<T> {
            type Output = $name<T>;
            fn mul(self, rhs: T) -> $name<T> {
                $name(self.0 * rhs)
            }
        }

        impl<T: IsaFloat> Div<T> for $name<T> {
            type Output = $name<T>;
            fn div(self, rhs: T) -> $name<T> {
                $name(self.0 / rhs)
            }
        }

        // Quantity / Quantity = dimensionless ratio
        impl<T: IsaFloat> Div for $name<T> {
            type Output = T;
            fn div(self, rhs: $name<T>) -> T {
                self.0 / rhs.0
            }
        }

        impl<T: IsaFloat> PartialEq<T> for $name<T> {
            fn eq(&self, other: &T) -> bool {
                self.0 == *other
            }
        }

        impl<T: IsaFloat> PartialOrd<T> for $name<T> {
            fn partial_cmp(&self, other: &T) -> Option<Ordering> {
                self.0.partial_cmp(other)
            }
        }

        impl<T: IsaFloat> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match f.precision() {
                    Some(p) => write!(f, "{:.*} {}", p, self.0, $symbol),
                    None => write!(f, "{} {}", self.0, $symbol),
                }
            }
        }
    };
}

/// Closes a quantity under addition, subtraction and negation.
macro_rules! linear_quantity {
    ($name:ident) => {
        impl<T: IsaFloat> Add for $name<T> {
            type Output = $name<T>;
            fn add(self, rhs: $name<T>) -> $name<T> {
                $name(self.0 + rhs.0)
            }
        }

        impl<T: IsaFloat> Sub for $name<T> {
            type Output = $name<T>;
            fn sub(self, rhs: $name<T>) -> $name<T> {
                $name(self.0 - rhs.0)
            }
        }

        impl<T: IsaFloat> AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: $name<T>) {
                self.0 = self.0 + rhs.0;
            }
        }

        impl<T: IsaFloat> SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: $name<T>) {
                self.0 = self.0 - rhs.0;
            }
        }

        impl<T: IsaFloat> Neg for $name<T> {
            type Output = $name<T>;
            fn neg(self) -> $name<T> {
                $name(-self.0)
            }
        }
    };
}

// ============================================================================
// LENGTH
// ============================================================================

quantity!(
    /// Length in metres.
    /// Used for pressure altitude; negative values lie below mean sea level.
    Metres,
    "m"
);
linear_quantity!(Metres);

// ============================================================================
// PRESSURE
// ============================================================================

quantity!(
    /// Static air pressure in pascals
    Pascals,
    "Pa"
);
linear_quantity!(Pascals);

impl<T: IsaFloat> Pascals<T> {
    /// Pascals per hectopascal (millibar)
    const PASCALS_PER_HECTOPASCAL: f64 = 100.0;

    /// Convert to hectopascals, the unit altimeter settings are quoted in
    #[inline]
    #[must_use]
    pub fn to_hectopascals(self) -> T {
        self.0 / T::from_f64(Self::PASCALS_PER_HECTOPASCAL).unwrap_or_else(T::nan)
    }
}

// ============================================================================
// TEMPERATURE
// ============================================================================

quantity!(
    /// Absolute thermodynamic temperature in Kelvin.
    ///
    /// Construction does not validate the sign: the formulas that need a
    /// positive temperature report a domain error instead.
    Kelvin,
    "K"
);

quantity!(
    /// Temperature difference in Kelvin.
    /// Used for the non-standard day offset from ISA sea-level temperature.
    KelvinDelta,
    "K"
);
linear_quantity!(KelvinDelta);

impl<T: IsaFloat> KelvinDelta<T> {
    /// No offset from the standard day
    pub const ZERO: KelvinDelta<T> = KelvinDelta(T::ZERO);
}

// Kelvin + KelvinDelta = Kelvin (offsetting an absolute temperature)
impl<T: IsaFloat> Add<KelvinDelta<T>> for Kelvin<T> {
    type Output = Kelvin<T>;
    fn add(self, rhs: KelvinDelta<T>) -> Kelvin<T> {
        Kelvin(self.0 + rhs.0)
    }
}

// Kelvin - KelvinDelta = Kelvin
impl<T: IsaFloat> Sub<KelvinDelta<T>> for Kelvin<T> {
    type Output = Kelvin<T>;
    fn sub(self, rhs: KelvinDelta<T>) -> Kelvin<T> {
        Kelvin(self.0 - rhs.0)
    }
}

// Kelvin - Kelvin = KelvinDelta (difference between two absolute temperatures)
impl<T: IsaFloat> Sub for Kelvin<T> {
    type Output = KelvinDelta<T>;
    fn sub(self, rhs: Kelvin<T>) -> KelvinDelta<T> {
        KelvinDelta(self.0 - rhs.0)
    }
}

// ============================================================================
// SPEED AND ACCELERATION
// ============================================================================

quantity!(
    /// Speed in metres per second.
    /// Used for calibrated air speed, true air speed and the speed of sound.
    MetresPerSecond,
    "m/s"
);
linear_quantity!(MetresPerSecond);

quantity!(
    /// Acceleration in metres per second squared
    MetresPerSecondSquared,
    "m/s²"
);

// ============================================================================
// DENSITY
// ============================================================================

quantity!(
    /// Air density in kilograms per cubic metre
    KilogramsPerCubicMetre,
    "kg/m³"
);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_dimension_arithmetic() {
        let a = Metres::new(1500.0);
        let b = Metres::new(500.0);
        assert_eq!(a + b, Metres::new(2000.0));
        assert_eq!(a - b, Metres::new(1000.0));
        assert_eq!(-b, Metres::new(-500.0));

        let mut c = a;
        c += b;
        c -= Metres::new(2000.0);
        assert_eq!(c, Metres::new(0.0));
    }

    #[test]
    fn test_scalar_scaling_and_ratio() {
        let p = Pascals::new(50_000.0);
        assert_eq!(p * 2.0, Pascals::new(100_000.0));
        assert_eq!(p / 2.0, Pascals::new(25_000.0));

        let ratio: f64 = p / Pascals::new(100_000.0);
        assert!((ratio - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_kelvin_delta_offsets() {
        let t = Kelvin::new(288.15_f64);
        let warmer = t + KelvinDelta::new(10.0);
        let colder = t - KelvinDelta::new(10.0);
        assert!((warmer.0 - 298.15).abs() < 1e-9);
        assert!((colder.0 - 278.15).abs() < 1e-9);

        let diff: KelvinDelta = warmer - colder;
        assert!((diff.0 - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_ordering_handles_nan() {
        let nan = Pascals::new(f64::NAN);
        let p = Pascals::new(1.0);
        assert_eq!(p.cmp(&nan), Ordering::Less);
        assert!(p.max(nan).value().is_nan());
    }

    #[test]
    fn test_compare_with_raw_value() {
        let alt = Metres::new(11_000.0);
        assert!(alt == 11_000.0);
        assert!(alt > 10_999.0);
        assert!(alt < 11_001.0);
    }

    #[test]
    fn test_precision_conversion() {
        let wide = MetresPerSecond::new(150.25);
        let narrow: MetresPerSecond<f32> = wide.as_f32();
        assert_eq!(narrow.value(), 150.25_f32);

        let back: MetresPerSecond<f64> = narrow.into();
        assert_eq!(back, wide);
    }

    #[test]
    fn test_raw_round_trip() {
        let rho: KilogramsPerCubicMetre = 1.225.into();
        let raw: f64 = rho.into();
        assert_eq!(raw, 1.225);
        assert_eq!(*rho, 1.225);
    }

    #[test]
    fn test_hectopascals() {
        let p = Pascals::new(101_325.0_f64);
        assert!((p.to_hectopascals() - 1013.25).abs() < 1e-9);
    }

    #[test]
    fn test_display_units() {
        assert_eq!(format!("{:.1}", Metres::new(1000.0)), "1000.0 m");
        assert_eq!(format!("{:.2}", Pascals::new(22_632.04)), "22632.04 Pa");
        assert_eq!(format!("{}", Kelvin::new(216.65)), "216.65 K");
        assert_eq!(
            format!("{:.3}", KilogramsPerCubicMetre::new(1.225)),
            "1.225 kg/m³"
        );
    }
}

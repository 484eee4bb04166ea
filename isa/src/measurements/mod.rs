// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Physical measurements with a unit of measure.
//!
//! A [`Measurement`] pairs a value with its unit. Each unit knows how to
//! convert into the SI unit of its [`PhysicalQuantity`] and back, which allows
//! to convert between units and to compare measurements given in different
//! units:
//!
//! ```
//! use isa::measurements::{Altitude, AltitudeUnit};
//!
//! let altitude = Altitude::ft(1000.0).convert_to(AltitudeUnit::Meters);
//! assert!((altitude.value() - 304.8).abs() < 1e-9);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::Div;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod altitude;
pub mod constants;
mod density;
mod pressure;
mod temperature;

pub use altitude::*;
pub use density::*;
pub use pressure::*;
pub use temperature::*;

/// The physical quantity that is measured by a unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PhysicalQuantity {
    Density,
    Length,
    Pressure,
    Temperature,
}

/// A unit in which a [`PhysicalQuantity`] is measured.
pub trait UnitOfMeasure<T>: Copy {
    /// The quantity this unit measures.
    fn quantity() -> PhysicalQuantity;

    /// The SI unit of the quantity.
    fn si() -> Self;

    /// The symbol used when a measurement is displayed.
    fn symbol(&self) -> &'static str;

    /// Converts a value given in SI into the unit `to`.
    fn from_si(value: T, to: &Self) -> T;

    /// Converts a value given in this unit into SI.
    fn to_si(&self, value: &T) -> T;
}

/// The error returned when a unit symbol is not known.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseUnitError {
    symbol: String,
}

impl ParseUnitError {
    pub(crate) fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
        }
    }
}

impl fmt::Display for ParseUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown unit \"{}\"", self.symbol)
    }
}

impl std::error::Error for ParseUnitError {}

/// A value measured in a unit `U`.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement<T, U> {
    pub(crate) value: T,
    pub(crate) unit: U,
}

impl<T, U> Measurement<T, U>
where
    T: Copy,
    U: UnitOfMeasure<T>,
{
    /// Creates a new measurement of `value` in `unit`.
    pub const fn new(value: T, unit: U) -> Self {
        Self { value, unit }
    }

    /// Creates a new measurement from a value in SI.
    pub fn from_si(value: T) -> Self {
        Self {
            value,
            unit: U::si(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn unit(&self) -> &U {
        &self.unit
    }

    /// Returns the value converted into SI.
    pub fn to_si(&self) -> T {
        self.unit.to_si(&self.value)
    }

    /// Returns this measurement converted into the unit `to`.
    pub fn convert_to(self, to: U) -> Self {
        Self {
            value: U::from_si(self.to_si(), &to),
            unit: to,
        }
    }
}

impl<U> PartialEq for Measurement<f64, U>
where
    U: UnitOfMeasure<f64>,
{
    fn eq(&self, other: &Self) -> bool {
        self.to_si() == other.to_si()
    }
}

impl<U> PartialOrd for Measurement<f64, U>
where
    U: UnitOfMeasure<f64>,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_si().partial_cmp(&other.to_si())
    }
}

/// Dividing two measurements of the same quantity gives their ratio.
impl<U> Div for Measurement<f64, U>
where
    U: UnitOfMeasure<f64>,
{
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.to_si() / rhs.to_si()
    }
}

impl<T, U> fmt::Display for Measurement<T, U>
where
    T: fmt::Display,
    U: UnitOfMeasure<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(precision) = f.precision() {
            write!(f, "{:.precision$} {}", self.value, self.unit.symbol())
        } else {
            write!(f, "{} {}", self.value, self.unit.symbol())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurements_compare_in_si() {
        assert_eq!(Pressure::h_pa(1013.25), Pressure::pa(101325.0));
        assert!(Altitude::ft(1000.0) < Altitude::m(1000.0));
    }

    #[test]
    fn division_gives_ratio() {
        let ratio = Pressure::h_pa(506.625) / Pressure::STD;
        assert!((ratio - 0.5).abs() < 1e-12);
    }

    #[test]
    fn display_honours_precision() {
        assert_eq!(format!("{:.2}", Altitude::m(1234.5678)), "1234.57 m");
        assert_eq!(format!("{}", Pressure::h_pa(1013.0)), "1013 hPa");
    }
}

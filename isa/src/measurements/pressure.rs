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

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{constants, Measurement, ParseUnitError, PhysicalQuantity, UnitOfMeasure};

/// Pressure unit with _Pa_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PressureUnit {
    Pascal,
    Hectopascal,
    InchesOfMercury,
}

impl UnitOfMeasure<f64> for PressureUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Pressure
    }

    fn si() -> Self {
        Self::Pascal
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Pascal => "Pa",
            Self::Hectopascal => "hPa",
            Self::InchesOfMercury => "inHg",
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::Pascal => value,
            Self::Hectopascal => value / constants::HECTOPASCAL_IN_PASCAL,
            Self::InchesOfMercury => {
                value
                    / constants::HECTOPASCAL_IN_PASCAL
                    / constants::INCH_OF_MERCURY_IN_HECTOPASCAL
            }
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::Pascal => *value,
            Self::Hectopascal => value * constants::HECTOPASCAL_IN_PASCAL,
            Self::InchesOfMercury => {
                value
                    * constants::INCH_OF_MERCURY_IN_HECTOPASCAL
                    * constants::HECTOPASCAL_IN_PASCAL
            }
        }
    }
}

impl FromStr for PressureUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pa" => Ok(Self::Pascal),
            "hpa" | "mbar" => Ok(Self::Hectopascal),
            "inhg" => Ok(Self::InchesOfMercury),
            _ => Err(ParseUnitError::new(s)),
        }
    }
}

/// Static air pressure.
pub type Pressure = Measurement<f64, PressureUnit>;

impl Pressure {
    /// Pressure at ISA sea-level conditions.
    pub const STD: Self = Self::pa(constants::PRESSURE_ISA_SL);

    pub const fn pa(value: f64) -> Self {
        Self::new(value, PressureUnit::Pascal)
    }

    pub const fn h_pa(value: f64) -> Self {
        Self::new(value, PressureUnit::Hectopascal)
    }

    pub const fn in_hg(value: f64) -> Self {
        Self::new(value, PressureUnit::InchesOfMercury)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn inches_of_mercury_to_pascal() {
        assert_relative_eq!(
            Pressure::in_hg(29.92).to_si(),
            101320.7888,
            max_relative = 1e-12
        );
        assert_relative_eq!(Pressure::h_pa(1013.25).to_si(), 101325.0);
    }

    #[test]
    fn pascal_to_display_units() {
        assert_relative_eq!(
            *Pressure::STD.convert_to(PressureUnit::Hectopascal).value(),
            1013.25
        );
        assert_relative_eq!(
            *Pressure::STD.convert_to(PressureUnit::InchesOfMercury).value(),
            29.921,
            max_relative = 1e-4
        );
    }

    #[test]
    fn parse_unit() {
        assert_eq!("hPa".parse::<PressureUnit>(), Ok(PressureUnit::Hectopascal));
        assert_eq!("inHg".parse::<PressureUnit>(), Ok(PressureUnit::InchesOfMercury));
        assert!("psi".parse::<PressureUnit>().is_err());
    }
}

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

/// Altitude unit with _m_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AltitudeUnit {
    Feet,
    Meters,
}

impl AltitudeUnit {
    /// The unit's name as written out in a report.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Feet => "feet",
            Self::Meters => "meters",
        }
    }
}

impl UnitOfMeasure<f64> for AltitudeUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Length
    }

    fn si() -> Self {
        Self::Meters
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Feet => "ft",
            Self::Meters => "m",
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::Meters => value,
            Self::Feet => value / constants::FEET_IN_METER,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::Meters => *value,
            Self::Feet => value * constants::FEET_IN_METER,
        }
    }
}

impl FromStr for AltitudeUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ft" | "feet" => Ok(Self::Feet),
            "m" | "meters" => Ok(Self::Meters),
            _ => Err(ParseUnitError::new(s)),
        }
    }
}

/// Altitude above mean sea level (MSL).
pub type Altitude = Measurement<f64, AltitudeUnit>;

impl Altitude {
    /// Creates an altitude in feet above MSL.
    pub const fn ft(value: f64) -> Self {
        Self::new(value, AltitudeUnit::Feet)
    }

    /// Creates an altitude in meters above MSL.
    pub const fn m(value: f64) -> Self {
        Self::new(value, AltitudeUnit::Meters)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn feet_to_meters() {
        assert_relative_eq!(Altitude::ft(10_000.0).to_si(), 3048.0, max_relative = 1e-12);
        assert_relative_eq!(
            *Altitude::m(3048.0).convert_to(AltitudeUnit::Feet).value(),
            10_000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn parse_unit() {
        assert_eq!("ft".parse::<AltitudeUnit>(), Ok(AltitudeUnit::Feet));
        assert_eq!("Meters".parse::<AltitudeUnit>(), Ok(AltitudeUnit::Meters));
        assert_eq!(
            "nm".parse::<AltitudeUnit>(),
            Err(ParseUnitError::new("nm"))
        );
    }
}

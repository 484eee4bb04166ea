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

/// Temperature unit with _K_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl UnitOfMeasure<f64> for TemperatureUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Temperature
    }

    fn si() -> Self {
        Self::Kelvin
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::Kelvin => value,
            Self::Celsius => value - constants::KELVIN_IN_CELSIUS,
            Self::Fahrenheit => (value - constants::KELVIN_IN_CELSIUS) * 9.0 / 5.0 + 32.0,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::Kelvin => *value,
            Self::Celsius => value + constants::KELVIN_IN_CELSIUS,
            // via °C to stay with the factor 5/9 on the Fahrenheit scale
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + constants::KELVIN_IN_CELSIUS,
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('°').to_ascii_lowercase().as_str() {
            "c" | "celsius" => Ok(Self::Celsius),
            "f" | "fahrenheit" => Ok(Self::Fahrenheit),
            "k" | "kelvin" => Ok(Self::Kelvin),
            _ => Err(ParseUnitError::new(s)),
        }
    }
}

/// Air temperature.
pub type Temperature = Measurement<f64, TemperatureUnit>;

impl Temperature {
    /// Temperature at ISA sea-level conditions.
    pub const STD: Self = Self::k(constants::TEMPERATURE_ISA_SL);

    pub const fn c(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Celsius)
    }

    pub const fn f(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Fahrenheit)
    }

    pub const fn k(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Kelvin)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn fahrenheit_to_kelvin() {
        assert_relative_eq!(Temperature::f(32.0).to_si(), 273.15);
        assert_relative_eq!(Temperature::f(59.0).to_si(), 288.15, max_relative = 1e-12);
    }

    #[test]
    fn kelvin_to_display_units() {
        let t = Temperature::k(216.65);
        assert_relative_eq!(
            *t.convert_to(TemperatureUnit::Celsius).value(),
            -56.5,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            *t.convert_to(TemperatureUnit::Fahrenheit).value(),
            -69.7,
            max_relative = 1e-12
        );
    }

    #[test]
    fn parse_unit() {
        assert_eq!("°C".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Celsius));
        assert_eq!("F".parse::<TemperatureUnit>(), Ok(TemperatureUnit::Fahrenheit));
        assert!("R".parse::<TemperatureUnit>().is_err());
    }
}

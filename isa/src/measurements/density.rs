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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{constants, Measurement, PhysicalQuantity, Pressure, Temperature, UnitOfMeasure};

/// Density unit with _kg/m³_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DensityUnit {
    KilogramPerCubicMeter,
}

impl UnitOfMeasure<f64> for DensityUnit {
    fn quantity() -> PhysicalQuantity {
        PhysicalQuantity::Density
    }

    fn si() -> Self {
        Self::KilogramPerCubicMeter
    }

    fn symbol(&self) -> &'static str {
        match self {
            Self::KilogramPerCubicMeter => "kg/m³",
        }
    }

    fn from_si(value: f64, to: &Self) -> f64 {
        match to {
            Self::KilogramPerCubicMeter => value,
        }
    }

    fn to_si(&self, value: &f64) -> f64 {
        match self {
            Self::KilogramPerCubicMeter => *value,
        }
    }
}

/// Air density.
pub type Density = Measurement<f64, DensityUnit>;

impl Density {
    pub const fn kg_per_m3(value: f64) -> Self {
        Self::new(value, DensityUnit::KilogramPerCubicMeter)
    }

    /// Density of dry air from the ideal gas law `ρ = P / (R·T)`.
    pub fn of_dry_air(pressure: Pressure, temperature: Temperature) -> Self {
        let rho = pressure.to_si() / (constants::GAS_CONSTANT_DRY_AIR * temperature.to_si());
        Self::kg_per_m3(rho)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn dry_air_at_isa_sea_level() {
        let rho = Density::of_dry_air(Pressure::STD, Temperature::STD);
        assert_relative_eq!(*rho.value(), 1.225, epsilon = 1e-3);
    }
}

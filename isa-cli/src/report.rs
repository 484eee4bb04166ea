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

use std::fmt;

use isa::prelude::*;

use crate::form::Units;

/// A computation result in the units selected by the user.
#[derive(Clone, PartialEq, Debug)]
pub struct Report {
    altitude: Altitude,
    temperature: Temperature,
    pressure: Pressure,
    pressure_pct: f64,
    density: Density,
    density_pct: f64,
}

impl Report {
    pub fn new(input: &ComputationInput, result: &ComputationResult, units: &Units) -> Self {
        Self {
            altitude: input.altitude.convert_to(units.altitude),
            temperature: result.temperature().convert_to(units.temperature),
            pressure: result.pressure().convert_to(units.pressure),
            pressure_pct: result.pressure_pct(),
            density: result.density(),
            density_pct: result.density_pct(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "At {:.2} {}:",
            self.altitude.value(),
            self.altitude.unit().name()
        )?;
        writeln!(f, "Temperature = {:.2}", self.temperature)?;
        writeln!(
            f,
            "Pressure = {:.2} ({:.2}% of sea level)",
            self.pressure, self.pressure_pct
        )?;
        write!(
            f,
            "Density = {:.6} ({:.2}% of sea level)",
            self.density, self.density_pct
        )
    }
}

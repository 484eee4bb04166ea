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

//! Extended International Standard Atmosphere.
//!
//! The model splits the atmosphere from sea level up to 84 852 m into seven
//! [layers]. Within each layer the temperature is either constant or changes
//! linearly with the altitude, and the pressure follows from the hydrostatic
//! equation. The model is seeded with the sea-level temperature and pressure
//! of a [`ComputationInput`] and [`compute`] returns the temperature, pressure
//! and density at the input's altitude.
//!
//! [layers]: LAYERS

use log::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::measurements::constants::GAS_CONSTANT_DRY_AIR as R;
use crate::measurements::{Altitude, Density, Pressure, PressureUnit, Temperature, TemperatureUnit};

mod layer;

pub use layer::*;

/// The altitude and the sea-level reference to compute the atmosphere at.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComputationInput {
    pub altitude: Altitude,
    pub sea_level_temperature: Temperature,
    pub sea_level_pressure: Pressure,
}

impl ComputationInput {
    pub fn new(
        altitude: Altitude,
        sea_level_temperature: Temperature,
        sea_level_pressure: Pressure,
    ) -> Self {
        Self {
            altitude,
            sea_level_temperature,
            sea_level_pressure,
        }
    }

    /// Creates the input from an altitude in m, a sea-level pressure in Pa
    /// and a sea-level temperature in K.
    pub fn si(altitude: f64, sea_level_pressure: f64, sea_level_temperature: f64) -> Self {
        Self::new(
            Altitude::m(altitude),
            Temperature::k(sea_level_temperature),
            Pressure::pa(sea_level_pressure),
        )
    }

    /// Creates the input for an altitude at ISA sea-level conditions.
    pub fn isa(altitude: Altitude) -> Self {
        Self::new(altitude, Temperature::STD, Pressure::STD)
    }
}

/// The atmosphere at an altitude.
///
/// The temperature is given in °C and the pressure in hPa. Both can be
/// converted into other units with [`convert_to`].
///
/// [`convert_to`]: crate::measurements::Measurement::convert_to
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComputationResult {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "layer_index"))]
    layer: usize,
    temperature: Temperature,
    pressure: Pressure,
    density: Density,
    pressure_pct: f64,
    density_pct: f64,
}

impl ComputationResult {
    /// The layer in which the result was computed.
    pub fn layer(&self) -> &'static Layer {
        &LAYERS[self.layer]
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    pub fn density(&self) -> Density {
        self.density
    }

    /// The pressure in percent of the sea-level pressure.
    pub fn pressure_pct(&self) -> f64 {
        self.pressure_pct
    }

    /// The density in percent of the density at sea level.
    pub fn density_pct(&self) -> f64 {
        self.density_pct
    }
}

/// Deserializes an index into [`LAYERS`], rejecting layers the model doesn't have.
#[cfg(feature = "serde")]
fn layer_index<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let index = usize::deserialize(deserializer)?;

    if index < LAYERS.len() {
        Ok(index)
    } else {
        Err(serde::de::Error::custom(format!(
            "layer {index} is not one of the {} layers of the model",
            LAYERS.len()
        )))
    }
}

/// Computes the atmosphere at the input's altitude.
///
/// # Errors
///
/// Returns [`AltitudeOutOfRange`] if the altitude is above [`MAX_ALTITUDE`].
/// Altitudes below sea level are not rejected and are computed with the
/// first layer.
///
/// # Examples
///
/// ```
/// use isa::atmosphere::{compute, ComputationInput};
///
/// # fn main() -> isa::Result<()> {
/// let result = compute(&ComputationInput::si(11000.0, 101325.0, 288.15))?;
/// assert!((result.temperature().value() - -56.5).abs() < 1e-9);
/// # Ok(())
/// # }
/// ```
///
/// [`AltitudeOutOfRange`]: Error::AltitudeOutOfRange
pub fn compute(input: &ComputationInput) -> Result<ComputationResult> {
    let altitude = input.altitude.to_si();
    let t0 = input.sea_level_temperature.to_si();
    let p0 = input.sea_level_pressure.to_si();

    let Some((index, layer)) = Layer::find(altitude) else {
        warn!("altitude of {altitude} m is outside of the model");
        return Err(Error::AltitudeOutOfRange { altitude });
    };

    trace!("{altitude} m is in the {} (layer {index})", layer.name());

    let t = layer.temperature(altitude, t0);
    let p = layer.pressure(altitude, t, t0, p0);

    let density = Density::of_dry_air(Pressure::pa(p), Temperature::k(t));
    let temperature = Temperature::k(t).convert_to(TemperatureUnit::Celsius);
    let pressure = Pressure::pa(p).convert_to(PressureUnit::Hectopascal);

    let pressure_pct = pressure.value() / (p0 / 100.0) * 100.0;
    let density_pct = density.value() / (p0 / (R * t0)) * 100.0;

    debug!(
        "atmosphere at {altitude} m: {temperature:.2}, {pressure:.2}, {density:.6} \
         ({pressure_pct:.2}% pressure, {density_pct:.2}% density)"
    );

    Ok(ComputationResult {
        layer: index,
        temperature,
        pressure,
        density,
        pressure_pct,
        density_pct,
    })
}

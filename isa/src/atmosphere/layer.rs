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

use crate::measurements::constants::{GAS_CONSTANT_DRY_AIR as R, GRAVITY as G};

/// Altitude in meters at which the model ends.
pub const MAX_ALTITUDE: f64 = 84852.0;

/// How the temperature changes within a layer.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Gradient {
    /// The temperature changes linearly by `lapse_rate` in K/m.
    Polytropic { lapse_rate: f64 },
    /// The temperature is constant.
    Isothermal,
}

#[derive(Copy, Clone, PartialEq, Debug)]
enum BaseTemperature {
    /// Offset in K to the sea-level temperature.
    SeaLevel(f64),
    /// Temperature in K independent of the sea-level temperature.
    Fixed(f64),
}

/// A band of the atmosphere with a single temperature gradient.
///
/// The pressure in a layer is `P0 · pressure_ratio · f(h, T)` where `P0` is
/// the sea-level pressure and `f` follows from the hydrostatic equation for
/// the layer's [`Gradient`]. Note that every layer is seeded with the
/// sea-level pressure and a tabulated ratio rather than the pressure at the
/// layer's base. This deviates slightly from the ISA standard above 11 km if
/// the sea-level conditions are not standard.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Layer {
    name: &'static str,
    base: f64,
    top: f64,
    base_temperature: BaseTemperature,
    gradient: Gradient,
    pressure_ratio: f64,
}

/// The layers of the model in ascending order.
pub static LAYERS: [Layer; 7] = [
    Layer {
        name: "troposphere",
        base: 0.0,
        top: 11000.0,
        base_temperature: BaseTemperature::SeaLevel(0.0),
        gradient: Gradient::Polytropic { lapse_rate: -0.0065 },
        pressure_ratio: 1.0,
    },
    Layer {
        name: "tropopause",
        base: 11000.0,
        top: 20000.0,
        base_temperature: BaseTemperature::SeaLevel(-0.0065 * 11000.0),
        gradient: Gradient::Isothermal,
        pressure_ratio: 0.22336,
    },
    Layer {
        name: "lower stratosphere",
        base: 20000.0,
        top: 32000.0,
        base_temperature: BaseTemperature::Fixed(216.65),
        gradient: Gradient::Polytropic { lapse_rate: 0.001 },
        pressure_ratio: 0.05403,
    },
    Layer {
        name: "upper stratosphere",
        base: 32000.0,
        top: 47000.0,
        base_temperature: BaseTemperature::Fixed(228.65),
        gradient: Gradient::Isothermal,
        pressure_ratio: 0.00856,
    },
    Layer {
        name: "stratopause",
        base: 47000.0,
        top: 51000.0,
        base_temperature: BaseTemperature::Fixed(228.65),
        gradient: Gradient::Polytropic { lapse_rate: 0.0028 },
        pressure_ratio: 0.00109,
    },
    Layer {
        name: "lower mesosphere",
        base: 51000.0,
        top: 71000.0,
        base_temperature: BaseTemperature::Fixed(270.65),
        gradient: Gradient::Isothermal,
        pressure_ratio: 0.00066,
    },
    Layer {
        name: "upper mesosphere",
        base: 71000.0,
        top: MAX_ALTITUDE,
        base_temperature: BaseTemperature::Fixed(270.65),
        gradient: Gradient::Polytropic { lapse_rate: -0.0028 },
        pressure_ratio: 0.00003,
    },
];

impl Layer {
    /// Finds the first layer whose top is at or above the altitude in meters.
    ///
    /// Returns the layer's index into [`LAYERS`] together with the layer, or
    /// `None` if the altitude is above [`MAX_ALTITUDE`] or not a number.
    /// Altitudes below sea level fall into the first layer.
    pub fn find(altitude: f64) -> Option<(usize, &'static Layer)> {
        LAYERS
            .iter()
            .enumerate()
            .find(|(_, layer)| altitude <= layer.top)
    }

    /// The name of the layer, e.g. "tropopause".
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The altitude in meters at which the layer starts.
    pub fn base(&self) -> f64 {
        self.base
    }

    /// The altitude in meters at which the layer ends.
    pub fn top(&self) -> f64 {
        self.top
    }

    /// How the temperature changes with altitude within the layer.
    pub fn gradient(&self) -> Gradient {
        self.gradient
    }

    fn base_temperature(&self, sea_level_temperature: f64) -> f64 {
        match self.base_temperature {
            BaseTemperature::SeaLevel(offset) => sea_level_temperature + offset,
            BaseTemperature::Fixed(temperature) => temperature,
        }
    }

    /// Returns the temperature in K at the altitude in meters.
    pub fn temperature(&self, altitude: f64, sea_level_temperature: f64) -> f64 {
        let base_temperature = self.base_temperature(sea_level_temperature);

        match self.gradient {
            Gradient::Polytropic { lapse_rate } => {
                base_temperature + lapse_rate * (altitude - self.base)
            }
            Gradient::Isothermal => base_temperature,
        }
    }

    /// Returns the pressure in Pa at the altitude in meters.
    ///
    /// The `temperature` in K is the one returned by [`Layer::temperature`]
    /// for the same altitude.
    pub fn pressure(
        &self,
        altitude: f64,
        temperature: f64,
        sea_level_temperature: f64,
        sea_level_pressure: f64,
    ) -> f64 {
        let base_pressure = sea_level_pressure * self.pressure_ratio;

        match self.gradient {
            Gradient::Polytropic { lapse_rate } => {
                let base_temperature = self.base_temperature(sea_level_temperature);
                base_pressure * (temperature / base_temperature).powf(-G / (lapse_rate * R))
            }
            Gradient::Isothermal => {
                base_pressure * (-G * (altitude - self.base) / (R * temperature)).exp()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn layers_are_contiguous() {
        assert_eq!(LAYERS[0].base(), 0.0);

        for pair in LAYERS.windows(2) {
            assert_eq!(pair[0].top(), pair[1].base());
        }

        assert_eq!(LAYERS[LAYERS.len() - 1].top(), MAX_ALTITUDE);
    }

    #[test]
    fn find_picks_first_layer_at_or_above() {
        assert_eq!(Layer::find(0.0).map(|(i, _)| i), Some(0));
        assert_eq!(Layer::find(11000.0).map(|(i, _)| i), Some(0));
        assert_eq!(Layer::find(11000.01).map(|(i, _)| i), Some(1));
        assert_eq!(Layer::find(50000.0).map(|(i, _)| i), Some(4));
        assert_eq!(Layer::find(MAX_ALTITUDE).map(|(i, _)| i), Some(6));
    }

    #[test]
    fn find_below_sea_level() {
        assert_eq!(Layer::find(-400.0).map(|(i, _)| i), Some(0));
    }

    #[test]
    fn find_out_of_range() {
        assert!(Layer::find(84852.1).is_none());
        assert!(Layer::find(f64::NAN).is_none());
        assert!(Layer::find(f64::INFINITY).is_none());
    }

    #[test]
    fn tropopause_follows_sea_level_temperature() {
        let (_, tropopause) = Layer::find(15000.0).unwrap();
        assert_eq!(tropopause.gradient(), Gradient::Isothermal);
        assert_relative_eq!(
            tropopause.temperature(15000.0, 298.15),
            226.65,
            max_relative = 1e-12
        );
    }

    #[test]
    fn upper_layers_ignore_sea_level_temperature() {
        let (_, layer) = Layer::find(40000.0).unwrap();
        assert_eq!(layer.temperature(40000.0, 288.15), 228.65);
        assert_eq!(layer.temperature(40000.0, 250.0), 228.65);
    }

    #[test]
    fn troposphere_pressure_at_base_is_sea_level_pressure() {
        let layer = &LAYERS[0];
        let t = layer.temperature(0.0, 288.15);
        assert_eq!(layer.pressure(0.0, t, 288.15, 101325.0), 101325.0);
    }

    #[test]
    fn pressure_scales_with_sea_level_pressure() {
        // every layer is seeded with the sea-level pressure, even above 11 km
        for layer in LAYERS.iter() {
            let h = (layer.base() + layer.top()) / 2.0;
            let t = layer.temperature(h, 288.15);
            let p = layer.pressure(h, t, 288.15, 101325.0);
            let p_half = layer.pressure(h, t, 288.15, 101325.0 / 2.0);
            assert_relative_eq!(p_half, p / 2.0, max_relative = 1e-12);
        }
    }
}

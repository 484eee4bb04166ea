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

pub const FEET_IN_METER: f64 = 0.3048;
pub const KELVIN_IN_CELSIUS: f64 = 273.15;
pub const HECTOPASCAL_IN_PASCAL: f64 = 100.0;
pub const INCH_OF_MERCURY_IN_HECTOPASCAL: f64 = 33.8639;
/// Standard gravitational acceleration in m/s².
pub const GRAVITY: f64 = 9.80665;
/// Specific gas constant for dry air in J/(kg·K).
pub const GAS_CONSTANT_DRY_AIR: f64 = 287.05;
/// Pressure at ISA sea-level conditions in Pa.
pub const PRESSURE_ISA_SL: f64 = 101325.0;
/// Temperature at ISA sea-level conditions in K.
pub const TEMPERATURE_ISA_SL: f64 = 288.15;

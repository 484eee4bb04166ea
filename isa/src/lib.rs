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

//! Extended International Standard Atmosphere (ISA).
//!
//! This crate computes the temperature, pressure and density of the
//! atmosphere at an altitude between sea level and 84 852 m. Other than the
//! plain ISA, the model is seeded with a sea-level temperature and pressure
//! which allows to compute the atmosphere of a non-standard day.
//!
//! # Examples
//!
//! The air at 5 000 ft on a warm day with a high QNH:
//!
//! ```
//! use isa::prelude::*;
//!
//! # fn main() -> Result<(), Error> {
//! let input = ComputationInput::new(
//!     Altitude::ft(5000.0),
//!     Temperature::c(30.0),
//!     Pressure::h_pa(1030.0),
//! );
//! let result = compute(&input)?;
//!
//! println!(
//!     "{:.2} {:.2} ({:.2}% of sea level)",
//!     result.temperature(),
//!     result.pressure(),
//!     result.pressure_pct()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Altitudes above the model's top are rejected:
//!
//! ```
//! use isa::prelude::*;
//!
//! let input = ComputationInput::isa(Altitude::m(90_000.0));
//! assert!(matches!(compute(&input), Err(Error::AltitudeOutOfRange { .. })));
//! ```

pub mod atmosphere;
mod error;
pub mod measurements;

pub use atmosphere::compute;
pub use error::{Error, Result};

pub mod prelude {
    pub use crate::atmosphere::{compute, ComputationInput, ComputationResult};
    pub use crate::error::Error;
    pub use crate::measurements::{
        Altitude, AltitudeUnit, Density, Pressure, PressureUnit, Temperature, TemperatureUnit,
    };
}

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

use std::error;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Error {
    /// The altitude in meters is above the top of the model's last layer.
    ///
    /// An altitude that is not a number can't be placed in any layer and is
    /// out of range too.
    AltitudeOutOfRange { altitude: f64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AltitudeOutOfRange { .. } => {
                write!(f, "Altitude exceeds the limits of this extended ISA model")
            }
        }
    }
}

impl error::Error for Error {}

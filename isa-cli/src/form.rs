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

//! The calculator's input form.
//!
//! The [`Form`] holds everything the user entered: the text of the three
//! input fields, the selected units and the report of the last calculation.

use std::error;
use std::fmt;

use isa::measurements::ParseUnitError;
use isa::prelude::*;
use tracing::debug;

use crate::report::Report;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Field {
    Altitude,
    Temperature,
    Pressure,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Altitude => write!(f, "altitude"),
            Self::Temperature => write!(f, "sea-level temperature"),
            Self::Pressure => write!(f, "sea-level pressure"),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum FormError {
    /// The field is empty.
    MissingInput(Field),
    /// The field's text is not a finite number.
    InvalidNumber { field: Field, text: String },
    UnknownUnit(ParseUnitError),
    /// The unit is known but can't be selected for the field.
    UnsupportedUnit { field: Field, unit: String },
    Computation(Error),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput(field) => write!(f, "please enter the {field}"),
            Self::InvalidNumber { field, text } => {
                write!(f, "the {field} \"{text}\" is not a number")
            }
            Self::UnknownUnit(e) => write!(f, "{e}"),
            Self::UnsupportedUnit { field, unit } => {
                write!(f, "{unit} can't be selected for the {field}")
            }
            Self::Computation(e) => write!(f, "{e}"),
        }
    }
}

impl error::Error for FormError {}

impl From<ParseUnitError> for FormError {
    fn from(e: ParseUnitError) -> Self {
        Self::UnknownUnit(e)
    }
}

impl From<Error> for FormError {
    fn from(e: Error) -> Self {
        Self::Computation(e)
    }
}

/// The units selected for the input fields.
///
/// The results are reported in the same units.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Units {
    pub altitude: AltitudeUnit,
    pub temperature: TemperatureUnit,
    pub pressure: PressureUnit,
}

impl Default for Units {
    fn default() -> Self {
        Self {
            altitude: AltitudeUnit::Feet,
            temperature: TemperatureUnit::Celsius,
            pressure: PressureUnit::Hectopascal,
        }
    }
}

impl Units {
    /// Selects the unit with the `symbol` for the field.
    ///
    /// Only the units which are offered to the user can be selected, i.e.
    /// °C or °F for the temperature and hPa or inHg for the pressure.
    pub fn select(&mut self, field: Field, symbol: &str) -> Result<(), FormError> {
        let unsupported = || FormError::UnsupportedUnit {
            field,
            unit: symbol.to_string(),
        };

        match field {
            Field::Altitude => self.altitude = symbol.parse::<AltitudeUnit>()?,
            Field::Temperature => match symbol.parse::<TemperatureUnit>()? {
                TemperatureUnit::Kelvin => return Err(unsupported()),
                unit => self.temperature = unit,
            },
            Field::Pressure => match symbol.parse::<PressureUnit>()? {
                PressureUnit::Pascal => return Err(unsupported()),
                unit => self.pressure = unit,
            },
        }

        Ok(())
    }

    /// Selects a unit for whichever field the `symbol` belongs to.
    pub fn select_any(&mut self, symbol: &str) -> Result<Field, FormError> {
        for field in [Field::Altitude, Field::Temperature] {
            if self.select(field, symbol).is_ok() {
                return Ok(field);
            }
        }

        self.select(Field::Pressure, symbol).map(|_| Field::Pressure)
    }
}

/// The state of the calculator.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Form {
    altitude: String,
    temperature: String,
    pressure: String,
    units: Units,
    report: Option<Report>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn units(&self) -> &Units {
        &self.units
    }

    pub fn units_mut(&mut self) -> &mut Units {
        &mut self.units
    }

    /// The report of the last successful calculation.
    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Altitude => &self.altitude,
            Field::Temperature => &self.temperature,
            Field::Pressure => &self.pressure,
        }
    }

    /// Enters the `text` into the field.
    ///
    /// The text may end with a unit symbol, e.g. `5000ft` or `29.92 inHg`,
    /// which selects the field's unit.
    pub fn enter(&mut self, field: Field, text: &str) -> Result<(), FormError> {
        let (value, unit) = split_unit(text.trim());

        if let Some(unit) = unit {
            self.units.select(field, unit)?;
        }

        let value = value.to_string();
        match field {
            Field::Altitude => self.altitude = value,
            Field::Temperature => self.temperature = value,
            Field::Pressure => self.pressure = value,
        }

        Ok(())
    }

    /// Empties all fields, selects the default units and discards the report.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns the input in SI units.
    ///
    /// # Errors
    ///
    /// Fails if a field is empty or not a number.
    pub fn input(&self) -> Result<ComputationInput, FormError> {
        let altitude = Altitude::new(self.number(Field::Altitude)?, self.units.altitude);
        let temperature = Temperature::new(
            self.number(Field::Temperature)?,
            self.units.temperature,
        );
        let pressure = Pressure::new(self.number(Field::Pressure)?, self.units.pressure);

        Ok(ComputationInput::si(
            altitude.to_si(),
            pressure.to_si(),
            temperature.to_si(),
        ))
    }

    /// Computes the atmosphere for the entered values.
    ///
    /// The report of a successful calculation replaces the previous one. If
    /// the calculation fails, the previous report is kept.
    pub fn calculate(&mut self) -> Result<&Report, FormError> {
        let input = self.input()?;
        debug!(?input, "calculating");

        let result = compute(&input)?;
        Ok(self.report.insert(Report::new(&input, &result, &self.units)))
    }

    fn number(&self, field: Field) -> Result<f64, FormError> {
        let text = self.text(field);

        if text.is_empty() {
            return Err(FormError::MissingInput(field));
        }

        text.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| FormError::InvalidNumber {
                field,
                text: text.to_string(),
            })
    }
}

/// Splits a trailing unit symbol from the text.
///
/// The value is the longest prefix that parses as number.
fn split_unit(text: &str) -> (&str, Option<&str>) {
    let split = text
        .char_indices()
        .map(|(i, _)| i)
        .chain([text.len()])
        .rev()
        .find(|&i| text[..i].trim_end().parse::<f64>().is_ok());

    match split {
        Some(i) if i < text.len() => (text[..i].trim_end(), Some(text[i..].trim())),
        _ => (text, None),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn filled(altitude: &str, temperature: &str, pressure: &str) -> Form {
        let mut form = Form::new();
        form.enter(Field::Altitude, altitude).unwrap();
        form.enter(Field::Temperature, temperature).unwrap();
        form.enter(Field::Pressure, pressure).unwrap();
        form
    }

    #[test]
    fn default_units() {
        let units = Units::default();
        assert_eq!(units.altitude, AltitudeUnit::Feet);
        assert_eq!(units.temperature, TemperatureUnit::Celsius);
        assert_eq!(units.pressure, PressureUnit::Hectopascal);
    }

    #[test]
    fn split_trailing_unit() {
        assert_eq!(split_unit("5000ft"), ("5000", Some("ft")));
        assert_eq!(split_unit("29.92 inHg"), ("29.92", Some("inHg")));
        assert_eq!(split_unit("-56.5°C"), ("-56.5", Some("°C")));
        assert_eq!(split_unit("1e3m"), ("1e3", Some("m")));
        assert_eq!(split_unit("1013.25"), ("1013.25", None));
        assert_eq!(split_unit("abc"), ("abc", None));
    }

    #[test]
    fn enter_selects_unit() {
        let form = filled("3000 m", "59°F", "29.92inHg");

        assert_eq!(form.text(Field::Altitude), "3000");
        assert_eq!(form.units().altitude, AltitudeUnit::Meters);
        assert_eq!(form.units().temperature, TemperatureUnit::Fahrenheit);
        assert_eq!(form.units().pressure, PressureUnit::InchesOfMercury);
    }

    #[test]
    fn kelvin_and_pascal_are_not_offered() {
        let mut form = Form::new();

        assert!(matches!(
            form.enter(Field::Temperature, "288 K"),
            Err(FormError::UnsupportedUnit { field: Field::Temperature, .. })
        ));
        assert!(matches!(
            form.enter(Field::Pressure, "101325 Pa"),
            Err(FormError::UnsupportedUnit { field: Field::Pressure, .. })
        ));
        assert!(matches!(
            form.enter(Field::Altitude, "1000 nm"),
            Err(FormError::UnknownUnit(_))
        ));
    }

    #[test]
    fn select_any_finds_field() {
        let mut units = Units::default();

        assert_eq!(units.select_any("m"), Ok(Field::Altitude));
        assert_eq!(units.select_any("F"), Ok(Field::Temperature));
        assert_eq!(units.select_any("inHg"), Ok(Field::Pressure));
        assert!(units.select_any("psi").is_err());
        assert_eq!(units.altitude, AltitudeUnit::Meters);
    }

    #[test]
    fn input_is_normalized_to_si() {
        let input = filled("1000", "59 F", "29.92 inHg").input().unwrap();

        assert_relative_eq!(input.altitude.to_si(), 304.8, max_relative = 1e-12);
        assert_relative_eq!(
            input.sea_level_temperature.to_si(),
            288.15,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            input.sea_level_pressure.to_si(),
            29.92 * 33.8639 * 100.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn missing_and_invalid_input() {
        let mut form = filled("", "15", "1013.25");
        assert_eq!(
            form.calculate().unwrap_err(),
            FormError::MissingInput(Field::Altitude)
        );

        let mut form = filled("1000", "warm", "1013.25");
        assert_eq!(
            form.calculate().unwrap_err(),
            FormError::InvalidNumber {
                field: Field::Temperature,
                text: "warm".to_string()
            }
        );

        let mut form = filled("1000", "15", "NaN");
        assert!(matches!(
            form.calculate(),
            Err(FormError::InvalidNumber { field: Field::Pressure, .. })
        ));
    }

    #[test]
    fn out_of_range_keeps_previous_report() {
        let mut form = filled("0", "15", "1013.25");
        form.calculate().unwrap();
        let previous = form.report().cloned();

        form.enter(Field::Altitude, "90000 m").unwrap();
        let err = form.calculate().unwrap_err();

        assert_eq!(
            err.to_string(),
            "Altitude exceeds the limits of this extended ISA model"
        );
        assert_eq!(form.report().cloned(), previous);
    }

    #[test]
    fn clear_resets_everything() {
        let mut form = filled("3000 m", "59 F", "29.92 inHg");
        form.calculate().unwrap();
        form.clear();

        assert_eq!(form, Form::default());
        assert_eq!(form.text(Field::Pressure), "");
        assert!(form.report().is_none());
    }
}

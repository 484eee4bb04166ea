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

//! Extended ISA Calculator
//!
//! A terminal calculator for the atmosphere at an altitude on a day with the
//! given sea-level temperature and pressure.
//!
//! # Usage
//!
//! ```bash
//! # interactive
//! cargo run --package isa-cli
//!
//! # single calculation
//! cargo run --package isa-cli -- 5000ft 15C 1013.25hPa
//! ```
//!
//! # Commands
//!
//! - `altitude <value> [ft|m]` - Enter the altitude
//! - `temperature <value> [C|F]` - Enter the sea-level temperature
//! - `pressure <value> [hPa|inHg]` - Enter the sea-level pressure
//! - `units [unit...]` - Show or select the units
//! - `calculate` - Compute the atmosphere at the altitude
//! - `clear` - Clear all inputs and reset the units
//! - `show` - Show the inputs and the last result
//! - `help` - Show available commands
//! - `quit` - Exit the calculator
//!
//! Set `RUST_LOG=debug` to trace the calculations.

use std::env;
use std::process::ExitCode;

use isa::measurements::UnitOfMeasure;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod form;
mod report;

use form::{Field, Form};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        interactive();
        ExitCode::SUCCESS
    } else {
        single(&args)
    }
}

/// Runs one calculation with the values passed as arguments.
fn single(args: &[String]) -> ExitCode {
    let [altitude, temperature, pressure] = args else {
        eprintln!("Usage: isa-calc <altitude> <temperature> <pressure>");
        eprintln!("  e.g. isa-calc 5000ft 15C 1013.25hPa");
        return ExitCode::FAILURE;
    };

    let mut form = Form::new();
    let result = form
        .enter(Field::Altitude, altitude)
        .and_then(|_| form.enter(Field::Temperature, temperature))
        .and_then(|_| form.enter(Field::Pressure, pressure))
        .and_then(|_| form.calculate().map(|report| report.to_string()));

    match result {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Calculation Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn interactive() {
    println!("Extended ISA Model");
    println!("Type 'help' for available commands.\n");

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to create readline: {e}");
            return;
        }
    };

    let mut form = Form::new();

    loop {
        match rl.readline("isa> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                let parts: Vec<&str> = line.split_whitespace().collect();

                let Some(command) = parts.first() else {
                    continue;
                };

                match command.to_lowercase().as_str() {
                    "altitude" | "alt" | "a" => enter(&mut form, Field::Altitude, &parts[1..]),
                    "temperature" | "temp" | "t" => {
                        enter(&mut form, Field::Temperature, &parts[1..])
                    }
                    "pressure" | "p" => enter(&mut form, Field::Pressure, &parts[1..]),
                    "units" | "u" => units(&mut form, &parts[1..]),
                    "calculate" | "calc" | "c" => calculate(&mut form),
                    "clear" => {
                        form.clear();
                        println!("Cleared.");
                    }
                    "show" | "s" => show(&form),
                    "help" | "?" => print_help(),
                    "quit" | "exit" | "q" => break,
                    other => println!("Unknown command: {other}. Type 'help' for commands."),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {e}");
                break;
            }
        }
    }

    info!("calculator closed");
}

fn enter(form: &mut Form, field: Field, args: &[&str]) {
    if args.is_empty() {
        println!("Usage: {field} <value> [unit]");
        return;
    }

    match form.enter(field, &args.join(" ")) {
        Ok(()) => debug!("{field} set to {:?}", form.text(field)),
        Err(e) => println!("Error: {e}"),
    }
}

fn units(form: &mut Form, args: &[&str]) {
    for symbol in args {
        if let Err(e) = form.units_mut().select_any(symbol) {
            println!("Error: {e}");
        }
    }

    let units = form.units();
    println!(
        "Units: {}, {}, {}",
        units.altitude.name(),
        units.temperature.symbol(),
        units.pressure.symbol()
    );
}

fn calculate(form: &mut Form) {
    match form.calculate() {
        Ok(report) => println!("{report}"),
        Err(e) => println!("Calculation Error: {e}"),
    }
}

fn show(form: &Form) {
    let units = form.units();

    println!(
        "Altitude:              {} {}",
        form.text(Field::Altitude),
        units.altitude.name()
    );
    println!(
        "Sea-level Temperature: {} {}",
        form.text(Field::Temperature),
        units.temperature.symbol()
    );
    println!(
        "Sea-level Pressure:    {} {}",
        form.text(Field::Pressure),
        units.pressure.symbol()
    );

    if let Some(report) = form.report() {
        println!("\n{report}");
    }
}

fn print_help() {
    println!("Commands:");
    println!("  altitude <value> [ft|m]       Enter the altitude (default feet)");
    println!("  temperature <value> [C|F]     Enter the sea-level temperature (default °C)");
    println!("  pressure <value> [hPa|inHg]   Enter the sea-level pressure (default hPa)");
    println!("  units [unit...]               Show or select the units");
    println!("  calculate                     Compute the atmosphere at the altitude");
    println!("  clear                         Clear all inputs and reset the units");
    println!("  show                          Show the inputs and the last result");
    println!("  help                          Show this help");
    println!("  quit                          Exit the calculator");
}

//! Unit conversion utilities
//!
//! Handles conversion between Metric and Imperial systems for the parameter
//! panel. Conversions go through a fixed table and round to two decimals;
//! a value whose unit does not belong to the source system passes through.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnitError;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm, cm, m, kg, g)
    #[default]
    Metric,
    /// Imperial system (in, ft, lbs)
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(UnitError::UnknownSystem {
                name: s.to_string(),
            }),
        }
    }
}

/// (from, factor, to)
const METRIC_TO_IMPERIAL: &[(&str, f64, &str)] = &[
    ("mm", 1.0 / 25.4, "in"),
    ("cm", 1.0 / 2.54, "in"),
    ("m", 3.28084, "ft"),
    ("kg", 2.20462, "lbs"),
    ("g", 0.00220462, "lbs"),
];

const IMPERIAL_TO_METRIC: &[(&str, f64, &str)] = &[
    ("in", 25.4, "mm"),
    ("ft", 0.3048, "m"),
    ("lbs", 0.453592, "kg"),
];

fn lookup(table: &'static [(&'static str, f64, &'static str)], unit: &str) -> Option<(f64, &'static str)> {
    table
        .iter()
        .find(|(from, _, _)| *from == unit)
        .map(|(_, factor, to)| (*factor, *to))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert `value` expressed in `from_unit` into `to_system`.
///
/// Returns the value unchanged when the unit already belongs to the target
/// system or is not in the table.
pub fn convert_unit(value: f64, from_unit: &str, to_system: MeasurementSystem) -> f64 {
    let table = match to_system {
        MeasurementSystem::Imperial => METRIC_TO_IMPERIAL,
        MeasurementSystem::Metric => IMPERIAL_TO_METRIC,
    };
    match lookup(table, from_unit) {
        Some((factor, _)) => round2(value * factor),
        None => value,
    }
}

/// The unit label a value in `from_unit` carries after [`convert_unit`].
pub fn display_unit(from_unit: &str, to_system: MeasurementSystem) -> Result<&'static str, UnitError> {
    let (forward, same) = match to_system {
        MeasurementSystem::Imperial => (METRIC_TO_IMPERIAL, IMPERIAL_TO_METRIC),
        MeasurementSystem::Metric => (IMPERIAL_TO_METRIC, METRIC_TO_IMPERIAL),
    };
    if let Some((_, to)) = lookup(forward, from_unit) {
        return Ok(to);
    }
    same.iter()
        .find(|(from, _, _)| *from == from_unit)
        .map(|(from, _, _)| *from)
        .ok_or_else(|| UnitError::UnknownUnit {
            unit: from_unit.to_string(),
        })
}

/// Get the length unit label for the given system ("mm" or "in")
pub fn length_unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}

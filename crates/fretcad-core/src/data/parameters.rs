//! Design parameters shown in the parameter panel.
//!
//! Numeric defaults are stored in the unit they were authored in and converted
//! on demand for the active [`MeasurementSystem`]. Per-row UI flags (starred,
//! expanded) live in [`ParameterViewState`], keyed by parameter id.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ParameterError;
use crate::units::{convert_unit, display_unit, MeasurementSystem};

/// Parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParameterValue {
    /// Number with an optional unit label
    Number {
        value: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
    },
    /// Free text
    Text { value: String },
    /// One of a fixed list of options
    Choice {
        selected: String,
        options: Vec<String>,
    },
}

impl ParameterValue {
    fn converted(&self, system: MeasurementSystem) -> Self {
        match self {
            ParameterValue::Number {
                value,
                unit: Some(unit),
            } => ParameterValue::Number {
                value: convert_unit(*value, unit, system),
                unit: Some(
                    display_unit(unit, system)
                        .map(str::to_string)
                        .unwrap_or_else(|_| unit.clone()),
                ),
            },
            other => other.clone(),
        }
    }
}

/// A design parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: String,
    pub name: String,
    /// Component path such as "Neck" or "Body.Cavities"
    pub category: String,
    pub value: ParameterValue,
    /// Whether the parameter appears in the quick parameter panel
    #[serde(default)]
    pub show_in_panel: bool,
    #[serde(default)]
    pub advanced: bool,
    #[serde(default)]
    pub description: String,
}

impl Parameter {
    fn number(id: &str, name: &str, category: &str, value: f64, unit: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            value: ParameterValue::Number {
                value,
                unit: (!unit.is_empty()).then(|| unit.to_string()),
            },
            show_in_panel: true,
            advanced: false,
            description: String::new(),
        }
    }

    fn described(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    fn advanced(mut self) -> Self {
        self.advanced = true;
        self.show_in_panel = false;
        self
    }
}

/// Ordered collection of parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    parameters: Vec<Parameter>,
}

impl ParameterSet {
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Self { parameters }
    }

    /// Stock parameters for a six-string electric guitar, authored in metric.
    pub fn guitar_defaults() -> Self {
        Self::new(vec![
            Parameter::number("scale_length", "Scale Length", "Neck", 648.0, "mm")
                .described("Distance from nut to saddle"),
            Parameter::number("fret_count", "Number of Frets", "Neck.Fretboard", 22.0, "")
                .described("Frets on the fretboard"),
            Parameter::number("nut_width", "Nut Width", "Neck", 43.0, "mm"),
            Parameter::number("fretboard_radius", "Fretboard Radius", "Neck.Fretboard", 305.0, "mm"),
            Parameter::number("neck_angle", "Neck Angle", "Neck", 0.0, "deg").advanced(),
            Parameter {
                id: "neck_profile".to_string(),
                name: "Neck Profile".to_string(),
                category: "Neck".to_string(),
                value: ParameterValue::Choice {
                    selected: "C".to_string(),
                    options: vec!["C".into(), "D".into(), "U".into(), "V".into()],
                },
                show_in_panel: true,
                advanced: false,
                description: "Cross-section shape of the neck".to_string(),
            },
            Parameter::number("body_thickness", "Body Thickness", "Body", 45.0, "mm"),
            Parameter::number("body_length", "Body Length", "Body", 460.0, "mm"),
            Parameter::number("body_weight", "Body Weight", "Body", 2.2, "kg").advanced(),
            Parameter::number("cavity_depth", "Cavity Depth", "Body.Cavities", 38.0, "mm")
                .advanced(),
            Parameter {
                id: "model_name".to_string(),
                name: "Model Name".to_string(),
                category: "General".to_string(),
                value: ParameterValue::Text {
                    value: "Untitled".to_string(),
                },
                show_in_panel: false,
                advanced: false,
                description: String::new(),
            },
        ])
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter()
    }

    pub fn get(&self, id: &str) -> Result<&Parameter, ParameterError> {
        self.parameters
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ParameterError::UnknownParameter { id: id.to_string() })
    }

    /// Replace a parameter's value.
    pub fn set_value(&mut self, id: &str, value: ParameterValue) -> Result<(), ParameterError> {
        let param = self
            .parameters
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ParameterError::UnknownParameter { id: id.to_string() })?;
        param.value = value;
        Ok(())
    }

    /// A copy with every numeric value expressed in `system`.
    pub fn converted(&self, system: MeasurementSystem) -> Self {
        Self {
            parameters: self
                .parameters
                .iter()
                .map(|p| Parameter {
                    value: p.value.converted(system),
                    ..p.clone()
                })
                .collect(),
        }
    }

    /// Parameters flagged for the quick panel.
    pub fn panel_parameters(&self) -> Vec<&Parameter> {
        self.parameters.iter().filter(|p| p.show_in_panel).collect()
    }

    /// Case-insensitive name search. Advanced parameters are hidden unless
    /// `show_advanced` is set.
    pub fn filter(&self, query: &str, show_advanced: bool) -> Vec<&Parameter> {
        let query = query.trim().to_lowercase();
        self.parameters
            .iter()
            .filter(|p| show_advanced || !p.advanced)
            .filter(|p| query.is_empty() || p.name.to_lowercase().contains(&query))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ParameterSet {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}

/// Per-row UI flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterFlags {
    pub starred: bool,
    pub expanded: bool,
}

/// Row flags for the parameter table.
///
/// Clones share storage until one of them is changed, so a snapshot handed
/// to a renderer never observes later toggles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterViewState {
    flags: Rc<HashMap<String, ParameterFlags>>,
}

impl ParameterViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flags(&self, id: &str) -> ParameterFlags {
        self.flags.get(id).copied().unwrap_or_default()
    }

    pub fn is_starred(&self, id: &str) -> bool {
        self.flags(id).starred
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.flags(id).expanded
    }

    pub fn toggle_starred(&mut self, id: &str) -> bool {
        let flags = Rc::make_mut(&mut self.flags).entry(id.to_string()).or_default();
        flags.starred = !flags.starred;
        flags.starred
    }

    pub fn toggle_expanded(&mut self, id: &str) -> bool {
        let flags = Rc::make_mut(&mut self.flags).entry(id.to_string()).or_default();
        flags.expanded = !flags.expanded;
        flags.expanded
    }

    /// Ids of starred parameters, sorted.
    pub fn starred(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .flags
            .iter()
            .filter(|(_, f)| f.starred)
            .map(|(id, _)| id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }
}

//! Design-state containers
//!
//! This module provides:
//! - The layer tree behind the layer browser
//! - Design parameters with unit conversion for the parameter panel
//! - Copy-on-write row flags for the parameter table

pub mod layers;
pub mod parameters;

pub use layers::{LayerNode, LayerTree};
pub use parameters::{Parameter, ParameterFlags, ParameterSet, ParameterValue, ParameterViewState};

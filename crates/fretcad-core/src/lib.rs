//! # FretCAD Core
//!
//! Core types, events, and design-state containers for FretCAD.
//! Provides the error taxonomy, the unit conversion table, the application
//! event bus, and the copy-on-write containers behind the layer browser and
//! the parameter panel.

pub mod data;
pub mod error;
pub mod event_bus;
pub mod types;
pub mod units;

pub use data::{
    LayerNode, LayerTree, Parameter, ParameterFlags, ParameterSet, ParameterValue,
    ParameterViewState,
};

pub use error::{Error, LayerError, ParameterError, Result, UnitError};

// Re-export event bus for convenience
pub use event_bus::{
    event_bus, AppEvent, DisplayEvent, EventBus, EventBusConfig, EventCategory, EventFilter,
    LayoutEvent, Pane, SettingsEvent, SubscriptionId, ViewportEvent,
};

pub use types::{shared, thread_safe_rw, Shared, ThreadSafeRw};

pub use units::{convert_unit, display_unit, MeasurementSystem};

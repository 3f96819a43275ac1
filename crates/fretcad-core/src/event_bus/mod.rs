//! # Event Bus Module
//!
//! Decoupled notification between the canvas core and its host.
//!
//! ## Overview
//!
//! The canvas core never paints on its own: every state-affecting call
//! (pan, zoom, resize, toggle) publishes an [`AppEvent`], and the host
//! subscribes to schedule a repaint.
//! - Publishers emit typed events without knowing subscribers
//! - Subscribers filter and receive events of interest
//! - Supports both sync handlers and async broadcast receivers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fretcad_core::event_bus::{event_bus, AppEvent, EventCategory, EventFilter};
//!
//! let subscription = event_bus().subscribe(
//!     EventFilter::Categories(vec![EventCategory::Viewport]),
//!     |event| request_repaint(event),
//! );
//!
//! event_bus().unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;

//! Type aliases for shared state.
//!
//! The canvas runs on a single UI thread, so state shared between panes
//! (the display toggles, for example) uses [`Shared`]. State that the event
//! bus hands across threads uses [`ThreadSafeRw`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fretcad_core::types::*;
//!
//! // Instead of: Rc<RefCell<DisplaySettings>>
//! let display: Shared<DisplaySettings> = shared(DisplaySettings::default());
//! display.borrow_mut().show_grid = false;
//! ```

use parking_lot::RwLock;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

// =============================================================================
// SINGLE-THREADED SHARED TYPES (Rc<RefCell<T>>)
// =============================================================================

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// Every clone observes the same value, which is how several viewports read
/// one set of display toggles.
pub type Shared<T> = Rc<RefCell<T>>;

// =============================================================================
// THREAD-SAFE SHARED TYPES (Arc<RwLock<T>>)
// =============================================================================

/// A thread-safe read-write lock wrapper.
///
/// Uses `parking_lot::RwLock`, so guards are returned directly.
pub type ThreadSafeRw<T> = Arc<RwLock<T>>;

/// A thread-safe map behind a read-write lock.
pub type ThreadSafeRwMap<K, V> = Arc<RwLock<HashMap<K, V>>>;

// =============================================================================
// CONSTRUCTORS
// =============================================================================

/// Wrap a value in [`Shared`].
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Wrap a value in [`ThreadSafeRw`].
pub fn thread_safe_rw<T>(value: T) -> ThreadSafeRw<T> {
    Arc::new(RwLock::new(value))
}

/// An empty [`ThreadSafeRwMap`].
pub fn thread_safe_rw_map<K, V>() -> ThreadSafeRwMap<K, V> {
    Arc::new(RwLock::new(HashMap::new()))
}

//! Reusable interactive widgets.

pub mod range_selector;

pub use range_selector::{DragState, Handle, RangeSelector};

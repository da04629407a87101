#![doc(test(attr(deny(warnings))))]

//! Switchboard BOM selects circuit breakers from a fixed catalog and
//! accumulates board and project bills of materials from the selections.

pub mod bom;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod project;
pub mod utils;

pub use crate::core::services::{Recommendation, SelectionCriteria, SelectorService, Voltage};
pub use crate::core::session::BomSession;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Switchboard BOM tracing initialized.");
    });
}

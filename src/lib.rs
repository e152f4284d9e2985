#![doc(test(attr(deny(warnings))))]

//! Kharcha keeps a local journal of expenses: one insertion-ordered list of
//! records persisted as a JSON array under a named slot, with a command shell
//! for adding, listing, and removing entries.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod journal;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Kharcha tracing initialized.");
    });
}

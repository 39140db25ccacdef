#![doc(test(attr(deny(warnings))))]

//! FinMind Core offers account, financial-record, metrics, and advisory
//! primitives that power higher level personal-finance workflows and UIs.

pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("FinMind Core tracing initialized.");
    });
}

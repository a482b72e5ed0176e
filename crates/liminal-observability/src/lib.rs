//! # liminal-observability
//!
//! Structured logging for the session store.
//!
//! ## Modules
//!
//! - `tracing_setup` — subscriber initialization, span macros, and one
//!   function per structured event

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};

#![doc(test(attr(deny(warnings))))]

//! Dynamic Form renders schema-driven input forms, tracks how many required
//! fields are filled in, and keeps an in-memory table of submitted records.

pub mod app;
pub mod cli;
pub mod config;
pub mod errors;
pub mod form;
pub mod render;
pub mod schema;
pub mod submissions;
pub mod utils;

/// Initializes global tracing. Safe to call more than once.
pub fn init() {
    utils::init_tracing();
}

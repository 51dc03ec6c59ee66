#![forbid(unsafe_code)]

//! Observability helpers.

pub mod logging;

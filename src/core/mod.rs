#![forbid(unsafe_code)]

//! Core primitives.

pub mod chain;
pub mod config;
pub mod types;

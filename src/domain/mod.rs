//! Domain layer for docchat
//!
//! Core models, ports, and errors for chunk retrieval. Nothing in here
//! touches the filesystem or the terminal.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};

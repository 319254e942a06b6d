//! Infrastructure layer
//!
//! Adapters behind the domain ports plus the ambient configuration and
//! logging setup.

pub mod config;
pub mod corpus;
pub mod logging;
pub mod vector;

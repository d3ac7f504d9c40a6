//! Configuration management for tms
//!
//! The raw YAML document ([`ConfigFile`]) is resolved once at startup into
//! a [`Config`] value that is passed explicitly to discovery.

mod loader;
mod schema;

pub use loader::ConfigLoader;
pub use schema::*;

//! HTTP layer: endpoints, wire types, and the error taxonomy.

pub mod api;
pub mod error;
pub mod types;

//! Browser-adjacent helpers shared across pages.

pub mod oauth;
pub mod redirect;

//! Routed page components.

pub mod auth_me;
pub mod detail;
pub mod home;
pub mod listing;
pub mod login;
pub mod oauth_callback;
pub mod register;
pub mod search;

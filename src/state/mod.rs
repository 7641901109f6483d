//! Form and session state machines, kept free of view code.

pub mod auth;
pub mod login;
pub mod register;

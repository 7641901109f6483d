//! Reusable view components.

pub mod google_login;
pub mod movie_card;
pub mod movie_grid;
pub mod movie_row;
pub mod navbar;
pub mod pager;

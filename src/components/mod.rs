//! Reusable view components shared by pages.

pub mod nav_bar;
pub mod route_guard;
pub mod user_card;

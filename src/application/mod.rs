//! Application services layer.

pub mod admin;
pub mod error;
pub mod post;
pub mod render;
pub mod repos;
pub mod session;

mod commands;
mod queries;
mod service;
pub mod types;

pub use service::*;
pub use types::{AdminPostError, UpdatePostCommand};

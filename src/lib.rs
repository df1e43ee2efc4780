//! Administrative post editor: a loader/action pair over a Postgres-backed post store.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;

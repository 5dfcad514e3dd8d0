//! # API Route Modules
//!
//! - `example`: Template resource kept as a smoke-test endpoint for
//!   generated clients.
//! - `logs`: Log entries about infrastructure objects, served to the
//!   frontend from [`crate::services::logs`].

pub mod example;
pub mod logs;

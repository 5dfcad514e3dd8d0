//! # Services
//!
//! Data access behind the route handlers. Handlers stay declarative and
//! delegate every lookup here.
//!
//! - [`logs`]: log entries about infrastructure objects.

pub mod logs;

//! # uigw-core: Domain Contracts for the UI Gateway
//!
//! Types shared between the gateway service and anything that consumes its
//! JSON. The gateway sits between the frontend and the metadata/telemetry
//! backends; these contracts describe what the frontend receives, not what
//! the gateway stores. Nothing here is persisted.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `uigw-*` crates (this is the leaf of the DAG).
//! - Wire names are fixed: enum variants serialize as their upper-case
//!   names and log entry keys keep their camelCase frontend spelling.
//! - No `.unwrap()` outside tests.

pub mod logs;
pub mod object;

pub use logs::{Level, LogsItem};
pub use object::{ObjectId, ObjectType};

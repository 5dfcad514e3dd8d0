//! # uigw-client-gen: Python Client Generator
//!
//! Wraps `openapi-generator-cli` running in a container to produce the
//! gateway's Python client under `client/`. The arguments of the last run
//! are remembered, so regenerating after a schema change is a bare
//! `uigw-client-gen`.
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | Argument Store: save and reload the last-used arguments |
//! | [`orchestrator`] | Resolve arguments, stage local files, drive a run |
//! | [`invoker`] | Compose and run the container command |
//! | [`paths`] | Host paths derived from the project root |

pub mod error;
pub mod invoker;
pub mod orchestrator;
pub mod paths;
pub mod store;

pub use error::{GenerateError, StoreError};
pub use invoker::{DockerGenerator, Generator};
pub use orchestrator::{resolve_args, run, CliArgs};
pub use paths::GeneratorPaths;
pub use store::{ArgsStore, FileArgsStore, InvocationArgs, MemoryArgsStore};

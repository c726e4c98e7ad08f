//! Reverse-then-validate runner
//!
//! Wires the reverse engine and the validation service behind a TOML
//! configuration and a command line.
//!
//! # Core Concepts
//!
//! - **RunnerConfig**: traversal options, handler registration and logging
//! - **Runner**: dispatches site and web roots, validates originals and
//!   aggregates coverage into a [`RunReport`]
//!
//! # Example
//!
//! ```
//! use rev_runner::{Runner, RunnerConfig};
//! use rev_engine::{RemoteNode, SnapshotRemote};
//! use rev_model::DefinitionKind;
//!
//! let remote = SnapshotRemote::new(RemoteNode::new("s1")).unwrap();
//! let runner = Runner::new(RunnerConfig::new()).unwrap();
//!
//! let result = runner.reverse(&remote, DefinitionKind::Site, "s1".into()).unwrap();
//! assert_eq!(result.model.kind(), DefinitionKind::Site);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod error;
pub mod logging;
mod runner;

// Re-exports
pub use config::{LoggingConfig, RegistryConfig, ReverseConfig, RunnerConfig};
pub use error::RunnerError;
pub use runner::{
    default_root, load_models, load_snapshot, write_json, InvalidProperty, RunReport, Runner,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

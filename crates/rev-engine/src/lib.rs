//! REV Engine
//!
//! Rebuilds model trees from a live remote object tree.
//!
//! # Core Concepts
//!
//! - [`RemoteClient`]: Read-only view of the remote object tree
//! - [`ReverseHost`]: Located remote entity with its parent chain and scope
//! - [`ReverseHandler`]: Per-kind strategy: enumerate children, convert one host
//! - [`HandlerRegistry`]: Kind-indexed handler lookup, last registration wins
//! - [`ReverseService`]: Depth-first traversal producing a [`ReverseResult`]
//! - [`SnapshotRemote`]: In-memory remote backed by a captured JSON tree
//!
//! # Example
//!
//! ```rust
//! use rev_engine::{Collection, RemoteNode, ReverseOptions, ReverseService, SnapshotRemote};
//! use rev_model::DefinitionKind;
//!
//! let site = RemoteNode::new("site").with_child(
//!     Collection::Fields,
//!     RemoteNode::new("f1").with_property("InternalName", "Status"),
//! );
//! let remote = SnapshotRemote::new(site).unwrap();
//!
//! let result = ReverseService::with_defaults()
//!     .reverse_site(&remote, "site".into(), &ReverseOptions::default())
//!     .unwrap();
//!
//! assert_eq!(result.model.count_of(DefinitionKind::Field), 1);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod handler;
pub mod handlers;
mod host;
mod options;
mod registry;
mod remote;
mod result;
mod service;
mod snapshot;

// Re-exports
pub use error::{HostChain, RemoteError, ReverseError};
pub use handler::{inherit_all, reversed_node, ReverseHandler};
pub use handlers::HandlerSet;
pub use host::{HostScope, ReverseHost};
pub use options::ReverseOptions;
pub use registry::HandlerRegistry;
pub use remote::{
    Collection, RemoteClient, RemoteEntity, RemoteHandle, RemoteQuery, TYPE_AS_STRING,
};
pub use result::{ReverseResult, ReverseWarning};
pub use service::ReverseService;
pub use snapshot::{RemoteNode, SnapshotRemote};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Lifedesk Core - Typed Query/Mutation Layer
//!
//! This crate models the page/database/block object graph of the workspace
//! backend and translates it to and from the wire JSON protocol.
//!
//! # Architecture
//!
//! - **Pure transformation**: decoding and building are synchronous functions
//!   over immutable inputs; all I/O lives behind the [`endpoints::Transport`]
//!   trait implemented by the CLI crate
//! - **Closed tagged unions**: every object family (blocks, property values,
//!   database properties, users) decodes by reading its `type` discriminator;
//!   unknown tags are validation errors, never a fallback variant
//! - **Typed builders**: filters, sorts, and property assignments are built
//!   through per-kind descriptors that only accept domain-correct values
//!
//! # Modules
//!
//! - [`filter`] - Property descriptors, operators, the filter algebra, sorts,
//!   and property assignments
//! - [`schema`] - Decoders for pages, databases, blocks, and users, plus the
//!   encode-side block factories
//! - [`endpoints`] - Request/response shaping over a pluggable transport
//! - [`error`] - The shared error taxonomy

pub mod endpoints;
pub mod error;
pub mod filter;
pub mod schema;

pub use error::SchemaError;

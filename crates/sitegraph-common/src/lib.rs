//! Sitegraph Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types and utilities for the sitegraph workspace.
//!
//! # Overview
//!
//! This crate provides common functionality used across all sitegraph
//! workspace members:
//!
//! - **Error Handling**: Custom error types and result types
//! - **Identity**: Deterministic node identifier derivation
//! - **Digests**: Content fingerprinting for emitted nodes
//! - **Logging**: Tracing subscriber configuration
//!
//! # Example
//!
//! ```
//! use sitegraph_common::ident::node_id;
//!
//! let id = node_id("BlogPost", "abc123");
//! assert_eq!(id, node_id("BlogPost", "abc123"));
//! ```

pub mod digest;
pub mod error;
pub mod ident;
pub mod logging;

// Re-export commonly used types
pub use error::{Result, SitegraphError};

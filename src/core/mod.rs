//! core
//!
//! Core domain types and operations for routestack.
//!
//! # Modules
//!
//! - [`route`] - What a value needs to be stored as a route
//! - [`key`] - Identity keys and the lineages that issue them
//! - [`record`] - Records and the shared sequence that stores them
//! - [`stack`] - The persistent route stack and its operations
//! - [`diff`] - Key-based difference between two stacks
//! - [`snapshot`] - Serializable views of stacks and diffs
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Stacks are values: operations return new stacks
//! - Invalid operations fail with an error, never a partial result
//! - Nothing here performs I/O except config loading

pub mod config;
pub mod diff;
pub mod key;
pub mod record;
pub mod route;
pub mod snapshot;
pub mod stack;

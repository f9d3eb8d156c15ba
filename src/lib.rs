//! routestack - A persistent navigation route stack
//!
//! A route stack records a navigator's history of visited routes
//! (opaque application values) together with a position pointer. Every
//! occurrence of a route gets an identity key that is unique,
//! creation-ordered, and scoped to the stack's lineage, so a renderer can
//! tell which screens entered and which left between two stacks.
//!
//! # Architecture
//!
//! - [`core`] - The route stack, its keys, diffs, snapshots and config
//! - [`script`] - Navigation scripts and their replay
//! - [`cli`] - The `rstk` command-line interface
//! - [`ui`] - Console output
//!
//! # Correctness Invariants
//!
//! 1. A stack is never empty and its pointer is always in bounds
//! 2. No operation modifies an existing stack
//! 3. A record keeps its key for as long as any derived stack retains it
//! 4. Keys never repeat within a lineage and never collide across lineages
//!
//! # Example
//!
//! ```
//! use routestack::core::stack::RouteStack;
//!
//! let stack = RouteStack::new(2, ["a", "b", "c"]).unwrap();
//! let next = stack.pop().unwrap().pop().unwrap().push("x").unwrap().push("y").unwrap();
//!
//! let removed: Vec<(usize, &str)> = stack
//!     .subtract(&next)
//!     .iter()
//!     .map(|record| (record.index(), *record.route()))
//!     .collect();
//! assert_eq!(removed, vec![(1, "b"), (2, "c")]);
//! ```

pub mod cli;
pub mod core;
pub mod script;
pub mod ui;

//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! All console output goes through this module so verbosity and
//! formatting are handled in one place. The core library never prints.

pub mod output;

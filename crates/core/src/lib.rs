//! Stampdesk Core - Shared types library.
//!
//! This crate provides the domain types used across all Stampdesk components:
//! - `web` - The stamp viewer and roster admin panel
//! - `cli` - Command-line tools for offline stamp rendering
//!
//! # Architecture
//!
//! The core crate contains only types and constants - no I/O, no HTTP, no
//! session handling. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Usernames, profiles, and the built-in roster

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

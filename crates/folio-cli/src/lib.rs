//! The folio binary's building blocks: configuration, console I/O,
//! table rendering, the pager, the menu system, and the
//! non-interactive subcommands.
//!
//! Exposed as a library so integration tests can drive whole scripted
//! menu sessions.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod commands;
pub mod config;
pub mod console;
pub mod menu;
pub mod pager;
pub mod table;

//! Core domain model for folio.
//!
//! This crate defines the library's relational model (catalog items and
//! copies, borrowers, loans, events, personnel), the SQLite schema, and
//! every database operation the menu system drives: catalog search and
//! donation, circulation (borrow, return, fine assessment), event
//! registration, and volunteer sign-up.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod borrowers;
pub mod catalog;
pub mod circulation;
pub mod error;
pub mod events;
pub mod model;
pub mod personnel;
pub mod schema;
pub mod seed;

pub use error::{Error, Result};

//! Command implementations.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial module structure

pub mod connect;
pub mod info;
pub mod invite;
pub mod keyword;
pub mod password;
pub mod scan;

//! anydesk-control library
//!
//! Drives a locally installed AnyDesk client through its command line.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial library structure

// Core modules
pub mod anydesk;
pub mod commands;
pub mod config;
pub mod links;
pub mod output;
pub mod password;

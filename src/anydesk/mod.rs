//! AnyDesk command-line controller.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial module structure

pub mod controller;
pub mod error;
pub mod exit_code;
pub mod invocation;
pub mod locator;
pub mod runner;
pub mod sentinel;

pub use controller::AnyDesk;
pub use error::{ControllerError, Result};
pub use invocation::{ConnectOptions, InfoQuery, Invocation};
pub use locator::{Locator, LocatorConfig};
pub use runner::{InvocationResult, ProcessRunner, SystemRunner};

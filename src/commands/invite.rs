//! Invite workflow: share this machine's AnyDesk reference, optionally with
//! a fresh session password.
//!
//! Steps always run in this order:
//! 1. Status check (must be `online`)
//! 2. Alias lookup, falling back to the numeric ID
//! 3. Password generation and `--set-password` (when requested)
//! 4. Invite text
//!
//! The workflow is an explicit task so a caller can hand it to a worker
//! thread and return immediately.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use crate::anydesk::{AnyDesk, ControllerError, ProcessRunner};
use crate::output::OutputControls;
use crate::password;
use anyhow::Result;
use serde::Serialize;
use std::sync::Arc;
use std::thread::JoinHandle;
use thiserror::Error;
use tracing::{info, warn};

/// What the invite should contain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InviteRequest {
    /// Share the numeric ID even when an alias exists.
    pub force_id: bool,
    /// Generate and set a session password.
    pub with_password: bool,
}

/// A finished invite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InviteOutcome {
    pub reference: String,
    pub password: Option<String>,
    pub text: String,
}

/// Why an invite could not be produced.
#[derive(Error, Debug)]
pub enum InviteError {
    #[error("AnyDesk is currently not running.")]
    NotRunning,

    #[error("AnyDesk failed while checking whether you're online. Make sure AnyDesk is running properly. Error was: {0}")]
    StatusCheck(#[source] ControllerError),

    #[error("AnyDesk says you are {0}. Make sure AnyDesk is running properly.")]
    NotOnline(String),

    #[error("Can't get an alias or ID for your client. Make sure AnyDesk is running properly. Error was: {0}")]
    NoReference(#[source] ControllerError),

    #[error("Could not set the session password, error was: {0}")]
    SetPassword(#[source] ControllerError),
}

/// Invite workflow bound to a controller.
pub struct InviteTask<R: ProcessRunner> {
    anydesk: Arc<AnyDesk<R>>,
    request: InviteRequest,
}

impl<R: ProcessRunner + 'static> InviteTask<R> {
    pub fn new(anydesk: Arc<AnyDesk<R>>, request: InviteRequest) -> Self {
        Self { anydesk, request }
    }

    /// Run on a worker thread.
    pub fn spawn(self) -> JoinHandle<std::result::Result<InviteOutcome, InviteError>> {
        std::thread::spawn(move || self.run())
    }

    /// Run on the calling thread.
    pub fn run(&self) -> std::result::Result<InviteOutcome, InviteError> {
        info!("Now asking AnyDesk for information, that may take a few seconds");

        let status = match self.anydesk.status() {
            Ok(status) => status,
            Err(ControllerError::ServiceNotRunning) => return Err(InviteError::NotRunning),
            Err(e) => return Err(InviteError::StatusCheck(e)),
        };
        if status != "online" {
            return Err(InviteError::NotOnline(status));
        }

        let reference = self.reference()?;
        let mut text = format!("AnyDesk:\n{}", reference);

        let password = if self.request.with_password {
            let pw = password::generate();
            self.anydesk
                .set_password(&pw)
                .map_err(InviteError::SetPassword)?;
            info!("Session password has been changed");
            text.push_str(&format!("\nPassword: {}", pw));
            Some(pw)
        } else {
            None
        };

        Ok(InviteOutcome {
            reference,
            password,
            text,
        })
    }

    /// Alias unless the ID was requested or no alias is available.
    fn reference(&self) -> std::result::Result<String, InviteError> {
        if !self.request.force_id {
            match self.anydesk.alias() {
                Ok(alias) if !alias.is_empty() => return Ok(alias),
                Ok(_) => {}
                Err(e) => warn!("Alias lookup failed, falling back to ID: {}", e),
            }
        }
        self.anydesk.id().map_err(InviteError::NoReference)
    }
}

/// Run an invite and print the result.
///
/// With `background`, the workflow runs on a worker thread and this
/// function waits for it.
pub fn invite<R: ProcessRunner + 'static>(
    anydesk: Arc<AnyDesk<R>>,
    request: InviteRequest,
    background: bool,
    output: &OutputControls,
) -> Result<()> {
    let task = InviteTask::new(anydesk, request);
    let outcome = if background {
        task.spawn()
            .join()
            .map_err(|_| anyhow::anyhow!("Invite worker panicked"))??
    } else {
        task.run()?
    };

    output.report(&outcome, || {
        let mut text = outcome.text.clone();
        if let Some(ref pw) = outcome.password {
            text.push_str(&format!("\n\nYour password has been changed to: {}", pw));
        }
        text
    });
    Ok(())
}

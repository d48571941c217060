//! anydesk-control - Fast Rust CLI for AnyDesk
//!
//! Session info, password management, connections and invites, all through
//! the AnyDesk command line.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial CLI

use anydesk_control::anydesk::{AnyDesk, ConnectOptions, InfoQuery};
use anydesk_control::commands::{self, invite::InviteRequest};
use anydesk_control::{config, output};
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;

/// Fast Rust CLI for AnyDesk - session info, passwords and invites.
#[derive(Parser, Debug)]
#[command(name = "anydesk-control")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the AnyDesk executable (default: $ANYDESK_PATH, then search)
    #[arg(long, global = true)]
    anydesk_path: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Compact JSON output (no whitespace)
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    // =========================================================================
    // INFO COMMANDS
    // =========================================================================
    /// Show the AnyDesk connection status
    Status,

    /// Show this client's numeric ID
    Id,

    /// Show this client's alias
    Alias,

    /// Show the installed AnyDesk version
    Version,

    // =========================================================================
    // PASSWORD COMMANDS
    // =========================================================================
    /// Set the unattended-access password
    SetPassword {
        /// New password (read by AnyDesk from stdin)
        password: Option<String>,

        /// Generate a random session password instead
        #[arg(short, long)]
        generate: bool,
    },

    /// Remove the unattended-access password
    #[command(visible_alias = "unshare", alias = "uninvite")]
    RemovePassword,

    // =========================================================================
    // SESSION COMMANDS
    // =========================================================================
    /// Connect to a remote AnyDesk ID or alias
    Connect {
        /// Session reference (ID or alias)
        reference: String,

        /// Password for the remote session
        #[arg(short, long)]
        password: Option<String>,

        /// Start in fullscreen mode
        #[arg(long)]
        fullscreen: bool,

        /// Open the file transfer window
        #[arg(long)]
        file_transfer: bool,

        /// Plain mode (no AnyDesk UI decorations)
        #[arg(long)]
        plain: bool,
    },

    /// Build an invite with this client's alias or ID
    Invite {
        /// Share the numeric ID even if an alias exists
        #[arg(long)]
        id: bool,

        /// Generate and set a fresh session password
        #[arg(short, long)]
        password: bool,

        /// Run the invite on a worker thread
        #[arg(long)]
        background: bool,
    },

    // =========================================================================
    // CHAT COMMANDS
    // =========================================================================
    /// Find AnyDesk IDs and aliases in text and print links for them
    Scan {
        /// Text to scan
        text: Vec<String>,
    },

    /// Run a chat-style command line (e.g. "invite id pw", "unshare")
    Run {
        /// Keyword followed by flag tokens
        line: Vec<String>,
    },
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let output_controls = output::OutputControls {
        json: cli.json,
        compact: cli.compact,
    };

    let anydesk = Arc::new(AnyDesk::new(config::binary_path(
        cli.anydesk_path.as_deref(),
    )));

    let result = match cli.command {
        // Info commands
        Command::Status => commands::info::show(&*anydesk, InfoQuery::Status, &output_controls),
        Command::Id => commands::info::show(&*anydesk, InfoQuery::Id, &output_controls),
        Command::Alias => commands::info::show(&*anydesk, InfoQuery::Alias, &output_controls),
        Command::Version => commands::info::show(&*anydesk, InfoQuery::Version, &output_controls),

        // Password commands
        Command::SetPassword { password, generate } => {
            commands::password::set(&*anydesk, password.as_deref(), generate, &output_controls)
        }
        Command::RemovePassword => commands::password::remove(&*anydesk, &output_controls),

        // Session commands
        Command::Connect { reference, password, fullscreen, file_transfer, plain } => {
            let options = ConnectOptions {
                password: password.unwrap_or_default(),
                fullscreen,
                file_transfer,
                plain,
            };
            commands::connect::connect(&*anydesk, &reference, &options, &output_controls)
        }
        Command::Invite { id, password, background } => {
            let request = InviteRequest {
                force_id: id,
                with_password: password,
            };
            commands::invite::invite(anydesk.clone(), request, background, &output_controls)
        }

        // Chat commands
        Command::Scan { text } => commands::scan::scan(&text.join(" "), &output_controls),
        Command::Run { line } => {
            commands::keyword::run_line(anydesk.clone(), &line.join(" "), &output_controls)
        }
    };

    match result {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            if cli.json {
                println!("{}", output::format_error(&format!("{:#}", e)));
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::from(1)
        }
    }
}

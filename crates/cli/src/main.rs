//! Stampdesk CLI - roster listing and offline stamp rendering.
//!
//! # Usage
//!
//! ```bash
//! # List the built-in roster
//! stampdesk-cli roster
//!
//! # Render a stamp for arbitrary details
//! stampdesk-cli render --name "Yuki Sato" --department "Renewable Energy" \
//!     --position "Technical Lead" --date 2024-01-01 --output sato.svg
//!
//! # Render a stamp for a built-in roster user
//! stampdesk-cli render --user tanaka
//! ```
//!
//! # Commands
//!
//! - `roster` - Print the built-in roster
//! - `render` - Render a stamp SVG to stdout or a file

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "stampdesk-cli")]
#[command(author, version, about = "Stampdesk CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the built-in roster
    Roster,
    /// Render a stamp as SVG
    Render(RenderArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Render for a built-in roster user instead of explicit details
    #[arg(short, long, conflicts_with_all = ["name", "department", "position"])]
    user: Option<String>,

    /// Full name
    #[arg(short, long, required_unless_present = "user")]
    name: Option<String>,

    /// Department
    #[arg(short, long, required_unless_present = "user")]
    department: Option<String>,

    /// Position or title
    #[arg(short, long, required_unless_present = "user")]
    position: Option<String>,

    /// Stamp date as YYYY-MM-DD (default: today)
    #[arg(long)]
    date: Option<String>,

    /// Company drawn around the seal (default: `STAMPDESK_COMPANY_NAME` or built-in)
    #[arg(short, long)]
    company: Option<String>,

    /// Write the SVG to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    // Logs go to stderr so stdout stays clean for SVG output
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Roster => commands::roster::print(&mut std::io::stdout().lock())?,
        Commands::Render(args) => {
            let details = match args.user {
                Some(username) => commands::render::StampDetails::for_roster_user(&username)?,
                None => commands::render::StampDetails {
                    full_name: args.name.unwrap_or_default(),
                    department: args.department.unwrap_or_default(),
                    position: args.position.unwrap_or_default(),
                },
            };
            commands::render::render(
                &details,
                args.date.as_deref(),
                args.company.as_deref(),
                args.output.as_deref(),
            )?;
        }
    }
    Ok(())
}

//! Offline stamp rendering.

use std::io::Write;
use std::path::Path;

use askama::Template;
use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use stampdesk::config::CompanyConfig;
use stampdesk::stamp::{self, StampRequest};
use stampdesk_core::{Username, builtin_roster};

/// Errors from the `render` command.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("User not found in built-in roster: {0}")]
    UnknownUser(String),

    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Profile fields to draw on the stamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampDetails {
    pub full_name: String,
    pub department: String,
    pub position: String,
}

impl StampDetails {
    /// Look up a built-in roster user.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnknownUser`] if the name is not in the roster.
    pub fn for_roster_user(username: &str) -> Result<Self, RenderError> {
        let wanted =
            Username::parse(username).map_err(|_| RenderError::UnknownUser(username.to_string()))?;

        builtin_roster()
            .find(|(name, _)| *name == wanted)
            .map(|(_, profile)| Self {
                full_name: profile.full_name,
                department: profile.department,
                position: profile.position,
            })
            .ok_or_else(|| RenderError::UnknownUser(username.to_string()))
    }
}

/// Validate a YYYY-MM-DD date, defaulting to today.
fn resolve_date(date: Option<&str>) -> Result<String, RenderError> {
    match date {
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map(|d| d.format("%Y-%m-%d").to_string())
            .map_err(|_| RenderError::InvalidDate(date.to_string())),
        None => Ok(chrono::Local::now().format("%Y-%m-%d").to_string()),
    }
}

/// Render the SVG document for `details`.
fn render_svg(details: &StampDetails, date: &str, company: &str) -> Result<String, RenderError> {
    Ok(stamp::render(&StampRequest {
        company,
        full_name: &details.full_name,
        department: &details.department,
        position: &details.position,
        date,
    })
    .render()?)
}

/// Render a stamp and write it to `output`, or stdout when `None`.
///
/// # Errors
///
/// Returns an error if the date is malformed or the output cannot be written.
pub fn render(
    details: &StampDetails,
    date: Option<&str>,
    company: Option<&str>,
    output: Option<&Path>,
) -> Result<(), RenderError> {
    let date = resolve_date(date)?;
    let company = match company {
        Some(company) => company.to_string(),
        None => CompanyConfig::from_env().name,
    };

    let svg = render_svg(details, &date, &company)?;

    match output {
        Some(path) => {
            std::fs::write(path, &svg)?;
            info!(path = %path.display(), "Stamp written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

//! Print the built-in roster.

use std::io::{self, Write};

use stampdesk_core::builtin_roster;

/// Write the built-in roster as an aligned table.
///
/// The reserved administrator is marked with `*`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "  {:<10} {:<20} {:<20} POSITION",
        "USERNAME", "FULL NAME", "DEPARTMENT"
    )?;
    for (username, profile) in builtin_roster() {
        let marker = if username.is_admin() { '*' } else { ' ' };
        writeln!(
            out,
            "{marker} {:<10} {:<20} {:<20} {}",
            username.as_str(),
            profile.full_name,
            profile.department,
            profile.position
        )?;
    }
    Ok(())
}

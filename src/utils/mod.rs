mod dates;

pub use dates::{date_portion, midnight, parse_due_date, today, DueDateError};

use std::path::PathBuf;

/// The name of the minipm folder under the user's home directory
pub const MINIPM_FOLDER: &str = ".minipm";

/// Environment variable that overrides the minipm home directory
pub const MINIPM_HOME_ENV: &str = "MINIPM_HOME";

/// Get the minipm home directory (`~/.minipm`).
///
/// If `MINIPM_HOME` is set, that directory is used instead. This allows
/// tests and CI to use isolated state without touching the user's real
/// `~/.minipm` data.
#[must_use]
pub fn minipm_home() -> Option<PathBuf> {
    if let Ok(home) = std::env::var(MINIPM_HOME_ENV) {
        if !home.is_empty() {
            return Some(PathBuf::from(home));
        }
    }
    dirs::home_dir().map(|h| h.join(MINIPM_FOLDER))
}

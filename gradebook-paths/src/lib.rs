//! XDG Base Directory paths for gradebook.
//!
//! The server keeps its JSON documents under the XDG data directory by
//! default; `--data-dir` on the CLI overrides this.

use std::path::PathBuf;

/// Get the gradebook data directory.
///
/// Returns `$XDG_DATA_HOME/gradebook` if set, otherwise
/// `~/.local/share/gradebook`. This is where the students, subjects, and
/// progress documents are stored.
pub fn data_dir() -> PathBuf {
    if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg_data).join("gradebook")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".local/share/gradebook")
    } else {
        PathBuf::from(".local/share/gradebook")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_ends_with_gradebook() {
        let path = data_dir();
        assert!(
            path.ends_with("gradebook"),
            "data_dir should end with 'gradebook'"
        );
    }
}

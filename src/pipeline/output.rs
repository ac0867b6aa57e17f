//! Report destinations.

use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Where a rendered report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `--output-file` when given, stdout otherwise.
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// An interactive terminal is the only place the summary view and ANSI
    /// colors are chosen automatically.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        match self {
            Self::Stdout => std::io::stdout().is_terminal(),
            Self::File(_) => false,
        }
    }

    /// Write a rendered report, creating missing parent directories for
    /// file targets.
    pub fn write(&self, content: &str) -> Result<()> {
        let Self::File(path) = self else {
            println!("{content}");
            return Ok(());
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        tracing::info!(path = %path.display(), bytes = content.len(), "report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_option() {
        assert_eq!(OutputTarget::from_option(None), OutputTarget::Stdout);
        assert_eq!(
            OutputTarget::from_option(Some(PathBuf::from("vitals.csv"))),
            OutputTarget::File(PathBuf::from("vitals.csv"))
        );
    }

    #[test]
    fn test_files_are_never_interactive() {
        assert!(!OutputTarget::File(PathBuf::from("/dev/tty")).is_interactive());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports/nightly/vitals.csv");
        OutputTarget::File(path.clone()).write("URL,Score").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "URL,Score");
    }
}

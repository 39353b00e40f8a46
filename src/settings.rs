/// Persisted exporter settings
/// Remembers the last used export destination between runs

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// File name inside the host's user-scripts settings directory.
const SETTINGS_FILE: &str = "fbx_batch_export.ini";
const SECTION: &str = "[Settings]";
const LAST_PATH_KEY: &str = "last_path";

/// Settings that persist between runs.
///
/// Stored as a plain key-value text file with a single `[Settings]` section,
/// so it stays hand-editable alongside the host's other script settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSettings {
    pub last_path: Option<PathBuf>,
}

impl ExportSettings {
    /// Load settings from `settings_dir`.
    ///
    /// Never fails: a missing file, missing section, missing key, or
    /// unreadable content all come back as "no saved value".
    pub fn load(settings_dir: &Path) -> Self {
        let path = settings_dir.join(SETTINGS_FILE);
        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                debug!("No saved settings at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Tolerant line-based parse. Malformed lines are skipped.
    fn parse(content: &str) -> Self {
        let mut in_settings = false;
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if line.starts_with('[') {
                in_settings = line.eq_ignore_ascii_case(SECTION);
                continue;
            }
            if !in_settings {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                if key.trim().eq_ignore_ascii_case(LAST_PATH_KEY) {
                    let value = value.trim();
                    if !value.is_empty() {
                        return Self {
                            last_path: Some(PathBuf::from(value)),
                        };
                    }
                }
            }
        }
        Self::default()
    }

    /// Write settings to `settings_dir`, creating it if needed.
    /// Unlike `load`, write failures propagate to the caller.
    pub fn save(&self, settings_dir: &Path) -> Result<()> {
        fs::create_dir_all(settings_dir)
            .with_context(|| format!("Failed to create settings directory {:?}", settings_dir))?;

        let path = settings_dir.join(SETTINGS_FILE);
        let last = self
            .last_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let content = format!("{}\n{} = {}\n", SECTION, LAST_PATH_KEY, last);

        fs::write(&path, content)
            .with_context(|| format!("Failed to write settings to {:?}", path))?;
        Ok(())
    }

    /// Directory to pre-fill in the destination prompt: the saved path if
    /// there is one, otherwise the host's default export directory.
    pub fn initial_dir(&self, host_default: &Path) -> PathBuf {
        self.last_path
            .clone()
            .unwrap_or_else(|| host_default.to_path_buf())
    }
}

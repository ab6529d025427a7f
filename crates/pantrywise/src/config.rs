//! Settings and snapshot files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use pantrywise_core::{Settings, Snapshot};

/// Directory holding `settings.json`.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pantrywise")
}

/// Load application settings, falling back to defaults when no file exists.
pub async fn load_settings(dir: &Path) -> anyhow::Result<Settings> {
    let settings_path = dir.join("settings.json");

    if !settings_path.exists() {
        tracing::debug!(path = %settings_path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let contents = tokio::fs::read_to_string(&settings_path)
        .await
        .with_context(|| format!("reading {}", settings_path.display()))?;

    Settings::from_json(&contents).with_context(|| format!("parsing {}", settings_path.display()))
}

/// Save application settings to file.
pub async fn save_settings(dir: &Path, settings: &Settings) -> anyhow::Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("creating {}", dir.display()))?;

    let settings_path = dir.join("settings.json");
    let contents = settings.to_json()?;

    tokio::fs::write(&settings_path, contents)
        .await
        .with_context(|| format!("writing {}", settings_path.display()))?;

    Ok(settings_path)
}

/// Load a snapshot file.
pub async fn load_snapshot(path: &Path) -> anyhow::Result<Snapshot> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;

    Snapshot::from_json(&contents).with_context(|| format!("parsing {}", path.display()))
}

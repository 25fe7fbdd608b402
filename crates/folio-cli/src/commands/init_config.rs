use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use folio_core::AppConfig;

pub fn run(path: &Path, force: bool) -> Result<()> {
    let written = write_default(path, force)?;
    println!("Wrote default config to {}", written.display());
    Ok(())
}

/// Write the default config to `path` without reading what is there
fn write_default(path: &Path, force: bool) -> Result<PathBuf> {
    if path.exists() && !force {
        bail!(
            "Config already exists at {}\nUse --force to overwrite it.",
            path.display()
        );
    }
    Ok(AppConfig::default().save_to(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("folio-init-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join("config.toml")
    }

    #[test]
    fn test_writes_to_given_path() {
        let path = scratch("fresh");
        std::fs::remove_file(&path).ok();
        assert_eq!(write_default(&path, false).unwrap(), path);
        assert!(AppConfig::load_from(&path).is_ok());
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_refuses_overwrite_without_force() {
        let path = scratch("exists");
        std::fs::write(&path, "keep me").unwrap();
        assert!(write_default(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_force_replaces_malformed_config() {
        let path = scratch("broken");
        std::fs::write(&path, "[gallery\nautoplay = ").unwrap();
        assert!(AppConfig::load_from(&path).is_err());

        write_default(&path, true).unwrap();
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.ui.tick_rate_ms, AppConfig::default().ui.tick_rate_ms);
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }
}

//! Init command - write a default configuration file.

use std::path::{Path, PathBuf};

use glosa::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Run the init command.
pub fn run(config_path: Option<PathBuf>, force: bool) -> Result<(), CliError> {
    let path = config_path.unwrap_or_else(config_file_path);

    if write_config(&path, force)? {
        println!("Wrote default configuration to {}", path.display());
    } else {
        println!("Configuration already exists at {}", path.display());
        println!("Use --force to overwrite it with defaults.");
    }

    Ok(())
}

/// Returns whether a file was written.
fn write_config(path: &Path, force: bool) -> Result<bool, CliError> {
    if force {
        ConfigFile::default().save_to(path)?;
        return Ok(true);
    }
    Ok(ConfigFile::ensure_exists(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_init_creates_then_keeps_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("sub").join("config.ini");

        assert!(write_config(&path, false).unwrap());
        fs::write(&path, "[primary]\ntimeout_secs = 7\n").unwrap();

        assert!(!write_config(&path, false).unwrap());
        assert_eq!(ConfigFile::load_from(&path).unwrap().primary.timeout_secs, 7);
    }

    #[test]
    fn test_init_force_overwrites() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.ini");
        fs::write(&path, "[primary]\ntimeout_secs = 7\n").unwrap();

        assert!(write_config(&path, true).unwrap());
        assert_eq!(
            ConfigFile::load_from(&path).unwrap(),
            ConfigFile::default()
        );
    }
}

/*
[INPUT]:  Output path and overwrite flag
[OUTPUT]: Default YAML configuration file
[POS]:    CLI initialization layer
[UPDATE]: When AppConfig schema changes
*/

use anyhow::{Context, Result, bail};
use console::style;
use std::path::PathBuf;

use taskboard_sync::AppConfig;

pub fn run_init(output: PathBuf, force: bool) -> Result<()> {
    if output.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }

    if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let yaml = AppConfig::default().to_yaml()?;
    std::fs::write(&output, yaml)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!(
        "{} {}",
        style("Configuration written to").green(),
        style(output.display()).bold()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.yaml");

        run_init(path.clone(), false).expect("init");

        let loaded = AppConfig::from_file(&path).expect("load");
        assert_eq!(loaded, AppConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "log:\n  level: debug\n").expect("seed");

        let err = run_init(path.clone(), false).expect_err("should refuse");
        assert!(err.to_string().contains("--force"));

        run_init(path.clone(), true).expect("forced init");
        assert_eq!(AppConfig::from_file(&path).expect("load"), AppConfig::default());
    }
}

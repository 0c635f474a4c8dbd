use std::path::{Path, PathBuf};

use anyhow::Context;
use toml::{map::Map, Value};

pub fn workspace_dir() -> anyhow::Result<PathBuf> {
    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .context("failed to run cargo locate-project")?
        .stdout;
    let cargo_path = std::str::from_utf8(&output)
        .context("cargo locate-project printed a non utf-8 path")?
        .trim();
    let dir = Path::new(cargo_path)
        .parent()
        .context("workspace manifest has no parent directory")?;

    Ok(dir.to_path_buf())
}

pub fn load_config(config_name: &str) -> anyhow::Result<Map<String, Value>> {
    load_toml(config_name)
}

pub fn load_env(secrets_name: &str) -> anyhow::Result<Map<String, Value>> {
    load_toml(secrets_name)
}

fn load_toml(file_name: &str) -> anyhow::Result<Map<String, Value>> {
    let path = workspace_dir()?.join(file_name);
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str::<Map<String, Value>>(&text)
        .with_context(|| format!("failed to parse {}", path.display()))
}

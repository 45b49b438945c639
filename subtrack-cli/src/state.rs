use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub fn subtrack_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".subtrack"))
}

pub fn ensure_subtrack_home() -> Result<PathBuf> {
    let dir = subtrack_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

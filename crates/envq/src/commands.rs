//! Command handlers for the `envq` binary.
//!
//! Each handler takes the loaded [`EnvFile`] and the `--json` flag and
//! writes its result to stdout.

use anyhow::{Context, Result};
use envmap::EnvFile;

use crate::cli::GlobalArgs;

/// Resolve and load the env file described by the global flags.
///
/// `--file` loads an explicit path; otherwise the file is discovered under
/// `--dir` using `--hint`.
pub fn open(global: &GlobalArgs) -> Result<EnvFile> {
    let env = match &global.file {
        Some(path) => EnvFile::from_path(path).context("failed to load env file")?,
        None => EnvFile::discover_in(std::path::Path::new(&global.dir), &global.hint)
            .context("failed to locate env file")?,
    };
    tracing::debug!(path = %env.path().display(), entries = env.len(), "env file ready");
    Ok(env)
}

/// `envq get KEY`
pub fn run_get(env: &EnvFile, key: &str, json: bool) -> Result<()> {
    let value = env.get(key)?;
    if json {
        let out = serde_json::json!({ "key": key, "value": value });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{value}");
    }
    Ok(())
}

/// `envq keys`
pub fn run_keys(env: &EnvFile, json: bool) -> Result<()> {
    if json {
        let keys: Vec<&str> = env.keys().collect();
        println!("{}", serde_json::to_string_pretty(&keys)?);
    } else {
        for key in env.keys() {
            println!("{key}");
        }
    }
    Ok(())
}

/// `envq check`
pub fn run_check(env: &EnvFile, json: bool) -> Result<()> {
    if json {
        let out = serde_json::json!({
            "path": env.path().display().to_string(),
            "entries": env.len(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}: {} entries", env.path().display(), env.len());
    }
    Ok(())
}

/// `envq path`
pub fn run_path(env: &EnvFile, json: bool) -> Result<()> {
    let path = env.path().display().to_string();
    if json {
        let out = serde_json::json!({ "path": path });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{path}");
    }
    Ok(())
}

use anyhow::{Context, Result};
use forklift::cfg::GenCfg;
use serde::Serialize;
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Parameters of one generation run, as recorded next to its output.
#[derive(Clone, Debug, Serialize)]
pub struct RunParams {
    pub count: usize,
    pub half_length: f64,
    pub max_distance: f64,
    pub seed: Option<u64>,
}

impl RunParams {
    pub fn new(cfg: &GenCfg, seed: Option<u64>) -> Self {
        Self {
            count: cfg.count,
            half_length: cfg.half_length,
            max_distance: cfg.max_distance,
            seed,
        }
    }
}

/// Provenance block: code rev, library version, params, outputs.
pub fn document(params: &RunParams, outputs: &[String]) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "forklift_version": forklift::VERSION,
        "params": params,
        "outputs": outputs,
    })
}

/// Write `<artifact stem>.provenance.json` next to `artifact`, with the callsite added.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, params: &RunParams) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let mut doc = document(params, &[artifact.to_string_lossy().into_owned()]);
    doc["callsite"] = json!({
        "file": callsite.file(),
        "line": callsite.line()
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("segments"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}

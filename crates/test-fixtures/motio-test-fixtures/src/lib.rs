use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    payloads: HashMap<String, String>,
    #[serde(rename = "blend-scenarios")]
    blend_scenarios: HashMap<String, String>,
}

/// Opaque byte payload as stored on disk.
#[derive(Debug, Deserialize)]
struct Payload {
    #[allow(dead_code)]
    description: String,
    bytes: Vec<u8>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a>(map: &'a HashMap<String, String>, kind: &str, name: &str) -> Result<&'a str> {
    map.get(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Byte payloads pushed through streams as opaque data.
pub mod payloads {
    use super::*;

    pub fn bytes(name: &str) -> Result<Vec<u8>> {
        let rel = lookup(&MANIFEST.payloads, "payload", name)?;
        let payload: Payload = load_json(rel)?;
        Ok(payload.bytes)
    }
}

/// Weighted layer sets with their expected blended transform.
pub mod blend_scenarios {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.blend_scenarios.keys().cloned().collect()
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let rel = lookup(&MANIFEST.blend_scenarios, "blend scenario", name)?;
        super::load_json(rel)
    }
}

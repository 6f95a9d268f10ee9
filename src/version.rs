use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// The crate's own manifest, used by `--bump` when no path is given.
pub fn default_manifest_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml")
}

/// Increment the patch component of a `MAJOR.MINOR.PATCH` version.
/// Pre-release and build suffixes are dropped.
pub fn next_patch(version: &str) -> Result<String> {
    let core = version
        .trim()
        .split(['-', '+'])
        .next()
        .unwrap_or_default();

    let parts = core
        .split('.')
        .map(|part| part.parse::<u64>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to parse version `{version}`"))?;

    match parts.as_slice() {
        [major, minor, patch] => {
            let next = patch
                .checked_add(1)
                .with_context(|| format!("Failed to bump version `{version}`: patch overflows"))?;
            Ok(format!("{major}.{minor}.{next}"))
        }
        _ => bail!("Failed to parse version `{version}`: expected MAJOR.MINOR.PATCH"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bump {
    pub previous: String,
    pub next: String,
    pub manifest: PathBuf,
}

/// Rewrite `version = "..."` in the `[package]` table of `manifest`.
pub fn bump_manifest(manifest: &Path) -> Result<Bump> {
    let contents = fs::read_to_string(manifest)
        .with_context(|| format!("Failed to read {}", manifest.display()))?;

    let table: toml::Table = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", manifest.display()))?;
    let previous = table
        .get("package")
        .and_then(|package| package.get("version"))
        .and_then(|version| version.as_str())
        .with_context(|| format!("Version is not found in {}", manifest.display()))?
        .to_string();

    let next = next_patch(&previous)?;
    let updated = replace_package_version(&contents, &previous, &next)
        .with_context(|| format!("Version is not found in {}", manifest.display()))?;

    if updated == contents {
        bail!("Failed to update version in {}", manifest.display());
    }

    fs::write(manifest, updated)
        .with_context(|| format!("Failed to write {}", manifest.display()))?;

    Ok(Bump {
        previous,
        next,
        manifest: manifest.to_path_buf(),
    })
}

// Only the first `version` key inside `[package]` is touched; dependency
// versions elsewhere in the file stay as they are.
fn replace_package_version(contents: &str, previous: &str, next: &str) -> Option<String> {
    let mut in_package = false;
    let mut replaced = false;
    let mut lines = Vec::new();

    for line in contents.split_inclusive('\n') {
        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            in_package = trimmed == "[package]";
        }

        let is_version_key = trimmed.split_once('=').is_some_and(|(key, value)| {
            key.trim() == "version" && value.trim().trim_matches('"') == previous
        });

        if in_package && !replaced && is_version_key {
            lines.push(line.replacen(previous, next, 1));
            replaced = true;
        } else {
            lines.push(line.to_string());
        }
    }

    replaced.then(|| lines.concat())
}

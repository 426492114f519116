// Copyright (c) 2026 The cliq Authors.
//
// SPDX-License-Identifier: Apache-2.0
//

//! Version discovery from a package manifest.
//!
//! Callers who want `--version` wired to their real package metadata
//! rather than a literal string can resolve it from the nearest
//! enclosing `Cargo.toml` at startup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors from manifest version discovery.
///
/// Kept separate from the parser's own error type, which stays
/// comparable for table-driven tests.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// No `Cargo.toml` exists at or above the start path.
    #[error("no Cargo.toml found at or above {0:?}")]
    NotFound(PathBuf),

    /// The manifest was found but carries no `package.version` field.
    #[error("manifest {0:?} has no package.version field")]
    MissingVersion(PathBuf),

    /// The manifest could not be read.
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    /// The manifest is not valid TOML.
    #[error("failed to parse manifest: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Deserialize)]
struct Manifest {
    package: Option<Package>,
}

#[derive(Deserialize)]
struct Package {
    version: Option<String>,
}

/// Read the version string from the nearest enclosing `Cargo.toml`.
///
/// Walks up from `start` (a file or directory path) and parses the
/// first `Cargo.toml` found. The search stops at the first manifest,
/// so a crate inside a workspace resolves its own version, not the
/// workspace root's.
///
/// # Example
///
/// ```rust,no_run
/// let version = cliq::manifest_version(env!("CARGO_MANIFEST_DIR")).unwrap();
/// assert!(!version.is_empty());
/// ```
pub fn manifest_version(start: impl AsRef<Path>) -> Result<String, ManifestError> {
    let start = start.as_ref();

    for dir in start.ancestors() {
        let candidate = dir.join("Cargo.toml");

        if !candidate.is_file() {
            continue;
        }

        let text = fs::read_to_string(&candidate)?;
        let manifest: Manifest = toml::from_str(&text)?;

        return manifest
            .package
            .and_then(|package| package.version)
            .ok_or(ManifestError::MissingVersion(candidate));
    }

    Err(ManifestError::NotFound(start.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_nearest_manifest() {
        let dir = tempfile::tempdir().unwrap();

        let manifest = concat!(
            "[package]\n",
            "name = \"demo\"\n",
            "version = \"1.2.3-beta5\"\n",
        );
        fs::write(dir.path().join("Cargo.toml"), manifest).unwrap();

        let nested = dir.path().join("src").join("deep");
        fs::create_dir_all(&nested).unwrap();

        let version = manifest_version(&nested).unwrap();
        assert_eq!(version, "1.2.3-beta5");

        // Starting at the manifest's own directory works too.
        let version = manifest_version(dir.path()).unwrap();
        assert_eq!(version, "1.2.3-beta5");
    }

    #[test]
    fn test_inner_manifest_wins() {
        let dir = tempfile::tempdir().unwrap();

        fs::write(
            dir.path().join("Cargo.toml"),
            "[package]\nname = \"outer\"\nversion = \"0.0.1\"\n",
        )
        .unwrap();

        let inner = dir.path().join("member");
        fs::create_dir_all(&inner).unwrap();
        fs::write(
            inner.join("Cargo.toml"),
            "[package]\nname = \"inner\"\nversion = \"9.9.9\"\n",
        )
        .unwrap();

        assert_eq!(manifest_version(&inner).unwrap(), "9.9.9");
    }

    #[test]
    fn test_missing_version_field() {
        let dir = tempfile::tempdir().unwrap();

        // A virtual workspace manifest has no [package] section.
        fs::write(dir.path().join("Cargo.toml"), "[workspace]\nmembers = []\n").unwrap();

        let result = manifest_version(dir.path());

        assert!(matches!(result, Err(ManifestError::MissingVersion(_))));
    }
}

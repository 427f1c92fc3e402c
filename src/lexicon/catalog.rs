//! Resource catalog loading
//!
//! The catalog lives in a JSON document. Startup never fails on it: any
//! problem falls back to the embedded default catalog.

use super::defaults;
use crate::error::TriageError;
use crate::models::Resource;
use crate::Result;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load resources from a JSON file
pub fn load_catalog(path: &Path) -> Result<Vec<Resource>> {
    let contents = fs::read_to_string(path)?;

    let resources: Vec<Resource> = serde_json::from_str(&contents)?;

    if resources.is_empty() {
        return Err(TriageError::LexiconLoad(format!(
            "Resource catalog {} is empty",
            path.display()
        )));
    }

    Ok(resources.into_iter().map(Resource::normalized).collect())
}

/// Load resources, falling back to the embedded catalog on any failure.
///
/// When `seed_missing` is set and the file does not exist, the embedded
/// catalog is written there for the next start.
pub fn load_or_default(path: &Path, seed_missing: bool) -> Vec<Resource> {
    if !path.exists() {
        let resources = defaults::resources();

        if seed_missing {
            if let Err(e) = write_catalog(path, &resources) {
                warn!("Could not write default catalog to {}: {}", path.display(), e);
            } else {
                info!("Wrote default resource catalog to {}", path.display());
            }
        }

        info!(
            count = resources.len(),
            "No resource catalog at {}, using defaults",
            path.display()
        );
        return resources;
    }

    match load_catalog(path) {
        Ok(resources) => {
            info!(count = resources.len(), "Loaded resource catalog from {}", path.display());
            resources
        }
        Err(e) => {
            warn!("Falling back to default resources: {}", e);
            defaults::resources()
        }
    }
}

/// Write a catalog as pretty-printed JSON
pub fn write_catalog(path: &Path, resources: &[Resource]) -> Result<()> {
    let json = serde_json::to_string_pretty(resources)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resources.json");

        let resources = load_or_default(&path, false);
        assert_eq!(resources.len(), 6);
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_file_is_seeded_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resources.json");

        load_or_default(&path, true);
        assert!(path.exists());

        let reloaded = load_catalog(&path).unwrap();
        assert_eq!(reloaded, defaults::resources());
    }

    #[test]
    fn test_invalid_json_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        assert!(load_catalog(file.path()).is_err());
        assert_eq!(load_or_default(file.path(), false).len(), 6);
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, TriageError::LexiconLoad(_)));
    }

    #[test]
    fn test_custom_catalog_tags_lowercased() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title":"Sleep Hygiene","description":"Better rest","url":"https://example.org/sleep","type":"Guide","category":"Sleep","tags":["Sleep","Insomnia"]}}]"#
        )
        .unwrap();

        let resources = load_catalog(file.path()).unwrap();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].tags, vec!["sleep", "insomnia"]);
    }
}

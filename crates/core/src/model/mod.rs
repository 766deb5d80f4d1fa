//! Core data model for image metadata, architecture mappings, and the matrix.
//!
//! Everything here is plain, immutable-after-load data:
//! - `ImageMetadata`: image name -> supported versions (insertion ordered).
//! - `ArchitectureMappings`: architecture key -> platform + s6 architecture.
//! - `Matrix`: the flat `{"include": [...]}` job list handed to CI.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One supported version of an image and the architectures it is built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
    /// Architecture keys; each is looked up in `ArchitectureMappings`.
    pub architectures: Vec<String>,
}

impl VersionInfo {
    pub fn new<I, S>(version: impl Into<String>, architectures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            version: version.into(),
            architectures: architectures.into_iter().map(Into::into).collect(),
        }
    }
}

/// Catalog of images keyed by name.
///
/// Key order follows the source file, so the generated matrix lists images in
/// the same order they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageMetadata {
    images: IndexMap<String, Vec<VersionInfo>>,
}

impl ImageMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper to append an image and its versions.
    pub fn with_image(mut self, name: impl Into<String>, versions: Vec<VersionInfo>) -> Self {
        self.images.insert(name.into(), versions);
        self
    }

    /// Iterate images in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[VersionInfo])> {
        self.images.iter().map(|(name, versions)| (name.as_str(), versions.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Number of (image, version, architecture) triples described.
    pub fn triple_count(&self) -> usize {
        self.images.values().flatten().map(|v| v.architectures.len()).sum()
    }
}

/// Platform and s6 tag registered for a single architecture key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitectureMapping {
    /// Container platform string, e.g. `linux/amd64`.
    pub platform: String,
    /// Architecture tag used by the s6 build, e.g. `x86_64`.
    pub s6_architecture: String,
}

impl ArchitectureMapping {
    pub fn new(platform: impl Into<String>, s6_architecture: impl Into<String>) -> Self {
        Self { platform: platform.into(), s6_architecture: s6_architecture.into() }
    }
}

/// Lookup table from architecture key to its mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArchitectureMappings {
    mappings: IndexMap<String, ArchitectureMapping>,
}

impl ArchitectureMappings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mapping(mut self, key: impl Into<String>, mapping: ArchitectureMapping) -> Self {
        self.mappings.insert(key.into(), mapping);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ArchitectureMapping> {
        self.mappings.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.mappings.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.mappings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

/// A single CI build job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixEntry {
    pub platform: String,
    pub image: String,
    pub image_version: String,
    pub s6_architecture: String,
}

/// The CI matrix: `{"include": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix {
    pub include: Vec<MatrixEntry>,
}

impl Matrix {
    pub fn new(include: Vec<MatrixEntry>) -> Self {
        Self { include }
    }

    pub fn len(&self) -> usize {
        self.include.len()
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_metadata_preserves_source_order() {
        let json = r#"{"zeta": [], "alpha": [], "mid": []}"#;
        let metadata: ImageMetadata = serde_json::from_str(json).expect("parse");
        let names: Vec<&str> = metadata.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn triple_count_sums_all_architectures() {
        let metadata = ImageMetadata::new()
            .with_image(
                "app",
                vec![VersionInfo::new("1.0", ["amd64", "arm64"]), VersionInfo::new("2.0", ["amd64"])],
            )
            .with_image("db", vec![VersionInfo::new("15", Vec::<String>::new())]);
        assert_eq!(metadata.triple_count(), 3);
    }

    #[test]
    fn matrix_entry_serializes_fields_in_order() {
        let entry = MatrixEntry {
            platform: "linux/amd64".into(),
            image: "app".into(),
            image_version: "1.0".into(),
            s6_architecture: "x86_64".into(),
        };
        let json = serde_json::to_string(&entry).expect("serialize");
        assert_eq!(
            json,
            r#"{"platform":"linux/amd64","image":"app","image_version":"1.0","s6_architecture":"x86_64"}"#
        );
    }
}

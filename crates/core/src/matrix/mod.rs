//! Cross-join of image metadata with architecture mappings.

use tracing::{debug, warn};

use crate::error::{LookupWarning, MatrixError, MatrixResult};
use crate::model::{ArchitectureMappings, ImageMetadata, Matrix, MatrixEntry};

/// Result of a generation pass: the matrix plus every skipped triple.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatrixReport {
    pub matrix: Matrix,
    pub warnings: Vec<LookupWarning>,
}

impl MatrixReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Reject the report if any architecture lookup failed.
    ///
    /// Keys are reported once each, in first-seen order.
    pub fn into_strict(self) -> MatrixResult<Matrix> {
        if self.warnings.is_empty() {
            return Ok(self.matrix);
        }
        let mut keys: Vec<String> = Vec::new();
        for w in self.warnings {
            if !keys.contains(&w.architecture) {
                keys.push(w.architecture);
            }
        }
        Err(MatrixError::UnknownArchitectures { keys })
    }
}

/// Builds a `Matrix` from already-loaded inputs.
///
/// Borrowing only; the inputs are never modified.
#[derive(Debug, Clone, Copy)]
pub struct MatrixBuilder<'a> {
    images: &'a ImageMetadata,
    mappings: &'a ArchitectureMappings,
}

impl<'a> MatrixBuilder<'a> {
    pub fn new(images: &'a ImageMetadata, mappings: &'a ArchitectureMappings) -> Self {
        Self { images, mappings }
    }

    /// Generate the matrix, logging a warning for each skipped triple.
    pub fn generate(&self) -> Matrix {
        self.generate_report().matrix
    }

    /// Generate the matrix and keep the skipped triples for the caller.
    ///
    /// Order is image order, then version order, then architecture order.
    /// Duplicate triples in the input yield duplicate entries.
    pub fn generate_report(&self) -> MatrixReport {
        let mut include = Vec::with_capacity(self.images.triple_count());
        let mut warnings = Vec::new();

        for (image, versions) in self.images.iter() {
            for version_info in versions {
                for arch in &version_info.architectures {
                    match self.mappings.get(arch) {
                        Some(mapping) => include.push(MatrixEntry {
                            platform: mapping.platform.clone(),
                            image: image.to_string(),
                            image_version: version_info.version.clone(),
                            s6_architecture: mapping.s6_architecture.clone(),
                        }),
                        None => {
                            let warning = LookupWarning {
                                image: image.to_string(),
                                version: version_info.version.clone(),
                                architecture: arch.clone(),
                            };
                            warn!(
                                image = %warning.image,
                                version = %warning.version,
                                architecture = %warning.architecture,
                                "{warning}"
                            );
                            warnings.push(warning);
                        }
                    }
                }
            }
        }

        debug!(entries = include.len(), skipped = warnings.len(), "generated matrix");
        MatrixReport { matrix: Matrix::new(include), warnings }
    }

    /// Distinct architecture keys referenced by the images but absent from
    /// the mappings, in first-seen order.
    pub fn missing_architectures(&self) -> Vec<String> {
        let mut missing: Vec<String> = Vec::new();
        for (_, versions) in self.images.iter() {
            for arch in versions.iter().flat_map(|v| &v.architectures) {
                if !self.mappings.contains(arch) && !missing.contains(arch) {
                    missing.push(arch.clone());
                }
            }
        }
        missing
    }
}

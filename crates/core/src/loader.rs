//! Reading the input description files and writing the matrix back out.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::error::{LoadError, MatrixError, MatrixResult};
use crate::model::{ArchitectureMappings, ImageMetadata, Matrix};

/// How the matrix JSON is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Single line.
    #[default]
    Compact,
    /// Indented by four spaces.
    Pretty,
}

/// Load the image metadata catalog.
pub fn load_image_metadata(path: &Path) -> Result<ImageMetadata, LoadError> {
    let images: ImageMetadata = load_document(path)?;
    debug!(path = %path.display(), images = images.len(), "loaded image metadata");
    Ok(images)
}

/// Load the architecture key -> platform/s6 mapping table.
pub fn load_architecture_mappings(path: &Path) -> Result<ArchitectureMappings, LoadError> {
    let mappings: ArchitectureMappings = load_document(path)?;
    debug!(path = %path.display(), architectures = mappings.len(), "loaded architecture mappings");
    Ok(mappings)
}

/// `.yaml`/`.yml` files are parsed as YAML, everything else as JSON.
fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    if !path.exists() {
        return Err(LoadError::Missing { path: path.to_path_buf() });
    }
    let contents = fs::read_to_string(path)
        .map_err(|source| LoadError::Read { path: path.to_path_buf(), source })?;

    let parsed: Result<T, String> = if is_yaml(path) {
        serde_yaml::from_str(&contents).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&contents).map_err(|e| e.to_string())
    };
    parsed.map_err(|message| LoadError::Parse { path: path.to_path_buf(), message })
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase).as_deref(),
        Some("yaml" | "yml")
    )
}

/// Serialize the matrix to a JSON string.
pub fn render_matrix(matrix: &Matrix, style: OutputStyle) -> MatrixResult<String> {
    match style {
        OutputStyle::Compact => Ok(serde_json::to_string(matrix)?),
        OutputStyle::Pretty => {
            let mut buf = Vec::new();
            let formatter = PrettyFormatter::with_indent(b"    ");
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
            matrix.serialize(&mut ser)?;
            // serde_json only ever emits valid UTF-8.
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
    }
}

/// Write the matrix to `path`, creating parent directories if needed.
pub fn write_matrix(path: &Path, matrix: &Matrix, style: OutputStyle) -> MatrixResult<()> {
    let rendered = render_matrix(matrix, style)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|source| MatrixError::Write { path: path.to_path_buf(), source })?;
    }
    fs::write(path, rendered)
        .map_err(|source| MatrixError::Write { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), entries = matrix.len(), "wrote matrix");
    Ok(())
}

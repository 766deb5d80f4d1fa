use std::path::{Path, PathBuf};

/// Default image metadata file name.
pub const DEFAULT_IMAGES_FILE: &str = "official_image_metadata.json";

/// Default architecture mappings file name.
pub const DEFAULT_ARCHITECTURES_FILE: &str = "s6_architecture_mappings.json";

/// Default output file name.
pub const DEFAULT_OUTPUT_FILE: &str = "matrix.json";

/// Input and output paths for one generation run.
///
/// This is derived from a chosen root path. It does *not* perform any IO itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixLayout {
    /// Directory relative overrides are resolved against.
    pub root: PathBuf,
    /// Image metadata file.
    pub images_path: PathBuf,
    /// Architecture mappings file.
    pub architectures_path: PathBuf,
    /// Where the matrix is written when not printing.
    pub output_path: PathBuf,
}

impl MatrixLayout {
    /// Compute the default layout for inputs living in `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let images_path = root.join(DEFAULT_IMAGES_FILE);
        let architectures_path = root.join(DEFAULT_ARCHITECTURES_FILE);
        let output_path = root.join(DEFAULT_OUTPUT_FILE);

        Self { root, images_path, architectures_path, output_path }
    }

    pub fn with_images(mut self, path: impl AsRef<Path>) -> Self {
        self.images_path = self.resolve(path.as_ref());
        self
    }

    pub fn with_architectures(mut self, path: impl AsRef<Path>) -> Self {
        self.architectures_path = self.resolve(path.as_ref());
        self
    }

    pub fn with_output(mut self, path: impl AsRef<Path>) -> Self {
        self.output_path = self.resolve(path.as_ref());
        self
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_resolve_relative_to_root() {
        let layout = MatrixLayout::new("/work").with_images("meta/images.yaml");
        assert_eq!(layout.images_path, PathBuf::from("/work/meta/images.yaml"));
        assert_eq!(layout.output_path, PathBuf::from("/work/matrix.json"));
    }
}

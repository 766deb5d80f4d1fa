use std::path::PathBuf;

use anyhow::{Context, Result};
use s6_matrix_core::{
    load_architecture_mappings, load_image_metadata, ArchitectureMappings, ImageMetadata,
    MatrixLayout,
};

use crate::canonicalize_or_current;

/// Input/output path options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct PathArgs {
    pub root: String,
    pub images: Option<PathBuf>,
    pub architectures: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl PathArgs {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into(), ..Self::default() }
    }
}

/// Build the layout from the root and any explicit path overrides.
pub fn resolve_layout(args: &PathArgs) -> Result<MatrixLayout> {
    let root_path = canonicalize_or_current(&args.root)?;
    let mut layout = MatrixLayout::new(root_path);
    if let Some(images) = &args.images {
        layout = layout.with_images(images);
    }
    if let Some(architectures) = &args.architectures {
        layout = layout.with_architectures(architectures);
    }
    if let Some(output) = &args.output {
        layout = layout.with_output(output);
    }
    Ok(layout)
}

/// Load both input files; either failing aborts the command.
pub fn load_inputs(layout: &MatrixLayout) -> Result<(ImageMetadata, ArchitectureMappings)> {
    let images =
        load_image_metadata(&layout.images_path).context("Failed to load image metadata")?;
    let mappings = load_architecture_mappings(&layout.architectures_path)
        .context("Failed to load architecture mappings")?;
    Ok((images, mappings))
}

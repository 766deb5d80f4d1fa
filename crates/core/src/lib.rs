//! s6-matrix-core
//!
//! Core library for turning an image catalog and an architecture mapping table
//! into a CI build matrix.
//!
//! This crate defines the data model, the matrix builder, file loading and
//! output, and the default file layout. The CLI is a thin wrapper over it.

pub mod error;
pub mod layout;
pub mod loader;
pub mod matrix;
pub mod model;

pub use error::{LoadError, LookupWarning, MatrixError, MatrixResult};
pub use layout::MatrixLayout;
pub use loader::{
    load_architecture_mappings, load_image_metadata, render_matrix, write_matrix, OutputStyle,
};
pub use matrix::{MatrixBuilder, MatrixReport};
pub use model::{
    ArchitectureMapping, ArchitectureMappings, ImageMetadata, Matrix, MatrixEntry, VersionInfo,
};

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

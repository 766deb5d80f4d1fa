use anyhow::{Context, Result};
use s6_matrix_core::{render_matrix, write_matrix, MatrixBuilder, OutputStyle};
use tracing::info;

use crate::commands::{load_inputs, resolve_layout, PathArgs};

/// Where the generated matrix goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to the layout's output file.
    File(OutputStyle),
    /// Print to stdout; nothing is written to disk.
    Stdout(OutputStyle),
}

impl OutputTarget {
    /// Map the counted `-p/--print` flag (and `--pretty` for file output).
    ///
    /// `0` writes the file, `1` prints compact JSON, `2+` prints indented JSON.
    pub fn from_flags(print: u8, pretty_file: bool) -> Self {
        match print {
            0 if pretty_file => OutputTarget::File(OutputStyle::Pretty),
            0 => OutputTarget::File(OutputStyle::Compact),
            1 => OutputTarget::Stdout(OutputStyle::Compact),
            _ => OutputTarget::Stdout(OutputStyle::Pretty),
        }
    }
}

/// Load inputs, build the matrix, and emit it.
pub fn generate_command(paths: &PathArgs, target: OutputTarget, strict: bool) -> Result<()> {
    let layout = resolve_layout(paths)?;
    let (images, mappings) = load_inputs(&layout)?;

    let report = MatrixBuilder::new(&images, &mappings).generate_report();
    let skipped = report.warnings.len();
    let matrix = if strict {
        report.into_strict().context("Strict mode rejected the matrix")?
    } else {
        report.matrix
    };

    match target {
        OutputTarget::Stdout(style) => {
            let rendered = render_matrix(&matrix, style)?;
            println!("{}", rendered);
        }
        OutputTarget::File(style) => {
            write_matrix(&layout.output_path, &matrix, style).with_context(|| {
                format!("Failed to write matrix to {}", layout.output_path.display())
            })?;
            info!(
                path = %layout.output_path.display(),
                entries = matrix.len(),
                skipped,
                "matrix written"
            );
        }
    }

    Ok(())
}

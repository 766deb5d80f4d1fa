use anyhow::{bail, Result};
use s6_matrix_core::MatrixBuilder;
use serde::Serialize;

use crate::commands::{load_inputs, resolve_layout, PathArgs};

/// Summary printed by `validate`.
#[derive(Debug, Serialize)]
pub struct ValidationSummary {
    pub images: usize,
    pub architectures: usize,
    pub triples: usize,
    pub entries: usize,
    pub missing_architectures: Vec<String>,
}

/// Compute the validation summary without printing.
pub fn validation_summary(paths: &PathArgs) -> Result<ValidationSummary> {
    let layout = resolve_layout(paths)?;
    let (images, mappings) = load_inputs(&layout)?;
    let builder = MatrixBuilder::new(&images, &mappings);
    let missing_architectures = builder.missing_architectures();
    let entries = builder.generate().len();

    Ok(ValidationSummary {
        images: images.len(),
        architectures: mappings.len(),
        triples: images.triple_count(),
        entries,
        missing_architectures,
    })
}

/// Check that every referenced architecture has a mapping.
pub fn validate_command(paths: &PathArgs, json: bool) -> Result<()> {
    let summary = validation_summary(paths)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Images: {}", summary.images);
        println!("Architectures mapped: {}", summary.architectures);
        println!("Triples: {}", summary.triples);
        println!("Matrix entries: {}", summary.entries);
        if summary.missing_architectures.is_empty() {
            println!("Missing architectures: (none)");
        } else {
            println!("Missing architectures:");
            for key in &summary.missing_architectures {
                println!("  - {key}");
            }
        }
    }

    if !summary.missing_architectures.is_empty() {
        bail!(
            "{} architecture key(s) missing from mappings: {}",
            summary.missing_architectures.len(),
            summary.missing_architectures.join(", ")
        );
    }
    Ok(())
}

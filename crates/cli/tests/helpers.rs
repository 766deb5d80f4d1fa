use std::fs;

use s6_matrix::canonicalize_or_current;
use s6_matrix::commands::{resolve_layout, OutputTarget, PathArgs};
use s6_matrix_core::OutputStyle;
use tempfile::tempdir;

#[test]
fn canonicalize_or_current_resolves_existing_relative_path() {
    let original = std::env::current_dir().expect("cwd");
    let tmp = tempdir().expect("tempdir");
    let subdir = tmp.path().join("nested");
    fs::create_dir_all(&subdir).expect("create nested");
    std::env::set_current_dir(tmp.path()).expect("chdir tmp");

    let result = canonicalize_or_current("nested").expect("canonicalize nested");
    assert_eq!(result, subdir.canonicalize().expect("canonicalize subdir"));

    std::env::set_current_dir(original).expect("restore cwd");
}

#[test]
fn print_flag_count_selects_target() {
    assert_eq!(OutputTarget::from_flags(0, false), OutputTarget::File(OutputStyle::Compact));
    assert_eq!(OutputTarget::from_flags(0, true), OutputTarget::File(OutputStyle::Pretty));
    assert_eq!(OutputTarget::from_flags(1, true), OutputTarget::Stdout(OutputStyle::Compact));
    assert_eq!(OutputTarget::from_flags(3, false), OutputTarget::Stdout(OutputStyle::Pretty));
}

#[test]
fn resolve_layout_applies_overrides() {
    let tmp = tempdir().expect("tempdir");
    let root = tmp.path().canonicalize().expect("canon tmp");
    let args = PathArgs {
        root: root.to_string_lossy().to_string(),
        images: Some("meta/images.yaml".into()),
        architectures: None,
        output: Some("out/matrix.json".into()),
    };

    let layout = resolve_layout(&args).expect("layout");
    assert_eq!(layout.images_path, root.join("meta/images.yaml"));
    assert_eq!(layout.architectures_path, root.join("s6_architecture_mappings.json"));
    assert_eq!(layout.output_path, root.join("out/matrix.json"));

    let defaults = resolve_layout(&PathArgs::new(root.to_string_lossy())).expect("layout");
    assert_eq!(defaults.images_path, root.join("official_image_metadata.json"));
}

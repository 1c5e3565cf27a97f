//! Supported volume formats and path validation.
//!
//! Paths are judged by string suffix alone: compound suffixes such as
//! `nii.gz` take part as-is, and no structured extension parsing happens.

use std::path::Path;

/// Volume file suffixes accepted for both input and output paths.
///
/// Grouped by family: MetaImage, NIfTI, NRRD, GIPL. Compressed variants are
/// separate entries because matching is a plain suffix test.
pub const SUPPORTED_EXTENSIONS: [&str; 8] = [
    "mha", "mhd", "nii", "nii.gz", "nrrd", "nrrd.gz", "gipl", "gipl.gz",
];

/// Returns true when the path's string form ends with a supported suffix.
#[must_use]
pub fn is_supported_volume(path: &Path) -> bool {
    volume_format(path).is_some()
}

/// The format a path carries, judged by its longest matching suffix.
///
/// `Volume.nii.gz` reports `nii.gz`, not `nii`. Returns `None` for paths
/// outside the supported set.
#[must_use]
pub fn volume_format(path: &Path) -> Option<&'static str> {
    let name = path.to_string_lossy();
    SUPPORTED_EXTENSIONS
        .iter()
        .copied()
        .filter(|suffix| name.ends_with(suffix))
        .max_by_key(|suffix| suffix.len())
}

/// Comma-separated list of supported suffixes for user-facing messages.
#[must_use]
pub fn supported_list() -> String {
    SUPPORTED_EXTENSIONS.join(", ")
}

//! Building closet items from uploaded image files.
//!
//! The intake path is deliberately forgiving: whatever happens to the
//! photo, the user ends up with a complete item they can edit later.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::color::{Rgb, extract_from_bytes};
use crate::model::{ClothingItem, infer_category};

/// Errors that can occur while reading an upload from disk.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// I/O error reading the image file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Path has no usable file name
    #[error("Path has no file name: {path:?}")]
    NoFileName {
        /// The offending path
        path: PathBuf,
    },
}

/// Build a complete closet item from an uploaded image.
///
/// The name is the filename stem, the category is inferred from the
/// filename, and the colors come from the photo. An undecodable image
/// degrades to the white fallback color; intake itself never fails.
pub fn intake_item(filename: &str, bytes: &[u8]) -> ClothingItem {
    let name = display_name(filename);
    let category = infer_category(filename);
    let colors = extract_from_bytes(bytes);
    let primary = colors.first().copied().unwrap_or(Rgb::WHITE);
    let secondary = colors.get(1).copied();

    log::info!("Intake {filename:?} as {category} ({})", primary.to_hex());

    let mut item = ClothingItem::new(name, category, primary).with_image_ref(filename);
    if let Some(secondary) = secondary {
        item = item.with_secondary_color(secondary);
    }
    item
}

/// Read an image from disk and run intake on it.
pub fn intake_from_path(path: &Path) -> Result<ClothingItem, IntakeError> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| IntakeError::NoFileName {
            path: path.to_path_buf(),
        })?;
    let bytes = std::fs::read(path)?;
    Ok(intake_item(filename, &bytes))
}

/// Portion of the filename before the first `.`.
fn display_name(filename: &str) -> String {
    filename.split('.').next().unwrap_or(filename).to_string()
}

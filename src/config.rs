use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::io::object_from_json;

/// Options for converting a directory-based dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Extrinsics directory, relative to the dataset root.
    pub extrinsics_dir: String,
    /// Intrinsics directory, relative to the dataset root.
    pub intrinsics_dir: String,
    /// Prefix written into every `file_path`.
    pub images_dir: String,
    pub image_ext: String,
    pub width: u32,
    pub height: u32,
    pub multi_camera: bool,
    /// Camera whose first pose becomes the world origin.
    pub reference_camera: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            extrinsics_dir: "extrinsics".to_string(),
            intrinsics_dir: "intrinsics".to_string(),
            images_dir: "images".to_string(),
            image_ext: ".jpg".to_string(),
            width: 1600,
            height: 900,
            multi_camera: false,
            reference_camera: crate::alignment::FRONT_CAMERA_ID.to_string(),
        }
    }
}

impl ConversionConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<ConversionConfig> {
        object_from_json(path)
    }
}

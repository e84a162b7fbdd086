//! Flat `cameras.json` records, one entry per image with shared intrinsics.

use std::path::Path;

use nalgebra as na;
use serde::Deserialize;

use crate::error::{ConvertError, Result};
use crate::frame_assembler::image_path;
use crate::io::object_from_json;
use crate::report::Reporter;
use crate::transforms::TransformsDocument;
use crate::types::{FrameRecord, SharedIntrinsics, rotation_translation_to_matrix4};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CameraEntry {
    pub img_name: String,
    pub width: u32,
    pub height: u32,
    pub fx: f64,
    pub fy: f64,
    /// Row-major 3x3 rotation.
    pub rotation: [[f64; 3]; 3],
    pub position: [f64; 3],
}

impl CameraEntry {
    pub fn transform_matrix(&self) -> na::Matrix4<f64> {
        let r = na::Matrix3::from_fn(|r, c| self.rotation[r][c]);
        let t = na::Vector3::from(self.position);
        rotation_translation_to_matrix4(&r, &t)
    }
}

pub fn load_cameras_json(path: &Path) -> Result<Vec<CameraEntry>> {
    object_from_json(path)
}

/// Converts camera records into a single-camera document.
///
/// Global intrinsics come from the first record; frames keep input order.
pub fn cameras_to_document(
    cameras: &[CameraEntry],
    images_dir: &str,
    image_ext: &str,
) -> Option<TransformsDocument> {
    let first = cameras.first()?;
    let shared = SharedIntrinsics {
        fx: first.fx,
        fy: first.fy,
        width: first.width,
        height: first.height,
    };
    let frames = cameras
        .iter()
        .map(|cam| FrameRecord {
            file_path: image_path(images_dir, &cam.img_name, image_ext),
            transform_matrix: cam.transform_matrix(),
            intrinsics: None,
        })
        .collect();
    Some(TransformsDocument::single_camera(shared, frames))
}

pub fn convert_cameras_json<R: Reporter>(
    input_path: &Path,
    images_dir: &str,
    image_ext: &str,
    reporter: &mut R,
) -> Result<TransformsDocument> {
    let cameras = load_cameras_json(input_path)?;
    let document = cameras_to_document(&cameras, images_dir, image_ext).ok_or_else(|| {
        ConvertError::EmptyCameras {
            path: input_path.to_path_buf(),
        }
    })?;
    reporter.info(format!(
        "Converted {} cameras from {}",
        cameras.len(),
        input_path.display()
    ));
    Ok(document)
}

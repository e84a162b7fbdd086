use crate::error::{ConvertError, Result};
use crate::types::{CameraKey, ExtrinsicsMap, FrameRecord, IntrinsicsMap};

#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyOptions {
    pub images_dir: String,
    pub image_ext: String,
    pub multi_camera: bool,
}

/// `{images_dir}/{key}{image_ext}`
pub fn image_path(images_dir: &str, key: &str, image_ext: &str) -> String {
    format!("{}/{}{}", images_dir, key, image_ext)
}

/// Builds one frame per pose, in ascending key order.
///
/// Only multi-camera output is supported for directory datasets; every
/// camera id referenced by a key must have intrinsics.
pub fn assemble_frames(
    aligned: &ExtrinsicsMap,
    intrinsics: &IntrinsicsMap,
    options: &AssemblyOptions,
) -> Result<Vec<FrameRecord>> {
    if !options.multi_camera {
        return Err(ConvertError::UnsupportedMode {
            mode: "single camera".to_string(),
        });
    }

    aligned
        .iter()
        .map(|(key, transform)| {
            let camera_key = CameraKey::parse(key)?;
            let cam_intrinsics = intrinsics.get(&camera_key.camera_id).ok_or_else(|| {
                ConvertError::FrameWithoutIntrinsics {
                    key: key.clone(),
                    camera_id: camera_key.camera_id.clone(),
                }
            })?;
            Ok(FrameRecord {
                file_path: image_path(&options.images_dir, key, &options.image_ext),
                transform_matrix: *transform,
                intrinsics: Some(cam_intrinsics.clone()),
            })
        })
        .collect()
}

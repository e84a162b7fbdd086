use nalgebra as na;

use crate::error::{ConvertError, Result};
use crate::report::Reporter;
use crate::types::{CameraKey, ExtrinsicsMap};

/// Camera id of the front camera in driving datasets.
pub const FRONT_CAMERA_ID: &str = "0";

/// Poses re-expressed relative to a reference pose.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedPoses {
    /// Key of the pose used as the new origin, `None` when alignment was skipped.
    pub reference_key: Option<String>,
    pub poses: ExtrinsicsMap,
}

/// Smallest key whose camera component equals `reference_camera`.
pub fn find_reference_key<'a>(
    extrinsics: &'a ExtrinsicsMap,
    reference_camera: &str,
) -> Option<&'a str> {
    extrinsics
        .keys()
        .find(|key| CameraKey::parse(key).is_ok_and(|k| k.camera_id == reference_camera))
        .map(String::as_str)
}

/// Left-multiplies every pose by the inverse of the reference pose.
///
/// Without any pose from `reference_camera` the poses pass through unchanged
/// and a warning is reported. All input poses must use the same convention
/// (all camera-to-world or all world-to-camera).
pub fn align_poses<R: Reporter>(
    extrinsics: &ExtrinsicsMap,
    reference_camera: &str,
    reporter: &mut R,
) -> Result<AlignedPoses> {
    let Some(reference_key) = find_reference_key(extrinsics, reference_camera) else {
        reporter.warn(format!(
            "No front camera (camera {}) found, skipping alignment",
            reference_camera
        ));
        return Ok(AlignedPoses {
            reference_key: None,
            poses: extrinsics.clone(),
        });
    };

    let reference_inv = extrinsics[reference_key]
        .try_inverse()
        .ok_or_else(|| ConvertError::SingularReference {
            key: reference_key.to_string(),
        })?;
    reporter.info(format!(
        "Applying camera alignment using first front camera pose: {}",
        reference_key
    ));

    let poses = extrinsics
        .iter()
        .map(|(key, m)| (key.clone(), align_pose(&reference_inv, m)))
        .collect();
    Ok(AlignedPoses {
        reference_key: Some(reference_key.to_string()),
        poses,
    })
}

#[inline]
pub fn align_pose(reference_inv: &na::Matrix4<f64>, pose: &na::Matrix4<f64>) -> na::Matrix4<f64> {
    reference_inv * pose
}

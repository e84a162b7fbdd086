use std::collections::BTreeMap;
use std::fmt;

use nalgebra as na;

use crate::error::{ConvertError, Result};

/// Extrinsic poses keyed by `{timestep}_{camera}`.
///
/// A `BTreeMap` so iteration is always in ascending key order, which is
/// ascending (timestep, camera) order for zero-padded timesteps.
pub type ExtrinsicsMap = BTreeMap<String, na::Matrix4<f64>>;

/// Intrinsics keyed by camera id.
pub type IntrinsicsMap = BTreeMap<String, Intrinsics>;

pub const KEY_SEPARATOR: char = '_';

/// The two components of an extrinsics key, e.g. `"000_0"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CameraKey {
    pub timestep: String,
    pub camera_id: String,
}

impl CameraKey {
    /// Splits `key` on the separator into exactly two components.
    pub fn parse(key: &str) -> Result<CameraKey> {
        let mut parts = key.split(KEY_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(timestep), Some(camera_id), None) => Ok(CameraKey {
                timestep: timestep.to_string(),
                camera_id: camera_id.to_string(),
            }),
            _ => Err(ConvertError::InvalidCameraKey {
                key: key.to_string(),
            }),
        }
    }
}

impl fmt::Display for CameraKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.timestep, KEY_SEPARATOR, self.camera_id)
    }
}

/// Pinhole intrinsics of one physical camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Intrinsics {
    pub camera_id: String,
    pub fx: f64,
    pub fy: f64,
    pub cx: f64,
    pub cy: f64,
    pub width: u32,
    pub height: u32,
}

/// Intrinsics shared by every frame of a single-camera document.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedIntrinsics {
    pub fx: f64,
    pub fy: f64,
    pub width: u32,
    pub height: u32,
}

/// One image with its aligned pose.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    pub file_path: String,
    pub transform_matrix: na::Matrix4<f64>,
    /// Present in multi-camera documents only.
    pub intrinsics: Option<Intrinsics>,
}

/// Builds the homogeneous transform `[R | t; 0 0 0 1]`.
pub fn rotation_translation_to_matrix4(
    rotation: &na::Matrix3<f64>,
    translation: &na::Vector3<f64>,
) -> na::Matrix4<f64> {
    let mut m = na::Matrix4::identity();
    m.fixed_view_mut::<3, 3>(0, 0).copy_from(rotation);
    m.fixed_view_mut::<3, 1>(0, 3).copy_from(translation);
    m
}

/// Row-major nested array, the layout used in `transform_matrix`.
pub fn matrix4_to_rows(m: &na::Matrix4<f64>) -> [[f64; 4]; 4] {
    let mut rows = [[0.0; 4]; 4];
    for (r, row) in rows.iter_mut().enumerate() {
        for (c, v) in row.iter_mut().enumerate() {
            *v = m[(r, c)];
        }
    }
    rows
}

pub fn rows_to_matrix4(rows: &[[f64; 4]; 4]) -> na::Matrix4<f64> {
    na::Matrix4::from_fn(|r, c| rows[r][c])
}

mod common;

use camera_transforms::alignment::{FRONT_CAMERA_ID, align_poses, find_reference_key};
use camera_transforms::error::ConvertError;
use camera_transforms::report::Diagnostic;
use camera_transforms::types::ExtrinsicsMap;
use common::*;
use log::Level;
use nalgebra as na;

fn sample_extrinsics() -> ExtrinsicsMap {
    let mut extrinsics = ExtrinsicsMap::new();
    extrinsics.insert(
        "001_0".to_string(),
        pose(na::Vector3::new(0.0, 1.0, 0.0), 0.2, na::Vector3::new(2.0, 0.0, 0.5)),
    );
    extrinsics.insert(
        "000_1".to_string(),
        pose(na::Vector3::new(1.0, 0.0, 0.0), -0.4, na::Vector3::new(0.0, 1.0, 0.0)),
    );
    extrinsics.insert(
        "000_0".to_string(),
        pose(na::Vector3::new(0.0, 0.0, 1.0), 0.7, na::Vector3::new(10.0, -3.0, 1.0)),
    );
    extrinsics
}

#[test]
fn test_reference_is_first_front_camera() {
    let extrinsics = sample_extrinsics();
    assert_eq!(find_reference_key(&extrinsics, FRONT_CAMERA_ID), Some("000_0"));
    assert_eq!(find_reference_key(&extrinsics, "1"), Some("000_1"));
    assert_eq!(find_reference_key(&extrinsics, "4"), None);
}

#[test]
fn test_reference_ignores_suffix_lookalikes() {
    let mut extrinsics = ExtrinsicsMap::new();
    extrinsics.insert("000_10".to_string(), translation(1.0, 0.0, 0.0));
    extrinsics.insert("x_y_0".to_string(), translation(2.0, 0.0, 0.0));
    extrinsics.insert("002_0".to_string(), translation(3.0, 0.0, 0.0));
    assert_eq!(find_reference_key(&extrinsics, "0"), Some("002_0"));
}

#[test]
fn test_reference_pose_becomes_identity() {
    let extrinsics = sample_extrinsics();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let aligned = align_poses(&extrinsics, FRONT_CAMERA_ID, &mut diagnostics).unwrap();

    assert_eq!(aligned.reference_key.as_deref(), Some("000_0"));
    assert_matrix_eq(&aligned.poses["000_0"], &na::Matrix4::identity());
    assert!(messages_at(&diagnostics, Level::Warn).is_empty());
}

#[test]
fn test_aligned_pose_is_reference_inverse_times_pose() {
    let extrinsics = sample_extrinsics();
    let aligned = align_poses(&extrinsics, FRONT_CAMERA_ID, &mut Vec::<Diagnostic>::new()).unwrap();
    let reference_inv = extrinsics["000_0"].try_inverse().unwrap();

    assert_eq!(aligned.poses.len(), extrinsics.len());
    for (key, raw) in &extrinsics {
        assert_matrix_eq(&aligned.poses[key], &(reference_inv * raw));
    }
}

#[test]
fn test_alignment_is_independent_per_key() {
    let extrinsics = sample_extrinsics();
    let full = align_poses(&extrinsics, FRONT_CAMERA_ID, &mut Vec::<Diagnostic>::new()).unwrap();

    let mut subset = ExtrinsicsMap::new();
    subset.insert("000_0".to_string(), extrinsics["000_0"]);
    subset.insert("000_1".to_string(), extrinsics["000_1"]);
    let partial = align_poses(&subset, FRONT_CAMERA_ID, &mut Vec::<Diagnostic>::new()).unwrap();

    assert_matrix_eq(&full.poses["000_1"], &partial.poses["000_1"]);
}

#[test]
fn test_alignment_skipped_without_front_camera() {
    let mut extrinsics = ExtrinsicsMap::new();
    extrinsics.insert("000_1".to_string(), translation(1.0, 2.0, 3.0));
    extrinsics.insert("000_2".to_string(), translation(-1.0, 0.0, 0.0));

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let aligned = align_poses(&extrinsics, FRONT_CAMERA_ID, &mut diagnostics).unwrap();

    assert!(aligned.reference_key.is_none());
    assert_eq!(aligned.poses, extrinsics);
    assert_eq!(messages_at(&diagnostics, Level::Warn).len(), 1);
}

#[test]
fn test_singular_reference_fails() {
    let mut extrinsics = ExtrinsicsMap::new();
    extrinsics.insert("000_0".to_string(), na::Matrix4::zeros());
    extrinsics.insert("001_0".to_string(), na::Matrix4::identity());

    let err = align_poses(&extrinsics, FRONT_CAMERA_ID, &mut Vec::<Diagnostic>::new()).unwrap_err();
    assert!(matches!(err, ConvertError::SingularReference { ref key } if key == "000_0"));
}

mod common;

use camera_transforms::error::ConvertError;
use camera_transforms::frame_assembler::{AssemblyOptions, assemble_frames, image_path};
use camera_transforms::types::{ExtrinsicsMap, Intrinsics, IntrinsicsMap};
use common::*;

fn intrinsics_for(camera_id: &str, fx: f64) -> Intrinsics {
    Intrinsics {
        camera_id: camera_id.to_string(),
        fx,
        fy: fx + 1.0,
        cx: 800.0,
        cy: 450.0,
        width: 1600,
        height: 900,
    }
}

fn options(multi_camera: bool) -> AssemblyOptions {
    AssemblyOptions {
        images_dir: "images".to_string(),
        image_ext: ".jpg".to_string(),
        multi_camera,
    }
}

fn two_camera_poses() -> ExtrinsicsMap {
    let mut poses = ExtrinsicsMap::new();
    for (i, key) in ["001_1", "000_1", "001_0", "000_0"].iter().enumerate() {
        poses.insert(key.to_string(), translation(i as f64, 0.0, 0.0));
    }
    poses
}

fn two_camera_intrinsics() -> IntrinsicsMap {
    IntrinsicsMap::from([
        ("0".to_string(), intrinsics_for("0", 1000.0)),
        ("1".to_string(), intrinsics_for("1", 2000.0)),
    ])
}

#[test]
fn test_frames_in_key_order_with_camera_intrinsics() {
    let poses = two_camera_poses();
    let frames = assemble_frames(&poses, &two_camera_intrinsics(), &options(true)).unwrap();

    let paths: Vec<&str> = frames.iter().map(|f| f.file_path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["images/000_0.jpg", "images/000_1.jpg", "images/001_0.jpg", "images/001_1.jpg"]
    );
    for frame in &frames {
        let intr = frame.intrinsics.as_ref().unwrap();
        let expected_fx = if frame.file_path.contains("_0.") { 1000.0 } else { 2000.0 };
        assert_eq!(intr.fx, expected_fx);
    }
    assert_matrix_eq(&frames[1].transform_matrix, &poses["000_1"]);
}

#[test]
fn test_file_path_is_images_dir_key_ext() {
    let poses = two_camera_poses();
    let opts = AssemblyOptions {
        images_dir: "data/samples/CAM".to_string(),
        image_ext: ".png".to_string(),
        multi_camera: true,
    };
    let frames = assemble_frames(&poses, &two_camera_intrinsics(), &opts).unwrap();
    for (frame, key) in frames.iter().zip(poses.keys()) {
        assert_eq!(frame.file_path, format!("data/samples/CAM/{}.png", key));
        assert_eq!(frame.file_path, image_path("data/samples/CAM", key, ".png"));
    }
}

#[test]
fn test_assembly_is_deterministic() {
    let poses = two_camera_poses();
    let intrinsics = two_camera_intrinsics();
    let a = assemble_frames(&poses, &intrinsics, &options(true)).unwrap();
    let b = assemble_frames(&poses, &intrinsics, &options(true)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_single_camera_mode_is_unsupported() {
    let err = assemble_frames(&two_camera_poses(), &two_camera_intrinsics(), &options(false))
        .unwrap_err();
    assert!(matches!(err, ConvertError::UnsupportedMode { .. }));
}

#[test]
fn test_missing_camera_intrinsics_names_key() {
    let mut intrinsics = two_camera_intrinsics();
    intrinsics.remove("1");
    let err = assemble_frames(&two_camera_poses(), &intrinsics, &options(true)).unwrap_err();
    match err {
        ConvertError::FrameWithoutIntrinsics { key, camera_id } => {
            assert_eq!(key, "000_1");
            assert_eq!(camera_id, "1");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_malformed_key_fails_assembly() {
    let mut poses = two_camera_poses();
    poses.insert("calibration".to_string(), translation(0.0, 0.0, 0.0));
    let err = assemble_frames(&poses, &two_camera_intrinsics(), &options(true)).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidCameraKey { ref key } if key == "calibration"));
}

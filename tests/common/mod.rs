#![allow(dead_code)]

use std::fs;
use std::path::Path;

use camera_transforms::report::Diagnostic;
use log::Level;
use nalgebra as na;

pub fn write_matrix(dir: &Path, key: &str, m: &na::Matrix4<f64>) {
    let mut s = String::new();
    for r in 0..4 {
        let row: Vec<String> = (0..4).map(|c| format!("{:e}", m[(r, c)])).collect();
        s += &row.join(" ");
        s += "\n";
    }
    fs::write(dir.join(format!("{}.txt", key)), s).unwrap();
}

pub fn write_intrinsics(dir: &Path, camera_id: &str, values: &str) {
    fs::write(dir.join(format!("{}.txt", camera_id)), values).unwrap();
}

pub fn translation(x: f64, y: f64, z: f64) -> na::Matrix4<f64> {
    na::Matrix4::new_translation(&na::Vector3::new(x, y, z))
}

pub fn pose(axis: na::Vector3<f64>, angle: f64, t: na::Vector3<f64>) -> na::Matrix4<f64> {
    na::Isometry3::new(t, axis.normalize() * angle).to_homogeneous()
}

pub fn assert_matrix_eq(a: &na::Matrix4<f64>, b: &na::Matrix4<f64>) {
    assert!((a - b).norm() < 1e-9, "{} != {}", a, b);
}

/// Creates `extrinsics/` and `intrinsics/` under `root`.
pub fn dataset_dirs(root: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let ext = root.join("extrinsics");
    let intr = root.join("intrinsics");
    fs::create_dir_all(&ext).unwrap();
    fs::create_dir_all(&intr).unwrap();
    (ext, intr)
}

/// Messages at exactly `level`, in emission order.
pub fn messages_at(diagnostics: &[Diagnostic], level: Level) -> Vec<&str> {
    diagnostics
        .iter()
        .filter(|d| d.level == level)
        .map(|d| d.message.as_str())
        .collect()
}

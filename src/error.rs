use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid json in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid number {token:?} in {path} at line {line}")]
    InvalidNumber {
        path: PathBuf,
        line: usize,
        token: String,
    },
    #[error("inconsistent row length in {path} at line {line}, expected {expected} values, got {found}")]
    RaggedMatrix {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid extrinsics matrix shape in {path}, expected 4x4, got {rows}x{cols}")]
    InvalidMatrixShape {
        path: PathBuf,
        rows: usize,
        cols: usize,
    },
    #[error("insufficient intrinsics data in {path}, expected at least 4 values, got {found}")]
    InsufficientIntrinsics { path: PathBuf, found: usize },
    #[error("unexpected camera key format: {key:?}, expected <timestep>_<camera>")]
    InvalidCameraKey { key: String },
    #[error("no extrinsics files found in {dir}")]
    NoExtrinsics { dir: PathBuf },
    #[error("no intrinsics for camera {camera_id} in {dir}")]
    MissingIntrinsics { camera_id: String, dir: PathBuf },
    #[error("frame {key} refers to camera {camera_id}, which has no intrinsics")]
    FrameWithoutIntrinsics { key: String, camera_id: String },
    #[error("empty cameras data in {path}")]
    EmptyCameras { path: PathBuf },
    #[error("{mode} mode is not implemented for this dataset format, enable multi-camera mode")]
    UnsupportedMode { mode: String },
    #[error("reference pose {key} is not invertible")]
    SingularReference { key: String },
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> ConvertError {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}

//! The `transforms.json` camera-pose document.
//!
//! Two shapes share one schema. A single-camera document carries global
//! `fl_x, fl_y, w, h` and bare frames. A multi-camera document has no global
//! intrinsics and every frame carries its own `fl_x, fl_y, cx, cy, w, h`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::io::{object_from_json, object_to_json};
use crate::report::Reporter;
use crate::types::{FrameRecord, Intrinsics, SharedIntrinsics, matrix4_to_rows};

/// In-memory document, built once per conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformsDocument {
    /// Set for single-camera documents only.
    pub shared_intrinsics: Option<SharedIntrinsics>,
    pub frames: Vec<FrameRecord>,
}

impl TransformsDocument {
    pub fn multi_camera(frames: Vec<FrameRecord>) -> TransformsDocument {
        TransformsDocument {
            shared_intrinsics: None,
            frames,
        }
    }

    pub fn single_camera(
        intrinsics: SharedIntrinsics,
        frames: Vec<FrameRecord>,
    ) -> TransformsDocument {
        TransformsDocument {
            shared_intrinsics: Some(intrinsics),
            frames,
        }
    }

    /// Distinct per-frame intrinsics, keyed by camera id.
    pub fn cameras(&self) -> BTreeMap<&str, &Intrinsics> {
        self.frames
            .iter()
            .filter_map(|f| f.intrinsics.as_ref())
            .map(|i| (i.camera_id.as_str(), i))
            .collect()
    }

    pub fn to_file(&self) -> TransformsFile {
        let shared = self.shared_intrinsics.as_ref();
        TransformsFile {
            fl_x: shared.map(|s| s.fx),
            fl_y: shared.map(|s| s.fy),
            w: shared.map(|s| s.width),
            h: shared.map(|s| s.height),
            frames: self.frames.iter().map(FrameEntry::from).collect(),
        }
    }
}

/// Serialized form of [`TransformsDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fl_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fl_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
    pub frames: Vec<FrameEntry>,
}

impl TransformsFile {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<TransformsFile> {
        object_from_json(path)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameEntry {
    pub file_path: String,
    /// Row-major 4x4 pose.
    pub transform_matrix: [[f64; 4]; 4],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fl_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fl_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cx: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
}

impl From<&FrameRecord> for FrameEntry {
    fn from(frame: &FrameRecord) -> Self {
        let intr = frame.intrinsics.as_ref();
        FrameEntry {
            file_path: frame.file_path.clone(),
            transform_matrix: matrix4_to_rows(&frame.transform_matrix),
            fl_x: intr.map(|i| i.fx),
            fl_y: intr.map(|i| i.fy),
            cx: intr.map(|i| i.cx),
            cy: intr.map(|i| i.cy),
            w: intr.map(|i| i.width),
            h: intr.map(|i| i.height),
        }
    }
}

/// Writes `document` to `output_path` and reports a summary.
pub fn write_transforms<R: Reporter>(
    output_path: impl AsRef<Path>,
    document: &TransformsDocument,
    reporter: &mut R,
) -> Result<()> {
    let output_path = output_path.as_ref();
    reporter.info(format!("Saving transforms to: {}", output_path.display()));
    object_to_json(output_path, &document.to_file())?;
    reporter.info(format!(
        "Successfully converted {} camera frames to {}",
        document.frames.len(),
        output_path.display()
    ));
    report_summary(document, reporter);
    Ok(())
}

fn report_summary<R: Reporter>(document: &TransformsDocument, reporter: &mut R) {
    match &document.shared_intrinsics {
        Some(shared) => {
            reporter.info(format!(
                "Single camera mode: {}x{}",
                shared.width, shared.height
            ));
            reporter.info(format!(
                "Focal lengths: fx={:.2}, fy={:.2}",
                shared.fx, shared.fy
            ));
        }
        None => {
            let cameras = document.cameras();
            reporter.info(format!(
                "Multi-camera mode: {} cameras with per-frame intrinsics",
                cameras.len()
            ));
            for (cam_id, i) in cameras {
                reporter.info(format!(
                    "  Camera {}: {}x{}, fx={:.2}, fy={:.2}",
                    cam_id, i.width, i.height, i.fx, i.fy
                ));
            }
        }
    }
}

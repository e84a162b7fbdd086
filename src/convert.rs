use std::path::Path;

use crate::alignment::align_poses;
use crate::config::ConversionConfig;
use crate::data_loader::{discover_camera_ids, load_extrinsics, load_intrinsics};
use crate::error::{ConvertError, Result};
use crate::frame_assembler::{AssemblyOptions, assemble_frames};
use crate::report::Reporter;
use crate::transforms::TransformsDocument;
use crate::types::IntrinsicsMap;

/// Converts a `{root}/extrinsics` + `{root}/intrinsics` dataset.
///
/// Nothing is written here; pass the result to
/// [`write_transforms`](crate::transforms::write_transforms).
pub fn convert_directory_dataset<R: Reporter>(
    root: &Path,
    config: &ConversionConfig,
    reporter: &mut R,
) -> Result<TransformsDocument> {
    let extrinsics_dir = root.join(&config.extrinsics_dir);
    let intrinsics_dir = root.join(&config.intrinsics_dir);

    reporter.info(format!(
        "Loading extrinsics from: {}",
        extrinsics_dir.display()
    ));
    let extrinsics = load_extrinsics(&extrinsics_dir, reporter)?;
    if extrinsics.is_empty() {
        return Err(ConvertError::NoExtrinsics {
            dir: extrinsics_dir,
        });
    }

    if !config.multi_camera {
        return Err(ConvertError::UnsupportedMode {
            mode: "single camera".to_string(),
        });
    }

    reporter.info(format!(
        "Multi-camera mode: loading intrinsics for all cameras from: {}",
        intrinsics_dir.display()
    ));
    let camera_ids = discover_camera_ids(&extrinsics);
    reporter.info(format!(
        "Detected cameras: {:?}",
        camera_ids.iter().collect::<Vec<_>>()
    ));
    let mut intrinsics = IntrinsicsMap::new();
    for cam_id in &camera_ids {
        let cam_intrinsics =
            load_intrinsics(&intrinsics_dir, cam_id, config.width, config.height, reporter)?
                .ok_or_else(|| ConvertError::MissingIntrinsics {
                    camera_id: cam_id.clone(),
                    dir: intrinsics_dir.clone(),
                })?;
        intrinsics.insert(cam_id.clone(), cam_intrinsics);
    }
    reporter.info(format!(
        "Successfully loaded intrinsics for {} cameras",
        intrinsics.len()
    ));

    let aligned = align_poses(&extrinsics, &config.reference_camera, reporter)?;
    let options = AssemblyOptions {
        images_dir: config.images_dir.clone(),
        image_ext: config.image_ext.clone(),
        multi_camera: config.multi_camera,
    };
    let frames = assemble_frames(&aligned.poses, &intrinsics, &options)?;
    Ok(TransformsDocument::multi_camera(frames))
}

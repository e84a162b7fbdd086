use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use glob::{Pattern, glob};
use nalgebra as na;

use crate::error::{ConvertError, Result};
use crate::io::parse_numeric_rows;
use crate::report::Reporter;
use crate::types::{CameraKey, ExtrinsicsMap, Intrinsics};

/// Extension of the numeric calibration files, without the dot.
pub const CALIB_FILE_EXT: &str = "txt";

/// Lists the files of a directory that carry a given extension.
pub trait FileLister {
    fn list(&self, dir: &Path, ext: &str) -> Result<Vec<PathBuf>>;
}

/// Filesystem listing backed by `glob`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobLister;

impl FileLister for GlobLister {
    fn list(&self, dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(ConvertError::io(
                dir,
                io::Error::new(io::ErrorKind::NotFound, "directory does not exist"),
            ));
        }
        let dir_str = dir.to_str().ok_or_else(|| {
            ConvertError::io(
                dir,
                io::Error::new(io::ErrorKind::InvalidInput, "path is not valid UTF-8"),
            )
        })?;
        let pattern = format!("{}/*.{}", Pattern::escape(dir_str), ext);
        let paths = glob(&pattern).map_err(|e| {
            ConvertError::io(dir, io::Error::new(io::ErrorKind::InvalidInput, e.msg))
        })?;
        // Unreadable entries are kept so that parsing reports them.
        let mut files = Vec::new();
        for entry in paths {
            let path = entry.map_err(|e| {
                let path = e.path().to_path_buf();
                ConvertError::io(path, e.into_error())
            })?;
            if !path.is_dir() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

/// Loads every `{timestep}_{camera}.txt` pose in `extrinsics_dir`.
pub fn load_extrinsics<R: Reporter>(
    extrinsics_dir: &Path,
    reporter: &mut R,
) -> Result<ExtrinsicsMap> {
    load_extrinsics_with(&GlobLister, extrinsics_dir, reporter)
}

/// Same as [`load_extrinsics`] with an explicit file lister.
///
/// An empty directory is reported and yields an empty map; a file whose
/// contents are not a 4x4 matrix aborts the load.
pub fn load_extrinsics_with<L: FileLister, R: Reporter>(
    lister: &L,
    extrinsics_dir: &Path,
    reporter: &mut R,
) -> Result<ExtrinsicsMap> {
    reporter.info(format!(
        "Scanning extrinsics directory: {}",
        extrinsics_dir.display()
    ));
    let files = lister.list(extrinsics_dir, CALIB_FILE_EXT)?;
    let mut extrinsics = ExtrinsicsMap::new();
    if files.is_empty() {
        reporter.error(format!(
            "No extrinsics files found in {}",
            extrinsics_dir.display()
        ));
        return Ok(extrinsics);
    }
    reporter.info(format!("Found {} potential extrinsics files", files.len()));

    for path in &files {
        let Some(key) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };
        let matrix = parse_matrix4(path)?;
        reporter.info(format!("Loaded extrinsics for {}", key));
        extrinsics.insert(key, matrix);
    }
    reporter.info(format!(
        "Successfully loaded {}/{} extrinsics files",
        extrinsics.len(),
        files.len()
    ));
    Ok(extrinsics)
}

/// Parses a row-major 4x4 matrix file.
pub fn parse_matrix4(path: &Path) -> Result<na::Matrix4<f64>> {
    let rows = parse_numeric_rows(path)?;
    let cols = rows.first().map_or(0, |r| r.len());
    if rows.len() != 4 || cols != 4 {
        return Err(ConvertError::InvalidMatrixShape {
            path: path.to_path_buf(),
            rows: rows.len(),
            cols,
        });
    }
    Ok(na::Matrix4::from_fn(|r, c| rows[r][c]))
}

/// Loads `{camera_id}.txt` from `intrinsics_dir`.
///
/// Only the first four values (`fx fy cx cy`) are used. A missing file is
/// reported and yields `None`.
pub fn load_intrinsics<R: Reporter>(
    intrinsics_dir: &Path,
    camera_id: &str,
    width: u32,
    height: u32,
    reporter: &mut R,
) -> Result<Option<Intrinsics>> {
    let path = intrinsics_dir.join(format!("{}.{}", camera_id, CALIB_FILE_EXT));
    if !path.is_file() {
        reporter.error(format!("Intrinsics file not found: {}", path.display()));
        return Ok(None);
    }

    let values: Vec<f64> = parse_numeric_rows(&path)?.into_iter().flatten().collect();
    if values.len() < 4 {
        return Err(ConvertError::InsufficientIntrinsics {
            path,
            found: values.len(),
        });
    }
    let intrinsics = Intrinsics {
        camera_id: camera_id.to_string(),
        fx: values[0],
        fy: values[1],
        cx: values[2],
        cy: values[3],
        width,
        height,
    };
    reporter.info(format!(
        "Loaded intrinsics from {}.{}: fx={:.2}, fy={:.2}, cx={:.2}, cy={:.2}",
        camera_id, CALIB_FILE_EXT, intrinsics.fx, intrinsics.fy, intrinsics.cx, intrinsics.cy
    ));
    Ok(Some(intrinsics))
}

/// Camera ids present in the extrinsics keys. Malformed keys are skipped.
pub fn discover_camera_ids(extrinsics: &ExtrinsicsMap) -> BTreeSet<String> {
    extrinsics
        .keys()
        .filter_map(|key| CameraKey::parse(key).ok())
        .map(|k| k.camera_id)
        .collect()
}

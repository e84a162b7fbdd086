pub mod alignment;
pub mod cameras_json;
pub mod config;
pub mod convert;
pub mod data_loader;
pub mod error;
pub mod frame_assembler;
pub mod io;
pub mod report;
pub mod transforms;
pub mod types;

pub use config::ConversionConfig;
pub use convert::convert_directory_dataset;
pub use error::{ConvertError, Result};
pub use report::{Diagnostic, LogReporter, Reporter};
pub use transforms::{TransformsDocument, write_transforms};

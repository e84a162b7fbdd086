use camera_transforms::cameras_json::convert_cameras_json;
use camera_transforms::{ConversionConfig, LogReporter, convert_directory_dataset, write_transforms};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a nuScenes-style extrinsics/intrinsics directory layout
    Nuscenes {
        /// Dataset root containing the extrinsics and intrinsics directories
        #[arg(long)]
        root: PathBuf,

        /// Output transforms.json
        #[arg(short, long)]
        output: PathBuf,

        /// Conversion config JSON, command line flags take precedence
        #[arg(long)]
        config: Option<PathBuf>,

        /// Extrinsics directory relative to root, holding {timestep}_{camera}.txt
        #[arg(long)]
        extrinsics_dir: Option<String>,

        /// Intrinsics directory relative to root, holding {camera}.txt
        #[arg(long)]
        intrinsics_dir: Option<String>,

        /// Image directory written into every file_path
        #[arg(long)]
        images_dir: Option<String>,

        /// Image file extension
        #[arg(long)]
        image_ext: Option<String>,

        /// Image width
        #[arg(long)]
        width: Option<u32>,

        /// Image height
        #[arg(long)]
        height: Option<u32>,

        /// Per-frame intrinsics for all cameras
        #[arg(long)]
        multi_camera: bool,

        /// Camera whose first pose becomes the origin
        #[arg(long)]
        reference_camera: Option<String>,
    },
    /// Convert a flat cameras.json
    Cameras {
        /// Input cameras.json
        #[arg(short, long)]
        input: PathBuf,

        /// Output transforms.json
        #[arg(short, long)]
        output: PathBuf,

        #[arg(long, default_value = "images")]
        images_dir: String,

        #[arg(long, default_value = ".jpg")]
        image_ext: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut reporter = LogReporter;

    match args.command {
        Commands::Nuscenes {
            root,
            output,
            config,
            extrinsics_dir,
            intrinsics_dir,
            images_dir,
            image_ext,
            width,
            height,
            multi_camera,
            reference_camera,
        } => {
            let mut cfg = match config {
                Some(path) => ConversionConfig::from_json_file(path)?,
                None => ConversionConfig::default(),
            };
            if let Some(v) = extrinsics_dir {
                cfg.extrinsics_dir = v;
            }
            if let Some(v) = intrinsics_dir {
                cfg.intrinsics_dir = v;
            }
            if let Some(v) = images_dir {
                cfg.images_dir = v;
            }
            if let Some(v) = image_ext {
                cfg.image_ext = v;
            }
            if let Some(v) = width {
                cfg.width = v;
            }
            if let Some(v) = height {
                cfg.height = v;
            }
            if let Some(v) = reference_camera {
                cfg.reference_camera = v;
            }
            cfg.multi_camera |= multi_camera;

            let document = convert_directory_dataset(&root, &cfg, &mut reporter)?;
            write_transforms(&output, &document, &mut reporter)?;
        }
        Commands::Cameras {
            input,
            output,
            images_dir,
            image_ext,
        } => {
            let document = convert_cameras_json(&input, &images_dir, &image_ext, &mut reporter)?;
            write_transforms(&output, &document, &mut reporter)?;
        }
    }

    Ok(())
}

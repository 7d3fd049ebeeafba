use argh::FromArgs;
use bmp_transform_rs::image_pipeline::{CropRegion, Transform, TransformConfig, TransformConfigBuilder};
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Crop, quantize or mirror uncompressed 24/32-bit BMP files
pub struct TopLevel {
    /// log each pipeline stage at debug level
    #[argh(switch, short = 'v')]
    pub verbose: bool,

    #[argh(subcommand)]
    pub command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub enum Commands {
    Crop(CropCmd),
    Quantize(QuantizeCmd),
    Flip(FlipCmd),
    Copy(CopyCmd),
}

#[derive(FromArgs, Debug)]
/// Extract a rectangular region (coordinates count stored rows)
#[argh(subcommand, name = "crop")]
pub struct CropCmd {
    /// input BMP path
    #[argh(positional)]
    pub input: PathBuf,

    /// output BMP path
    #[argh(positional)]
    pub output: PathBuf,

    /// left column of the region
    #[argh(option)]
    pub x: usize,

    /// first stored row of the region
    #[argh(option)]
    pub y: usize,

    /// region width in pixels
    #[argh(option)]
    pub width: usize,

    /// region height in pixels
    #[argh(option)]
    pub height: usize,

    /// skip empty/oversized image checks
    #[argh(switch)]
    pub no_validate_dimensions: bool,

    /// largest accepted width or height (default: 50000)
    #[argh(option)]
    pub max_dimension: Option<usize>,
}

#[derive(FromArgs, Debug)]
/// Reduce each colour channel to 2^bits levels
#[argh(subcommand, name = "quantize")]
pub struct QuantizeCmd {
    /// input BMP path
    #[argh(positional)]
    pub input: PathBuf,

    /// output BMP path
    #[argh(positional)]
    pub output: PathBuf,

    /// bits of resolution to keep per channel, 1 to 8
    #[argh(option)]
    pub bits: u32,

    /// skip empty/oversized image checks
    #[argh(switch)]
    pub no_validate_dimensions: bool,

    /// largest accepted width or height (default: 50000)
    #[argh(option)]
    pub max_dimension: Option<usize>,
}

#[derive(FromArgs, Debug)]
/// Mirror the image left to right
#[argh(subcommand, name = "flip")]
pub struct FlipCmd {
    /// input BMP path
    #[argh(positional)]
    pub input: PathBuf,

    /// output BMP path
    #[argh(positional)]
    pub output: PathBuf,

    /// skip empty/oversized image checks
    #[argh(switch)]
    pub no_validate_dimensions: bool,

    /// largest accepted width or height (default: 50000)
    #[argh(option)]
    pub max_dimension: Option<usize>,
}

#[derive(FromArgs, Debug)]
/// Decode and re-encode without changing the pixels
#[argh(subcommand, name = "copy")]
pub struct CopyCmd {
    /// input BMP path
    #[argh(positional)]
    pub input: PathBuf,

    /// output BMP path
    #[argh(positional)]
    pub output: PathBuf,

    /// skip empty/oversized image checks
    #[argh(switch)]
    pub no_validate_dimensions: bool,

    /// largest accepted width or height (default: 50000)
    #[argh(option)]
    pub max_dimension: Option<usize>,
}

/// What the driver hands to the pipeline for one run.
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    pub config: TransformConfig,
}

fn limits(
    builder: TransformConfigBuilder,
    no_validate_dimensions: bool,
    max_dimension: Option<usize>,
) -> TransformConfigBuilder {
    let builder = builder.validate_dimensions(!no_validate_dimensions);
    match max_dimension {
        Some(max) => builder.max_dimension(Some(max)),
        None => builder,
    }
}

impl Commands {
    pub fn into_job(self) -> Job {
        let (input, output, transform, no_validate, max) = match self {
            Commands::Crop(cmd) => (
                cmd.input,
                cmd.output,
                Transform::Crop(CropRegion::new(cmd.x, cmd.y, cmd.width, cmd.height)),
                cmd.no_validate_dimensions,
                cmd.max_dimension,
            ),
            Commands::Quantize(cmd) => (
                cmd.input,
                cmd.output,
                Transform::Quantize { bits: cmd.bits },
                cmd.no_validate_dimensions,
                cmd.max_dimension,
            ),
            Commands::Flip(cmd) => (
                cmd.input,
                cmd.output,
                Transform::FlipHorizontal,
                cmd.no_validate_dimensions,
                cmd.max_dimension,
            ),
            Commands::Copy(cmd) => (
                cmd.input,
                cmd.output,
                Transform::Passthrough,
                cmd.no_validate_dimensions,
                cmd.max_dimension,
            ),
        };

        let config = limits(
            TransformConfig::builder().transform(transform),
            no_validate,
            max,
        )
        .build();

        Job {
            input,
            output,
            config,
        }
    }
}

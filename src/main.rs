mod cli;

use anyhow::Context;
use bmp_transform_rs::image_pipeline::BmpTransformPipeline;
use bmp_transform_rs::logger;

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let cli: cli::TopLevel = argh::from_env();
    logger::init(cli.verbose);

    let job = cli.command.into_job();

    info!("Starting bmp_transform...");
    info!("Transform: {:?}", job.config.transform);
    info!(
        "Dimension validation: {}",
        if job.config.validate_dimensions {
            "enabled"
        } else {
            "disabled"
        }
    );

    let pipeline = BmpTransformPipeline::new(job.config);

    match pipeline.convert_file(&job.input, &job.output) {
        Ok(()) => {
            info!("Transform successful!");
            Ok(())
        }
        Err(e) => {
            error!("Transform failed: {}", e);
            Err(e).with_context(|| {
                format!(
                    "transforming {} into {}",
                    job.input.display(),
                    job.output.display()
                )
            })
        }
    }
}

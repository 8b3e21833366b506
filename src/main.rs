use journal_cloud::{
    run_wordcloud_with_custom_config, FileSource, PipelineConfig, SvgWordCloud,
    DEFAULT_RENDER_CONFIG,
};
use log::{error, info};

fn main() {
    // Initialize the logger
    env_logger::init();

    let mut pipeline_config = PipelineConfig::default();
    if let Some(path) = std::env::args().nth(1) {
        pipeline_config.source_path = path.into();
    }

    match run_wordcloud_with_custom_config(
        &pipeline_config,
        DEFAULT_RENDER_CONFIG,
        &FileSource::new(),
        &SvgWordCloud::default(),
    ) {
        Ok(outcome) => {
            for (label, frequency) in &outcome.ranked_table {
                info!("{}: {}", label, frequency);
            }

            match outcome.artifact {
                Some(image) => print!("{}", image.svg()),
                None => eprintln!(
                    "No data: {} records read from {}, nothing to render",
                    outcome.record_count, pipeline_config.source_path
                ),
            }
        }
        Err(e) => {
            error!("Error building word cloud: {}", e);
            std::process::exit(1);
        }
    }
}
